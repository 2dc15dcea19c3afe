use clap::Parser;
use cyk::{BuildOptions, CykParser, ParseOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Check strings against a Chomsky Normal Form grammar")]
struct Cli {
    /// Grammar file, one `Head -> A B | 'a'` rule per line
    grammar: PathBuf,

    /// Strings to check (default: read them interactively)
    input: Vec<String>,

    /// Skip spaces that no terminal matches
    #[arg(short = 's', long)]
    ignore_spaces: bool,

    /// Only allow single character terminals
    #[arg(long)]
    single_char: bool,

    /// Report input that can't be tokenized as an error
    #[arg(long)]
    strict_tokens: bool,
}

fn check(parser: &CykParser, options: ParseOptions, input: &str) {
    match parser.parse(input, options) {
        Err(e) => println!("Parse err: {}", e),
        Ok(accepted) => println!("{:?} -> {}", input, accepted),
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.grammar)
        .map_err(|e| format!("{}: {}", cli.grammar.display(), e))?;
    let options = BuildOptions {
        force_terminal_length_1: cli.single_char,
        ..Default::default()
    };
    let grammar = cyk::load_grammar(&text, options)
        .and_then(|builder| builder.build())
        .map_err(|e| format!("Grammar err: {}", e))?;
    log::info!("Loaded {} productions from {}, start symbol {}",
               grammar.productions().len(), cli.grammar.display(),
               grammar.start_symbol());

    let parser = CykParser::new(&grammar);
    let parse_options = ParseOptions {
        ignore_spaces: cli.ignore_spaces,
        raise_token_error: cli.strict_tokens,
    };

    if !cli.input.is_empty() {
        for input in &cli.input {
            check(&parser, parse_options, input);
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("cyk> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                check(&parser, parse_options, &line);
            }
        }
    }
}

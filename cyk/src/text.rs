#![deny(warnings)]

use crate::builder::{BuildOptions, CnfGrammarBuilder};
use crate::error::Error;
use crate::symbol::Symbol;
use std::collections::HashSet;

enum Lexeme {
    Ident(String),
    Quoted(String),
    Arrow,
    Bar,
}

fn syntax(line: usize, message: impl Into<String>) -> Error {
    Error::Syntax { line, message: message.into() }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn lex_line(text: &str, line: usize) -> Result<Vec<Lexeme>, Error> {
    let mut lexemes = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        match c {
            '#' => break,
            c if c.is_whitespace() => continue,
            '|' => lexemes.push(Lexeme::Bar),
            '-' if matches!(chars.peek(), Some((_, '>'))) => {
                chars.next();
                lexemes.push(Lexeme::Arrow);
            }
            '\'' | '"' => {
                let mut term = String::new();
                loop {
                    match chars.next() {
                        Some((_, q)) if q == c => break,
                        Some((_, ch)) => term.push(ch),
                        None => return Err(syntax(line, "unterminated terminal quote")),
                    }
                }
                lexemes.push(Lexeme::Quoted(term));
            }
            c if is_ident_char(c) => {
                let mut var = c.to_string();
                while let Some(&(_, ch)) = chars.peek() {
                    if !is_ident_char(ch) {
                        break;
                    }
                    var.push(ch);
                    chars.next();
                }
                lexemes.push(Lexeme::Ident(var));
            }
            other => return Err(syntax(
                line, format!("unexpected '{}' at column {}", other, pos + 1))),
        }
    }
    Ok(lexemes)
}

/// Reads a grammar written one rule per line:
///
/// ```text
/// # S is the start symbol, it's the first head
/// S -> A B | ''
/// A -> A A | 'a'
/// B -> "b"
/// ```
///
/// Variables are bare identifiers, terminals are quoted. Every symbol is
/// declared in first-seen order, so `options` only matter for terminal
/// length checks.
pub fn load_grammar(text: &str, options: BuildOptions) -> Result<CnfGrammarBuilder, Error> {
    let mut builder = CnfGrammarBuilder::new(options);
    let mut declared = HashSet::new();
    let mut has_start = false;

    for (idx, text) in text.lines().enumerate() {
        let line = idx + 1;
        let mut lexemes = lex_line(text, line)?.into_iter();
        let head = match (lexemes.next(), lexemes.next()) {
            (None, _) => continue,
            (Some(Lexeme::Ident(head)), Some(Lexeme::Arrow)) => head,
            _ => return Err(syntax(line, "expected a rule like `Head -> ...`")),
        };

        let mut alternatives = Vec::new();
        let mut current = Vec::new();
        for lexeme in lexemes {
            match lexeme {
                Lexeme::Bar => alternatives.push(std::mem::take(&mut current)),
                Lexeme::Ident(var) => current.push(Symbol::Var(var)),
                Lexeme::Quoted(term) => current.push(Symbol::Term(term)),
                Lexeme::Arrow => return Err(syntax(line, "unexpected '->'")),
            }
        }
        alternatives.push(current);
        if alternatives.iter().any(|body| body.is_empty()) {
            return Err(syntax(line, "empty alternative, write '' for the empty string"));
        }

        if !has_start {
            builder.set_start_symbol(head.as_str());
            declared.insert(Symbol::var(head.as_str()));
            has_start = true;
        }
        let symbols = std::iter::once(Symbol::var(head.as_str()))
            .chain(alternatives.iter().flatten().cloned());
        for symbol in symbols {
            if declared.insert(symbol.clone()) {
                match symbol {
                    Symbol::Var(var) => builder.add_var(var)?,
                    Symbol::Term(term) => builder.add_term(term)?,
                }
            }
        }
        for body in alternatives {
            builder.add_production(head.as_str(), body);
        }
    }
    Ok(builder)
}

///////////////////////////////////////////////////////////////////////////////

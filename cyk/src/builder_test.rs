#![deny(warnings)]

use crate::builder::{BuildOptions, CnfGrammarBuilder, GrammarBuilder};
use crate::error::{CnfViolation, Error};
use crate::symbol::Symbol;

fn var(name: &str) -> Symbol { Symbol::var(name) }
fn term(name: &str) -> Symbol { Symbol::term(name) }

fn strict() -> BuildOptions {
    BuildOptions { ignore_duplicate_symbols: false, ..Default::default() }
}

fn shape_error(builder: CnfGrammarBuilder) -> (usize, CnfViolation) {
    match builder.build() {
        Err(Error::CnfShape { production, violation, .. }) => (production, violation),
        other => panic!("expected a CNF shape error, got {:?}", other),
    }
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn default_options() {
    let options = BuildOptions::default();
    assert!(!options.force_terminal_length_1);
    assert!(options.ignore_duplicate_symbols);
    assert!(!options.generate_missing_symbols);
}

#[test]
fn dup_symbol() {
    let mut b = GrammarBuilder::new(strict());
    b.add_var("A").unwrap();
    assert_eq!(b.add_var("A"), Err(Error::DuplicateSymbol(var("A"))));
    b.add_term("a").unwrap();
    assert_eq!(b.add_term("a"), Err(Error::DuplicateSymbol(term("a"))));
    // separate namespaces
    assert_eq!(b.add_term("A"), Ok(()));
    assert_eq!(b.add_var("a"), Ok(()));
}

#[test]
fn dup_symbol_ignored() {
    let mut b = GrammarBuilder::default();
    b.add_vars(["A", "B", "A"]).unwrap();
    b.add_terms(["a", "a", "b"]).unwrap();
    let g = b.build().unwrap();
    assert_eq!(g.variables(), ["A", "B"]);
    assert_eq!(g.terminals(), ["a", "b"]);
}

#[test]
fn dup_symbol_deferred_when_chaining() {
    let g = GrammarBuilder::new(strict())
        .var("S")
        .term("x")
        .var("S")
        .term("x")
        .build();
    // first error wins
    assert_eq!(g.unwrap_err(), Error::DuplicateSymbol(var("S")));
}

#[test]
fn round_trip() {
    let g = GrammarBuilder::default()
        .term("b")
        .term("a")
        .var("B")
        .var("A")
        .start("S")
        .rule("S", [var("A"), var("B")])
        .rule("A", [term("a")])
        .rule("B", [term("b")])
        .rule("A", [var("A"), var("A")])
        .build()
        .unwrap();
    assert_eq!(g.variables(), ["B", "A", "S"]);
    assert_eq!(g.terminals(), ["b", "a"]);
    assert_eq!(g.start_symbol(), Some("S"));
    assert_eq!(g.productions().iter().map(|p| p.to_string()).collect::<Vec<_>>(),
               vec!["S -> A B", "A -> 'a'", "B -> 'b'", "A -> A A"]);
    assert_eq!(g.productions_of("A"), [vec![term("a")], vec![var("A"), var("A")]]);
    assert!(g.productions_of("X").is_empty());
    assert!(!g.is_cnf());
}

#[test]
fn missing_symbol() {
    let g = GrammarBuilder::default()
        .var("S")
        .rule("S", [term("a")])
        .build();
    assert_eq!(g.unwrap_err(),
               Error::UndefinedSymbol { production: 0, symbol: term("a") });

    let g = GrammarBuilder::default()
        .term("a")
        .var("S")
        .rule("S", [term("a")])
        .rule("X", [term("a")])
        .build();
    assert_eq!(g.unwrap_err(),
               Error::UndefinedSymbol { production: 1, symbol: var("X") });

    let g = GrammarBuilder::default()
        .var("S")
        .var("A")
        .rule("S", [var("A"), var("B")])
        .build();
    assert_eq!(g.unwrap_err(),
               Error::UndefinedSymbol { production: 0, symbol: var("B") });
}

#[test]
fn generate_missing_symbols() {
    let options = BuildOptions { generate_missing_symbols: true, ..Default::default() };
    let g = GrammarBuilder::new(options)
        .start("S")
        .rule("S", [var("A"), var("B")])
        .rule("A", [term("a")])
        .rule("B", [term("b")])
        .build()
        .unwrap();
    assert_eq!(g.variables(), ["S", "A", "B"]);
    assert_eq!(g.terminals(), ["a", "b"]);
}

#[test]
fn replace_start_symbol() {
    // unused old start symbol is dropped
    let mut b = GrammarBuilder::default();
    b.set_start_symbol("S");
    b.set_start_symbol("T");
    let g = b.build().unwrap();
    assert_eq!(g.variables(), ["T"]);
    assert_eq!(g.start_symbol(), Some("T"));

    // referenced old start symbol stays a plain variable
    let mut b = GrammarBuilder::default();
    b.add_term("a").unwrap();
    b.set_start_symbol("S");
    b.add_production("S", [term("a")]);
    b.set_start_symbol("T");
    let g = b.build().unwrap();
    assert_eq!(g.variables(), ["S", "T"]);
    assert_eq!(g.start_symbol(), Some("T"));

    // productions staged after the replacement count too
    let mut b = GrammarBuilder::default();
    b.add_term("a").unwrap();
    b.set_start_symbol("S");
    b.set_start_symbol("T");
    b.add_production("S", [term("a")]);
    assert_eq!(b.build().unwrap().variables(), ["S", "T"]);

    // setting the same start twice is harmless
    let mut b = GrammarBuilder::new(strict());
    b.set_start_symbol("S");
    b.set_start_symbol("S");
    assert_eq!(b.build().unwrap().variables(), ["S"]);

    // declared variables survive losing the start role
    let mut b = GrammarBuilder::default();
    b.add_var("S").unwrap();
    b.add_var("A").unwrap();
    b.set_start_symbol("S");
    b.set_start_symbol("T");
    let g = b.build().unwrap();
    assert_eq!(g.variables(), ["S", "A", "T"]);
    assert_eq!(g.start_symbol(), Some("T"));

    let mut b = GrammarBuilder::default();
    b.add_var("S").unwrap();
    b.add_term("a").unwrap();
    b.set_start_symbol("S");
    b.set_start_symbol("T");
    b.set_start_symbol("U");
    b.add_production("S", [term("a")]);
    let g = b.build().unwrap();
    assert_eq!(g.variables(), ["S", "U"]);
    assert_eq!(g.productions_of("S"), [vec![term("a")]]);

    // declaring after the fact counts, before or after the replacement
    let mut b = GrammarBuilder::default();
    b.set_start_symbol("S");
    b.add_var("S").unwrap();
    b.set_start_symbol("T");
    b.set_start_symbol("U");
    b.add_var("T").unwrap();
    assert_eq!(b.build().unwrap().variables(), ["S", "T", "U"]);
}

#[test]
fn terminal_checks_on_build() {
    let g = GrammarBuilder::default().term("a").term("aa").build();
    assert_eq!(g.unwrap_err(), Error::TerminalAmbiguity("aa".to_string()));

    let options = BuildOptions { force_terminal_length_1: true, ..Default::default() };
    let g = GrammarBuilder::new(options).term("a").term("bc").build();
    assert_eq!(g.unwrap_err(), Error::TerminalLength("bc".to_string()));

    let g = GrammarBuilder::default().term("a").term("ab").build().unwrap();
    assert_eq!(g.tokenizer_terminals(), ["ab", "a"]);
    assert_eq!(g.terminals(), ["a", "ab"]);
}

#[test]
fn references_checked_before_terminals() {
    let g = GrammarBuilder::default()
        .term("a")
        .term("aa")
        .var("S")
        .rule("S", [var("X")])
        .build();
    assert!(matches!(g, Err(Error::UndefinedSymbol { .. })));
}

///////////////////////////////////////////////////////////////////////////////

#[test]
fn cnf_grammar() {
    let g = CnfGrammarBuilder::default()
        .term("a")
        .term("b")
        .var("A")
        .var("B")
        .start("S")
        .rule("S", [var("A"), var("B")])
        .rule("A", [var("A"), var("A")])
        .rule("A", [term("a")])
        .rule("B", [term("b")])
        .build()
        .unwrap();
    assert!(g.is_cnf());
    assert_eq!(g.start_symbol(), "S");
    assert!(!g.accepts_empty());
}

#[test]
fn cnf_needs_start() {
    let b = CnfGrammarBuilder::default()
        .term("a")
        .var("A")
        .rule("A", [term("a")]);
    assert_eq!(b.build().unwrap_err(), Error::MissingStartSymbol);
}

#[test]
fn cnf_body_length() {
    let b = CnfGrammarBuilder::default().start("S").rule("S", Vec::<Symbol>::new());
    assert_eq!(shape_error(b), (0, CnfViolation::EmptyBody));

    let b = CnfGrammarBuilder::default()
        .start("S")
        .var("A")
        .rule("A", [term("a")])
        .term("a")
        .rule("S", [var("A"), var("A"), var("A")]);
    assert_eq!(shape_error(b), (1, CnfViolation::TooManySymbols(3)));
}

#[test]
fn cnf_unit_productions() {
    let b = CnfGrammarBuilder::default()
        .start("S")
        .var("A")
        .rule("S", [var("A")]);
    assert_eq!(shape_error(b), (0, CnfViolation::UnitNotTerminal));

    let b = CnfGrammarBuilder::default()
        .start("S")
        .var("A")
        .term("")
        .rule("S", [term("")])
        .rule("A", [term("")]);
    assert_eq!(shape_error(b), (1, CnfViolation::EmptyTerminal));

    // start symbol can produce a plain terminal too
    let g = CnfGrammarBuilder::default()
        .start("S")
        .term("a")
        .rule("S", [term("a")])
        .build();
    assert!(g.is_ok());
}

#[test]
fn cnf_pair_productions() {
    let b = CnfGrammarBuilder::default()
        .start("S")
        .var("A")
        .term("a")
        .rule("S", [var("A"), term("a")]);
    assert_eq!(shape_error(b), (0, CnfViolation::PairNotVariables));

    let b = CnfGrammarBuilder::default()
        .start("S")
        .var("A")
        .rule("A", [term("a")])
        .term("a")
        .rule("S", [var("A"), var("S")]);
    assert_eq!(shape_error(b), (1, CnfViolation::StartOnRight));
}

#[test]
fn cnf_error_message() {
    let b = CnfGrammarBuilder::default()
        .start("S")
        .var("A")
        .term("a")
        .rule("S", [var("A"), term("a")]);
    assert_eq!(b.build().unwrap_err().to_string(),
        "Production 0 (S -> A 'a') is not CNF: productions with 2 symbols must produce 2 variables");

    let b = CnfGrammarBuilder::default().start("S").rule("S", Vec::<Symbol>::new());
    let message = b.build().unwrap_err().to_string();
    assert!(message.starts_with("Production 0 (S -> ε) is not CNF: "), "{}", message);
}

#[test]
fn builder_through_deref() {
    let mut b = CnfGrammarBuilder::new(strict());
    b.add_terms(["a", "b"]).unwrap();
    b.add_vars(["A", "B"]).unwrap();
    b.set_start_symbol("S");
    b.add_production("S", [var("A"), var("B")]);
    b.add_production("A", [term("a")]);
    b.add_production("B", [term("b")]);
    assert_eq!(b.add_var("S"), Err(Error::DuplicateSymbol(var("S"))));
    assert!(b.build().is_ok());
}

#[test]
fn grammar_outlives_builder() {
    let g = {
        let b = GrammarBuilder::default().term("a").start("S").rule("S", [term("a")]);
        b.build().unwrap()
    };
    let copy = g.clone();
    assert_eq!(copy.productions(), g.productions());
    assert_eq!(g.productions_of("S"), [vec![term("a")]]);
}

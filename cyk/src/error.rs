#![deny(warnings)]

use crate::symbol::Symbol;
use std::{error, fmt};

/// Which CNF shape rule a production breaks.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CnfViolation {
    EmptyBody,
    TooManySymbols(usize),
    UnitNotTerminal,
    EmptyTerminal,
    PairNotVariables,
    StartOnRight,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// A variable or terminal was declared twice.
    DuplicateSymbol(Symbol),
    /// Production number `production` mentions a symbol never declared.
    UndefinedSymbol { production: usize, symbol: Symbol },
    /// Multi-character terminal while terminals are forced to length 1.
    TerminalLength(String),
    /// The terminal can be spelled with shorter terminals it contains.
    TerminalAmbiguity(String),
    CnfShape { production: usize, rule: String, violation: CnfViolation },
    /// A CNF-only operation got a grammar not validated as CNF.
    GrammarKind,
    MissingStartSymbol,
    Tokenization { input: String, remainder: String },
    /// Malformed grammar text, `line` counts from 1.
    Syntax { line: usize, message: String },
}

impl fmt::Display for CnfViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CnfViolation::EmptyBody =>
                write!(f, "productions need one or two right side symbols"),
            CnfViolation::TooManySymbols(n) =>
                write!(f, "productions can't have {} right side symbols", n),
            CnfViolation::UnitNotTerminal =>
                write!(f, "productions with 1 symbol must produce a terminal"),
            CnfViolation::EmptyTerminal =>
                write!(f, "only the start symbol may produce the empty terminal"),
            CnfViolation::PairNotVariables =>
                write!(f, "productions with 2 symbols must produce 2 variables"),
            CnfViolation::StartOnRight =>
                write!(f, "the start symbol can't appear on a right side"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateSymbol(Symbol::Var(name)) =>
                write!(f, "Duplicate variable: {}", name),
            Error::DuplicateSymbol(Symbol::Term(name)) =>
                write!(f, "Duplicate terminal: '{}'", name),
            Error::UndefinedSymbol { production, symbol } =>
                write!(f, "Production {} uses an undefined {}: {}", production,
                       if symbol.is_terminal() { "terminal" } else { "variable" },
                       symbol),
            Error::TerminalLength(term) =>
                write!(f, "Terminal '{}' is longer than 1 character", term),
            Error::TerminalAmbiguity(term) =>
                write!(f, "Terminal '{}' is ambiguous with smaller terminals", term),
            Error::CnfShape { production, rule, violation } =>
                write!(f, "Production {} ({}) is not CNF: {}", production, rule, violation),
            Error::GrammarKind =>
                write!(f, "CYK parsing needs a Chomsky Normal Form grammar"),
            Error::MissingStartSymbol =>
                write!(f, "No start symbol was set"),
            Error::Tokenization { input, remainder } =>
                write!(f, "Cannot tokenize '{}': no terminal matches '{}'", input, remainder),
            Error::Syntax { line, message } =>
                write!(f, "Grammar syntax error at line {}: {}", line, message),
        }
    }
}

impl error::Error for Error {}

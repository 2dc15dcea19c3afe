#![deny(warnings)]

use std::fmt;

/// A grammar symbol. Terminals and variables live in separate namespaces,
/// two symbols are equal only when both kind and name match.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    Term(String),
    Var(String),
}

impl Symbol {
    pub fn term(name: impl Into<String>) -> Self {
        Symbol::Term(name.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Symbol::Var(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Term(name) => name,
            Symbol::Var(name) => name,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Term(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Symbol::Var(_))
    }
}

// Terminals are quoted so `S -> ''` and `A -> 'a'` read unambiguously
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Term(name) => write!(f, "'{}'", name),
            Symbol::Var(name) => write!(f, "{}", name),
        }
    }
}

/// A rewrite rule `head -> body`. Shape is only checked by the CNF builder.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Production {
    pub head: String,
    pub body: Vec<Symbol>,
}

impl Production {
    pub fn new(head: impl Into<String>, body: Vec<Symbol>) -> Self {
        Production { head: head.into(), body }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{} -> ε", self.head);
        }
        write!(f, "{} -> {}", self.head, self.body.iter()
            .map(|s| s.to_string()).collect::<Vec<_>>().join(" "))
    }
}

///////////////////////////////////////////////////////////////////////////////

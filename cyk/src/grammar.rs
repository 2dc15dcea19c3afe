#![deny(warnings)]

use crate::error::Error;
use crate::symbol::{Production, Symbol};
use std::collections::HashMap;
use std::ops::Deref;

/// An immutable, validated grammar. It owns copies of everything the builder
/// staged, so it outlives and never aliases the builder that made it.
#[derive(Clone, Debug)]
pub struct Grammar {
    pub(crate) variables: Vec<String>,
    pub(crate) terminals: Vec<String>,
    // terminals ordered longest first, ready for tokenization
    pub(crate) tokenizer_terminals: Vec<String>,
    pub(crate) productions: Vec<Production>,
    pub(crate) by_head: HashMap<String, Vec<Vec<Symbol>>>,
    pub(crate) start: Option<String>,
    pub(crate) cnf: bool,
}

impl Grammar {
    /// Variables in declaration order.
    pub fn variables(&self) -> &[String] { &self.variables }

    /// Terminals in declaration order.
    pub fn terminals(&self) -> &[String] { &self.terminals }

    pub fn tokenizer_terminals(&self) -> &[String] { &self.tokenizer_terminals }

    pub fn productions(&self) -> &[Production] { &self.productions }

    /// Right sides of all productions of `head`, in declaration order.
    pub fn productions_of(&self, head: &str) -> &[Vec<Symbol>] {
        self.by_head.get(head).map(|bodies| bodies.as_slice()).unwrap_or(&[])
    }

    pub fn start_symbol(&self) -> Option<&str> { self.start.as_deref() }

    /// True only for grammars emitted by `CnfGrammarBuilder`.
    pub fn is_cnf(&self) -> bool { self.cnf }
}

///////////////////////////////////////////////////////////////////////////////

/// A `Grammar` whose every production passed the CNF shape checks.
#[derive(Clone, Debug)]
pub struct CnfGrammar {
    grammar: Grammar,
    start: String,
}

impl CnfGrammar {
    pub(crate) fn new(grammar: Grammar, start: String) -> Self {
        CnfGrammar { grammar, start }
    }

    pub fn start_symbol(&self) -> &str { &self.start }

    /// Does the grammar generate the empty string (`start -> ''`)?
    pub fn accepts_empty(&self) -> bool {
        self.productions_of(&self.start).iter()
            .any(|body| body.len() == 1 && body[0] == Symbol::term(""))
    }

    pub fn into_grammar(self) -> Grammar { self.grammar }
}

impl Deref for CnfGrammar {
    type Target = Grammar;
    fn deref(&self) -> &Grammar { &self.grammar }
}

// Only grammars already validated by the CNF builder convert back
impl TryFrom<Grammar> for CnfGrammar {
    type Error = Error;
    fn try_from(grammar: Grammar) -> Result<Self, Error> {
        match (grammar.cnf, grammar.start.clone()) {
            (true, Some(start)) => Ok(CnfGrammar { grammar, start }),
            _ => Err(Error::GrammarKind),
        }
    }
}

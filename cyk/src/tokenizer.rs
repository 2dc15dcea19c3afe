#![deny(warnings)]

use crate::error::Error;
use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Splits input into terminal tokens by greedy longest match.
///
/// Concatenating the token names gives back the input (minus skipped spaces).
/// An empty input yields the empty terminal only if the grammar declares it.
/// After the first error the tokenizer is exhausted.
pub struct Tokenizer<'a> {
    // longest first, so the first prefix hit is the longest match
    terminals: &'a [String],
    input: &'a str,
    rest: &'a str,
    ignore_spaces: bool,
    empty_token: bool,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(grammar: &'a Grammar, input: &'a str, ignore_spaces: bool) -> Self {
        Tokenizer {
            terminals: grammar.tokenizer_terminals(),
            input,
            rest: input,
            ignore_spaces,
            empty_token: input.is_empty() &&
                grammar.terminals().iter().any(|t| t.is_empty()),
            failed: false,
        }
    }

    /// Input left to tokenize.
    pub fn remainder(&self) -> &'a str { self.rest }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Symbol, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty_token {
            self.empty_token = false;
            return Some(Ok(Symbol::term("")));
        }
        if self.failed {
            return None;
        }
        let terminals = self.terminals;
        while !self.rest.is_empty() {
            let rest = self.rest;
            if let Some(term) = terminals.iter()
                .find(|t| !t.is_empty() && rest.starts_with(t.as_str()))
            {
                self.rest = &rest[term.len()..];
                return Some(Ok(Symbol::term(term.as_str())));
            }
            // spaces are only skipped when no terminal claims them
            if self.ignore_spaces && rest.starts_with(' ') {
                self.rest = &rest[1..];
                continue;
            }
            self.failed = true;
            return Some(Err(Error::Tokenization {
                input: self.input.to_string(),
                remainder: rest.to_string(),
            }));
        }
        None
    }
}

pub fn tokenize(grammar: &Grammar, input: &str, ignore_spaces: bool)
    -> Result<Vec<Symbol>, Error>
{
    Tokenizer::new(grammar, input, ignore_spaces).collect()
}

///////////////////////////////////////////////////////////////////////////////

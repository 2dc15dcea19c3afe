#![deny(warnings)]

use crate::error::Error;
use crate::grammar::{CnfGrammar, Grammar};
use crate::symbol::Symbol;
use crate::tokenizer::tokenize;
use std::collections::HashMap;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ParseOptions {
    /// Skip spaces no terminal matches.
    pub ignore_spaces: bool,
    /// Return tokenization failures as errors instead of `Ok(false)`.
    pub raise_token_error: bool,
}

/// CYK membership test over a CNF grammar.
///
/// Productions are split once into `V -> 't'` and `V -> B C` with variables
/// mapped to dense indices, the parser can then be reused for any input.
pub struct CykParser<'g> {
    grammar: &'g Grammar,
    start: usize,
    index: HashMap<&'g str, usize>,
    units: Vec<(usize, &'g str)>,
    pairs: Vec<(usize, usize, usize)>,
}

// reachable[len][start][var] flattened, span lengths count from 1
struct Table {
    n: usize,
    nvars: usize,
    cells: Vec<bool>,
}

impl Table {
    fn new(n: usize, nvars: usize) -> Self {
        Table { n, nvars, cells: vec![false; n * n * nvars] }
    }

    fn idx(&self, len: usize, start: usize, var: usize) -> usize {
        ((len - 1) * self.n + start) * self.nvars + var
    }

    fn get(&self, len: usize, start: usize, var: usize) -> bool {
        self.cells[self.idx(len, start, var)]
    }

    fn set(&mut self, len: usize, start: usize, var: usize) {
        let idx = self.idx(len, start, var);
        self.cells[idx] = true;
    }
}

///////////////////////////////////////////////////////////////////////////////

impl<'g> CykParser<'g> {
    pub fn new(grammar: &'g CnfGrammar) -> Self {
        Self::with_start(grammar, grammar.start_symbol())
    }

    /// Fails with `GrammarKind` unless `grammar` came out of the CNF builder.
    pub fn from_grammar(grammar: &'g Grammar) -> Result<Self, Error> {
        match grammar.start_symbol() {
            Some(start) if grammar.is_cnf() => Ok(Self::with_start(grammar, start)),
            _ => Err(Error::GrammarKind),
        }
    }

    fn with_start(grammar: &'g Grammar, start: &'g str) -> Self {
        let index: HashMap<&str, usize> = grammar.variables().iter()
            .enumerate()
            .map(|(idx, var)| (var.as_str(), idx))
            .collect();
        // every name resolves, the builder checked all references
        let units = grammar.productions().iter()
            .filter_map(|p| match p.body.as_slice() {
                [Symbol::Term(t)] => Some((*index.get(p.head.as_str())?, t.as_str())),
                _ => None,
            })
            .collect();
        let pairs = grammar.productions().iter()
            .filter_map(|p| match p.body.as_slice() {
                [Symbol::Var(b), Symbol::Var(c)] => Some((
                    *index.get(p.head.as_str())?,
                    *index.get(b.as_str())?,
                    *index.get(c.as_str())?,
                )),
                _ => None,
            })
            .collect();
        CykParser {
            grammar,
            start: index.get(start).copied().unwrap_or(usize::MAX),
            index,
            units,
            pairs,
        }
    }

    /// Does the start symbol derive exactly this token sequence?
    pub fn recognize(&self, tokens: &[Symbol]) -> bool {
        let n = tokens.len();
        if n == 0 {
            return self.units.iter().any(|&(var, t)| var == self.start && t.is_empty());
        }
        let mut table = Table::new(n, self.index.len());
        for (s, token) in tokens.iter().enumerate() {
            for &(var, term) in &self.units {
                if token.is_terminal() && token.name() == term {
                    table.set(1, s, var);
                }
            }
        }
        // each span length only reads strictly shorter spans
        for len in 2..=n {
            for s in 0..=(n - len) {
                for p in 1..len {
                    for &(var, b, c) in &self.pairs {
                        if table.get(p, s, b) && table.get(len - p, s + p, c) {
                            table.set(len, s, var);
                        }
                    }
                }
            }
        }
        if cfg!(feature = "debug") {
            self.trace_table(&table);
        }
        self.start < self.index.len() && table.get(n, 0, self.start)
    }

    /// Tokenizes and recognizes `input`. Unless `raise_token_error` is set,
    /// input that doesn't tokenize is simply not in the language.
    pub fn parse(&self, input: &str, options: ParseOptions) -> Result<bool, Error> {
        match tokenize(self.grammar, input, options.ignore_spaces) {
            Ok(tokens) => Ok(self.recognize(&tokens)),
            Err(error) if !options.raise_token_error => {
                log::warn!("{}", error);
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }

    fn trace_table(&self, table: &Table) {
        let variables = self.grammar.variables();
        for len in 1..=table.n {
            for s in 0..=(table.n - len) {
                let reach = (0..table.nvars)
                    .filter(|&v| table.get(len, s, v))
                    .map(|v| variables[v].as_str())
                    .collect::<Vec<_>>();
                log::trace!("span(start={}, len={}): {}", s, len, reach.join(" "));
            }
        }
    }
}

/// Parses `input` with CYK, failing with `GrammarKind` for non-CNF grammars.
pub fn parse(grammar: &Grammar, input: &str, options: ParseOptions) -> Result<bool, Error> {
    CykParser::from_grammar(grammar)?.parse(input, options)
}

#![deny(warnings)]

use crate::error::{CnfViolation, Error};
use crate::grammar::{CnfGrammar, Grammar};
use crate::symbol::{Production, Symbol};
use crate::terminals::order_terminals;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BuildOptions {
    /// Reject terminals longer than one char instead of checking ambiguity.
    pub force_terminal_length_1: bool,
    /// Re-declaring a symbol is a no-op instead of an error.
    pub ignore_duplicate_symbols: bool,
    /// Productions may mention undeclared symbols, they get declared on build.
    pub generate_missing_symbols: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            force_terminal_length_1: false,
            ignore_duplicate_symbols: true,
            generate_missing_symbols: false,
        }
    }
}

/// Stages symbols and productions. References are only resolved on `build`,
/// so everything can be added in any order.
#[derive(Default, Debug)]
pub struct GrammarBuilder {
    options: BuildOptions,
    variables: Vec<String>,
    terminals: Vec<String>,
    productions: Vec<Production>,
    start: Option<String>,
    // `start` was declared by `set_start_symbol`, not by the caller
    start_implicit: bool,
    // implicit start symbols since replaced, dropped on `build` if unused
    replaced_starts: Vec<String>,
    // first error hit by a chaining call, reported by `build`
    error: Option<Error>,
}

impl GrammarBuilder {
    pub fn new(options: BuildOptions) -> Self {
        GrammarBuilder { options, ..Default::default() }
    }

    pub fn options(&self) -> BuildOptions { self.options }

    fn add_symbol(&mut self, symbol: Symbol) -> Result<(), Error> {
        if let Symbol::Var(name) = &symbol {
            // declaring a replaced start symbol keeps it
            if let Some(pos) = self.replaced_starts.iter().position(|v| v == name) {
                self.replaced_starts.remove(pos);
                return Ok(());
            }
        }
        let names = match &symbol {
            Symbol::Var(_) => &mut self.variables,
            Symbol::Term(_) => &mut self.terminals,
        };
        if !names.iter().any(|n| n == symbol.name()) {
            names.push(symbol.name().to_string());
            Ok(())
        } else if self.options.ignore_duplicate_symbols {
            if symbol.is_variable() && self.start.as_deref() == Some(symbol.name()) {
                self.start_implicit = false;
            }
            Ok(())
        } else {
            Err(Error::DuplicateSymbol(symbol))
        }
    }

    pub fn add_var(&mut self, name: impl Into<String>) -> Result<(), Error> {
        self.add_symbol(Symbol::Var(name.into()))
    }

    pub fn add_vars<I, S>(&mut self, names: I) -> Result<(), Error>
        where I: IntoIterator<Item = S>, S: Into<String>
    {
        names.into_iter().try_for_each(|name| self.add_var(name))
    }

    pub fn add_term(&mut self, name: impl Into<String>) -> Result<(), Error> {
        self.add_symbol(Symbol::Term(name.into()))
    }

    pub fn add_terms<I, S>(&mut self, names: I) -> Result<(), Error>
        where I: IntoIterator<Item = S>, S: Into<String>
    {
        names.into_iter().try_for_each(|name| self.add_term(name))
    }

    /// Declares `name` as a variable if needed and makes it the start symbol.
    /// A replaced start symbol the caller never declared is dropped on
    /// `build` unless some production mentions it.
    pub fn set_start_symbol(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.start.as_deref() == Some(name.as_str()) {
            return;
        }
        if let Some(old) = self.start.take() {
            if self.start_implicit {
                self.replaced_starts.push(old);
            }
        }
        if let Some(pos) = self.replaced_starts.iter().position(|v| *v == name) {
            self.replaced_starts.remove(pos);
            self.start_implicit = true;
        } else if self.variables.contains(&name) {
            self.start_implicit = false;
        } else {
            self.variables.push(name.clone());
            self.start_implicit = true;
        }
        self.start = Some(name);
    }

    fn mentions(&self, var: &str) -> bool {
        self.productions.iter().any(|p| p.head == var ||
            p.body.iter().any(|s| s.is_variable() && s.name() == var))
    }

    /// Stages a production. Its symbols are checked when building.
    pub fn add_production(
        &mut self,
        head: impl Into<String>,
        body: impl IntoIterator<Item = Symbol>)
    {
        self.productions.push(Production::new(head, body.into_iter().collect()));
    }

    // Chaining versions keep the first error around until `build`.

    fn defer(&mut self, result: Result<(), Error>) {
        if let Err(error) = result {
            self.error.get_or_insert(error);
        }
    }

    pub fn var(mut self, name: impl Into<String>) -> Self {
        let result = self.add_var(name);
        self.defer(result);
        self
    }

    pub fn term(mut self, name: impl Into<String>) -> Self {
        let result = self.add_term(name);
        self.defer(result);
        self
    }

    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.set_start_symbol(name);
        self
    }

    pub fn rule(
        mut self,
        head: impl Into<String>,
        body: impl IntoIterator<Item = Symbol>) -> Self
    {
        self.add_production(head, body);
        self
    }

    // Check a symbol is declared, declaring it if missing symbols are generated
    fn resolve(&mut self, production: usize, symbol: &Symbol) -> Result<(), Error> {
        let names = match symbol {
            Symbol::Var(_) => &mut self.variables,
            Symbol::Term(_) => &mut self.terminals,
        };
        if names.iter().any(|n| n == symbol.name()) {
            Ok(())
        } else if self.options.generate_missing_symbols {
            names.push(symbol.name().to_string());
            Ok(())
        } else {
            Err(Error::UndefinedSymbol { production, symbol: symbol.clone() })
        }
    }

    /// Resolves every production's symbols, groups productions by head and
    /// orders terminals for tokenization.
    pub fn build(mut self) -> Result<Grammar, Error> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        for old in std::mem::take(&mut self.replaced_starts) {
            if !self.mentions(&old) {
                self.variables.retain(|v| *v != old);
            }
        }
        let productions = std::mem::take(&mut self.productions);
        let mut by_head: HashMap<String, Vec<Vec<Symbol>>> = HashMap::new();
        for (idx, production) in productions.iter().enumerate() {
            self.resolve(idx, &Symbol::Var(production.head.clone()))?;
            for symbol in &production.body {
                self.resolve(idx, symbol)?;
            }
            by_head.entry(production.head.clone())
                .or_default()
                .push(production.body.clone());
        }
        let tokenizer_terminals = order_terminals(
            &self.terminals, self.options.force_terminal_length_1)?;
        log::debug!("Built grammar: {} variables, {} terminals, {} productions",
                    self.variables.len(), self.terminals.len(), productions.len());
        Ok(Grammar {
            variables: self.variables,
            terminals: self.terminals,
            tokenizer_terminals,
            productions,
            by_head,
            start: self.start,
            cnf: false,
        })
    }
}

///////////////////////////////////////////////////////////////////////////////

/// A `GrammarBuilder` that also checks every production is in Chomsky
/// Normal Form. Mutating methods are reached through `DerefMut`.
#[derive(Default, Debug)]
pub struct CnfGrammarBuilder(GrammarBuilder);

impl CnfGrammarBuilder {
    pub fn new(options: BuildOptions) -> Self {
        CnfGrammarBuilder(GrammarBuilder::new(options))
    }

    pub fn var(self, name: impl Into<String>) -> Self {
        CnfGrammarBuilder(self.0.var(name))
    }

    pub fn term(self, name: impl Into<String>) -> Self {
        CnfGrammarBuilder(self.0.term(name))
    }

    pub fn start(self, name: impl Into<String>) -> Self {
        CnfGrammarBuilder(self.0.start(name))
    }

    pub fn rule(
        self,
        head: impl Into<String>,
        body: impl IntoIterator<Item = Symbol>) -> Self
    {
        CnfGrammarBuilder(self.0.rule(head, body))
    }

    pub fn build(self) -> Result<CnfGrammar, Error> {
        let start = self.0.start.clone();
        let mut grammar = self.0.build()?;
        let start = start.ok_or(Error::MissingStartSymbol)?;
        for (idx, production) in grammar.productions.iter().enumerate() {
            check_cnf(idx, production, &start)?;
        }
        grammar.cnf = true;
        Ok(CnfGrammar::new(grammar, start))
    }
}

impl From<GrammarBuilder> for CnfGrammarBuilder {
    fn from(builder: GrammarBuilder) -> Self { CnfGrammarBuilder(builder) }
}

impl Deref for CnfGrammarBuilder {
    type Target = GrammarBuilder;
    fn deref(&self) -> &GrammarBuilder { &self.0 }
}

impl DerefMut for CnfGrammarBuilder {
    fn deref_mut(&mut self) -> &mut GrammarBuilder { &mut self.0 }
}

// A -> 'a' or A -> B C, where only the start symbol may produce '' and the
// start symbol never shows up on a right side.
fn check_cnf(idx: usize, production: &Production, start: &str) -> Result<(), Error> {
    let violation = match production.body.as_slice() {
        [] => Some(CnfViolation::EmptyBody),
        [Symbol::Var(_)] => Some(CnfViolation::UnitNotTerminal),
        [Symbol::Term(t)] if t.is_empty() && production.head != start =>
            Some(CnfViolation::EmptyTerminal),
        [Symbol::Term(_)] => None,
        [Symbol::Var(b), Symbol::Var(c)] if b == start || c == start =>
            Some(CnfViolation::StartOnRight),
        [Symbol::Var(_), Symbol::Var(_)] => None,
        [_, _] => Some(CnfViolation::PairNotVariables),
        body => Some(CnfViolation::TooManySymbols(body.len())),
    };
    match violation {
        None => Ok(()),
        Some(violation) => Err(Error::CnfShape {
            production: idx,
            rule: production.to_string(),
            violation,
        }),
    }
}

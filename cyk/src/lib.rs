#![deny(warnings)]

mod symbol;
pub use crate::symbol::{Production, Symbol};

mod error;
pub use crate::error::{CnfViolation, Error};

mod terminals;
mod grammar;
pub use crate::grammar::{CnfGrammar, Grammar};

mod builder;
pub use crate::builder::{BuildOptions, CnfGrammarBuilder, GrammarBuilder};

mod tokenizer;
pub use crate::tokenizer::{tokenize, Tokenizer};

mod parser;
pub use crate::parser::{parse, CykParser, ParseOptions};

mod text;
pub use crate::text::load_grammar;

#[cfg(test)]
mod builder_test;

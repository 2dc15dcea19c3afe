#![deny(warnings)]

use crate::error::Error;
use std::collections::HashMap;

/// Orders terminals for greedy longest-match tokenization, longest first.
///
/// Each terminal is checked against the longer ones already placed. When a
/// longer terminal contains it, it is recorded as a collision of that longer
/// terminal, and if the longer one can then be spelled by concatenating its
/// collisions (any order, any repetition) the set is rejected. This is
/// conservative: some rejected sets would still tokenize deterministically.
///
/// With `force_length_1` no ordering happens, terminals just can't be longer
/// than one character.
pub fn order_terminals(terminals: &[String], force_length_1: bool)
    -> Result<Vec<String>, Error>
{
    if force_length_1 {
        if let Some(long) = terminals.iter().find(|t| t.chars().count() > 1) {
            return Err(Error::TerminalLength(long.clone()));
        }
        return Ok(terminals.to_vec());
    }

    // stable sort: equal lengths keep declaration order
    let mut sorted: Vec<&str> = terminals.iter().map(|t| t.as_str()).collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut built: Vec<&str> = Vec::with_capacity(sorted.len());
    let mut collisions: HashMap<&str, Vec<&str>> = HashMap::new();
    for terminal in sorted {
        for &longer in &built {
            if !longer.contains(terminal) {
                continue;
            }
            let parts = collisions.entry(longer).or_default();
            parts.push(terminal);
            if spelled_by(longer, parts) {
                return Err(Error::TerminalAmbiguity(longer.to_string()));
            }
        }
        built.push(terminal);
    }
    Ok(built.into_iter().map(String::from).collect())
}

// Can `word` be written as a sequence of one or more `parts`? Same answer as
// enumerating every concatenation up to `word.len()` pieces, without the
// exponential blowup.
fn spelled_by(word: &str, parts: &[&str]) -> bool {
    let mut reach = vec![false; word.len() + 1];
    reach[0] = true;
    for pos in 0..word.len() {
        // only char boundaries ever become reachable
        if !reach[pos] {
            continue;
        }
        for part in parts.iter().filter(|p| !p.is_empty()) {
            if word[pos..].starts_with(part) {
                reach[pos + part.len()] = true;
            }
        }
    }
    !word.is_empty() && reach[word.len()]
}

///////////////////////////////////////////////////////////////////////////////

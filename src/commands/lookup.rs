//! S+7 lookup command
//!
//! Finds where the query noun sits in the dictionary and steps 7 to 77 nouns past it.

use crate::core::{Offset, WordList};
use rand::Rng;
use tracing::debug;

/// Configuration for a single lookup
pub struct LookupConfig {
    pub query: String,
}

impl LookupConfig {
    #[must_use]
    pub const fn new(query: String) -> Self {
        Self { query }
    }
}

/// Result of a lookup, with the arithmetic that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S7Result {
    pub query: String,
    pub insertion_point: usize,
    pub offset: Offset,
    pub index: usize,
    pub noun: String,
    pub list_len: usize,
    /// The lower-cased query is itself a dictionary entry
    pub found: bool,
}

/// Replace `query` with a noun a random 7 to 77 positions after its insertion point
#[must_use]
pub fn lookup<R: Rng>(query: &str, words: &WordList, rng: &mut R) -> S7Result {
    lookup_with_offset(query, words, Offset::random(rng))
}

/// Replace `query` with the noun `offset` positions after its insertion point
///
/// # Examples
/// ```
/// use splus7::commands::lookup_with_offset;
/// use splus7::core::{Offset, WordList};
///
/// let words: Vec<String> = (0..100).map(|i| format!("n{i:02}")).collect();
/// let list = WordList::new(words).unwrap();
///
/// let result = lookup_with_offset("n10", &list, Offset::MIN);
/// assert_eq!(result.noun, "n17");
/// ```
#[must_use]
pub fn lookup_with_offset(query: &str, words: &WordList, offset: Offset) -> S7Result {
    let insertion_point = words.insertion_point(query);
    let found = words.get(insertion_point) == Some(query.to_lowercase().as_str());
    let index = words.wrapped_index(insertion_point, offset);

    // wrapped_index reduces modulo len, and WordList is never empty
    let noun = words.words()[index].clone();

    debug!(
        query,
        insertion_point,
        found,
        offset = offset.get(),
        index,
        noun = %noun,
        "s+7 lookup"
    );

    S7Result {
        query: query.to_string(),
        insertion_point,
        offset,
        index,
        noun,
        list_len: words.len(),
        found,
    }
}

/// Convenience wrapper returning only the substituted noun, using the thread RNG
#[must_use]
pub fn s7(query: &str, words: &WordList) -> String {
    lookup(query, words, &mut rand::rng()).noun
}

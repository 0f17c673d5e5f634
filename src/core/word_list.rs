//! Sorted noun dictionary
//!
//! A `WordList` holds the dictionary in resource order. The entries are assumed to be
//! sorted by byte value already; they are never re-sorted, deduplicated or trimmed.

use super::{Offset, S7Error};
use tracing::trace;

/// A non-empty, pre-sorted list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

#[allow(clippy::len_without_is_empty)] // never empty
impl WordList {
    /// Wrap an ordered sequence of words
    ///
    /// # Errors
    /// Returns `S7Error::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use splus7::core::WordList;
    ///
    /// let list = WordList::new(vec!["apple".into(), "banana".into()]).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// assert!(WordList::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: Vec<String>) -> Result<Self, S7Error> {
        if words.is_empty() {
            return Err(S7Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Build a list from borrowed strings, e.g. an embedded constant
    ///
    /// # Errors
    /// Returns `S7Error::EmptyWordList` if `slice` is empty.
    pub fn from_slice(slice: &[&str]) -> Result<Self, S7Error> {
        Self::new(slice.iter().map(|&s| s.to_owned()).collect())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Leftmost index where the lower-cased query could be inserted keeping order
    ///
    /// This is the first index whose entry is not less than the query. A query that
    /// sorts after every entry yields `len()`.
    ///
    /// # Examples
    /// ```
    /// use splus7::core::WordList;
    ///
    /// let list = WordList::from_slice(&["apple", "cat", "dog"]).unwrap();
    /// assert_eq!(list.insertion_point("Cat"), 1);
    /// assert_eq!(list.insertion_point("bee"), 1);
    /// assert_eq!(list.insertion_point("zebra"), 3);
    /// ```
    #[must_use]
    pub fn insertion_point(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        let index = self.words.partition_point(|word| word.as_str() < needle.as_str());
        trace!(query, needle = %needle, index, "insertion point");
        index
    }

    /// Index reached by moving `offset` positions forward from `start`, wrapping at the end
    ///
    /// `start` may equal `len()` (a query sorting after every entry).
    #[must_use]
    pub fn wrapped_index(&self, start: usize, offset: Offset) -> usize {
        (start + usize::from(offset.get())) % self.words.len()
    }
}

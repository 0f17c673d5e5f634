//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::NOUNS;
use crate::core::{S7Error, WordList};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a word list from a file, one word per line
///
/// Lines are kept exactly as written, in file order. Only line terminators are removed;
/// see [`split_lines`] for what counts as one.
///
/// # Errors
///
/// Returns `S7Error::FileAccess` if the file cannot be opened or read, and
/// `S7Error::EmptyWordList` if it contains no lines.
///
/// # Examples
/// ```no_run
/// use splus7::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/nouns.txt").unwrap();
/// println!("Loaded {} nouns", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, S7Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| S7Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let words = split_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list from file");

    WordList::new(words)
}

/// Line boundaries: `\r\n`, and any single LF, CR, VT, FF, FS, GS, RS, NEL, LS or PS
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines, dropping the terminators
///
/// A trailing terminator does not produce a final empty line; blank lines in the
/// middle are kept.
///
/// # Examples
/// ```
/// use splus7::wordlists::loader::split_lines;
///
/// assert_eq!(split_lines("ant\r\nbee\rcow\n"), ["ant", "bee", "cow"]);
/// assert_eq!(split_lines("ant\n\nbee"), ["ant", "", "bee"]);
/// assert!(split_lines("").is_empty());
/// ```
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        let Some(pos) = rest.find(LINE_BREAKS) else {
            lines.push(rest.to_owned());
            break;
        };
        lines.push(rest[..pos].to_owned());

        let tail = &rest[pos..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }

    lines
}

/// The bundled noun dictionary
///
/// # Errors
///
/// Returns `S7Error::EmptyWordList` if the list was built from an empty resource.
///
/// # Examples
/// ```
/// use splus7::wordlists::loader::embedded_nouns;
/// use splus7::wordlists::NOUNS_COUNT;
///
/// let list = embedded_nouns().unwrap();
/// assert_eq!(list.len(), NOUNS_COUNT);
/// ```
pub fn embedded_nouns() -> Result<WordList, S7Error> {
    debug!(count = NOUNS.len(), "using embedded noun list");
    WordList::from_slice(NOUNS)
}

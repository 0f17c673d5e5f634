//! Noun dictionaries for S+7
//!
//! Provides the bundled noun list compiled into the binary, plus a loader for
//! alternate lists on disk.

mod embedded;
pub mod loader;

pub use embedded::{NOUNS, NOUNS_COUNT};

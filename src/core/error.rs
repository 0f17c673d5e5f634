//! Error type for word list loading and lookup

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum S7Error {
    /// The word list resource could not be opened or read.
    #[error("cannot read word list {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A lookup needs at least one word to wrap around.
    #[error("word list is empty")]
    EmptyWordList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_access_message_names_path() {
        let err = S7Error::FileAccess {
            path: PathBuf::from("missing/nouns.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("missing/nouns.txt"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn file_access_exposes_source() {
        use std::error::Error as _;

        let err = S7Error::FileAccess {
            path: PathBuf::from("nouns.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn empty_word_list_message() {
        assert_eq!(S7Error::EmptyWordList.to_string(), "word list is empty");
    }
}

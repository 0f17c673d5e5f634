//! S+7
//!
//! The Oulipo "S+7" substitution: a noun is replaced by the noun found 7 to 77 positions
//! after it in a sorted dictionary, wrapping around at the end.
//!
//! # Quick Start
//!
//! ```rust
//! use splus7::commands::s7;
//! use splus7::wordlists::loader::embedded_nouns;
//!
//! let nouns = embedded_nouns().unwrap();
//! let replacement = s7("Castle", &nouns);
//! assert!(nouns.iter().any(|n| n == replacement));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Core domain types for S+7
//!
//! The sorted word list, the bounded offset, and the error type shared by the loader
//! and the lookup. Nothing here touches the terminal.

mod error;
mod offset;
mod word_list;

pub use error::S7Error;
pub use offset::Offset;
pub use word_list::WordList;

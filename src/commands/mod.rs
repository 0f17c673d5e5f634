//! Command implementations

pub mod lookup;

pub use lookup::{LookupConfig, S7Result, lookup, lookup_with_offset, s7};

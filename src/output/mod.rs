//! Terminal output formatting
//!
//! The substituted noun is the only thing written to stdout.

pub mod display;

pub use display::print_result;

//! Display functions for lookup results

use crate::commands::S7Result;

/// Print the substituted noun as the single line of stdout
pub fn print_result(result: &S7Result) {
    println!("{}", result.noun);
}

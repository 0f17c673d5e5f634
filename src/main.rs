//! S+7 - CLI
//!
//! Replaces a noun with the noun 7 to 77 dictionary positions after it.
//!
//! Takes exactly one argument, always read as the noun, even when it looks like a flag.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use splus7::{
    commands::{LookupConfig, lookup},
    core::WordList,
    output::print_result,
    wordlists::loader::embedded_nouns,
};
use std::env;
use std::io::{self, IsTerminal};
use std::process;
use tracing::{Level, warn};

#[derive(Parser)]
#[command(
    name = "splus7",
    about = "Oulipo S+7: replace a noun with one 7 to 77 dictionary positions later",
    override_usage = "splus7 <NOUN>",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// The noun to transform
    #[arg(value_name = "NOUN", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    /// The noun, if exactly one argument was given
    ///
    /// `raw_count` excludes the program name. It catches a `--` that clap swallowed.
    fn into_noun(self, raw_count: usize) -> Option<String> {
        let mut args = self.args;
        if raw_count == 1 && args.len() == 1 {
            args.pop()
        } else {
            None
        }
    }
}

fn usage_error() -> ! {
    eprintln!("{}", Cli::command().render_usage());
    process::exit(1);
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        usage_error()
    });
    let raw_count = env::args_os().len().saturating_sub(1);
    let Some(noun) = cli.into_noun(raw_count) else {
        usage_error()
    };

    init_logging();

    let words = embedded_nouns().context("Bundled noun list is unusable")?;

    run_lookup_command(&LookupConfig::new(noun), &words);
    Ok(())
}

fn run_lookup_command(config: &LookupConfig, words: &WordList) {
    let result = lookup(&config.query, words, &mut rand::rng());
    if !result.found {
        warn!(query = %result.query, "not in dictionary, using its insertion point");
    }

    print_result(&result);
}

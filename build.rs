//! Build script to embed the noun dictionary
//!
//! Turns `data/nouns.txt` into a `NOUNS` const array. Entries are written with debug
//! escaping so quotes or backslashes survive unchanged.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const NOUNS_PATH: &str = "data/nouns.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("nouns.rs");

    let content =
        fs::read_to_string(NOUNS_PATH).unwrap_or_else(|e| panic!("Failed to read {NOUNS_PATH}: {e}"));
    let nouns: Vec<&str> = content.lines().collect();

    let file = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));
    write_nouns(io::BufWriter::new(file), &nouns)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={NOUNS_PATH}");
}

fn write_nouns(mut out: impl Write, nouns: &[&str]) -> io::Result<()> {
    writeln!(out, "// Generated from {NOUNS_PATH}")?;
    writeln!(out)?;
    writeln!(out, "/// Bundled noun dictionary in file order ({} entries)", nouns.len())?;
    writeln!(out, "pub const NOUNS: &[&str] = &[")?;
    for noun in nouns {
        writeln!(out, "    {noun:?},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Number of entries in `NOUNS`")?;
    writeln!(out, "pub const NOUNS_COUNT: usize = {};", nouns.len())?;
    out.flush()
}

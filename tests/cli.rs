//! Command-line contract for the splus7 binary

use splus7::wordlists::NOUNS;
use std::process::{Command, Output};

fn splus7(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_splus7"))
        .args(args)
        .output()
        .expect("failed to run splus7")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn assert_usage_error(args: &[&str]) {
    let output = splus7(args);

    assert_eq!(output.status.code(), Some(1), "args {args:?}");
    assert!(output.stdout.is_empty(), "args {args:?}");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Usage: splus7 <NOUN>"),
        "args {args:?}"
    );
}

fn assert_one_noun(args: &[&str]) -> String {
    let output = splus7(args);

    assert_eq!(output.status.code(), Some(0), "args {args:?}");
    let mut lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1, "args {args:?}");
    let noun = lines.remove(0);
    assert!(NOUNS.contains(&noun.as_str()), "{noun} not in list");
    noun
}

#[test]
fn one_argument_prints_one_noun() {
    let output = splus7(&["cat"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output).len(), 1);
    // Known nouns log nothing at the default level
    assert!(output.stderr.is_empty());
}

#[test]
fn result_is_within_offset_window() {
    let start = NOUNS.partition_point(|w| *w < "cat");

    for _ in 0..20 {
        let noun = assert_one_noun(&["CAT"]);
        let index = NOUNS.iter().position(|w| *w == noun).unwrap();
        let distance = (index + NOUNS.len() - start) % NOUNS.len();

        assert!((7..=77).contains(&distance), "distance {distance}");
    }
}

#[test]
fn unknown_noun_still_succeeds_with_plain_warning() {
    let output = splus7(&["xylophonist"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output).len(), 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not in dictionary"));
    // stderr is a pipe here, so no color codes
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn flag_like_single_argument_is_the_noun() {
    for arg in ["--version", "--help", "-v", "-cat", "-5"] {
        assert_one_noun(&[arg]);
    }
}

#[test]
fn no_arguments_is_usage_error() {
    assert_usage_error(&[]);
}

#[test]
fn two_arguments_is_usage_error() {
    assert_usage_error(&["cat", "dog"]);
}

#[test]
fn trailing_flag_counts_as_second_argument() {
    assert_usage_error(&["cat", "-v"]);
    assert_usage_error(&["-v", "cat"]);
    assert_usage_error(&["cat", "--version"]);
}

#[test]
fn option_terminator_counts_as_argument() {
    assert_usage_error(&["--"]);
    assert_usage_error(&["--", "cat"]);
}

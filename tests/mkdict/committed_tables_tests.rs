//! Committed table tests.
//!
//! The word lists under codewords_core/src/words are a hand-curated subset,
//! so their header must not claim to be generated. Below the header they
//! must be exactly what the emitter produces for their contents, so a
//! regeneration only shows word changes in the diff.

use std::fs;
use std::path::PathBuf;

use codewords::generator::words::{ADJECTIVES, NOUNS};
use codewords::mkdict::WordFilter;
use codewords::mkdict::emit::{BANNER, render_list};

fn words_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/codewords_core/src/words")
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Splits a word list file into its comment header and the static item.
fn split_header(source: &str) -> (&str, &str) {
    let start = source.find("pub static").unwrap();
    source.split_at(start)
}

fn assert_matches_emitter(file: &str, name: &str, words: &[&str]) {
    let on_disk = fs::read_to_string(words_dir().join(file)).unwrap();
    let rendered = render_list(name, &owned(words));

    let (header, body) = split_header(&on_disk);
    assert!(!header.contains(BANNER), "{file} claims to be mkdict output");
    assert!(header.lines().all(|l| l.is_empty() || l.starts_with("//")));
    assert_eq!(body, split_header(&rendered).1);
}

#[test]
fn adjectives_file_matches_emitter() {
    assert_matches_emitter("adjectives.rs", "ADJECTIVES", ADJECTIVES);
}

#[test]
fn nouns_file_matches_emitter() {
    assert_matches_emitter("nouns.rs", "NOUNS", NOUNS);
}

#[test]
fn committed_words_pass_the_default_filter() {
    let filter = WordFilter::default();
    for word in ADJECTIVES.iter().chain(NOUNS) {
        assert!(filter.accepts(word), "{word} would be filtered out");
    }
}

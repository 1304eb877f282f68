//! Pipeline tests.
//!
//! Acquire → extract → filter → emit, against fixture tarballs.

use std::fs;

use codewords::generator::{Generator, WordList};
use codewords::mkdict::{BuildConfig, Dictionary, ErrorKind, LexiconEntry, PartOfSpeech, WordFilter};

use crate::support::{ARCHIVE_NAME, ARCHIVE_URL, StubFetcher, tarball, wordnet_tarball};

fn config_in(dir: &std::path::Path) -> BuildConfig {
    BuildConfig::default()
        .with_url(ARCHIVE_URL)
        .with_cache_dir(dir)
        .with_out_dir(dir)
}

#[test]
fn happy_is_kept_and_cat_is_dropped() {
    let happy = LexiconEntry::parse_line("happy a 1 3 ...").unwrap();
    let cat = LexiconEntry::parse_line("cat n 1 5 ...").unwrap();
    assert_eq!(happy.pos, PartOfSpeech::Adjective);
    assert_eq!(cat.pos, PartOfSpeech::Noun);

    let filter = WordFilter::new(4, 15).unwrap();
    assert!(filter.accepts(&happy.word));
    assert!(!filter.accepts(&cat.word));
}

#[test]
fn builds_filtered_lists_in_file_order() {
    let dictionary = Dictionary::from_archive(&wordnet_tarball(), &WordFilter::default()).unwrap();

    assert_eq!(dictionary.adjectives(), ["happy", "blue", "serene"]);
    assert_eq!(dictionary.nouns(), ["lantern", "lantern", "harbor"]);
}

#[test]
fn thresholds_change_the_output() {
    let dictionary =
        Dictionary::from_archive(&wordnet_tarball(), &WordFilter::new(3, 6).unwrap()).unwrap();

    assert_eq!(dictionary.adjectives(), ["happy", "cat", "blue", "serene"]);
    assert_eq!(dictionary.nouns(), ["cat", "harbor"]);
}

#[test]
fn max_len_beyond_what_the_generator_accepts_is_refused() {
    let err = WordFilter::new(4, codewords::generator::MAX_WORD_LEN + 1).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
}

#[test]
fn uses_cached_archive_without_network() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(ARCHIVE_NAME), wordnet_tarball()).unwrap();
    let fetcher = StubFetcher::offline();

    let dictionary = Dictionary::build(&config_in(dir.path()), &fetcher).unwrap();

    assert_eq!(fetcher.calls.get(), 0);
    assert_eq!(dictionary.adjectives().len(), 3);
}

#[test]
fn downloads_when_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = StubFetcher::serving(wordnet_tarball());

    let dictionary = Dictionary::build(&config_in(dir.path()), &fetcher).unwrap();

    assert_eq!(fetcher.calls.get(), 1);
    assert_eq!(dictionary.nouns().len(), 3);
}

#[test]
fn no_cache_and_no_network_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dictionary::build(&config_in(dir.path()), &StubFetcher::offline()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SourceUnavailable { .. }));
}

#[test]
fn archive_without_noun_index_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = tarball(&[("dict/index.adj", "happy a 1 3\n")]);
    fs::write(dir.path().join(ARCHIVE_NAME), bytes).unwrap();
    let config = config_in(dir.path());

    let err = Dictionary::build(&config, &StubFetcher::offline()).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::CorruptArchive(_)));
    assert!(!dir.path().join("adjectives.rs").exists());
    assert!(!dir.path().join("nouns.rs").exists());
}

#[test]
fn failed_write_keeps_the_previous_adjectives() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("adjectives.rs"), "OLD").unwrap();
    fs::create_dir(dir.path().join("nouns.rs")).unwrap();
    let config = config_in(dir.path());

    let dictionary = Dictionary::from_archive(&wordnet_tarball(), &config.filter).unwrap();
    let err = dictionary.write(&config).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert_eq!(fs::read_to_string(dir.path().join("adjectives.rs")).unwrap(), "OLD");
    assert!(dir.path().join("nouns.rs").is_dir());
}

#[test]
fn identical_input_gives_identical_output() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let bytes = wordnet_tarball();

    for dir in [&first, &second] {
        let config = BuildConfig::default().with_out_dir(dir.path());
        Dictionary::from_archive(&bytes, &config.filter)
            .unwrap()
            .write(&config)
            .unwrap();
    }

    for file in ["adjectives.rs", "nouns.rs"] {
        let a = fs::read(first.path().join(file)).unwrap();
        let b = fs::read(second.path().join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between runs");
    }
}

#[test]
fn written_words_feed_a_generator() {
    let dictionary = Dictionary::from_archive(&wordnet_tarball(), &WordFilter::default()).unwrap();
    let adjectives = WordList::new(dictionary.adjectives().iter().cloned()).unwrap();
    let nouns = WordList::new(dictionary.nouns().iter().cloned()).unwrap();

    let mut generator = Generator::with_lists(adjectives, nouns, 4);
    let cw = generator.generate().unwrap();
    let (adj, noun) = cw.split_once('-').unwrap();
    assert!(dictionary.adjectives().iter().any(|w| w == adj));
    assert!(dictionary.nouns().iter().any(|w| w == noun));
}

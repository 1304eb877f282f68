//! Generation tests.
//!
//! Tests for the shape of generated codewords.

use codewords::generator::{Codeword, ErrorKind, Generator, WordList};

fn list(words: &[&str]) -> WordList {
    WordList::new(words.iter().copied()).unwrap()
}

#[test]
fn default_generator_produces_list_members() {
    let mut generator = Generator::with_seed(2024);
    let adjectives = WordList::default_adjectives();
    let nouns = WordList::default_nouns();

    for _ in 0..500 {
        let cw = generator.generate().unwrap();
        assert_eq!(cw.matches('-').count(), 1, "bad codeword {cw}");
        let (adj, noun) = cw.split_once('-').unwrap();
        assert!(adjectives.contains(adj), "unknown adjective {adj}");
        assert!(nouns.contains(noun), "unknown noun {noun}");
    }
}

#[test]
fn time_seeded_generator_never_returns_empty() {
    let mut generator = Generator::new();
    for _ in 0..100 {
        assert!(!generator.generate().unwrap().is_empty());
    }
}

#[test]
fn single_entry_lists_always_give_happy_dog() {
    let mut generator = Generator::with_lists(list(&["happy"]), list(&["dog"]), 99);
    for _ in 0..25 {
        assert_eq!(generator.generate().unwrap(), "happy-dog");
    }
}

#[test]
fn generated_strings_parse_back() {
    let mut generator = Generator::with_seed(5);
    for _ in 0..100 {
        let cw = generator.generate_codeword().unwrap();
        let parsed: Codeword = cw.to_string().parse().unwrap();
        assert_eq!(parsed, cw);
    }
}

#[test]
fn generate_and_generate_codeword_share_the_stream() {
    let mut a = Generator::with_seed(77);
    let mut b = Generator::with_seed(77);
    for _ in 0..20 {
        assert_eq!(a.generate().unwrap(), b.generate_codeword().unwrap().to_string());
    }
}

#[test]
fn empty_lists_fail_every_call() {
    let mut generator = Generator::with_lists(WordList::empty(), WordList::empty(), 0);
    for _ in 0..3 {
        let err = generator.generate().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidConfiguration { .. }));
    }
}

#[test]
fn custom_lists_are_exposed() {
    let generator = Generator::with_lists(list(&["brisk", "calm"]), list(&["otter"]), 1);
    assert_eq!(generator.adjectives().len(), 2);
    assert_eq!(generator.nouns().get(0), Some("otter"));
}

mod proptests {
    use codewords::generator::{Codeword, Generator, WordList};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_seed_gives_a_parseable_codeword(seed in any::<u64>()) {
            let mut generator = Generator::with_seed(seed);
            let cw: Codeword = generator.generate().unwrap().parse().unwrap();
            prop_assert!(WordList::default_adjectives().contains(&cw.adjective));
            prop_assert!(WordList::default_nouns().contains(&cw.noun));
        }
    }
}

//! Distribution tests.
//!
//! Statistical sanity checks, not uniformity proofs.

use std::collections::HashSet;

use codewords::generator::{Generator, WordList};

#[test]
fn thousand_draws_cover_several_words() {
    let mut generator = Generator::with_seed(31337);
    let mut adjectives = HashSet::new();
    let mut nouns = HashSet::new();

    for _ in 0..1000 {
        let cw = generator.generate_codeword().unwrap();
        adjectives.insert(cw.adjective);
        nouns.insert(cw.noun);
    }

    assert!(adjectives.len() > 1);
    assert!(nouns.len() > 1);
}

#[test]
fn two_word_lists_hit_every_combination() {
    let adjectives = WordList::new(["amber", "brisk"]).unwrap();
    let nouns = WordList::new(["otter", "raven"]).unwrap();
    let mut generator = Generator::with_lists(adjectives, nouns, 8);

    let seen: HashSet<String> = (0..1000).map(|_| generator.generate().unwrap()).collect();

    let expected: HashSet<String> = ["amber-otter", "amber-raven", "brisk-otter", "brisk-raven"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn repeats_are_allowed() {
    let adjectives = WordList::new(["amber", "brisk"]).unwrap();
    let nouns = WordList::new(["otter"]).unwrap();
    let mut generator = Generator::with_lists(adjectives, nouns, 3);

    let draws: Vec<String> = (0..10).map(|_| generator.generate().unwrap()).collect();
    let unique: HashSet<&String> = draws.iter().collect();
    assert!(unique.len() < draws.len());
}

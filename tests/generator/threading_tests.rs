//! Threading tests.
//!
//! A generator is driven through `&mut self`; sharing one needs a lock.

use std::sync::{Arc, Mutex};
use std::thread;

use codewords::generator::{Generator, WordList};

#[test]
fn mutex_shared_generator_across_threads() {
    let shared = Arc::new(Mutex::new(Generator::with_seed(11)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                (0..50)
                    .map(|_| shared.lock().unwrap().generate().unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let total: usize = handles.into_iter().map(|h| h.join().unwrap().len()).sum();
    assert_eq!(total, 200);
}

#[test]
fn one_generator_per_thread_shares_word_lists() {
    let adjectives = WordList::default_adjectives();
    let nouns = WordList::default_nouns();

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let adjectives = adjectives.clone();
            let nouns = nouns.clone();
            thread::spawn(move || {
                let mut generator = Generator::with_lists(adjectives, nouns, seed);
                generator.generate().unwrap()
            })
        })
        .collect();

    for handle in handles {
        let cw = handle.join().unwrap();
        let (adj, noun) = cw.split_once('-').unwrap();
        assert!(adjectives.contains(adj));
        assert!(nouns.contains(noun));
    }
}

//! Random codeword generation.
//!
//! A [`Generator`] owns its own seeded ChaCha8 stream and a pair of
//! [`WordList`]s. There is no process-wide random state: two generators with
//! the same seed and lists produce the same sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::codeword::Codeword;
use crate::error::{Error, Result};
use crate::wordlist::WordList;

/// Builds `<adjective>-<noun>` codewords.
///
/// Codewords are not guaranteed to be unique. The default words come
/// unreviewed from Princeton WordNet and may be offensive or inappropriate
/// for some audiences.
///
/// `generate` takes `&mut self`, so sharing one generator between threads
/// needs a `Mutex` (or give each thread its own generator).
#[derive(Clone, Debug)]
pub struct Generator {
    rng: ChaCha8Rng,
    seed: u64,
    adjectives: WordList,
    nouns: WordList,
}

impl Generator {
    /// Creates a generator over the embedded word lists, seeded from the
    /// current time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(time_seed())
    }

    /// Creates a generator over the embedded word lists with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_lists(WordList::default_adjectives(), WordList::default_nouns(), seed)
    }

    /// Creates a generator over custom word lists with a fixed seed.
    ///
    /// Empty lists are accepted here; [`generate`](Self::generate) reports them.
    #[must_use]
    pub fn with_lists(adjectives: WordList, nouns: WordList, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            adjectives,
            nouns,
        }
    }

    /// Returns the seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the adjective list.
    #[must_use]
    pub fn adjectives(&self) -> &WordList {
        &self.adjectives
    }

    /// Returns the noun list.
    #[must_use]
    pub fn nouns(&self) -> &WordList {
        &self.nouns
    }

    /// Generates one codeword as a string.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfiguration`](crate::ErrorKind::InvalidConfiguration)
    /// if either word list is empty.
    pub fn generate(&mut self) -> Result<String> {
        self.generate_codeword().map(|cw| cw.to_string())
    }

    /// Generates one codeword.
    ///
    /// The adjective and noun are drawn independently and uniformly. A failed
    /// call does not advance the random stream.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfiguration`](crate::ErrorKind::InvalidConfiguration)
    /// if either word list is empty.
    pub fn generate_codeword(&mut self) -> Result<Codeword> {
        if self.adjectives.is_empty() {
            return Err(Error::empty_list("adjectives"));
        }
        if self.nouns.is_empty() {
            return Err(Error::empty_list("nouns"));
        }

        let adj_idx = self.rng.gen_range(0..self.adjectives.len());
        let noun_idx = self.rng.gen_range(0..self.nouns.len());

        Ok(Codeword::new(&self.adjectives[adj_idx], &self.nouns[noun_idx]))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nanoseconds since the Unix epoch, folded into 64 bits.
fn time_seed() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    u64::try_from(elapsed.as_nanos()).unwrap_or_else(|_| {
        elapsed.as_secs().rotate_left(32) ^ u64::from(elapsed.subsec_nanos())
    })
}

//! Immutable word lists.

use std::fmt;
use std::ops::Index;
use std::sync::{Arc, LazyLock};

use crate::error::{Error, Result};
use crate::words;

/// Longest word a [`WordList`] accepts, in bytes.
pub const MAX_WORD_LEN: usize = 15;

static DEFAULT_ADJECTIVES: LazyLock<WordList> =
    LazyLock::new(|| WordList::from_static(words::ADJECTIVES));

static DEFAULT_NOUNS: LazyLock<WordList> = LazyLock::new(|| WordList::from_static(words::NOUNS));

/// An ordered, immutable sequence of lowercase ASCII words.
///
/// Cloning is cheap: the words live behind a shared [`Arc`], so a list can be
/// handed to any number of generators or threads without copying.
///
/// A list may be empty; a [`Generator`](crate::Generator) holding an empty
/// list refuses to generate.
#[derive(Clone, PartialEq, Eq)]
pub struct WordList {
    words: Arc<[Box<str>]>,
}

impl WordList {
    /// Creates a word list, validating every word.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidWord`](crate::ErrorKind::InvalidWord) if a
    /// word is empty, longer than [`MAX_WORD_LEN`], or contains anything
    /// other than `a`-`z`.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let w: String = w.into();
                validate_word(&w)?;
                Ok(w.into_boxed_str())
            })
            .collect::<Result<Arc<[Box<str>]>>>()?;
        Ok(Self { words })
    }

    /// Creates a word list with no words.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: Arc::from(Vec::new()),
        }
    }

    /// The embedded WordNet adjectives.
    #[must_use]
    pub fn default_adjectives() -> Self {
        DEFAULT_ADJECTIVES.clone()
    }

    /// The embedded WordNet nouns.
    #[must_use]
    pub fn default_nouns() -> Self {
        DEFAULT_NOUNS.clone()
    }

    // The committed tables pass the mkdict filter; a test checks it.
    fn from_static(words: &'static [&'static str]) -> Self {
        debug_assert!(words.iter().all(|w| validate_word(w).is_ok()));
        Self {
            words: words.iter().map(|w| Box::<str>::from(*w)).collect(),
        }
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(AsRef::as_ref)
    }

    /// Returns true if `word` is in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| &**w == word)
    }

    /// Iterates over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(AsRef::as_ref)
    }
}

impl Index<usize> for WordList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The default tables are large; only show the size and the ends.
        match (self.words.first(), self.words.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "WordList({} words, {first:?}..{last:?})",
                self.words.len()
            ),
            _ => write!(f, "WordList(empty)"),
        }
    }
}

fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(Error::invalid_word(word, "word is empty"));
    }
    if word.len() > MAX_WORD_LEN {
        return Err(Error::invalid_word(word, "exceeds the maximum word length"));
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Error::invalid_word(
            word,
            "must contain only lowercase ASCII letters",
        ));
    }
    Ok(())
}

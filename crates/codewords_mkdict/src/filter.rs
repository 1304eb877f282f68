//! Candidate filtering.
//!
//! WordNet headwords include collocations (`ice_cream`), possessives
//! (`achilles'`), hyphenated and dotted forms, and numerals. None of these
//! make good codeword halves.

use std::fmt;

use codewords_core::MAX_WORD_LEN;

use crate::error::{Error, Result};

/// Default minimum word length, inclusive.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Default maximum word length, inclusive. Also the largest allowed, since
/// the generator refuses longer words.
pub const DEFAULT_MAX_WORD_LEN: usize = MAX_WORD_LEN;

/// Punctuation that marks a candidate as a phrase or inflected form.
pub const REJECTED_CHARS: &[char] = &['_', '\'', '-', '/', '.'];

/// Why a candidate was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Contains one of [`REJECTED_CHARS`].
    Punctuation(char),
    /// Contains an ASCII digit.
    Digit,
    /// Contains something other than `a`-`z`.
    NotLowercase,
    /// Shorter than the minimum length.
    TooShort,
    /// Longer than the maximum length.
    TooLong,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Punctuation(c) => write!(f, "contains {c:?}"),
            Self::Digit => f.write_str("contains a digit"),
            Self::NotLowercase => f.write_str("not lowercase ASCII"),
            Self::TooShort => f.write_str("too short"),
            Self::TooLong => f.write_str("too long"),
        }
    }
}

/// Length and character filter for candidate words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordFilter {
    min_len: usize,
    max_len: usize,
}

impl WordFilter {
    /// Creates a filter keeping words of `min_len..=max_len` characters.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
    /// if `min_len` is zero or greater than `max_len`, or if `max_len`
    /// exceeds [`MAX_WORD_LEN`].
    pub fn new(min_len: usize, max_len: usize) -> Result<Self> {
        if min_len == 0 {
            return Err(Error::invalid_config("minimum word length must be at least 1"));
        }
        if max_len > MAX_WORD_LEN {
            return Err(Error::invalid_config(format!(
                "maximum word length {max_len} exceeds the generator limit of {MAX_WORD_LEN}"
            )));
        }
        if min_len > max_len {
            return Err(Error::invalid_config(format!(
                "minimum word length {min_len} exceeds maximum {max_len}"
            )));
        }
        Ok(Self { min_len, max_len })
    }

    /// Minimum accepted length.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Maximum accepted length.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns why `word` would be dropped, or `None` if it is kept.
    #[must_use]
    pub fn rejection(&self, word: &str) -> Option<Rejection> {
        if let Some(c) = word.chars().find(|c| REJECTED_CHARS.contains(c)) {
            return Some(Rejection::Punctuation(c));
        }
        if word.bytes().any(|b| b.is_ascii_digit()) {
            return Some(Rejection::Digit);
        }
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Some(Rejection::NotLowercase);
        }
        // All ASCII from here, so bytes are characters.
        if word.len() < self.min_len {
            return Some(Rejection::TooShort);
        }
        if word.len() > self.max_len {
            return Some(Rejection::TooLong);
        }
        None
    }

    /// Returns true if `word` survives the filter.
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.rejection(word).is_none()
    }

    /// Keeps the accepted words, preserving their order.
    #[must_use]
    pub fn apply(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().filter(|w| self.accepts(w)).collect()
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_WORD_LEN,
            max_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

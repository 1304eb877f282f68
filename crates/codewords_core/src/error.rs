//! Error types for the codeword generator.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for generator operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid configuration error for the named word list.
    #[must_use]
    pub fn empty_list(list: &'static str) -> Self {
        Self::new(ErrorKind::InvalidConfiguration { list })
    }

    /// Creates an invalid word error.
    #[must_use]
    pub fn invalid_word(word: impl Into<String>, reason: &'static str) -> Self {
        Self::new(ErrorKind::InvalidWord {
            word: word.into(),
            reason,
        })
    }

    /// Creates an invalid codeword error.
    #[must_use]
    pub fn invalid_codeword(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCodeword(input.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generator was asked for a codeword while holding an empty word list.
    #[error("invalid configuration: {list} word list is empty")]
    InvalidConfiguration {
        /// Which list was empty ("adjectives" or "nouns").
        list: &'static str,
    },

    /// A word list was given a word that cannot appear in a codeword.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord {
        /// The offending word.
        word: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A string could not be parsed as `<adjective>-<noun>`.
    #[error("invalid codeword: {0:?}")]
    InvalidCodeword(String),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

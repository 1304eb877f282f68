//! Error types for the dictionary builder.
//!
//! Every failure aborts the build; nothing here is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for dictionary builder operations.
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

    /// Creates a source unavailable error.
    #[must_use]
    pub fn source_unavailable(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceUnavailable {
            url: url.into(),
            reason: reason.into(),
        })
    }

    /// Creates a corrupt archive error.
    #[must_use]
    pub fn corrupt_archive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptArchive(message.into()))
    }

    /// Creates a corrupt archive error for an expected entry that is absent.
    #[must_use]
    pub fn missing_entry(entry: &str) -> Self {
        Self::corrupt_archive(format!("expected entry {entry} not found"))
    }

    /// Creates an empty word list error.
    #[must_use]
    pub fn empty_word_list(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyWordList { name: name.into() })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates an I/O error tied to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The WordNet archive could not be read locally or downloaded.
    #[error("WordNet database unavailable from {url}: {reason}")]
    SourceUnavailable {
        /// The download URL that was tried.
        url: String,
        /// What went wrong.
        reason: String,
    },

    /// The archive could not be decompressed, walked, or lacks an index file.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// Filtering left nothing to write.
    #[error("{name} word list is empty after filtering")]
    EmptyWordList {
        /// Which list ("adjectives" or "nouns").
        name: String,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Result type alias for dictionary builder operations.
pub type Result<T> = std::result::Result<T, Error>;

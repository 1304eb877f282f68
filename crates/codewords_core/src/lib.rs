//! Word lists and the adjective-noun codeword generator.
//!
//! This crate provides:
//! - [`Generator`] - Draws `<adjective>-<noun>` codewords from a seeded stream
//! - [`WordList`] - Immutable, cheaply shared lists of lowercase words
//! - [`Codeword`] - The generated value, parseable from its string form
//! - [`Error`] - Error types for misconfiguration and bad input
//!
//! The default word lists are compiled in; constructing a generator does no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codeword;
pub mod error;
pub mod generator;
pub mod wordlist;
pub mod words;

pub use codeword::Codeword;
pub use error::{Error, ErrorKind, Result};
pub use generator::Generator;
pub use wordlist::{MAX_WORD_LEN, WordList};

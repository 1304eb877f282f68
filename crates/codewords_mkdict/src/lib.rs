//! Builds the codeword word lists from the Princeton WordNet database.
//!
//! This is a maintainer tool, not part of the runtime library. It runs once
//! per refresh of the word lists:
//!
//! ```text
//! wn3.1.dict.tar.gz (cache dir, else HTTP)
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARCHIVE         │  → dict/index.adj, dict/index.noun
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEXICON         │  → "happy a 1 3 ..." → happy (adjective)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FILTER          │  → drop ice_cream, cat, 4wheel, ...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EMIT            │  → adjectives.rs, nouns.rs
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build configuration and defaults
//! - [`source`] - Local-first acquisition of the tarball
//! - [`archive`] - Gzip/tar extraction of the index files
//! - [`lexicon`] - Index line parsing
//! - [`filter`] - Candidate filtering
//! - [`emit`] - Rust source generation
//! - [`dictionary`] - The pipeline tying them together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod archive;
pub mod config;
pub mod dictionary;
pub mod emit;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod source;

pub use config::BuildConfig;
pub use dictionary::{Dictionary, run};
pub use error::{Error, ErrorKind, Result};
pub use filter::WordFilter;
pub use lexicon::{LexiconEntry, PartOfSpeech};
pub use source::{Fetch, HttpFetcher};

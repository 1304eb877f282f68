//! Codewords - human-memorable `<adjective>-<noun>` tokens
//!
//! This crate re-exports both layers of the Codewords system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Build time: codewords_mkdict — WordNet archive → filtered word lists (Rust source)
//! Runtime:    codewords_core   — Embedded word lists, Generator, Codeword
//! ```

pub use codewords_core as generator;
pub use codewords_mkdict as mkdict;

//! Embedded word tables.
//!
//! `adjectives.rs` and `nouns.rs` use the layout the `mkdict` tool in the
//! `codewords_mkdict` crate emits. The committed copies are a curated subset;
//! running `mkdict` replaces them with the full WordNet lists.

#[allow(missing_docs)]
mod adjectives;
#[allow(missing_docs)]
mod nouns;

pub use adjectives::ADJECTIVES;
pub use nouns::NOUNS;

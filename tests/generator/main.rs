//! Integration tests for the codewords_core crate.
//!
//! Tests for the runtime surface:
//! - Codeword shape and list membership
//! - Distribution sanity over many draws
//! - Misconfiguration handling
//! - Sharing generators across threads

mod distribution_tests;
mod generation_tests;
mod threading_tests;

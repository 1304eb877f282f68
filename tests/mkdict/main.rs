//! Integration tests for the codewords_mkdict crate.
//!
//! Tests for the dictionary build pipeline:
//! - Local-first acquisition
//! - Index parsing and filtering end to end
//! - Deterministic output
//! - Agreement between the committed tables and the emitter

mod committed_tables_tests;
mod pipeline_tests;
mod support;

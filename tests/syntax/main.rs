//! Integration tests for the epilog_syntax crate.
//!
//! Tests for the Java-subset front and back end:
//! - Tokenization
//! - Declaration parsing
//! - Writing mutated units back to text

mod lexer_tests;
mod writer_tests;

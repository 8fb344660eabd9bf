//! Lexer, declaration parser, and writer for the Java subset Epilog instruments.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of Java source, with comments kept as tokens
//! - [`Parser`] - Tolerant declaration-level parsing into the Epilog model
//! - [`writer`] - Serialization of a (possibly mutated) unit back to text
//!
//! Parsing is purely syntactic: no names are resolved and nothing is type
//! checked. Constructs the pass does not reason about are carried through as
//! verbatim text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;
pub mod writer;

pub use lexer::Lexer;
pub use parser::{Parser, parse_unit};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use writer::write_unit;

//! Directory discovery, instrumentation driver, and CLI for Epilog.
//!
//! This crate provides:
//! - [`discover_sources`] - Deterministic `.java` discovery under a root
//! - [`Driver`] - The load → instrument → write pipeline
//!
//! The driver owns the whole run: it parses sources (skipping files that
//! fail to parse), runs the pass once over the batch, and mirrors the
//! instrumented units into the output directory.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod discover;
pub mod driver;

pub use discover::discover_sources;
pub use driver::{Driver, RunReport, instrument_sources};

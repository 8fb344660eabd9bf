//! Epilog - Annotation-driven endpoint instrumentation
//!
//! This crate re-exports all layers of the Epilog system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: epilog_runtime — directory discovery, driver, CLI
//! Layer 2: epilog_pass    — classifier, route inference, injector, stats
//! Layer 1: epilog_syntax  — lexer, declaration parser, writer
//! Layer 0: epilog_model   — declaration tree, annotation values, errors
//! ```

pub use epilog_model as model;
pub use epilog_pass as pass;
pub use epilog_runtime as runtime;
pub use epilog_syntax as syntax;

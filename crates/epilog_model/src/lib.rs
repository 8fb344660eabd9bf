//! Declaration tree, annotation values, and route metadata for Epilog.
//!
//! This crate provides:
//! - [`CompilationUnit`], [`TypeDeclaration`], [`MethodDeclaration`] - The declaration tree
//! - [`Annotation`] and [`ExprNode`] - Annotation arguments as a closed value variant
//! - [`RouteMetadata`], [`Verb`], [`OpType`] - Derived routing metadata
//! - [`Error`] - Error types with source positions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod error;
pub mod expr;
pub mod route;

pub use declaration::{
    Annotation, Body, CompilationUnit, Member, MethodDeclaration, Statement, TypeDeclaration,
};
pub use error::{Error, ErrorKind, Result};
pub use expr::ExprNode;
pub use route::{OpType, RouteMetadata, Verb};

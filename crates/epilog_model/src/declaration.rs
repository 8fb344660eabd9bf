//! The declaration tree the instrumentation pass operates on.
//!
//! A parsed source file becomes a [`CompilationUnit`] containing
//! [`TypeDeclaration`]s, which in turn contain methods and other members.
//! The tree is deliberately shallow: headers, fields, constructors, and
//! nested types are held as verbatim text, because the pass only reasons
//! about annotations and method bodies. No name or type resolution is ever
//! performed over this tree.

use std::path::PathBuf;

use crate::expr::ExprNode;

// =============================================================================
// Compilation Unit
// =============================================================================

/// One parsed source file.
///
/// Lifecycle: load, possibly mutate in place, write once.
#[derive(Clone, Debug, PartialEq)]
pub struct CompilationUnit {
    /// Path the unit was loaded from.
    pub path: PathBuf,
    /// Package declaration and imports, verbatim.
    pub preamble: String,
    /// Top-level type declarations, in declared order.
    pub types: Vec<TypeDeclaration>,
}

impl CompilationUnit {
    /// Creates a new compilation unit.
    #[must_use]
    pub fn new(path: PathBuf, preamble: String, types: Vec<TypeDeclaration>) -> Self {
        Self {
            path,
            preamble,
            types,
        }
    }
}

// =============================================================================
// Type Declaration
// =============================================================================

/// A top-level type declaration (class, interface, enum, or record).
///
/// The pass mutates types only by appending annotations; it never creates
/// or deletes them.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDeclaration {
    /// Simple name, e.g. `ProductController`.
    pub name: String,
    /// Qualified name, e.g. `com.example.ProductController`.
    pub qualified_name: String,
    /// Declaration header (modifiers through the extends/implements list),
    /// verbatim, without annotations or the opening brace.
    pub header: String,
    /// Annotations on the type, in declared order.
    pub annotations: Vec<Annotation>,
    /// Members in declared order.
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    /// Iterates over the method members in declared order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            Member::Raw(_) => None,
        })
    }

    /// Returns true if any annotation on this type has the given kind.
    #[must_use]
    pub fn has_annotation_kind(&self, kind: &str) -> bool {
        self.annotations.iter().any(|a| a.kind == kind)
    }
}

/// A member of a type declaration.
///
/// Only methods are modeled; everything else (fields, constructors,
/// initializers, nested types) is preserved as verbatim text and never
/// touched by the pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    /// A method declaration.
    Method(MethodDeclaration),
    /// Any other member, verbatim.
    Raw(String),
}

// =============================================================================
// Method Declaration
// =============================================================================

/// A method declaration.
///
/// The pass mutates methods only by prepending a statement to the body.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodDeclaration {
    /// Simple name, e.g. `getProduct`.
    pub name: String,
    /// Declaration header (modifiers through the throws clause), verbatim,
    /// without annotations or the body.
    pub header: String,
    /// Annotations on the method, in declared order.
    pub annotations: Vec<Annotation>,
    /// The body, absent for abstract and interface methods.
    pub body: Option<Body>,
}

impl MethodDeclaration {
    /// Returns true if any annotation on this method has the given kind.
    #[must_use]
    pub fn has_annotation_kind(&self, kind: &str) -> bool {
        self.annotations.iter().any(|a| a.kind == kind)
    }
}

/// A method body: an ordered sequence of statements.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Body {
    /// Statements in declared order.
    pub statements: Vec<Statement>,
}

impl Body {
    /// Creates a body from statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A single statement, held as its printed source form.
///
/// Statement granularity is boundary-level only: the text of a statement
/// includes any comments that immediately precede it, which is what keeps
/// instrumentation markers attached across write/re-parse cycles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    /// Printed form of the statement.
    pub text: String,
}

impl Statement {
    /// Creates a statement from source text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns true if the printed form contains the given token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.text.contains(token)
    }
}

// =============================================================================
// Annotation
// =============================================================================

/// An annotation attached to a type or method declaration.
///
/// The `kind` is the normalized lower-case simple name of the annotation
/// type. It may be empty when the parser could not recover a name; the
/// classifier then falls back to scanning `text`.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    /// Normalized lower-case simple name, e.g. `getmapping`.
    pub kind: String,
    /// Printed source form, e.g. `@GetMapping("/{id}")`.
    pub text: String,
    /// Named arguments in declared order. A single unnamed argument is
    /// stored under the name `value`.
    pub args: Vec<(String, ExprNode)>,
}

impl Annotation {
    /// Creates an annotation with no arguments.
    #[must_use]
    pub fn marker(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            args: Vec::new(),
        }
    }

    /// Looks up an argument by name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&ExprNode> {
        self.args
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, expr)| expr)
    }
}

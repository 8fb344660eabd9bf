//! Annotation argument values as a closed variant.
//!
//! Annotation arguments in real source range from plain string literals to
//! arbitrarily complex expressions (concatenations, constant references).
//! Without semantic analysis only three shapes are recoverable, so the value
//! model is a closed sum type: exhaustive matching is what gives the value
//! extractor its fallback-ordering guarantee.

use std::fmt;

/// An annotation argument expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprNode {
    /// A string literal like `"products"`. Holds the unescaped value.
    StringLit(String),
    /// An array literal like `{"products", "/v1"}`.
    ArrayLit(Vec<ExprNode>),
    /// Any other expression, held as its printed source form.
    Other(String),
}

impl ExprNode {
    /// Returns the string value if this is a string literal.
    #[must_use]
    pub fn as_string_lit(&self) -> Option<&str> {
        match self {
            Self::StringLit(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an array literal.
    #[must_use]
    pub fn as_array_lit(&self) -> Option<&[ExprNode]> {
        match self {
            Self::ArrayLit(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns true if this expression is an opaque printed form.
    #[must_use]
    pub const fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ExprNode {
    /// Prints the expression in Java-ish source form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StringLit(s) => write!(f, "\"{s}\""),
            Self::ArrayLit(elements) => {
                write!(f, "{{")?;
                for (i, e) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, "}}")
            }
            Self::Other(text) => write!(f, "{text}"),
        }
    }
}

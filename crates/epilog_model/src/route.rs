//! Derived routing metadata.
//!
//! [`RouteMetadata`] is computed fresh for each eligible method and never
//! cached across runs. Verbs and operation types print in their wire-level
//! upper-case form, which is what the injected diagnostic context carries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The HTTP verb a route-mapping annotation binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verb {
    /// `getmapping`
    Get,
    /// `postmapping`
    Post,
    /// `putmapping`
    Put,
    /// `deletemapping`
    Delete,
    /// `patchmapping`
    Patch,
    /// `requestmapping` or any other route mapping without a fixed verb.
    Request,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Request => "REQUEST",
        };
        write!(f, "{s}")
    }
}

/// Coarse read/write classification of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpType {
    /// Read-only operation.
    Read,
    /// Mutating operation.
    Write,
    /// Costly query, flagged by path regardless of verb.
    SearchExpensive,
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::SearchExpensive => "SEARCH_EXPENSIVE",
        };
        write!(f, "{s}")
    }
}

/// Routing metadata derived for one eligible method.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteMetadata {
    /// HTTP verb from the method's route-mapping annotation.
    pub verb: Verb,
    /// Normalized absolute path: empty, or starts with exactly one `/`,
    /// with no doubled separators.
    pub path: String,
    /// Lower-case first path segment, or `root` for the empty path.
    pub resource: String,
    /// Read/write classification, with the expensive-search override applied.
    pub op_type: OpType,
}

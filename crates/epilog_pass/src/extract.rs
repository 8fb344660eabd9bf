//! Literal string recovery from annotation argument expressions.
//!
//! Annotation arguments in real source are frequently non-trivial
//! expressions (concatenations, constant references) that cannot be
//! evaluated without full semantic analysis. The layered fallback here is a
//! deliberate, documented approximation: literal first, first array element
//! second, and finally a textual scan of the printed form.

use std::sync::LazyLock;

use epilog_model::ExprNode;
use regex::Regex;

/// Captures the first double-quoted substring of a printed expression.
pub(crate) static FIRST_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("first quoted regex"));

/// Recovers a literal string from an annotation argument expression.
///
/// Rules in priority order: a string literal yields its value; a non-empty
/// array literal recurses into its first element; any other expression is
/// scanned for the first double-quoted substring of its printed form.
#[must_use]
pub fn extract(expr: &ExprNode) -> Option<String> {
    match expr {
        ExprNode::StringLit(value) => Some(value.clone()),
        ExprNode::ArrayLit(elements) => elements.first().and_then(extract),
        ExprNode::Other(text) => FIRST_QUOTED
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
    }
}

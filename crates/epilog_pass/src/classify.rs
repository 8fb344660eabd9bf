//! Annotation classification against a closed vocabulary.
//!
//! Classification is purely syntactic and based on the simple (unqualified,
//! lower-cased) annotation name. Resolving annotation types against a
//! classpath would change failure behavior on malformed source, so it is
//! never attempted; when the parser recovered no name at all, a regex scan
//! of the annotation's printed form recovers the token after `@`.

use std::sync::LazyLock;

use epilog_model::Annotation;
use regex::Regex;

/// Annotation kinds that mark a type as controller-like.
pub const CONTROLLER_KINDS: [&str; 2] = ["controller", "restcontroller"];

/// Annotation kinds that bind a method (or type) to a route.
pub const MAPPING_KINDS: [&str; 6] = [
    "getmapping",
    "postmapping",
    "putmapping",
    "deletemapping",
    "patchmapping",
    "requestmapping",
];

/// Captures the annotation name following `@` in printed form.
static ANNOTATION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\s*([A-Za-z0-9_$.]+)").expect("annotation name regex"));

/// How an annotation relates to the routing vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnotationClass {
    /// Marks the declaring type as a controller.
    ControllerMarker,
    /// Binds a route (verb and path fragment).
    RouteMapping,
    /// Anything outside the vocabulary.
    Other,
}

/// Classifies an annotation.
///
/// Unrecognized kinds classify as [`AnnotationClass::Other`]; this never
/// fails.
#[must_use]
pub fn classify(annotation: &Annotation) -> AnnotationClass {
    let kind = simple_kind(annotation);
    if CONTROLLER_KINDS.contains(&kind.as_str()) {
        AnnotationClass::ControllerMarker
    } else if MAPPING_KINDS.contains(&kind.as_str()) {
        AnnotationClass::RouteMapping
    } else {
        AnnotationClass::Other
    }
}

/// Returns the normalized simple name of an annotation.
///
/// Prefers the parsed kind; falls back to scanning the printed form for the
/// token after `@` and taking its last `.`-segment. Returns an empty string
/// when nothing is recoverable.
#[must_use]
pub fn simple_kind(annotation: &Annotation) -> String {
    if !annotation.kind.is_empty() {
        return annotation.kind.to_lowercase();
    }
    ANNOTATION_NAME
        .captures(&annotation.text)
        .and_then(|c| c.get(1))
        .map(|m| last_segment(m.as_str()).to_lowercase())
        .unwrap_or_default()
}

/// Returns true if the annotation is a route mapping.
#[must_use]
pub fn is_route_mapping(annotation: &Annotation) -> bool {
    classify(annotation) == AnnotationClass::RouteMapping
}

/// Returns true if the annotation is a controller marker.
#[must_use]
pub fn is_controller_marker(annotation: &Annotation) -> bool {
    classify(annotation) == AnnotationClass::ControllerMarker
}

/// Returns the text after the last `.`, or the whole name.
fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

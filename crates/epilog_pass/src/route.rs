//! Route metadata inference.
//!
//! Composes the type-level and method-level path fragments into one
//! normalized absolute path, maps mapping kinds to verbs, and derives the
//! resource name and read/write classification — with the expensive-search
//! override taking precedence over the verb.

use epilog_model::{Annotation, MethodDeclaration, OpType, RouteMetadata, Verb};

use crate::classify::{is_route_mapping, simple_kind};
use crate::extract::{FIRST_QUOTED, extract};

/// Path substrings that flag a costly query regardless of verb.
pub const EXPENSIVE_MARKERS: [&str; 2] = ["expensive", "search"];

/// Derives the full route metadata for a mapped method.
#[must_use]
pub fn infer(class_annotations: &[Annotation], method: &MethodDeclaration) -> RouteMetadata {
    let verb = infer_verb(&method.annotations);
    let path = infer_path(class_annotations, &method.annotations);
    let resource = infer_resource(&path);
    let op_type = infer_op_type(verb, &path);
    RouteMetadata {
        verb,
        path,
        resource,
        op_type,
    }
}

/// Maps the first route-mapping annotation to its verb.
///
/// Callers guard on eligibility; absent any mapping this conservatively
/// answers [`Verb::Request`].
#[must_use]
pub fn infer_verb(annotations: &[Annotation]) -> Verb {
    annotations
        .iter()
        .filter(|a| is_route_mapping(a))
        .map(|a| match simple_kind(a).as_str() {
            "getmapping" => Verb::Get,
            "postmapping" => Verb::Post,
            "putmapping" => Verb::Put,
            "deletemapping" => Verb::Delete,
            "patchmapping" => Verb::Patch,
            _ => Verb::Request,
        })
        .next()
        .unwrap_or(Verb::Request)
}

/// Composes class-level and method-level path fragments.
///
/// Missing fragments degrade to empty strings; the joined path is collapsed
/// to single separators, and a bare `/` normalizes to the empty string so
/// the root has no path segment.
#[must_use]
pub fn infer_path(
    class_annotations: &[Annotation],
    method_annotations: &[Annotation],
) -> String {
    let class_fragment = path_fragment(class_annotations).unwrap_or_default();
    let method_fragment = path_fragment(method_annotations).unwrap_or_default();
    let path = collapse_slashes(&format!("/{class_fragment}/{method_fragment}"));
    if path == "/" { String::new() } else { path }
}

/// Extracts a path fragment from one annotation scope.
///
/// Scans the scope's annotations in order, skipping non-mappings; reads the
/// `value` then `path` argument through the extractor, then falls back to
/// the first quoted substring of the whole annotation text. The first
/// success wins, trimmed of surrounding slashes.
fn path_fragment(annotations: &[Annotation]) -> Option<String> {
    for annotation in annotations {
        if !is_route_mapping(annotation) {
            continue;
        }

        let expr = annotation.arg("value").or_else(|| annotation.arg("path"));
        if let Some(value) = expr.and_then(extract) {
            return Some(trim_slashes(&value));
        }

        if let Some(captures) = FIRST_QUOTED.captures(&annotation.text) {
            if let Some(m) = captures.get(1) {
                return Some(trim_slashes(m.as_str()));
            }
        }
    }
    None
}

/// Derives the resource name: the lower-cased first path segment, or
/// `root` for a blank path.
#[must_use]
pub fn infer_resource(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "root".to_string();
    }
    let rest = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let segment = match rest.find('/') {
        Some(i) => &rest[..i],
        None => rest,
    };
    if segment.is_empty() {
        "root".to_string()
    } else {
        segment.to_lowercase()
    }
}

/// Classifies the operation from its verb, with the path override.
///
/// GET reads; POST, PUT, DELETE, and PATCH write; anything else defaults to
/// READ. A path containing an expensive-search marker forces
/// [`OpType::SearchExpensive`] regardless of verb — a product-level signal
/// for costly queries.
#[must_use]
pub fn infer_op_type(verb: Verb, path: &str) -> OpType {
    if is_expensive_search(path) {
        return OpType::SearchExpensive;
    }
    match verb {
        Verb::Post | Verb::Put | Verb::Delete | Verb::Patch => OpType::Write,
        Verb::Get | Verb::Request => OpType::Read,
    }
}

/// Returns true if the path carries an expensive-search marker.
#[must_use]
pub fn is_expensive_search(path: &str) -> bool {
    let p = path.to_lowercase();
    EXPENSIVE_MARKERS.iter().any(|marker| p.contains(marker))
}

/// Strips leading and trailing slashes from a fragment.
fn trim_slashes(fragment: &str) -> String {
    fragment.trim_matches('/').to_string()
}

/// Collapses every run of `/` into a single separator.
fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut last_was_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !last_was_slash {
                out.push(c);
            }
            last_was_slash = true;
        } else {
            out.push(c);
            last_was_slash = false;
        }
    }
    out
}

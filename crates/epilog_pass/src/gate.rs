//! Eligibility and idempotency gating.
//!
//! Every method reaches exactly one terminal outcome. Eligibility is
//! deliberately wider than "class carries a controller marker": many real
//! controllers only carry mapping annotations, so a class-level mapping or
//! a method-level mapping qualifies a method on its own, while unrelated
//! types are excluded entirely.

use epilog_model::{Annotation, MethodDeclaration};

use crate::classify::{is_controller_marker, is_route_mapping};
use crate::inject::MARKER;

/// Terminal eligibility outcome for one method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The enclosing type is absent or entirely outside the vocabulary.
    Ineligible,
    /// The type qualifies but the method carries no route mapping.
    Unmapped,
    /// The method carries a route mapping; proceed to injection.
    Mapped,
}

/// Injection-time check for a mapped method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InjectCheck {
    /// The method has no body to instrument.
    NoBody,
    /// The body already contains the instrumentation marker.
    AlreadyInstrumented,
    /// The body is ready for injection.
    Ready,
}

/// Evaluates the three-tier eligibility rule for one method.
///
/// `owner_annotations` is `None` when the method has no enclosing type,
/// which is terminally ineligible.
#[must_use]
pub fn evaluate(
    owner_annotations: Option<&[Annotation]>,
    method: &MethodDeclaration,
) -> Outcome {
    let Some(class_annotations) = owner_annotations else {
        return Outcome::Ineligible;
    };

    let class_has_marker = class_annotations.iter().any(is_controller_marker);
    let class_has_mapping = class_annotations.iter().any(is_route_mapping);
    let method_has_mapping = method.annotations.iter().any(is_route_mapping);

    if !(class_has_marker || class_has_mapping || method_has_mapping) {
        return Outcome::Ineligible;
    }
    if !method_has_mapping {
        return Outcome::Unmapped;
    }
    Outcome::Mapped
}

/// Checks whether a mapped method's body can be injected.
#[must_use]
pub fn inject_check(method: &MethodDeclaration) -> InjectCheck {
    let Some(body) = &method.body else {
        return InjectCheck::NoBody;
    };
    if body.statements.iter().any(|s| s.contains(MARKER)) {
        return InjectCheck::AlreadyInstrumented;
    }
    InjectCheck::Ready
}

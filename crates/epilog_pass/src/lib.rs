//! Annotation classification, route inference, and instrumentation pass for Epilog.
//!
//! This crate provides:
//! - [`classify`] - Closed-vocabulary annotation classification
//! - [`extract`] - Literal recovery from annotation argument expressions
//! - [`route`] - Verb, path, resource, and operation-type inference
//! - [`gate`] - Eligibility and idempotency gating
//! - [`inject`] - Body instrumentation and the type-level logging annotation
//! - [`stats`] - Per-run counters and the summary report
//! - [`run_pass`] - The traversal tying the pieces together
//!
//! The pass is a single-threaded, deterministic, single traversal over an
//! already-loaded declaration tree. It never fails: every irregularity in
//! the source degrades to a counted skip or an empty path fragment.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod extract;
pub mod gate;
pub mod inject;
pub mod route;
pub mod stats;

use epilog_model::{CompilationUnit, Member, TypeDeclaration};
use tracing::{debug, info};

pub use classify::{AnnotationClass, classify};
pub use extract::extract;
pub use gate::{InjectCheck, Outcome};
pub use inject::MARKER;
pub use stats::RunStats;

/// Runs the instrumentation pass over a batch of compilation units.
///
/// Units, types, and methods are visited strictly in declared order. The
/// tree is mutated in place; the returned stats reflect one terminal
/// classification per method. Re-running over an already-instrumented tree
/// is observably a no-op apart from the `skipped_already` counter.
pub fn run_pass(units: &mut [CompilationUnit]) -> RunStats {
    let mut stats = RunStats::new();
    for unit in units {
        for ty in &mut unit.types {
            process_type(ty, &mut stats);
        }
    }
    stats
}

/// Processes every method of one type.
fn process_type(ty: &mut TypeDeclaration, stats: &mut RunStats) {
    // Class annotations are snapshotted once: route inference needs them
    // while the member list is being mutably traversed, and injection may
    // append to the live list afterwards.
    let class_annotations = ty.annotations.clone();
    let qualified_name = ty.qualified_name.clone();
    let mut needs_logging_annotation = false;

    for member in &mut ty.members {
        let Member::Method(method) = member else {
            continue;
        };
        stats.seen += 1;

        match gate::evaluate(Some(&class_annotations), method) {
            Outcome::Ineligible => {
                debug!(class = %qualified_name, method = %method.name, "skip: not eligible");
                stats.skipped_ineligible += 1;
                continue;
            }
            Outcome::Unmapped => {
                debug!(class = %qualified_name, method = %method.name, "skip: no method-level mapping");
                stats.eligible += 1;
                stats.skipped_no_mapping += 1;
                continue;
            }
            Outcome::Mapped => {
                stats.eligible += 1;
                stats.mapped += 1;
            }
        }

        // The original adds the logging annotation for every processed
        // (mapped) method, before the body checks.
        needs_logging_annotation = true;

        match gate::inject_check(method) {
            InjectCheck::NoBody => {
                debug!(class = %qualified_name, method = %method.name, "skip: no body");
                stats.skipped_no_body += 1;
            }
            InjectCheck::AlreadyInstrumented => {
                debug!(class = %qualified_name, method = %method.name, "skip: already instrumented");
                stats.skipped_already += 1;
            }
            InjectCheck::Ready => {
                let metadata = route::infer(&class_annotations, method);
                inject::inject(method, &metadata);
                stats.injected += 1;
                info!(
                    class = %qualified_name,
                    method = %method.name,
                    verb = %metadata.verb,
                    path = %metadata.path,
                    resource = %metadata.resource,
                    op_type = %metadata.op_type,
                    "injected"
                );
            }
        }
    }

    if needs_logging_annotation && inject::ensure_logging_annotation(ty) {
        debug!(class = %qualified_name, "added logging annotation");
    }
}

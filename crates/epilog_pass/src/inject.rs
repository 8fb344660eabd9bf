//! Body instrumentation and the type-level logging annotation.
//!
//! Injection prepends one marked statement block that seeds the diagnostic
//! context (operation type, resource, path) and emits a structured "begin"
//! record. All mutation is confined to the in-memory tree; nothing here
//! writes text.

use epilog_model::{Annotation, MethodDeclaration, RouteMetadata, Statement, TypeDeclaration};

/// Opaque token embedded in injected code, used solely to detect prior
/// instrumentation.
pub const MARKER: &str = "__instrumented_api_call__";

/// Kind of the cross-cutting logging annotation.
pub const LOGGING_ANNOTATION_KIND: &str = "slf4j";

/// Printed form of the cross-cutting logging annotation.
pub const LOGGING_ANNOTATION_TEXT: &str = "@lombok.extern.slf4j.Slf4j";

/// Prepends the instrumentation block to a method body.
///
/// Callers guard with [`crate::gate::inject_check`]; a method without a
/// body is left untouched. Every existing statement is preserved after the
/// injected block, unchanged.
pub fn inject(method: &mut MethodDeclaration, metadata: &RouteMetadata) {
    let Some(body) = method.body.as_mut() else {
        return;
    };
    body.statements.insert(0, snippet(metadata));
}

/// Builds the marked statement block for the given metadata.
#[must_use]
pub fn snippet(metadata: &RouteMetadata) -> Statement {
    Statement::new(format!(
        "// {MARKER}\n\
         org.slf4j.MDC.put(\"opType\", \"{op_type}\");\n\
         org.slf4j.MDC.put(\"resource\", \"{resource}\");\n\
         org.slf4j.MDC.put(\"path\", \"{path}\");\n\
         log.info(\"api_call begin\");",
        op_type = metadata.op_type,
        resource = metadata.resource,
        path = metadata.path,
    ))
}

/// Ensures the declaring type carries the logging annotation.
///
/// Idempotent at the type level: checked by kind before adding, and meant
/// to be called once per type rather than once per method.
pub fn ensure_logging_annotation(ty: &mut TypeDeclaration) -> bool {
    if ty.has_annotation_kind(LOGGING_ANNOTATION_KIND) {
        return false;
    }
    ty.annotations.push(Annotation::marker(
        LOGGING_ANNOTATION_KIND,
        LOGGING_ANNOTATION_TEXT,
    ));
    true
}

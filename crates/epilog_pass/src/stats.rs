//! Run statistics.
//!
//! One `RunStats` value is created per invocation and threaded explicitly
//! through the traversal — never ambient state, so concurrent passes over
//! different trees (tests included) cannot interfere. Each counter is
//! incremented exactly once per method, at that method's terminal
//! classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters for one instrumentation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStats {
    /// Methods visited.
    pub seen: usize,
    /// Methods whose type or mapping annotations pass the eligibility rule.
    pub eligible: usize,
    /// Eligible methods carrying a method-level route mapping.
    pub mapped: usize,
    /// Methods whose body received the instrumentation block.
    pub injected: usize,
    /// Mapped methods skipped for having no body.
    pub skipped_no_body: usize,
    /// Mapped methods skipped as already instrumented.
    pub skipped_already: usize,
    /// Methods skipped as ineligible.
    pub skipped_ineligible: usize,
    /// Eligible methods skipped for lacking a method-level mapping.
    pub skipped_no_mapping: usize,
}

impl RunStats {
    /// Creates a zeroed stats value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the end-of-run summary.
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "----- [PROC SUMMARY] -----\n\
             seenMethods      = {}\n\
             inCtrlOrMapped   = {}\n\
             hasMapping       = {}\n\
             injected         = {}\n\
             skippedNoBody    = {}\n\
             skippedAlready   = {}\n\
             skippedNotEligible = {}\n\
             skippedNoMapping = {}\n\
             --------------------------",
            self.seen,
            self.eligible,
            self.mapped,
            self.injected,
            self.skipped_no_body,
            self.skipped_already,
            self.skipped_ineligible,
            self.skipped_no_mapping,
        )
    }

    /// Verifies counter conservation.
    ///
    /// Every method reaches exactly one terminal classification, so
    /// `seen == mapped + ineligible + no-mapping` and
    /// `mapped == injected + no-body + already`.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.seen == self.mapped + self.skipped_ineligible + self.skipped_no_mapping
            && self.eligible == self.mapped + self.skipped_no_mapping
            && self.mapped == self.injected + self.skipped_no_body + self.skipped_already
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report())
    }
}

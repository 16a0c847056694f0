//! Default diagnostics sinks
//!
//! Null implementation for embedders that report failures themselves, and
//! a tracing-backed sink that renders the structured payload as a warning
//! event.

use itertools::Itertools;
use tracing::warn;
use vessel_domain::{DiagnosticsSink, FailureKind, ResolutionFailure};

/// Drops every failure payload.
pub struct NullDiagnostics;

impl DiagnosticsSink for NullDiagnostics {
    fn resolution_failed(&self, _failure: &ResolutionFailure) {}
}

/// Reports failures as structured `tracing` warnings.
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn resolution_failed(&self, failure: &ResolutionFailure) {
        let qualifiers = failure.qualifiers.iter().map(ToString::to_string).join(", ");
        match failure.kind {
            FailureKind::Unsatisfied => warn!(
                contract = %failure.contract,
                qualifiers = %qualifiers,
                "no component satisfies the request"
            ),
            FailureKind::Ambiguous => warn!(
                contract = %failure.contract,
                qualifiers = %qualifiers,
                candidates = ?failure.candidates,
                "request is ambiguous after both tie-break passes"
            ),
        }
    }
}

//! Diagnostics-sink port

use crate::resolution::ResolutionFailure;

/// Receives structured resolution-failure payloads for reporting.
///
/// The container reports every unsatisfied or ambiguous required
/// resolution here before surfacing the error to the caller.
pub trait DiagnosticsSink: Send + Sync {
    /// A required resolution failed.
    fn resolution_failed(&self, failure: &ResolutionFailure);
}

//! Injection requests and resolution failure payloads

use std::fmt;

use crate::qualifier::Qualifier;
use crate::scope::PartitionId;
use crate::types::TypeDescriptor;

/// A request for a single contract, optionally narrowed by qualifiers and
/// a deployment partition.
///
/// The partition is threaded explicitly through resolution; there is no
/// ambient "current injection point" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionRequest {
    /// Requested contract
    pub contract: TypeDescriptor,
    /// Requested qualifier tags; empty means the implicit default tag
    pub qualifiers: Vec<Qualifier>,
    /// Deployment unit restricting alternative visibility
    pub partition: Option<PartitionId>,
}

impl InjectionRequest {
    /// Request `contract` with no explicit qualifier.
    pub fn of(contract: TypeDescriptor) -> Self {
        Self {
            contract,
            qualifiers: Vec::new(),
            partition: None,
        }
    }

    /// Narrow by a qualifier tag.
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    /// Scope alternative visibility to a deployment partition.
    pub fn in_partition(mut self, partition: impl Into<PartitionId>) -> Self {
        self.partition = Some(partition.into());
        self
    }
}

impl fmt::Display for InjectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.contract)?;
        for q in &self.qualifiers {
            write!(f, " {q}")?;
        }
        if let Some(partition) = &self.partition {
            write!(f, " [partition {partition}]")?;
        }
        Ok(())
    }
}

/// How a resolution attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Zero survivors after filtering and tie-breaks
    Unsatisfied,
    /// More than one survivor after both tie-breaks
    Ambiguous,
}

/// Structured failure payload handed to the diagnostics sink.
#[derive(Debug, Clone)]
pub struct ResolutionFailure {
    /// Requested contract
    pub contract: TypeDescriptor,
    /// Requested qualifiers after normalization
    pub qualifiers: Vec<Qualifier>,
    /// Failure classification
    pub kind: FailureKind,
    /// Rendered surviving candidates (empty for unsatisfied failures)
    pub candidates: Vec<String>,
}

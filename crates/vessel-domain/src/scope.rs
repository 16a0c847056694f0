//! Scope tags and deployment partitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which context governs a component's lifecycle.
///
/// A normal scope means client access goes through a stable proxy; a
/// pseudo scope hands out instances directly from the active context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeTag {
    name: String,
    normal: bool,
}

impl ScopeTag {
    /// Free-form scope tag.
    pub fn new(name: impl Into<String>, normal: bool) -> Self {
        Self {
            name: name.into(),
            normal,
        }
    }

    /// The dependent pseudo scope: a fresh instance per injection.
    pub fn dependent() -> Self {
        Self::new("dependent", false)
    }

    /// The singleton normal scope: one proxied instance per container.
    pub fn singleton() -> Self {
        Self::new("singleton", true)
    }

    /// Scope name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether client access goes through a stable proxy.
    pub fn is_normal(&self) -> bool {
        self.normal
    }
}

impl fmt::Display for ScopeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

/// Deployment-unit identifier restricting alternative visibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartitionId(String);

impl PartitionId {
    pub fn new(id: impl Into<String>) -> Self {
        PartitionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PartitionId {
    fn from(id: &str) -> Self {
        PartitionId::new(id)
    }
}

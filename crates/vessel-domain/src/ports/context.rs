//! Per-scope context port

use std::any::Any;
use std::sync::Arc;

use crate::component::Component;
use crate::error::Result;
use crate::scope::ScopeTag;

/// A client-visible instance or proxy handed out by the container.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// A per-scope instance store supplied externally per scope kind.
///
/// Activity is evaluated per calling thread. The create-or-reuse contract
/// of `get_or_create` is the implementation's own; it may block, which is
/// outside the core's no-blocking guarantee.
pub trait Context: Send + Sync {
    /// The scope this context governs.
    fn scope(&self) -> &ScopeTag;

    /// Whether this context is active on the calling thread.
    fn is_active(&self) -> bool;

    /// Obtain the instance for `component`, creating it if this context
    /// decides to.
    fn get_or_create(&self, component: &Arc<Component>) -> Result<Instance>;
}

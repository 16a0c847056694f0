//! Proxy-factory port

use std::sync::Arc;

use crate::component::Component;
use crate::error::Result;
use crate::ports::context::Instance;

/// Produces client-visible proxies for normal-scoped components.
///
/// The returned proxy forwards each invocation to a freshly resolved
/// contextual instance; how it is generated (codegen, hand-written stubs)
/// is outside the core. The proxy vault guarantees this is called at most
/// once per component.
pub trait ProxyFactory: Send + Sync {
    /// Create the client proxy for `component`.
    fn create_client_proxy(&self, component: &Arc<Component>) -> Result<Instance>;
}

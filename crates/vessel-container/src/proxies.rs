//! Scoped instance / proxy vault
//!
//! Client proxies for normal-scoped components, keyed by component
//! identity. Exactly one proxy object exists per component for the
//! registry's lifetime: creation is an atomic compute-if-absent under the
//! map's entry guard, never check-then-act, so concurrent first-time
//! requests observe the same object.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use vessel_domain::{Component, ComponentId, Instance, ProxyFactory, Result};

/// Get-or-create cache of client-visible proxies.
pub struct ProxyVault {
    factory: Arc<dyn ProxyFactory>,
    proxies: DashMap<ComponentId, Instance>,
}

impl ProxyVault {
    pub fn new(factory: Arc<dyn ProxyFactory>) -> Self {
        Self {
            factory,
            proxies: DashMap::new(),
        }
    }

    /// The stable client proxy for `component`, created through the proxy
    /// factory on first request. A factory failure caches nothing.
    pub fn get_or_create_client_proxy(&self, component: &Arc<Component>) -> Result<Instance> {
        match self.proxies.entry(component.id()) {
            Entry::Occupied(slot) => Ok(slot.get().clone()),
            Entry::Vacant(slot) => {
                let proxy = self.factory.create_client_proxy(component)?;
                slot.insert(proxy.clone());
                Ok(proxy)
            }
        }
    }

    /// Number of proxies created so far.
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Wipe all cached proxies.
    pub fn clear(&self) {
        self.proxies.clear();
    }
}

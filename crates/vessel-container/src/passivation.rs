//! Passivation vault
//!
//! Bijection between a stable string id and a component, letting a
//! serialized [`PassivationRef`] be revived to live metadata without
//! serializing the component graph. Ids are globally unique; a collision
//! is a boot-time definition error.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use vessel_domain::{Component, Error, PassivationRef, Result};

/// Registry of passivation-capable components keyed by their declared id.
pub struct PassivationVault {
    ids: DashMap<String, Arc<Component>>,
}

impl PassivationVault {
    pub fn new() -> Self {
        Self {
            ids: DashMap::new(),
        }
    }

    /// Register a component under its passivation id, if it declares one.
    ///
    /// The first registration wins; a second component claiming the same
    /// id is rejected with `DuplicateDefinition` and the existing mapping
    /// is left untouched.
    pub fn register(&self, component: &Arc<Component>) -> Result<()> {
        let Some(id) = component.passivation_id() else {
            return Ok(());
        };
        match self.ids.entry(id.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateDefinition {
                passivation_id: id.to_string(),
                component: component.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(component.clone());
                Ok(())
            }
        }
    }

    /// Look up the component registered under `id`.
    pub fn resolve(&self, id: &str) -> Option<Arc<Component>> {
        self.ids.get(id).map(|entry| entry.value().clone())
    }

    /// Revive a serialized handle to live component metadata.
    pub fn revive(&self, handle: &PassivationRef) -> Option<Arc<Component>> {
        self.resolve(handle.passivation_id())
    }

    /// Wipe all id mappings.
    pub fn clear(&self) {
        self.ids.clear();
    }
}

impl Default for PassivationVault {
    fn default() -> Self {
        Self::new()
    }
}

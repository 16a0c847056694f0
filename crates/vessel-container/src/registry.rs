//! Component registry
//!
//! Append-only pool of registered components. Registration happens on a
//! single thread during boot and never races with resolution; the resolver
//! takes insertion-ordered snapshots, which is what makes resolution
//! deterministic for an unchanged registry.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;
use vessel_domain::{Component, ComponentId};

/// Holds all registered components and their metadata.
pub struct ComponentRegistry {
    components: RwLock<Vec<Arc<Component>>>,
    next_id: AtomicU64,
    in_use: AtomicBool,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            components: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            in_use: AtomicBool::new(false),
        }
    }

    /// Insert a component, assigning its identity, and mark the registry
    /// in use.
    pub fn add(&self, component: Component) -> Arc<Component> {
        let id = ComponentId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let component = Arc::new(component.assigned(id));
        self.components
            .write()
            .expect("registry lock poisoned")
            .push(component.clone());
        self.in_use.store(true, Ordering::Release);
        debug!(component = %component, "registered component");
        component
    }

    /// Stable, insertion-ordered snapshot of all registered components.
    pub fn components(&self) -> Vec<Arc<Component>> {
        self.components
            .read()
            .expect("registry lock poisoned")
            .clone()
    }

    /// Whether any component has been registered since construction or the
    /// last reset.
    pub fn is_in_use(&self) -> bool {
        self.in_use.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.components
            .read()
            .expect("registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wipe all registered components.
    pub fn clear(&self) {
        self.components
            .write()
            .expect("registry lock poisoned")
            .clear();
        self.in_use.store(false, Ordering::Release);
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

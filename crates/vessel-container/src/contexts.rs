//! Context registry
//!
//! Maps a scope tag to its registered contexts and enforces the
//! at-most-one-active invariant at lookup time.
//!
//! Storage is two-tier: the first context registered for a scope occupies
//! a single-value slot (one context per scope is by far the most common
//! case); a second registration for the same scope migrates the slot into
//! a list, and further registrations append to it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use vessel_domain::{Context, Error, Result, ScopeTag};

#[derive(Default)]
struct Tiers {
    single: HashMap<String, Arc<dyn Context>>,
    lists: HashMap<String, Vec<Arc<dyn Context>>>,
}

/// Maps scope tags to one or more contexts; "at most one active at a
/// time" is checked on every lookup.
pub struct ContextRegistry {
    state: RwLock<Tiers>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Tiers::default()),
        }
    }

    /// Register a context for its scope.
    pub fn add_context(&self, context: Arc<dyn Context>) {
        let scope = context.scope().name().to_string();
        let mut tiers = self.state.write().expect("context lock poisoned");

        if let Some(list) = tiers.lists.get_mut(&scope) {
            list.push(context);
            return;
        }
        match tiers.single.remove(&scope) {
            None => {
                tiers.single.insert(scope, context);
            }
            Some(existing) => {
                // second context for this scope: migrate to list storage
                tiers.lists.insert(scope, vec![existing, context]);
            }
        }
    }

    /// The active context for `scope` on the calling thread.
    ///
    /// Fails with `ContextNotActive` when no registered context is active
    /// and `IllegalContextState` when more than one is simultaneously
    /// active.
    pub fn get_active_context(&self, scope: &ScopeTag) -> Result<Arc<dyn Context>> {
        let tiers = self.state.read().expect("context lock poisoned");

        if let Some(single) = tiers.single.get(scope.name()) {
            if !single.is_active() {
                return Err(Error::ContextNotActive {
                    scope: scope.to_string(),
                });
            }
            return Ok(single.clone());
        }

        let mut found: Option<Arc<dyn Context>> = None;
        if let Some(list) = tiers.lists.get(scope.name()) {
            for context in list {
                if context.is_active() {
                    if found.is_some() {
                        return Err(Error::IllegalContextState {
                            scope: scope.to_string(),
                        });
                    }
                    found = Some(context.clone());
                }
            }
        }

        found.ok_or_else(|| Error::ContextNotActive {
            scope: scope.to_string(),
        })
    }

    /// Wipe both storage tiers.
    pub fn clear(&self) {
        let mut tiers = self.state.write().expect("context lock poisoned");
        tiers.single.clear();
        tiers.lists.clear();
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}

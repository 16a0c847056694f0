//! Component resolver and resolution caches
//!
//! The core algorithm: qualifier normalization, type and qualifier
//! filtering, the alternative tie-break, the specialization tie-break, and
//! memoization of the resulting candidate sets.
//!
//! ## Resolution pipeline
//!
//! ```text
//! normalize qualifiers ─▶ cache? ─▶ scan enabled ─▶ type filter (oracle)
//!        ─▶ qualifier filter ─▶ alternative pass ─▶ specialization pass
//!        ─▶ cache + return
//! ```
//!
//! Candidate sets preserve registry insertion order, so resolution is
//! deterministic for an unchanged registry. Both caches tolerate duplicate
//! computation under concurrent first-writes (inserts are idempotent);
//! only a full container reset invalidates them.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use vessel_domain::{
    AssignabilityOracle, Component, Error, InjectionRequest, PartitionId, Qualifier, QualifierSet,
    Result, TypeDescriptor,
};

use crate::registry::ComponentRegistry;

/// A memoized, insertion-ordered resolution outcome. Shared by the cache
/// and every caller that hits it.
pub type CandidateSet = Arc<Vec<Arc<Component>>>;

/// Canonical by-type cache key: qualifier order is irrelevant, type
/// equality accounts for generic arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TypeCacheKey {
    contract: TypeDescriptor,
    partition: Option<PartitionId>,
    qualifiers: QualifierSet,
}

/// The resolution algorithm plus its by-type and by-name caches.
pub struct Resolver {
    oracle: Arc<dyn AssignabilityOracle>,
    cache_enabled: bool,
    by_type: DashMap<TypeCacheKey, CandidateSet>,
    by_name: DashMap<String, CandidateSet>,
}

impl Resolver {
    pub fn new(oracle: Arc<dyn AssignabilityOracle>, cache_enabled: bool) -> Self {
        Self {
            oracle,
            cache_enabled,
            by_type: DashMap::new(),
            by_name: DashMap::new(),
        }
    }

    /// Resolve the candidate set for a typed injection request.
    ///
    /// Qualifier normalization: a many-valued wrapper contract substitutes
    /// the implicit any tag for whatever was requested; otherwise an empty
    /// qualifier list becomes the implicit default tag. A request for the
    /// universal root contract with only the implicit default returns every
    /// enabled component, bypassing all filtering.
    pub fn resolve_by_type(
        &self,
        registry: &ComponentRegistry,
        request: &InjectionRequest,
    ) -> CandidateSet {
        let (qualifiers, implicit_default) = normalize(request);

        let key = TypeCacheKey {
            contract: request.contract.clone(),
            partition: request.partition.clone(),
            qualifiers: QualifierSet::canonical(qualifiers.iter().cloned()),
        };
        if self.cache_enabled {
            if let Some(hit) = self.by_type.get(&key) {
                return hit.value().clone();
            }
        }

        let components = registry.components();
        let survivors = if request.contract.is_universal() && implicit_default {
            // "inject everything, untyped": all enabled components
            components.into_iter().filter(|c| c.is_enabled()).collect()
        } else {
            let mut survivors: Vec<Arc<Component>> = components
                .into_iter()
                .filter(|c| c.is_enabled())
                .filter(|c| {
                    c.types()
                        .iter()
                        .any(|declared| self.oracle.is_assignable(declared, &request.contract))
                })
                .collect();
            survivors = filter_by_qualifiers(survivors, &qualifiers);
            survivors = prefer_alternatives(survivors, request.partition.as_ref());
            prefer_specialized(survivors)
        };

        let set: CandidateSet = Arc::new(survivors);
        if self.cache_enabled {
            debug!(
                contract = %request.contract,
                candidates = set.len(),
                "cached by-type candidate set"
            );
            self.by_type.insert(key, set.clone());
        }
        set
    }

    /// Resolve the candidate set for a declared name.
    ///
    /// Exact name match among enabled components, then the specialization
    /// tie-break only; there is no alternative pass for names. Negative
    /// outcomes are cached as an explicit empty set.
    pub fn resolve_by_name(&self, registry: &ComponentRegistry, name: &str) -> CandidateSet {
        if self.cache_enabled {
            if let Some(hit) = self.by_name.get(name) {
                return hit.value().clone();
            }
        }

        let mut survivors: Vec<Arc<Component>> = registry
            .components()
            .into_iter()
            .filter(|c| c.is_enabled() && c.name() == Some(name))
            .collect();
        if survivors.len() > 1 {
            survivors = prefer_specialized(survivors);
        }

        let set: CandidateSet = Arc::new(survivors);
        if self.cache_enabled {
            debug!(name, candidates = set.len(), "cached by-name candidate set");
            self.by_name.insert(name.to_string(), set.clone());
        }
        set
    }

    /// Classify a candidate set into exactly-one / none / ambiguous.
    pub fn resolve_single(&self, candidates: &[Arc<Component>]) -> Result<Option<Arc<Component>>> {
        match candidates {
            [] => Ok(None),
            [single] => Ok(Some(single.clone())),
            _ => Err(Error::AmbiguousResolution {
                candidates: candidates.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }

    /// Wipe both resolution caches.
    pub fn clear_caches(&self) {
        self.by_type.clear();
        self.by_name.clear();
    }
}

/// The qualifiers a request is actually resolved with: a many-valued
/// wrapper contract substitutes the implicit any tag for whatever was
/// requested; otherwise an empty list becomes the implicit default tag.
pub fn normalized_qualifiers(request: &InjectionRequest) -> Vec<Qualifier> {
    normalize(request).0
}

/// Normalization plus whether the default tag was implicit, which gates
/// the universal-contract bypass.
fn normalize(request: &InjectionRequest) -> (Vec<Qualifier>, bool) {
    if request.contract.is_wrapper() {
        (vec![Qualifier::any_tag()], false)
    } else if request.qualifiers.is_empty() {
        (vec![Qualifier::default_tag()], true)
    } else {
        (request.qualifiers.clone(), false)
    }
}

/// Keep components carrying a matching declared tag for every requested
/// qualifier.
fn filter_by_qualifiers(
    survivors: Vec<Arc<Component>>,
    requested: &[Qualifier],
) -> Vec<Arc<Component>> {
    survivors
        .into_iter()
        .filter(|component| {
            requested.iter().all(|wanted| {
                component
                    .qualifiers()
                    .iter()
                    .any(|declared| wanted.matches(declared))
            })
        })
        .collect()
}

/// Alternative tie-break.
///
/// With a partition: alternatives activated for that partition win; if
/// none are, enabled non-alternatives remain. Without one: if any survivor
/// is alternative-flagged, only alternatives remain.
fn prefer_alternatives(
    survivors: Vec<Arc<Component>>,
    partition: Option<&PartitionId>,
) -> Vec<Arc<Component>> {
    match partition {
        Some(partition) => {
            let activated: Vec<Arc<Component>> = survivors
                .iter()
                .filter(|c| c.is_alternative() && c.is_activated_in(partition))
                .cloned()
                .collect();
            if activated.is_empty() {
                survivors
                    .into_iter()
                    .filter(|c| !c.is_alternative())
                    .collect()
            } else {
                activated
            }
        }
        None => {
            if survivors.iter().any(|c| c.is_alternative()) {
                survivors
                    .into_iter()
                    .filter(|c| c.is_alternative())
                    .collect()
            } else {
                survivors
            }
        }
    }
}

/// Specialization tie-break: specializing survivors supersede the rest.
/// Applied strictly after the alternative pass.
fn prefer_specialized(survivors: Vec<Arc<Component>>) -> Vec<Arc<Component>> {
    if survivors.iter().any(|c| c.specializes_another()) {
        survivors
            .into_iter()
            .filter(|c| c.specializes_another())
            .collect()
    } else {
        survivors
    }
}

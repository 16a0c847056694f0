//! Default assignability oracle
//!
//! A seedable, table-driven implementation of the [`AssignabilityOracle`]
//! port: raw hierarchy edges are declared up front (`sub` is-a `super`)
//! and lookups take the reflexive-transitive closure. Deployments with
//! richer type systems supply their own oracle implementation instead.

use std::collections::{BTreeSet, HashMap, VecDeque};

use vessel_domain::{AssignabilityOracle, TypeDescriptor};

/// Hierarchy-table oracle: named contracts are compatible when the
/// declared raw name reaches the requested raw name through declared
/// subtype edges, generic arguments are invariant with a universal
/// wildcard, wrappers require the same kind, and arrays are covariant.
pub struct DeclaredHierarchyOracle {
    supertypes: HashMap<String, BTreeSet<String>>,
}

impl DeclaredHierarchyOracle {
    /// An oracle with no hierarchy edges; names are compatible only with
    /// themselves.
    pub fn new() -> Self {
        Self {
            supertypes: HashMap::new(),
        }
    }

    /// Declare `sub` to be a subtype of `sup`.
    pub fn add_subtype(&mut self, sub: impl Into<String>, sup: impl Into<String>) {
        self.supertypes
            .entry(sub.into())
            .or_default()
            .insert(sup.into());
    }

    /// Builder-style [`Self::add_subtype`].
    pub fn with_subtype(mut self, sub: impl Into<String>, sup: impl Into<String>) -> Self {
        self.add_subtype(sub, sup);
        self
    }

    /// Reflexive-transitive reachability over declared edges.
    fn reaches(&self, sub: &str, sup: &str) -> bool {
        if sub == sup {
            return true;
        }
        let mut queue: VecDeque<&str> = VecDeque::from([sub]);
        let mut seen: BTreeSet<&str> = BTreeSet::from([sub]);
        while let Some(current) = queue.pop_front() {
            if let Some(parents) = self.supertypes.get(current) {
                for parent in parents {
                    if parent == sup {
                        return true;
                    }
                    if seen.insert(parent) {
                        queue.push_back(parent);
                    }
                }
            }
        }
        false
    }

    fn args_compatible(&self, declared: &[TypeDescriptor], requested: &[TypeDescriptor]) -> bool {
        // a raw request matches any parameterization
        if requested.is_empty() {
            return true;
        }
        declared.len() == requested.len()
            && declared
                .iter()
                .zip(requested)
                .all(|(d, r)| r.is_universal() || d == r)
    }
}

impl Default for DeclaredHierarchyOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignabilityOracle for DeclaredHierarchyOracle {
    fn is_assignable(&self, declared: &TypeDescriptor, requested: &TypeDescriptor) -> bool {
        match (declared, requested) {
            (_, TypeDescriptor::Universal) => true,
            (
                TypeDescriptor::Named { name: dn, args: da },
                TypeDescriptor::Named { name: rn, args: ra },
            ) => self.reaches(dn, rn) && self.args_compatible(da, ra),
            (
                TypeDescriptor::Wrapper { kind: dk, arg: da },
                TypeDescriptor::Wrapper { kind: rk, arg: ra },
            ) => dk == rk && self.is_assignable(da, ra),
            (TypeDescriptor::Array(de), TypeDescriptor::Array(re)) => self.is_assignable(de, re),
            _ => false,
        }
    }
}

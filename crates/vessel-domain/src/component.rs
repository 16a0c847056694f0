//! Registered component metadata
//!
//! A component is an injectable implementation unit: the set of contracts
//! it satisfies, its qualifier tags, its scope, and the flags the resolver
//! consults during tie-breaking. All metadata is explicit data attached at
//! build time; nothing is introspected at runtime.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::qualifier::Qualifier;
use crate::scope::{PartitionId, ScopeTag};
use crate::types::TypeDescriptor;

/// Opaque component identity, assigned when the component enters a
/// registry. Identity is stable for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(u64);

impl ComponentId {
    pub fn new(id: u64) -> Self {
        ComponentId(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An injectable implementation unit with declared contracts and metadata.
#[derive(Debug, Clone)]
pub struct Component {
    id: ComponentId,
    name: Option<String>,
    types: Vec<TypeDescriptor>,
    qualifiers: Vec<Qualifier>,
    scope: ScopeTag,
    alternative: bool,
    specializes_another: bool,
    enabled: bool,
    passivation_id: Option<String>,
    activated_in: BTreeSet<PartitionId>,
}

impl Component {
    /// Start building a component that satisfies `contract`.
    pub fn builder(contract: TypeDescriptor) -> ComponentBuilder {
        ComponentBuilder::new(contract)
    }

    /// Identity assigned by the registry; the zero placeholder until then.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Consume and return this component with its registry-assigned id.
    /// Called exactly once, when the component is inserted.
    pub fn assigned(mut self, id: ComponentId) -> Self {
        self.id = id;
        self
    }

    /// Declared name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Contracts this component satisfies.
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Declared qualifier tags.
    pub fn qualifiers(&self) -> &[Qualifier] {
        &self.qualifiers
    }

    /// Governing scope.
    pub fn scope(&self) -> &ScopeTag {
        &self.scope
    }

    pub fn is_alternative(&self) -> bool {
        self.alternative
    }

    pub fn specializes_another(&self) -> bool {
        self.specializes_another
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stable identity surviving serialization round-trips, if declared.
    pub fn passivation_id(&self) -> Option<&str> {
        self.passivation_id.as_deref()
    }

    /// Whether this alternative is activated for the given partition.
    pub fn is_activated_in(&self, partition: &PartitionId) -> bool {
        self.activated_in.contains(partition)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component {}", self.id)?;
        if let Some(name) = &self.name {
            write!(f, " '{name}'")?;
        }
        if let Some(first) = self.types.first() {
            write!(f, " ({first})")?;
        }
        Ok(())
    }
}

/// Builder for [`Component`] metadata.
///
/// A component with no declared qualifier receives the implicit default tag
/// at build time. The scope defaults to dependent.
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    name: Option<String>,
    types: Vec<TypeDescriptor>,
    qualifiers: Vec<Qualifier>,
    scope: ScopeTag,
    alternative: bool,
    specializes_another: bool,
    enabled: bool,
    passivation_id: Option<String>,
    activated_in: BTreeSet<PartitionId>,
}

impl ComponentBuilder {
    /// Start with a first declared contract.
    pub fn new(contract: TypeDescriptor) -> Self {
        Self {
            name: None,
            types: vec![contract],
            qualifiers: Vec::new(),
            scope: ScopeTag::dependent(),
            alternative: false,
            specializes_another: false,
            enabled: true,
            passivation_id: None,
            activated_in: BTreeSet::new(),
        }
    }

    /// Declare an additional satisfied contract.
    pub fn with_type(mut self, contract: TypeDescriptor) -> Self {
        self.types.push(contract);
        self
    }

    /// Declare a qualifier tag.
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    /// Declare a component name for by-name resolution.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the governing scope.
    pub fn with_scope(mut self, scope: ScopeTag) -> Self {
        self.scope = scope;
        self
    }

    /// Flag this component as an alternative.
    pub fn alternative(mut self) -> Self {
        self.alternative = true;
        self
    }

    /// Activate this alternative for a deployment partition.
    pub fn activated_in(mut self, partition: impl Into<PartitionId>) -> Self {
        self.activated_in.insert(partition.into());
        self
    }

    /// Flag this component as specializing another.
    pub fn specializes(mut self) -> Self {
        self.specializes_another = true;
        self
    }

    /// Exclude this component from resolution entirely.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Declare a passivation id.
    pub fn with_passivation_id(mut self, id: impl Into<String>) -> Self {
        self.passivation_id = Some(id.into());
        self
    }

    /// Finish building. The id remains the zero placeholder until the
    /// registry assigns one.
    pub fn build(self) -> Component {
        let mut qualifiers = self.qualifiers;
        if qualifiers.is_empty() {
            qualifiers.push(Qualifier::default_tag());
        }
        Component {
            id: ComponentId::new(0),
            name: self.name,
            types: self.types,
            qualifiers,
            scope: self.scope,
            alternative: self.alternative,
            specializes_another: self.specializes_another,
            enabled: self.enabled,
            passivation_id: self.passivation_id,
            activated_in: self.activated_in,
        }
    }
}

/// A serializable handle to a passivation-capable component.
///
/// Carries only the passivation id; reviving it through the passivation
/// vault yields the live component metadata without ever serializing the
/// component graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassivationRef {
    passivation_id: String,
}

impl PassivationRef {
    pub fn new(passivation_id: impl Into<String>) -> Self {
        Self {
            passivation_id: passivation_id.into(),
        }
    }

    /// Handle for a component, if it declares a passivation id.
    pub fn for_component(component: &Component) -> Option<Self> {
        component.passivation_id().map(Self::new)
    }

    pub fn passivation_id(&self) -> &str {
        &self.passivation_id
    }
}

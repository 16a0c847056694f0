//! # Vessel
//!
//! A typed component resolution engine: given a requested contract (a type
//! descriptor plus qualifier tags, or a declared name), it selects exactly
//! one registered implementation from a pool of candidates using
//! structural type compatibility, qualifier matching, and two ordered
//! disambiguation passes (alternative-override, then
//! specialization-override). It also manages per-scope context lookup,
//! stable client-proxy identity for normal scopes, and a passivation-id
//! registry for serialized references.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vessel::{Component, Container, DeclaredHierarchyOracle, InjectionRequest, TypeDescriptor};
//!
//! let oracle = Arc::new(DeclaredHierarchyOracle::new());
//! let container = Container::with_defaults(oracle, proxy_factory);
//!
//! container.add_component(
//!     Component::builder(TypeDescriptor::named("payment-gateway")).build(),
//! )?;
//!
//! let chosen = container.resolve_required(
//!     &InjectionRequest::of(TypeDescriptor::named("payment-gateway")),
//! )?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - component metadata model, port traits, errors
//! - `container` - registry, resolver and caches, context registry, vaults

/// Domain layer - metadata model and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use vessel_domain::*;
}

/// Container layer - the resolution engine
///
/// Re-exports from the container crate for convenience
pub mod container {
    pub use vessel_container::*;
}

// Re-export commonly used types at the crate root
pub use container::{
    ConfigLoader, Container, ContainerConfig, DeclaredHierarchyOracle, NullDiagnostics,
    TracingDiagnostics, init_logging,
};
pub use domain::*;

//! Domain layer for the Vessel component resolution engine.
//!
//! Contains the pure data model (components, type descriptors, qualifiers,
//! scopes) and the port traits that external collaborators implement.
//! This crate performs no I/O and holds no concurrency primitives beyond
//! `Arc`; the engine itself lives in `vessel-container`.
//!
//! ## Organization
//!
//! - **types** - structural type descriptors (named, generic, wrapper, array)
//! - **qualifier** - qualifier tags with member values and binding rules
//! - **scope** - scope tags and deployment partitions
//! - **component** - registered component metadata and its builder
//! - **resolution** - injection requests and failure payloads
//! - **ports** - boundary contracts implemented by external layers
//! - **error** - the single error type shared across the workspace

pub mod component;
pub mod error;
pub mod ports;
pub mod qualifier;
pub mod resolution;
pub mod scope;
pub mod types;

pub use component::{Component, ComponentBuilder, ComponentId, PassivationRef};
pub use error::{Error, Result};
pub use ports::{
    AssignabilityOracle, ComponentSource, Context, DiagnosticsSink, Instance, ProxyFactory,
};
pub use qualifier::{MemberValue, Qualifier, QualifierSet};
pub use resolution::{FailureKind, InjectionRequest, ResolutionFailure};
pub use scope::{PartitionId, ScopeTag};
pub use types::{TypeDescriptor, WrapperKind};

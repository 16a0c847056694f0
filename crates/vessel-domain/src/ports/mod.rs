//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the resolution core and its
//! external collaborators. The core never discovers components, generates
//! proxies, or manages instance lifecycles itself; those concerns arrive
//! through these ports:
//!
//! - **oracle** - structural type-assignability decisions
//! - **proxy** - client proxy creation for normal scopes
//! - **context** - per-scope instance stores with an activity flag
//! - **source** - the initial component list at boot
//! - **diagnostics** - structured resolution-failure reporting

pub mod context;
pub mod diagnostics;
pub mod oracle;
pub mod proxy;
pub mod source;

pub use context::{Context, Instance};
pub use diagnostics::DiagnosticsSink;
pub use oracle::AssignabilityOracle;
pub use proxy::ProxyFactory;
pub use source::ComponentSource;

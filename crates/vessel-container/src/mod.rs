//! The Vessel resolution engine
//!
//! Holds the registered component pool and answers injection requests:
//! type/qualifier filtering, the alternative and specialization tie-break
//! passes, memoized candidate sets, per-scope context lookup, stable
//! client-proxy identity and the passivation-id registry.
//!
//! ## Architecture
//!
//! ```text
//! InjectionRequest
//!        │
//!        ▼
//! ┌──────────────┐  miss   ┌───────────────────┐
//! │  Resolution   │───────▶│     Resolver       │
//! │    Cache      │◀───────│ filter → tie-break │
//! └──────────────┘  store  └───────────────────┘
//!        │                          │ scans
//!        ▼                          ▼
//!  candidate set           ┌───────────────────┐
//!        │                 │ ComponentRegistry  │
//!        ▼                 └───────────────────┘
//!  resolve_single ── exactly-one / none / ambiguous
//! ```
//!
//! Separately, a chosen component is turned into a client-visible
//! reference: normal scopes go through the proxy vault (one proxy per
//! component, ever), pseudo scopes through the active [`Context`] of the
//! component's scope.
//!
//! Everything is wired by an explicit [`Container`] object; there is no
//! ambient global state, and a full [`Container::reset`] is the only cache
//! invalidation.
//!
//! [`Context`]: vessel_domain::Context

pub mod assignability;
pub mod config;
pub mod constants;
pub mod container;
pub mod contexts;
pub mod diagnostics;
pub mod logging;
pub mod passivation;
pub mod proxies;
pub mod registry;
pub mod resolver;

pub use assignability::DeclaredHierarchyOracle;
pub use config::{ConfigLoader, ContainerConfig, LoggingConfig, ResolutionConfig};
pub use container::Container;
pub use contexts::ContextRegistry;
pub use diagnostics::{NullDiagnostics, TracingDiagnostics};
pub use logging::{init_logging, parse_log_level};
pub use passivation::PassivationVault;
pub use proxies::ProxyVault;
pub use registry::ComponentRegistry;
pub use resolver::{CandidateSet, Resolver, normalized_qualifiers};

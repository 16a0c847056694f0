//! Container facade
//!
//! One explicit object wiring the registry, resolver, context registry and
//! vaults together, with the external collaborators (assignability oracle,
//! proxy factory, diagnostics sink) injected at construction. There is no
//! ambient global state: embedders construct, boot, and reset containers
//! themselves.

use std::sync::Arc;

use tracing::{debug, info};
use vessel_domain::{
    AssignabilityOracle, Component, ComponentSource, Context, DiagnosticsSink, Error, FailureKind,
    InjectionRequest, Instance, PassivationRef, ProxyFactory, ResolutionFailure, Result, ScopeTag,
    TypeDescriptor,
};

use crate::config::ContainerConfig;
use crate::contexts::ContextRegistry;
use crate::diagnostics::NullDiagnostics;
use crate::passivation::PassivationVault;
use crate::proxies::ProxyVault;
use crate::registry::ComponentRegistry;
use crate::resolver::{CandidateSet, Resolver, normalized_qualifiers};

/// The component container: registry, resolver, contexts and vaults behind
/// one explicit object.
pub struct Container {
    registry: ComponentRegistry,
    passivation: PassivationVault,
    contexts: ContextRegistry,
    resolver: Resolver,
    proxies: ProxyVault,
    oracle: Arc<dyn AssignabilityOracle>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl Container {
    /// Construct a container from configuration and its collaborator
    /// ports.
    pub fn new(
        config: &ContainerConfig,
        oracle: Arc<dyn AssignabilityOracle>,
        proxy_factory: Arc<dyn ProxyFactory>,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            registry: ComponentRegistry::new(),
            passivation: PassivationVault::new(),
            contexts: ContextRegistry::new(),
            resolver: Resolver::new(oracle.clone(), config.resolution.cache_enabled),
            proxies: ProxyVault::new(proxy_factory),
            oracle,
            diagnostics,
        }
    }

    /// Construct with default configuration and a null diagnostics sink.
    pub fn with_defaults(
        oracle: Arc<dyn AssignabilityOracle>,
        proxy_factory: Arc<dyn ProxyFactory>,
    ) -> Self {
        Self::new(
            &ContainerConfig::default(),
            oracle,
            proxy_factory,
            Arc::new(NullDiagnostics),
        )
    }

    /// Register every component supplied by `source`. Boot is
    /// single-threaded and completes before any resolution is attempted.
    pub fn boot(&self, source: &dyn ComponentSource) -> Result<()> {
        let components = source.components()?;
        let count = components.len();
        for component in components {
            self.add_component(component)?;
        }
        info!(count, "container booted");
        Ok(())
    }

    /// Register a single component: passivation-id bookkeeping plus the
    /// registry insert. A colliding passivation id rejects the component
    /// before it enters the registry.
    pub fn add_component(&self, component: Component) -> Result<Arc<Component>> {
        if let Some(id) = component.passivation_id() {
            if self.passivation.resolve(id).is_some() {
                return Err(Error::DuplicateDefinition {
                    passivation_id: id.to_string(),
                    component: component.to_string(),
                });
            }
        }
        let component = self.registry.add(component);
        self.passivation.register(&component)?;
        Ok(component)
    }

    /// Register a context for its scope.
    pub fn add_context(&self, context: Arc<dyn Context>) {
        self.contexts.add_context(context);
    }

    /// The active context for `scope` on the calling thread.
    pub fn get_active_context(&self, scope: &ScopeTag) -> Result<Arc<dyn Context>> {
        self.contexts.get_active_context(scope)
    }

    /// Candidate set for a typed injection request (memoized).
    pub fn resolve_by_type(&self, request: &InjectionRequest) -> CandidateSet {
        self.resolver.resolve_by_type(&self.registry, request)
    }

    /// Candidate set for a declared name (memoized, negatives included).
    pub fn resolve_by_name(&self, name: &str) -> CandidateSet {
        self.resolver.resolve_by_name(&self.registry, name)
    }

    /// Classify a candidate set into exactly-one / none / ambiguous.
    pub fn resolve_single(&self, candidates: &[Arc<Component>]) -> Result<Option<Arc<Component>>> {
        self.resolver.resolve_single(candidates)
    }

    /// Resolve a request that must produce exactly one component.
    ///
    /// Unsatisfied and ambiguous outcomes are reported to the diagnostics
    /// sink before the error is returned; optional-injection callers use
    /// [`Self::resolve_by_type`] and substitute their own fallback.
    pub fn resolve_required(&self, request: &InjectionRequest) -> Result<Arc<Component>> {
        let candidates = self.resolve_by_type(request);
        match self.resolver.resolve_single(&candidates) {
            Ok(Some(component)) => Ok(component),
            Ok(None) => {
                let qualifiers = normalized_qualifiers(request);
                self.diagnostics.resolution_failed(&ResolutionFailure {
                    contract: request.contract.clone(),
                    qualifiers: qualifiers.clone(),
                    kind: FailureKind::Unsatisfied,
                    candidates: Vec::new(),
                });
                Err(Error::UnsatisfiedResolution {
                    contract: request.contract.to_string(),
                    qualifiers: format!(
                        "[{}]",
                        qualifiers
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                })
            }
            Err(err) => {
                self.diagnostics.resolution_failed(&ResolutionFailure {
                    contract: request.contract.clone(),
                    qualifiers: normalized_qualifiers(request),
                    kind: FailureKind::Ambiguous,
                    candidates: candidates.iter().map(ToString::to_string).collect(),
                });
                Err(err)
            }
        }
    }

    /// A client-visible reference to `component` under `requested`.
    ///
    /// The requested contract must be one the component can satisfy.
    /// Normal scopes go through the proxy vault (stable identity); pseudo
    /// scopes obtain the instance from the active context of the
    /// component's scope.
    pub fn get_reference(
        &self,
        component: &Arc<Component>,
        requested: &TypeDescriptor,
    ) -> Result<Instance> {
        let applicable = component
            .types()
            .iter()
            .any(|declared| self.oracle.is_assignable(declared, requested));
        if !applicable {
            return Err(Error::invalid_argument(format!(
                "requested contract {requested} is not applicable for {component}"
            )));
        }

        if component.scope().is_normal() {
            self.proxies.get_or_create_client_proxy(component)
        } else {
            let context = self.contexts.get_active_context(component.scope())?;
            context.get_or_create(component)
        }
    }

    /// The component registered under a passivation id.
    pub fn resolve_passivated(&self, id: &str) -> Option<Arc<Component>> {
        self.passivation.resolve(id)
    }

    /// Revive a serialized handle to live component metadata.
    pub fn revive(&self, handle: &PassivationRef) -> Option<Arc<Component>> {
        self.passivation.revive(handle)
    }

    /// Insertion-ordered snapshot of all registered components.
    pub fn components(&self) -> Vec<Arc<Component>> {
        self.registry.components()
    }

    /// Whether any component has been registered since the last reset.
    pub fn is_in_use(&self) -> bool {
        self.registry.is_in_use()
    }

    /// Wipe registry, resolution caches, contexts, proxy vault and
    /// passivation map. Coarse invalidation only; like boot, reset belongs
    /// to the single-threaded lifecycle phase and never races readers.
    pub fn reset(&self) {
        self.registry.clear();
        self.resolver.clear_caches();
        self.contexts.clear();
        self.proxies.clear();
        self.passivation.clear();
        debug!("container reset");
    }
}

//! Tests for the resolution algorithm: filtering, normalization, both
//! tie-break passes and the memoization caches.

use std::sync::Arc;

use vessel_container::{ComponentRegistry, DeclaredHierarchyOracle, Resolver};
use vessel_domain::{Component, InjectionRequest, Qualifier, TypeDescriptor};

use crate::support::{flat_oracle, shape};

fn resolver() -> Resolver {
    Resolver::new(flat_oracle(), true)
}

// ============================================================================
// Determinism and caching
// ============================================================================

#[test]
fn repeated_resolution_yields_identical_results() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).build());
    registry.add(Component::builder(shape()).build());

    let r = resolver();
    let request = InjectionRequest::of(shape());

    let first = r.resolve_by_type(&registry, &request);
    let second = r.resolve_by_type(&registry, &request);

    let ids = |set: &[Arc<Component>]| set.iter().map(|c| c.id()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second), "resolution must be deterministic");
    // the second call is served from cache and shares the allocation
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn determinism_holds_with_caching_disabled() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).build());
    registry.add(Component::builder(shape()).build());

    let r = Resolver::new(flat_oracle(), false);
    let request = InjectionRequest::of(shape());

    let first = r.resolve_by_type(&registry, &request);
    let second = r.resolve_by_type(&registry, &request);

    assert!(!Arc::ptr_eq(&first, &second), "nothing is memoized");
    let ids = |set: &[Arc<Component>]| set.iter().map(|c| c.id()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn cleared_caches_observe_a_changed_registry() {
    let registry = ComponentRegistry::new();
    let first = registry.add(Component::builder(shape()).build());

    let r = resolver();
    let request = InjectionRequest::of(shape());
    assert_eq!(r.resolve_by_type(&registry, &request).len(), 1);

    registry.clear();
    r.clear_caches();
    let replacement = registry.add(Component::builder(shape()).build());

    let set = r.resolve_by_type(&registry, &request);
    assert_eq!(set.len(), 1);
    assert_ne!(set[0].id(), first.id());
    assert_eq!(set[0].id(), replacement.id());
}

#[test]
fn qualifier_order_is_irrelevant_to_the_cache_key() {
    let registry = ComponentRegistry::new();
    registry.add(
        Component::builder(shape())
            .with_qualifier(Qualifier::new("a"))
            .with_qualifier(Qualifier::new("b"))
            .build(),
    );

    let r = resolver();
    let forward = InjectionRequest::of(shape())
        .with_qualifier(Qualifier::new("a"))
        .with_qualifier(Qualifier::new("b"));
    let backward = InjectionRequest::of(shape())
        .with_qualifier(Qualifier::new("b"))
        .with_qualifier(Qualifier::new("a"));

    let first = r.resolve_by_type(&registry, &forward);
    let second = r.resolve_by_type(&registry, &backward);
    assert!(
        Arc::ptr_eq(&first, &second),
        "both orders must hit the same cache entry"
    );
}

// ============================================================================
// Type and qualifier filtering
// ============================================================================

#[test]
fn component_declaring_the_exact_contract_is_a_candidate() {
    let registry = ComponentRegistry::new();
    let c = registry.add(Component::builder(shape()).build());

    let r = resolver();
    let set = r.resolve_by_type(&registry, &InjectionRequest::of(shape()));
    assert!(set.iter().any(|candidate| candidate.id() == c.id()));
}

#[test]
fn hierarchy_assignability_admits_subtypes() {
    let registry = ComponentRegistry::new();
    let circle = registry.add(Component::builder(TypeDescriptor::named("circle")).build());

    let oracle = Arc::new(DeclaredHierarchyOracle::new().with_subtype("circle", "shape"));
    let r = Resolver::new(oracle, true);

    let set = r.resolve_by_type(&registry, &InjectionRequest::of(shape()));
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), circle.id());
}

#[test]
fn empty_qualifier_list_behaves_as_the_default_tag() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).build());
    // declares a non-default tag only, so the implicit default passes it by
    registry.add(
        Component::builder(shape())
            .with_qualifier(Qualifier::new("fancy"))
            .build(),
    );

    let r = resolver();
    let implicit = r.resolve_by_type(&registry, &InjectionRequest::of(shape()));
    let explicit = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(shape()).with_qualifier(Qualifier::default_tag()),
    );

    assert_eq!(implicit.len(), 1);
    assert_eq!(explicit.len(), 1);
    assert_eq!(implicit[0].id(), explicit[0].id());
}

#[test]
fn qualifier_members_narrow_the_candidates() {
    let registry = ComponentRegistry::new();
    let eu = registry.add(
        Component::builder(shape())
            .with_qualifier(Qualifier::new("region").with_member("zone", "eu"))
            .build(),
    );
    registry.add(
        Component::builder(shape())
            .with_qualifier(Qualifier::new("region").with_member("zone", "us"))
            .build(),
    );

    let r = resolver();
    let set = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(shape())
            .with_qualifier(Qualifier::new("region").with_member("zone", "eu")),
    );
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), eu.id());
}

#[test]
fn every_requested_qualifier_must_match() {
    let registry = ComponentRegistry::new();
    registry.add(
        Component::builder(shape())
            .with_qualifier(Qualifier::new("a"))
            .build(),
    );

    let r = resolver();
    let set = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(shape())
            .with_qualifier(Qualifier::new("a"))
            .with_qualifier(Qualifier::new("b")),
    );
    assert!(set.is_empty(), "missing tag 'b' must exclude the component");
}

// ============================================================================
// Normalization special cases
// ============================================================================

#[test]
fn wrapper_requests_normalize_to_the_any_tag() {
    let registry = ComponentRegistry::new();
    let provider = registry.add(
        Component::builder(TypeDescriptor::provider_of(shape()))
            .with_qualifier(Qualifier::new("fancy"))
            .build(),
    );

    let r = resolver();
    // no explicit qualifier: a non-wrapper request would imply the default
    // tag and miss this component; the wrapper shape implies the any tag
    let set = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(TypeDescriptor::provider_of(shape())),
    );
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), provider.id());
}

#[test]
fn universal_request_without_explicit_qualifier_returns_all_enabled() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).build());
    registry.add(
        Component::builder(TypeDescriptor::named("color"))
            .with_qualifier(Qualifier::new("fancy"))
            .build(),
    );
    registry.add(Component::builder(shape()).disabled().build());

    let r = resolver();
    let set = r.resolve_by_type(&registry, &InjectionRequest::of(TypeDescriptor::Universal));
    assert_eq!(set.len(), 2, "every enabled component, no filtering");
}

#[test]
fn universal_request_with_explicit_qualifier_filters_normally() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).build());
    let fancy = registry.add(
        Component::builder(TypeDescriptor::named("color"))
            .with_qualifier(Qualifier::new("fancy"))
            .build(),
    );

    let r = resolver();
    let set = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(TypeDescriptor::Universal).with_qualifier(Qualifier::new("fancy")),
    );
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), fancy.id());
}

// ============================================================================
// Tie-break passes
// ============================================================================

#[test]
fn alternative_overrides_plain_components() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).build());
    let alternative = registry.add(Component::builder(shape()).alternative().build());

    let r = resolver();
    let set = r.resolve_by_type(&registry, &InjectionRequest::of(shape()));
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), alternative.id());

    let chosen = r
        .resolve_single(&set)
        .expect("tie-break removed the ambiguity")
        .expect("one survivor");
    assert_eq!(chosen.id(), alternative.id());
}

#[test]
fn specializer_overrides_among_tied_alternatives() {
    let registry = ComponentRegistry::new();
    registry.add(Component::builder(shape()).alternative().build());
    let specializer = registry.add(Component::builder(shape()).alternative().specializes().build());

    let r = resolver();
    let set = r.resolve_by_type(&registry, &InjectionRequest::of(shape()));
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), specializer.id());
}

#[test]
fn unrelated_components_stay_ambiguous() {
    let registry = ComponentRegistry::new();
    let a = registry.add(Component::builder(shape()).build());
    let b = registry.add(Component::builder(shape()).build());

    let r = resolver();
    let set = r.resolve_by_type(&registry, &InjectionRequest::of(shape()));
    assert_eq!(set.len(), 2);

    let err = r.resolve_single(&set).expect_err("two survivors remain");
    match err {
        vessel_domain::Error::AmbiguousResolution { candidates } => {
            assert_eq!(candidates.len(), 2);
            assert!(candidates.iter().any(|c| c.contains(&a.id().to_string())));
            assert!(candidates.iter().any(|c| c.contains(&b.id().to_string())));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn partition_selects_activated_alternatives() {
    let registry = ComponentRegistry::new();
    let plain = registry.add(Component::builder(shape()).build());
    let alternative = registry.add(
        Component::builder(shape())
            .alternative()
            .activated_in("unit-a")
            .build(),
    );

    let r = resolver();

    let in_a = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(shape()).in_partition("unit-a"),
    );
    assert_eq!(in_a.len(), 1);
    assert_eq!(in_a[0].id(), alternative.id());

    // the alternative is not activated for unit-b: fall back to
    // non-alternatives
    let in_b = r.resolve_by_type(
        &registry,
        &InjectionRequest::of(shape()).in_partition("unit-b"),
    );
    assert_eq!(in_b.len(), 1);
    assert_eq!(in_b[0].id(), plain.id());
}

// ============================================================================
// By-name resolution
// ============================================================================

#[test]
fn name_resolution_matches_exactly_among_enabled() {
    let registry = ComponentRegistry::new();
    let paypal = registry.add(Component::builder(shape()).named("paypal").build());
    registry.add(Component::builder(shape()).named("paypal-legacy").build());
    registry.add(Component::builder(shape()).named("stripe").disabled().build());

    let r = resolver();
    let set = r.resolve_by_name(&registry, "paypal");
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), paypal.id());

    assert!(r.resolve_by_name(&registry, "stripe").is_empty());
}

#[test]
fn name_resolution_applies_only_the_specialization_tie_break() {
    let registry = ComponentRegistry::new();
    // alternative flag must not influence by-name resolution
    registry.add(Component::builder(shape()).named("gateway").alternative().build());
    let specializer = registry.add(
        Component::builder(shape())
            .named("gateway")
            .specializes()
            .build(),
    );

    let r = resolver();
    let set = r.resolve_by_name(&registry, "gateway");
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), specializer.id());
}

#[test]
fn negative_name_results_are_cached_until_cleared() {
    let registry = ComponentRegistry::new();
    let r = resolver();

    assert!(r.resolve_by_name(&registry, "late").is_empty());

    registry.add(Component::builder(shape()).named("late").build());
    // the empty sentinel is still served
    assert!(r.resolve_by_name(&registry, "late").is_empty());

    r.clear_caches();
    assert_eq!(r.resolve_by_name(&registry, "late").len(), 1);
}

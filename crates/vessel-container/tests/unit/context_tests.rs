//! Tests for the context registry: two-tier storage and the
//! exactly-one-active invariant.

use std::sync::Arc;

use vessel_container::ContextRegistry;
use vessel_domain::{Context, Error, ScopeTag};

use crate::support::TestContext;

fn session_scope() -> ScopeTag {
    ScopeTag::new("session", true)
}

#[test]
fn single_slot_returns_the_context_while_active() {
    let registry = ContextRegistry::new();
    let context = TestContext::new(session_scope(), true);
    registry.add_context(context.clone());

    let found = registry
        .get_active_context(&session_scope())
        .expect("context is active");
    let expected: Arc<dyn Context> = context.clone();
    assert!(Arc::ptr_eq(&found, &expected));

    context.set_active(false);
    let Err(err) = registry.get_active_context(&session_scope()) else {
        panic!("context went inactive");
    };
    assert!(matches!(err, Error::ContextNotActive { .. }));
}

#[test]
fn unknown_scope_is_not_active() {
    let registry = ContextRegistry::new();
    let Err(err) = registry.get_active_context(&ScopeTag::new("conversation", true)) else {
        panic!("nothing registered");
    };
    assert!(matches!(err, Error::ContextNotActive { .. }));
}

#[test]
fn second_registration_migrates_to_list_storage() {
    let registry = ContextRegistry::new();
    let first = TestContext::new(session_scope(), true);
    let second = TestContext::new(session_scope(), false);
    registry.add_context(first.clone());
    registry.add_context(second.clone());

    // list mode scans for the single active entry
    let found = registry
        .get_active_context(&session_scope())
        .expect("exactly one is active");
    let expected: Arc<dyn Context> = first.clone();
    assert!(Arc::ptr_eq(&found, &expected));

    // flip activity to the other entry
    first.set_active(false);
    second.set_active(true);
    let found = registry
        .get_active_context(&session_scope())
        .expect("exactly one is active");
    let expected: Arc<dyn Context> = second.clone();
    assert!(Arc::ptr_eq(&found, &expected));
}

#[test]
fn two_simultaneously_active_contexts_are_illegal() {
    let registry = ContextRegistry::new();
    let first = TestContext::new(session_scope(), true);
    let second = TestContext::new(session_scope(), true);
    registry.add_context(first);
    registry.add_context(second);

    let Err(err) = registry.get_active_context(&session_scope()) else {
        panic!("both are active at once");
    };
    assert!(matches!(err, Error::IllegalContextState { .. }));
}

#[test]
fn zero_active_contexts_in_list_mode_is_not_active() {
    let registry = ContextRegistry::new();
    registry.add_context(TestContext::new(session_scope(), false));
    registry.add_context(TestContext::new(session_scope(), false));

    let Err(err) = registry.get_active_context(&session_scope()) else {
        panic!("none are active");
    };
    assert!(matches!(err, Error::ContextNotActive { .. }));
}

#[test]
fn scopes_are_independent() {
    let registry = ContextRegistry::new();
    let session = TestContext::new(session_scope(), true);
    let request = TestContext::new(ScopeTag::new("request", true), true);
    registry.add_context(session);
    registry.add_context(request.clone());

    let found = registry
        .get_active_context(&ScopeTag::new("request", true))
        .expect("request scope has its own slot");
    let expected: Arc<dyn Context> = request.clone();
    assert!(Arc::ptr_eq(&found, &expected));
}

#[test]
fn clear_forgets_every_registration() {
    let registry = ContextRegistry::new();
    registry.add_context(TestContext::new(session_scope(), true));
    registry.clear();

    let Err(err) = registry.get_active_context(&session_scope()) else {
        panic!("registry was cleared");
    };
    assert!(matches!(err, Error::ContextNotActive { .. }));
}

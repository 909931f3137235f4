//! Tests for overriding contexts and scoped overrides

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use injector_providers::{Object, ProviderExt, ProviderRef};

fn value_of(provider: &Object) -> i32 {
    *provider
        .call()
        .expect("provider call")
        .downcast_ref::<i32>()
        .expect("i32 instance")
}

#[test]
fn test_context_pairs_both_providers() {
    let provider = Object::new(1_i32);
    let overriding: ProviderRef = Arc::new(Object::new(2_i32));

    let context = provider
        .override_by(Arc::clone(&overriding))
        .expect("override");

    assert!(std::ptr::eq(context.overridden(), &provider));
    assert!(Arc::ptr_eq(context.overriding(), &overriding));
}

#[test]
fn test_ignored_context_keeps_override() {
    let provider = Object::new(1_i32);
    let _ = provider
        .override_by(Arc::new(Object::new(2_i32)))
        .expect("override");

    assert!(provider.is_overridden());
    assert_eq!(value_of(&provider), 2);
}

#[test]
fn test_exit_undoes_the_override() {
    let provider = Object::new(1_i32);
    let context = provider
        .override_by(Arc::new(Object::new(2_i32)))
        .expect("override");

    context.exit().expect("exit");

    assert!(!provider.is_overridden());
    assert_eq!(value_of(&provider), 1);
}

#[test]
fn test_scoped_override_resets_on_drop() {
    let provider = Object::new(1_i32);
    {
        let guard = provider
            .override_by(Arc::new(Object::new(2_i32)))
            .expect("override")
            .scoped();
        assert_eq!(value_of(guard.overridden()), 2);
    }

    assert!(!provider.is_overridden());
    assert_eq!(value_of(&provider), 1);
}

#[test]
fn test_scoped_override_restores_previous_layer() {
    let provider = Object::new(1_i32);
    provider
        .override_by(Arc::new(Object::new(2_i32)))
        .expect("outer override");

    provider
        .override_by(Arc::new(Object::new(3_i32)))
        .expect("inner override")
        .within(|provider| assert_eq!(value_of(provider), 3));

    assert!(provider.is_overridden());
    assert_eq!(value_of(&provider), 2);
}

#[test]
fn test_within_resets_when_closure_panics() {
    let provider = Object::new(1_i32);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        provider
            .override_by(Arc::new(Object::new(2_i32)))
            .expect("override")
            .within(|_| panic!("failure inside scope"));
    }));

    assert!(outcome.is_err());
    assert!(!provider.is_overridden());
}

#[test]
fn test_within_returns_closure_result() {
    let provider = Object::new(1_i32);

    let seen = provider
        .override_by(Arc::new(Object::new(7_i32)))
        .expect("override")
        .within(value_of);

    assert_eq!(seen, 7);
    assert_eq!(value_of(&provider), 1);
}

#[test]
fn test_scoped_drop_after_manual_reset_does_not_panic() {
    let provider = Object::new(1_i32);
    let guard = provider
        .override_by(Arc::new(Object::new(2_i32)))
        .expect("override")
        .scoped();

    provider.reset_override();
    drop(guard);

    assert!(!provider.is_overridden());
}

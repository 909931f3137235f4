//! Tests for the Object provider

use std::sync::Arc;

use injector_domain::{Args, Instance};
use injector_providers::{Object, Provider, ProviderExt};

#[derive(Debug)]
struct Settings {
    name: &'static str,
}

#[test]
fn test_object_returns_same_instance_every_call() {
    let provider = Object::new(Settings { name: "prod" });

    let first = provider.call().expect("first call");
    for _ in 0..10 {
        assert!(provider.call().expect("call").ptr_eq(&first));
    }
    assert_eq!(
        first.downcast_ref::<Settings>().map(|s| s.name),
        Some("prod")
    );
}

#[test]
fn test_object_from_instance_keeps_identity() {
    let shared = Arc::new(Settings { name: "shared" });
    let provider = Object::from_instance(Instance::from_arc(Arc::clone(&shared)));

    let provided = provider
        .call()
        .expect("call")
        .downcast::<Settings>()
        .expect("settings");

    assert!(Arc::ptr_eq(&shared, &provided));
    assert!(provider.provides().is::<Settings>());
}

#[test]
fn test_object_ignores_arguments() {
    let provider = Object::new(3_u8);

    let with_args = provider
        .provide(
            &Args::none()
                .with_arg(Instance::new(1_u8))
                .with_kwarg("x", Instance::new(2_u8)),
        )
        .expect("call with args");

    assert!(with_args.ptr_eq(provider.provides()));
}

#[test]
fn test_object_display_mentions_provided_type() {
    let provider = Object::new(Settings { name: "dev" });
    let repr = provider.to_string();

    assert!(repr.contains("injector_providers.object.Object("));
    assert!(repr.contains("Settings"));
}

#[test]
fn test_object_description_replaces_type_in_display() {
    let provider = Object::new(Settings { name: "dev" }).with_description("Settings { dev }");

    let repr = provider.to_string();

    assert!(repr.contains("Object(Settings { dev }) at 0x"));
    assert_eq!(
        provider.provides_description().as_deref(),
        Some("Settings { dev }")
    );
    assert!(provider.call().expect("call").is::<Settings>());
}

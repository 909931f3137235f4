//! Tests for the ExternalDependency provider

use std::sync::Arc;

use injector_domain::{Error, Instance, InstanceOf};
use injector_providers::{ExternalDependency, Object, ProviderExt};

use crate::test_utils::CountingProvider;

#[derive(Debug)]
struct Connection {
    dsn: &'static str,
}

#[derive(Debug)]
struct Cache;

fn connection_dependency() -> ExternalDependency {
    ExternalDependency::new(InstanceOf::of::<Connection>())
}

#[test]
fn test_unbound_dependency_fails() {
    let dependency = connection_dependency();

    let err = dependency.call().expect_err("unbound");

    assert!(matches!(err, Error::DependencyNotDefined));
    assert!(!dependency.is_overridden());
}

#[test]
fn test_bound_dependency_returns_provided_instance() {
    let dependency = connection_dependency();
    let connection = Instance::new(Connection { dsn: "sqlite::memory:" });

    dependency
        .provided_by(Arc::new(Object::from_instance(connection.clone())))
        .expect("bind");

    let provided = dependency.call().expect("bound call");
    assert!(provided.ptr_eq(&connection));
    assert_eq!(
        provided.downcast_ref::<Connection>().map(|c| c.dsn),
        Some("sqlite::memory:")
    );
}

#[test]
fn test_mismatched_instance_fails() {
    let dependency = connection_dependency();
    dependency
        .provided_by(Arc::new(Object::new(Cache)))
        .expect("bind");

    let err = dependency.call().expect_err("type mismatch");

    match err {
        Error::InstanceTypeMismatch { value, expected } => {
            assert!(value.contains("Cache"));
            assert!(expected.ends_with("Connection"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_type_is_checked_on_every_call() {
    let dependency = ExternalDependency::new(InstanceOf::of::<usize>());
    let counter = Arc::new(CountingProvider::default());
    dependency.provided_by(Arc::clone(&counter)).expect("bind");

    for expected in 1..=3_usize {
        let provided = dependency.call().expect("call");
        assert_eq!(provided.downcast_ref::<usize>(), Some(&expected));
    }

    dependency
        .provided_by(Arc::new(Object::new("not a number")))
        .expect("rebind");
    assert!(dependency.call().is_err());

    dependency.reset_last_overriding().expect("unbind last");
    assert!(dependency.call().is_ok());
}

#[test]
fn test_capability_descriptor() {
    let dependency = ExternalDependency::new(InstanceOf::satisfying("Storage", |i| {
        i.is::<Connection>() || i.is::<Cache>()
    }));

    dependency
        .provided_by(Arc::new(Object::new(Cache)))
        .expect("bind cache");
    assert!(dependency.call().is_ok());

    dependency.reset_override();
    dependency
        .provided_by(Arc::new(Object::new(1_i32)))
        .expect("bind number");

    let err = dependency.call().expect_err("not storage");
    assert!(err.to_string().ends_with("is not an instance of Storage"));
}

#[test]
fn test_reset_returns_to_unbound() {
    let dependency = connection_dependency();
    dependency
        .provided_by(Arc::new(Object::new(Connection { dsn: "pg" })))
        .expect("bind")
        .exit()
        .expect("unbind");

    assert!(matches!(dependency.call(), Err(Error::DependencyNotDefined)));
}

#[test]
fn test_plain_value_binding() {
    let dependency = connection_dependency();

    dependency
        .provided_by(Instance::new(Connection { dsn: "mysql" }))
        .expect("bind value");

    assert!(dependency.call().expect("call").is::<Connection>());
}

#[test]
fn test_display_names_required_type() {
    let dependency = connection_dependency();
    let repr = dependency.to_string();

    assert!(repr.contains("ExternalDependency("));
    assert!(repr.contains("Connection"));
}

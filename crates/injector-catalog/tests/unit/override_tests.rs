//! Tests for catalog-to-catalog overriding

use std::sync::Arc;

use injector_catalog::{CatalogDefinition, catalog, overrides};
use injector_domain::{CatalogConfig, Error, Instance, InstanceOf, MissingMemberPolicy};
use injector_providers::{ExternalDependency, Object, ProviderExt, ProviderRef};

fn int_member(definition: &CatalogDefinition, name: &str) -> i32 {
    *definition
        .provider(name)
        .expect("declared member")
        .call()
        .expect("call")
        .downcast_ref::<i32>()
        .expect("i32 member")
}

#[test]
fn test_override_catalog_overrides_same_named_members() {
    let base = catalog!(Base {
        x: Arc::new(Object::new(1_i32)),
    });
    let overriding = catalog!(Override {
        x: Arc::new(Object::new(2_i32)),
        z: Arc::new(Object::new(3_i32)),
    });

    base.override_catalog(&overriding).expect("override catalog");

    assert_eq!(int_member(&base, "x"), 2);
    assert!(base.provider("z").is_none());
    assert!(!overriding.provider("z").expect("z").is_overridden());
}

#[test]
fn test_shared_provider_is_not_overridden() {
    let shared: ProviderRef = Arc::new(Object::new(1_i32));
    let base = CatalogDefinition::builder("Base")
        .provider("shared", Arc::clone(&shared))
        .provider("own", Arc::new(Object::new(2_i32)))
        .build();
    let overriding = CatalogDefinition::builder("Override")
        .provider("shared", Arc::clone(&shared))
        .provider("own", Arc::new(Object::new(3_i32)))
        .build();

    base.override_catalog(&overriding).expect("override catalog");

    assert!(!shared.is_overridden());
    assert_eq!(int_member(&base, "own"), 3);
}

#[test]
fn test_missing_member_policy_fail_rejects_before_overriding() {
    let base = catalog!(Base {
        x: Arc::new(Object::new(1_i32)),
    });
    let overriding = catalog!(Override {
        x: Arc::new(Object::new(2_i32)),
        z: Arc::new(Object::new(3_i32)),
    });
    let config = CatalogConfig::default().with_missing_member(MissingMemberPolicy::Fail);

    let err = base
        .override_catalog_with(&overriding, &config)
        .expect_err("z is missing on base");

    match err {
        Error::UnknownProvider { catalog, name } => {
            assert_eq!(catalog, "Base");
            assert_eq!(name, "z");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!base.provider("x").expect("x").is_overridden());
}

#[test]
fn test_overrides_decorator_returns_overriding_catalog() {
    let base = catalog!(Base {
        x: Arc::new(Object::new(1_i32)),
    });
    let declared = catalog!(Patch {
        x: Arc::new(Object::new(5_i32)),
    });

    let returned = overrides(&base)(Arc::clone(&declared)).expect("decorate");

    assert!(Arc::ptr_eq(&returned, &declared));
    assert_eq!(int_member(&base, "x"), 5);
}

#[test]
fn test_build_overriding_applies_at_declaration() {
    let base = catalog!(Base {
        x: Arc::new(Object::new(1_i32)),
        y: Arc::new(Object::new(10_i32)),
    });

    let patch = CatalogDefinition::builder("Patch")
        .provider("y", Instance::new(20_i32))
        .build_overriding(&base)
        .expect("declare override");

    assert_eq!(patch.name(), "Patch");
    assert_eq!(int_member(&base, "x"), 1);
    assert_eq!(int_member(&base, "y"), 20);
}

#[test]
fn test_layered_catalog_overrides_can_be_undone() {
    let base = catalog!(Base {
        x: Arc::new(Object::new(1_i32)),
    });
    let first = catalog!(First {
        x: Arc::new(Object::new(2_i32)),
    });
    let second = catalog!(Second {
        x: Arc::new(Object::new(3_i32)),
    });

    base.override_catalog(&first).expect("first");
    base.override_catalog(&second).expect("second");
    assert_eq!(int_member(&base, "x"), 3);

    let x = base.provider("x").expect("x");
    x.reset_last_overriding().expect("undo second");
    assert_eq!(int_member(&base, "x"), 2);

    x.reset_override();
    assert_eq!(int_member(&base, "x"), 1);
}

#[test]
fn test_external_dependencies_bound_by_catalog_override() {
    struct Connection {
        dsn: &'static str,
    }

    let interfaces = catalog!(Interfaces {
        database: Arc::new(ExternalDependency::new(InstanceOf::of::<Connection>())),
    });
    let database = interfaces.provider("database").cloned().expect("database");
    assert!(database.call().is_err());

    overrides(&interfaces)(catalog!(Implementations {
        database: Arc::new(Object::new(Connection { dsn: "sqlite::memory:" })),
    }))
    .expect("bind implementations");

    let connection = database.call().expect("bound dependency");
    assert_eq!(
        connection.downcast_ref::<Connection>().map(|c| c.dsn),
        Some("sqlite::memory:")
    );
}

#[test]
fn test_override_swapping_members_fails_and_rolls_back() {
    let first: ProviderRef = Arc::new(Object::new(1_i32));
    let second: ProviderRef = Arc::new(Object::new(2_i32));
    let base = CatalogDefinition::builder("Base")
        .provider("a", Arc::clone(&first))
        .provider("b", Arc::clone(&second))
        .build();
    let swapped = CatalogDefinition::builder("Swapped")
        .provider("a", Arc::clone(&second))
        .provider("b", Arc::clone(&first))
        .build();

    let err = base
        .override_catalog(&swapped)
        .expect_err("swapping members closes a cycle");

    assert!(matches!(err, Error::OverriddenWithItself { .. }));
    assert!(!first.is_overridden());
    assert!(!second.is_overridden());
    assert_eq!(int_member(&base, "a"), 1);
    assert_eq!(int_member(&base, "b"), 2);
}

//! # Injector
//!
//! Dependency injection providers with overriding, and catalogs of named
//! providers.
//!
//! This crate is the public facade: it re-exports the layers below so
//! applications depend on a single crate.
//!
//! ## Features
//!
//! - **Providers**: objects that produce values on call ([`Object`],
//!   [`Delegate`], [`ExternalDependency`] or your own [`Provider`])
//! - **Overriding**: any provider can be overridden by another, stacked,
//!   and reset, globally or for a scope
//! - **Catalogs**: named groups of providers, overridable as a whole, with
//!   consumer-side whitelisting
//! - **Configuration and logging**: figment configuration and tracing setup
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use injector::prelude::*;
//!
//! let greeting = Arc::new(Object::new("hello"));
//! assert_eq!(greeting.call()?.downcast_ref::<&str>(), Some(&"hello"));
//!
//! {
//!     let _scope = greeting.override_by(Instance::new("bonjour"))?.scoped();
//!     assert_eq!(greeting.call()?.downcast_ref::<&str>(), Some(&"bonjour"));
//! }
//! assert!(!greeting.is_overridden());
//! # Ok::<(), injector::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, values and configuration value objects
//! - `providers` - provider contract, concrete providers and overriding
//! - `catalog` - catalog definitions, whitelisted access and the `overrides` decorator
//! - `infrastructure` - configuration loading and logging

/// Domain layer - errors, values and configuration value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use injector_domain::*;
}

/// Providers - contract, concrete providers and overriding
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use injector_providers::*;
}

/// Catalogs - definitions, access and overriding
///
/// Re-exports from the catalog crate for convenience
pub mod catalog {
    pub use injector_catalog::*;
}

/// Infrastructure layer - configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use injector_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::*;
pub use providers::*;
pub use catalog::{Catalog, CatalogBuilder, CatalogDefinition, overrides};

/// Everything needed to declare, call and override providers
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogDefinition, overrides};
    pub use crate::domain::{Args, Error, Instance, InstanceOf, Result};
    pub use crate::providers::{
        Delegatable, Delegate, ExternalDependency, IntoProvider, Object, Provider, ProviderExt,
        ProviderRef,
    };
    pub use injector_catalog::catalog;
}

//! # Catalogs
//!
//! A catalog groups named providers. Two types are involved:
//!
//! - [`CatalogDefinition`]: the declared members (name → provider),
//!   registered once through [`CatalogBuilder`] or the [`catalog!`] macro.
//!   Definitions can override each other's same-named providers.
//! - [`Catalog`]: access to a definition restricted to the providers a
//!   consumer declared it uses. Reading any other member fails.
//!
//! ```
//! use std::sync::Arc;
//! use injector_catalog::{Catalog, catalog, overrides};
//! use injector_providers::{Object, ProviderExt};
//!
//! let services = catalog!(Services {
//!     database: Arc::new(Object::new("postgres://prod")),
//!     cache: Arc::new(Object::new("redis://prod")),
//! });
//!
//! let _test_services = overrides(&services)(catalog!(TestServices {
//!     database: Arc::new(Object::new("sqlite::memory:")),
//! }))?;
//!
//! let database = services.provider("database").cloned().expect("declared");
//! let consumer = Catalog::new(Arc::clone(&services), [database]);
//!
//! let url = consumer.get("database")?.call()?;
//! assert_eq!(url.downcast_ref::<&str>(), Some(&"sqlite::memory:"));
//! assert!(consumer.get("cache").is_err());
//! # Ok::<(), injector_domain::Error>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod definition;
pub mod macros;

pub use builder::CatalogBuilder;
pub use catalog::Catalog;
pub use definition::{CatalogDefinition, overrides};

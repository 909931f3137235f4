//! # Providers
//!
//! Providers are shared objects that produce an [`Instance`] when called.
//! Every provider can be overridden at run time by another provider without
//! changing its identity: code holding an `Arc` to it keeps calling the same
//! object and transparently receives the overriding provider's result.
//!
//! ## Provider Types
//!
//! | Provider | Produces |
//! |----------|----------|
//! | [`Object`] | The wrapped value, unchanged, on every call |
//! | [`Delegate`] | The wrapped provider itself |
//! | [`ExternalDependency`] | The result of the provider it is bound to, type checked |
//!
//! ## Overriding
//!
//! ```
//! use std::sync::Arc;
//! use injector_providers::{Object, ProviderExt};
//!
//! let database = Arc::new(Object::new("postgres://prod"));
//! let test_double = Arc::new(Object::new("sqlite::memory:"));
//!
//! database
//!     .override_by(Arc::clone(&test_double))?
//!     .within(|database| {
//!         let url = database.call().unwrap();
//!         assert_eq!(url.downcast_ref::<&str>(), Some(&"sqlite::memory:"));
//!     });
//!
//! assert!(!database.is_overridden());
//! # Ok::<(), injector_domain::Error>(())
//! ```
//!
//! [`Instance`]: injector_domain::Instance

pub mod context;
pub mod delegate;
pub mod external;
pub mod object;
pub mod overrides;
pub mod provider;
pub mod utils;

pub use context::{OverridingContext, ScopedOverride};
pub use delegate::{Delegatable, Delegate};
pub use external::ExternalDependency;
pub use object::Object;
pub use overrides::OverrideStack;
pub use provider::{IntoProvider, Provider, ProviderExt, ProviderRef};
pub use utils::{ensure_is_provider, is_provider, represent_provider};

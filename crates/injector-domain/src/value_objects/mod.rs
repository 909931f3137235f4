//! Domain Value Objects
//!
//! Immutable values that flow through providers. None of them carry
//! provider state; they describe what is produced, what a call receives and
//! what a consumer requires.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Instance`] | Shared, type-erased value produced by a provider |
//! | [`Args`] | Positional and keyword arguments of a provider call |
//! | [`InstanceOf`] | Descriptor of a required type or capability |
//! | [`CatalogConfig`] | Catalog override behaviour |

/// Call arguments
pub mod args;
/// Configuration value objects
pub mod config;
/// Provided values
pub mod instance;
/// Type descriptors
pub mod instance_of;

pub use args::Args;
pub use config::{CatalogConfig, MissingMemberPolicy};
pub use instance::Instance;
pub use instance_of::InstanceOf;

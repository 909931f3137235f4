//! Configuration
//!
//! [`AppConfig`] gathers the tunable behaviour of the framework. It is
//! loaded by [`ConfigLoader`] from defaults, an optional TOML file and
//! `INJECTOR_` environment variables, or assembled with [`ConfigBuilder`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig};

//! # Domain Layer
//!
//! Core types shared by every layer of the provider framework.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | The single error type raised for every contract violation |
//! | [`value_objects`] | Provided values, call arguments and type descriptors |
//!
//! The domain layer has no knowledge of providers themselves: it only
//! describes what a provider produces ([`Instance`]), what it is called with
//! ([`Args`]) and what a consumer expects ([`InstanceOf`]).

pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{Args, CatalogConfig, Instance, InstanceOf, MissingMemberPolicy};

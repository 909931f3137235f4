//! Object provider

use std::any::Any;
use std::fmt;

use injector_domain::{Args, Instance, Result};

use crate::overrides::OverrideStack;
use crate::provider::Provider;
use crate::utils::represent_provider;

/// Provider that returns one value "as is"
///
/// Every call returns the same [`Instance`], so results are identical
/// (`Instance::ptr_eq`) across calls.
///
/// The value is type-erased, so diagnostics name its type only. Use
/// [`Object::with_description`] to show the value itself.
pub struct Object {
    provides: Instance,
    description: Option<String>,
    overrides: OverrideStack,
}

impl Object {
    /// Provide `value`
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_instance(Instance::new(value))
    }

    /// Provide an existing instance without wrapping it again
    pub fn from_instance(provides: Instance) -> Self {
        Self {
            provides,
            description: None,
            overrides: OverrideStack::new(),
        }
    }

    /// Describe the provided value in diagnostics
    ///
    /// ```
    /// use injector_providers::Object;
    ///
    /// let port = Object::new(8080_u16).with_description("8080");
    /// assert!(port.to_string().contains("Object(8080)"));
    /// ```
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The provided value
    pub fn provides(&self) -> &Instance {
        &self.provides
    }
}

impl Provider for Object {
    fn overrides(&self) -> &OverrideStack {
        &self.overrides
    }

    fn provide_instance(&self, _args: &Args) -> Result<Instance> {
        Ok(self.provides.clone())
    }

    fn provides_description(&self) -> Option<String> {
        Some(
            self.description
                .clone()
                .unwrap_or_else(|| format!("{:?}", self.provides)),
        )
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&represent_provider(
            self,
            self.provides_description().as_deref(),
        ))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("provides", &self.provides)
            .field("overridden_by", &self.overrides)
            .finish()
    }
}

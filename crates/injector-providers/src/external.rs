//! External dependency provider

use std::fmt;

use injector_domain::{Args, Error, Instance, InstanceOf, Result};
use tracing::trace;

use crate::context::OverridingContext;
use crate::overrides::OverrideStack;
use crate::provider::{IntoProvider, Provider, ProviderExt};
use crate::utils::represent_provider;

/// Provider describing a dependency interface
///
/// Declares which type a dependency must have without providing it. Client
/// code binds an implementation with [`ExternalDependency::provided_by`];
/// until then every call fails. Each call checks the bound provider's
/// result against the declared type.
///
/// ```
/// use std::sync::Arc;
/// use injector_domain::InstanceOf;
/// use injector_providers::{ExternalDependency, Object, ProviderExt};
///
/// struct Connection;
///
/// let database = ExternalDependency::new(InstanceOf::of::<Connection>());
/// assert!(database.call().is_err());
///
/// database.provided_by(Arc::new(Object::new(Connection)))?;
/// assert!(database.call()?.is::<Connection>());
/// # Ok::<(), injector_domain::Error>(())
/// ```
pub struct ExternalDependency {
    instance_of: InstanceOf,
    overrides: OverrideStack,
}

impl ExternalDependency {
    /// Declare a dependency on `instance_of`
    pub fn new(instance_of: InstanceOf) -> Self {
        Self {
            instance_of,
            overrides: OverrideStack::new(),
        }
    }

    /// The required type
    pub fn instance_of(&self) -> &InstanceOf {
        &self.instance_of
    }

    /// Bind the provider of this dependency
    ///
    /// Same as [`ProviderExt::override_by`].
    pub fn provided_by<O: IntoProvider>(&self, provider: O) -> Result<OverridingContext<'_, Self>> {
        self.override_by(provider)
    }
}

impl Provider for ExternalDependency {
    fn overrides(&self) -> &OverrideStack {
        &self.overrides
    }

    // Bypasses the default dispatch: there is no strategy to fall back to,
    // and the result is checked on every call.
    fn provide(&self, args: &Args) -> Result<Instance> {
        let Some(provider) = self.overrides.last() else {
            return Err(Error::DependencyNotDefined);
        };

        let instance = provider.provide(args)?;
        if !self.instance_of.matches(&instance) {
            return Err(Error::type_mismatch(
                format!("{instance:?}"),
                self.instance_of.name(),
            ));
        }

        trace!(dependency = %self, "External dependency resolved");
        Ok(instance)
    }

    fn provides_description(&self) -> Option<String> {
        Some(self.instance_of.name().to_string())
    }
}

impl fmt::Display for ExternalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&represent_provider(
            self,
            self.provides_description().as_deref(),
        ))
    }
}

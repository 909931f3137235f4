//! Delegate provider

use std::fmt;
use std::sync::Arc;

use injector_domain::{Args, Instance, Result};

use crate::overrides::OverrideStack;
use crate::provider::{Provider, ProviderRef};
use crate::utils::{ensure_is_provider, represent_provider};

/// Provider that provides another provider
///
/// Calling a delegate does not call the delegated provider: it returns the
/// delegated provider itself, wrapped in an [`Instance`]. This is how a
/// provider is passed around as a value.
///
/// ```
/// use std::sync::Arc;
/// use injector_providers::{Delegatable, Object, ProviderExt, ProviderRef, ensure_is_provider};
///
/// let provider: ProviderRef = Arc::new(Object::new(42_i32));
/// let delegated = ensure_is_provider(&provider.delegate().call()?)?;
///
/// assert!(Arc::ptr_eq(&provider, &delegated));
/// # Ok::<(), injector_domain::Error>(())
/// ```
pub struct Delegate {
    delegated: ProviderRef,
    overrides: OverrideStack,
}

impl Delegate {
    /// Delegate `delegated`
    pub fn new(delegated: ProviderRef) -> Self {
        Self {
            delegated,
            overrides: OverrideStack::new(),
        }
    }

    /// Delegate the provider held by `instance`
    ///
    /// # Errors
    ///
    /// Returns [`injector_domain::Error::NotAProvider`] if `instance` does
    /// not hold a provider.
    pub fn from_instance(instance: &Instance) -> Result<Self> {
        ensure_is_provider(instance).map(Self::new)
    }

    /// The delegated provider
    pub fn delegated(&self) -> &ProviderRef {
        &self.delegated
    }
}

impl Provider for Delegate {
    fn overrides(&self) -> &OverrideStack {
        &self.overrides
    }

    fn provide_instance(&self, _args: &Args) -> Result<Instance> {
        Ok(Instance::new(Arc::clone(&self.delegated)))
    }

    fn provides_description(&self) -> Option<String> {
        Some(self.delegated.to_string())
    }
}

impl fmt::Display for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&represent_provider(
            self,
            self.provides_description().as_deref(),
        ))
    }
}

/// Creation of delegates from shared providers
pub trait Delegatable {
    /// A new [`Delegate`] of this provider
    fn delegate(&self) -> Delegate;
}

impl<P: Provider> Delegatable for Arc<P> {
    fn delegate(&self) -> Delegate {
        Delegate::new(Arc::clone(self) as ProviderRef)
    }
}

impl Delegatable for ProviderRef {
    fn delegate(&self) -> Delegate {
        Delegate::new(Arc::clone(self))
    }
}

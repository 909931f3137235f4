//! Base provider contract
//!
//! [`Provider`] is what every provider implements: access to its override
//! stack and its providing strategy. [`ProviderExt`] adds the override
//! operations on top of it for every provider, sized or not.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use injector_domain::{Args, Error, Instance, Result};
use tracing::{debug, trace};

use crate::context::OverridingContext;
use crate::object::Object;
use crate::overrides::OverrideStack;
use crate::utils::reaches_provider;

/// Shared handle to any provider
pub type ProviderRef = Arc<dyn Provider>;

/// Base provider trait
///
/// A provider produces an [`Instance`] each time it is called. The
/// production itself lives in [`Provider::provide_instance`]; callers go
/// through [`Provider::provide`], which first checks whether the provider is
/// overridden and, if so, resolves to the last overriding provider instead.
/// Resolution follows the whole chain: an overriding provider that is itself
/// overridden resolves to its own last override, and so on.
///
/// # Implementing a provider
///
/// ```
/// use std::fmt;
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// use injector_domain::{Args, Instance, Result};
/// use injector_providers::{OverrideStack, Provider, ProviderExt, represent_provider};
///
/// #[derive(Default)]
/// struct Sequence {
///     next: AtomicU64,
///     overrides: OverrideStack,
/// }
///
/// impl Provider for Sequence {
///     fn overrides(&self) -> &OverrideStack {
///         &self.overrides
///     }
///
///     fn provide_instance(&self, _args: &Args) -> Result<Instance> {
///         Ok(Instance::new(self.next.fetch_add(1, Ordering::Relaxed)))
///     }
/// }
///
/// impl fmt::Display for Sequence {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(&represent_provider(self, None))
///     }
/// }
///
/// let ids = Sequence::default();
/// assert_eq!(ids.call()?.downcast_ref::<u64>(), Some(&0));
/// assert_eq!(ids.call()?.downcast_ref::<u64>(), Some(&1));
/// # Ok::<(), injector_domain::Error>(())
/// ```
pub trait Provider: Any + Send + Sync + fmt::Display {
    /// Override stack of this provider
    fn overrides(&self) -> &OverrideStack;

    /// Providing strategy
    ///
    /// Called when the provider is not overridden. Provider types that do
    /// not implement it fail with [`Error::NotImplemented`].
    fn provide_instance(&self, _args: &Args) -> Result<Instance> {
        Err(Error::not_implemented(self.to_string()))
    }

    /// Provide an instance, honoring overrides
    fn provide(&self, args: &Args) -> Result<Instance> {
        match self.overrides().last() {
            Some(overriding) => {
                trace!(provider = %self, overriding = %overriding, "Resolving through override");
                overriding.provide(args)
            }
            None => self.provide_instance(args),
        }
    }

    /// Description of what the provider provides, for diagnostics
    fn provides_description(&self) -> Option<String> {
        None
    }
}

/// Conversion into a shared provider handle
///
/// Used wherever a provider is accepted as an argument. Plain values
/// ([`Instance`]s that do not hold a provider) become [`Object`] providers.
pub trait IntoProvider {
    /// Convert into a shared provider handle
    fn into_provider(self) -> ProviderRef;
}

impl<P: Provider> IntoProvider for Arc<P> {
    fn into_provider(self) -> ProviderRef {
        self
    }
}

impl IntoProvider for ProviderRef {
    fn into_provider(self) -> ProviderRef {
        self
    }
}

impl IntoProvider for Instance {
    fn into_provider(self) -> ProviderRef {
        if let Some(provider) = self.downcast_ref::<ProviderRef>() {
            return Arc::clone(provider);
        }
        Arc::new(Object::from_instance(self))
    }
}

/// Override operations available on every provider
pub trait ProviderExt: Provider {
    /// Provide an instance without arguments
    fn call(&self) -> Result<Instance> {
        self.provide(&Args::none())
    }

    /// Whether at least one override is active
    fn is_overridden(&self) -> bool {
        !self.overrides().is_empty()
    }

    /// Most recent override, if any
    fn last_overriding(&self) -> Option<ProviderRef> {
        self.overrides().last()
    }

    /// All active overrides, oldest first
    fn overridden_by(&self) -> Vec<ProviderRef> {
        self.overrides().snapshot()
    }

    /// Override this provider with another one
    ///
    /// The overriding provider is pushed on top of the override stack. The
    /// returned context can undo exactly this override, either explicitly or
    /// at the end of a scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverriddenWithItself`] if `overriding` is this very
    /// provider, or if any override reachable from `overriding` leads back
    /// to it. The override stack is left untouched.
    fn override_by<O: IntoProvider>(&self, overriding: O) -> Result<OverridingContext<'_, Self>> {
        let overriding = overriding.into_provider();
        if reaches_provider(&overriding, self) {
            return Err(Error::overridden_with_itself(self.to_string()));
        }

        self.overrides().push(Arc::clone(&overriding));
        debug!(
            provider = %self,
            overriding = %overriding,
            depth = self.overrides().len(),
            "Provider overridden"
        );
        Ok(OverridingContext::new(self, overriding))
    }

    /// Remove the most recent override
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOverridden`] if there is nothing to reset.
    fn reset_last_overriding(&self) -> Result<()> {
        if !self.is_overridden() {
            return Err(Error::not_overridden(self.to_string()));
        }
        self.overrides().pop();
        debug!(provider = %self, depth = self.overrides().len(), "Last override reset");
        Ok(())
    }

    /// Remove every override
    fn reset_override(&self) {
        self.overrides().clear();
        debug!(provider = %self, "All overrides reset");
    }
}

impl<P: Provider + ?Sized> ProviderExt for P {}

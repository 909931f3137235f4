//! Overriding contexts
//!
//! [`ProviderExt::override_by`] leaves the override in place until someone
//! resets it. The context it returns remembers which override was applied so
//! that it can be undone, now ([`OverridingContext::exit`]) or when a scope
//! ends ([`OverridingContext::scoped`], [`OverridingContext::within`]).

use std::fmt;

use injector_domain::Result;
use tracing::warn;

use crate::provider::{Provider, ProviderExt, ProviderRef};

/// Pairing of an overridden provider with the provider overriding it
pub struct OverridingContext<'a, P: Provider + ?Sized> {
    overridden: &'a P,
    overriding: ProviderRef,
}

impl<'a, P: Provider + ?Sized> OverridingContext<'a, P> {
    pub(crate) fn new(overridden: &'a P, overriding: ProviderRef) -> Self {
        Self {
            overridden,
            overriding,
        }
    }

    /// The overridden provider
    pub fn overridden(&self) -> &'a P {
        self.overridden
    }

    /// The provider that overrode it
    pub fn overriding(&self) -> &ProviderRef {
        &self.overriding
    }

    /// Undo the override now
    ///
    /// # Errors
    ///
    /// Fails if the overridden provider was reset in the meantime.
    pub fn exit(self) -> Result<()> {
        self.overridden.reset_last_overriding()
    }

    /// Keep the override until the returned guard is dropped
    pub fn scoped(self) -> ScopedOverride<'a, P> {
        ScopedOverride { context: self }
    }

    /// Run `f` with the override applied, then undo it
    ///
    /// The override is undone even if `f` panics.
    pub fn within<R>(self, f: impl FnOnce(&'a P) -> R) -> R {
        let guard = self.scoped();
        f(guard.context.overridden)
    }
}

impl<P: Provider + ?Sized> fmt::Debug for OverridingContext<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverridingContext")
            .field("overridden", &self.overridden.to_string())
            .field("overriding", &self.overriding.to_string())
            .finish()
    }
}

/// Guard resetting the last override of a provider when dropped
#[must_use = "the override is reset as soon as the guard is dropped"]
pub struct ScopedOverride<'a, P: Provider + ?Sized> {
    context: OverridingContext<'a, P>,
}

impl<'a, P: Provider + ?Sized> ScopedOverride<'a, P> {
    /// The overridden provider
    pub fn overridden(&self) -> &'a P {
        self.context.overridden
    }

    /// The provider that overrode it
    pub fn overriding(&self) -> &ProviderRef {
        &self.context.overriding
    }
}

impl<P: Provider + ?Sized> Drop for ScopedOverride<'_, P> {
    fn drop(&mut self) {
        if let Err(e) = self.context.overridden.reset_last_overriding() {
            warn!(error = %e, "Scoped override was already reset");
        }
    }
}

impl<P: Provider + ?Sized> fmt::Debug for ScopedOverride<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScopedOverride").field(&self.context).finish()
    }
}

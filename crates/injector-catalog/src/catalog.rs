//! Whitelisted catalog access

use std::fmt;
use std::sync::Arc;

use injector_domain::{Error, Result};
use injector_providers::ProviderRef;

use crate::definition::CatalogDefinition;

/// A catalog as seen by one consumer
///
/// Built from a definition and the providers the consumer declares it uses.
/// Only those providers can be read through [`Catalog::get`]; any other
/// declared member fails with [`Error::ProviderNotListed`].
pub struct Catalog {
    definition: Arc<CatalogDefinition>,
    used_providers: Vec<ProviderRef>,
}

impl Catalog {
    /// Access `definition` restricted to `used_providers`
    ///
    /// Duplicate providers are kept once.
    pub fn new<I>(definition: Arc<CatalogDefinition>, used_providers: I) -> Self
    where
        I: IntoIterator<Item = ProviderRef>,
    {
        let mut used: Vec<ProviderRef> = Vec::new();
        for provider in used_providers {
            if !used.iter().any(|known| Arc::ptr_eq(known, &provider)) {
                used.push(provider);
            }
        }
        Self {
            definition,
            used_providers: used,
        }
    }

    /// Underlying definition
    pub fn definition(&self) -> &Arc<CatalogDefinition> {
        &self.definition
    }

    /// Providers this catalog was declared to use
    pub fn used_providers(&self) -> &[ProviderRef] {
        &self.used_providers
    }

    /// Whether `provider` is one of the used providers
    pub fn is_used(&self, provider: &ProviderRef) -> bool {
        self.used_providers
            .iter()
            .any(|used| Arc::ptr_eq(used, provider))
    }

    /// Read member `name`
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownProvider`] if the definition has no such member
    /// - [`Error::ProviderNotListed`] if the member is not a used provider
    pub fn get(&self, name: &str) -> Result<ProviderRef> {
        let provider = self
            .definition
            .provider(name)
            .ok_or_else(|| Error::unknown_provider(self.definition.name(), name))?;

        if !self.is_used(provider) {
            return Err(Error::not_listed(name));
        }
        Ok(Arc::clone(provider))
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("definition", &self.definition.name())
            .field("used_providers", &self.used_providers.len())
            .finish()
    }
}

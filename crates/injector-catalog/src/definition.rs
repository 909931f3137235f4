//! Catalog definitions and catalog overriding

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use injector_domain::{CatalogConfig, Error, MissingMemberPolicy, Result};
use injector_providers::{Provider, ProviderExt, ProviderRef};
use tracing::{debug, warn};

use crate::builder::CatalogBuilder;

/// Declared members of a catalog
///
/// Members are registered once, at build time, and never change afterwards.
/// What changes is the providers themselves: overriding a definition with
/// another overrides its member providers in place, so every holder of those
/// providers sees the change.
pub struct CatalogDefinition {
    name: String,
    providers: BTreeMap<String, ProviderRef>,
}

impl CatalogDefinition {
    pub(crate) fn new(name: String, providers: BTreeMap<String, ProviderRef>) -> Self {
        Self { name, providers }
    }

    /// Start declaring a catalog
    pub fn builder(name: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(name)
    }

    /// Catalog name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared member by name, without any whitelist check
    pub fn provider(&self, name: &str) -> Option<&ProviderRef> {
        self.providers.get(name)
    }

    /// Member names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// All declared members
    pub fn all_providers(&self) -> BTreeMap<String, ProviderRef> {
        self.providers.clone()
    }

    /// Declared members whose provider is a `P`
    pub fn all_providers_of<P: Provider>(&self) -> BTreeMap<String, ProviderRef> {
        self.providers
            .iter()
            .filter(|(_, provider)| {
                let provider: &dyn Any = &***provider;
                provider.is::<P>()
            })
            .map(|(name, provider)| (name.clone(), Arc::clone(provider)))
            .collect()
    }

    /// Override this catalog's providers with `overriding`'s providers
    ///
    /// Uses the default [`CatalogConfig`]: members of `overriding` that this
    /// catalog does not declare are skipped.
    pub fn override_catalog(&self, overriding: &CatalogDefinition) -> Result<()> {
        self.override_catalog_with(overriding, &CatalogConfig::default())
    }

    /// Override this catalog's providers with `overriding`'s providers
    ///
    /// Every member of `overriding` that is not the very same provider under
    /// the same name in this catalog overrides this catalog's same-named
    /// member.
    ///
    /// # Errors
    ///
    /// With [`MissingMemberPolicy::Fail`], returns
    /// [`Error::UnknownProvider`] before overriding anything if `overriding`
    /// has a member this catalog does not declare.
    ///
    /// Returns [`Error::OverriddenWithItself`] if a member override would
    /// make a provider resolve to itself; overrides already applied by this
    /// call are reset first.
    pub fn override_catalog_with(
        &self,
        overriding: &CatalogDefinition,
        config: &CatalogConfig,
    ) -> Result<()> {
        let differing: Vec<(&String, &ProviderRef)> = overriding
            .providers
            .iter()
            .filter(|(name, provider)| {
                self.providers
                    .get(*name)
                    .is_none_or(|own| !Arc::ptr_eq(own, *provider))
            })
            .collect();

        if config.missing_member == MissingMemberPolicy::Fail
            && let Some((name, _)) = differing
                .iter()
                .find(|(name, _)| !self.providers.contains_key(*name))
        {
            return Err(Error::unknown_provider(&self.name, name.as_str()));
        }

        let mut applied: Vec<&ProviderRef> = Vec::new();
        for (name, provider) in differing {
            let Some(own) = self.providers.get(name) else {
                warn!(
                    catalog = %self.name,
                    overriding_catalog = %overriding.name,
                    member = %name,
                    "Skipping member missing on overridden catalog"
                );
                continue;
            };
            if let Err(e) = own.override_by(Arc::clone(provider)) {
                for member in &applied {
                    member.reset_last_overriding()?;
                }
                return Err(e);
            }
            applied.push(own);
        }

        debug!(
            catalog = %self.name,
            overriding_catalog = %overriding.name,
            "Catalog overridden"
        );
        Ok(())
    }
}

impl fmt::Debug for CatalogDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogDefinition")
            .field("name", &self.name)
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Declare that a catalog overrides `base`
///
/// Returns a function that overrides `base` with the catalog it receives
/// and hands that catalog back unchanged.
///
/// ```
/// use std::sync::Arc;
/// use injector_catalog::{catalog, overrides};
/// use injector_providers::{Object, ProviderExt};
///
/// let base = catalog!(Base { x: Arc::new(Object::new(1_i32)) });
/// let patched = overrides(&base)(catalog!(Patch { x: Arc::new(Object::new(2_i32)) }))?;
///
/// assert_eq!(patched.name(), "Patch");
/// assert_eq!(base.provider("x").unwrap().call()?.downcast_ref::<i32>(), Some(&2));
/// # Ok::<(), injector_domain::Error>(())
/// ```
pub fn overrides(
    base: &CatalogDefinition,
) -> impl FnOnce(Arc<CatalogDefinition>) -> Result<Arc<CatalogDefinition>> + '_ {
    move |overriding| {
        base.override_catalog(&overriding)?;
        Ok(overriding)
    }
}

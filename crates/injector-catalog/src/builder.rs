//! Catalog declaration builder

use std::collections::BTreeMap;
use std::sync::Arc;

use injector_domain::Result;
use injector_providers::{IntoProvider, ProviderRef};
use tracing::debug;

use crate::definition::{CatalogDefinition, overrides};

/// Builder registering the members of a catalog
///
/// ```
/// use std::sync::Arc;
/// use injector_catalog::CatalogDefinition;
/// use injector_domain::InstanceOf;
/// use injector_providers::ExternalDependency;
///
/// struct Connection;
///
/// let services = CatalogDefinition::builder("Services")
///     .provider("database", Arc::new(ExternalDependency::new(InstanceOf::of::<Connection>())))
///     .build();
///
/// assert_eq!(services.names().collect::<Vec<_>>(), vec!["database"]);
/// ```
pub struct CatalogBuilder {
    name: String,
    providers: BTreeMap<String, ProviderRef>,
}

impl CatalogBuilder {
    /// Start declaring catalog `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            providers: BTreeMap::new(),
        }
    }

    /// Declare a member
    ///
    /// Declaring the same name twice keeps the last provider.
    pub fn provider(mut self, name: impl Into<String>, provider: impl IntoProvider) -> Self {
        self.providers.insert(name.into(), provider.into_provider());
        self
    }

    /// Finish the declaration
    pub fn build(self) -> Arc<CatalogDefinition> {
        debug!(catalog = %self.name, members = self.providers.len(), "Catalog declared");
        Arc::new(CatalogDefinition::new(self.name, self.providers))
    }

    /// Finish the declaration and override `base` with it
    pub fn build_overriding(self, base: &CatalogDefinition) -> Result<Arc<CatalogDefinition>> {
        overrides(base)(self.build())
    }
}

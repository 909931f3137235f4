//! Declaration macro

/// Declare a catalog definition
///
/// Expands to a [`CatalogBuilder`](crate::CatalogBuilder) chain registering
/// each member under its identifier and evaluates to an
/// `Arc<CatalogDefinition>`. Combine it with a lazy static to declare
/// catalogs once per program.
///
/// ```
/// use std::sync::Arc;
/// use injector_catalog::catalog;
/// use injector_providers::Object;
///
/// let settings = catalog!(Settings {
///     host: Arc::new(Object::new("localhost")),
///     port: Arc::new(Object::new(8080_u16)),
/// });
///
/// assert_eq!(settings.name(), "Settings");
/// assert!(settings.provider("port").is_some());
/// ```
#[macro_export]
macro_rules! catalog {
    ($name:ident { $($member:ident : $provider:expr),* $(,)? }) => {
        $crate::CatalogDefinition::builder(stringify!($name))
            $(.provider(stringify!($member), $provider))*
            .build()
    };
}

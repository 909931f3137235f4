//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the provider framework
///
/// Every contract violation raised by providers and catalogs is one of these
/// variants. Mutating operations validate their input before touching any
/// state, so an `Err` always means nothing was changed.
#[derive(Error, Debug)]
pub enum Error {
    /// A provider was asked to override itself
    #[error("Provider {provider} could not be overridden with itself")]
    OverriddenWithItself {
        /// Representation of the provider
        provider: String,
    },

    /// An override was reset on a provider that is not overridden
    #[error("Provider {provider} is not overridden")]
    NotOverridden {
        /// Representation of the provider
        provider: String,
    },

    /// A provider type does not implement its providing strategy
    #[error("Providing strategy is not implemented for {provider}")]
    NotImplemented {
        /// Representation of the provider
        provider: String,
    },

    /// An external dependency was called before being provided
    #[error("Dependency is not defined")]
    DependencyNotDefined,

    /// A provided value does not match the declared type
    #[error("{value} is not an instance of {expected}")]
    InstanceTypeMismatch {
        /// Type name of the offending value
        value: String,
        /// Name of the expected type
        expected: String,
    },

    /// A value was used where a provider is required
    #[error("Expected provider instance, got {value}")]
    NotAProvider {
        /// Type name of the offending value
        value: String,
    },

    /// A catalog member is declared but not listed in the used providers
    #[error("Provider '{name}' is not listed in dependencies")]
    ProviderNotListed {
        /// Member name
        name: String,
    },

    /// A catalog has no member with this name
    #[error("Catalog '{catalog}' has no provider '{name}'")]
    UnknownProvider {
        /// Catalog name
        catalog: String,
        /// Member name
        name: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Provider error creation methods
impl Error {
    /// Create an error for a provider overridden with itself
    pub fn overridden_with_itself<S: Into<String>>(provider: S) -> Self {
        Self::OverriddenWithItself {
            provider: provider.into(),
        }
    }

    /// Create an error for resetting a provider that is not overridden
    pub fn not_overridden<S: Into<String>>(provider: S) -> Self {
        Self::NotOverridden {
            provider: provider.into(),
        }
    }

    /// Create an error for a missing providing strategy
    pub fn not_implemented<S: Into<String>>(provider: S) -> Self {
        Self::NotImplemented {
            provider: provider.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<V: Into<String>, E: Into<String>>(value: V, expected: E) -> Self {
        Self::InstanceTypeMismatch {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an error for a value that is not a provider
    pub fn not_a_provider<S: Into<String>>(value: S) -> Self {
        Self::NotAProvider {
            value: value.into(),
        }
    }
}

// Catalog error creation methods
impl Error {
    /// Create an error for a member missing from the used providers
    pub fn not_listed<S: Into<String>>(name: S) -> Self {
        Self::ProviderNotListed { name: name.into() }
    }

    /// Create an error for an undeclared catalog member
    pub fn unknown_provider<C: Into<String>, N: Into<String>>(catalog: C, name: N) -> Self {
        Self::UnknownProvider {
            catalog: catalog.into(),
            name: name.into(),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

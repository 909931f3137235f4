//! Configuration value objects

use serde::{Deserialize, Serialize};

/// What a catalog override does with members the base catalog lacks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMemberPolicy {
    /// Skip the member and leave the base catalog untouched
    #[default]
    Ignore,
    /// Fail the override before any member is overridden
    Fail,
}

/// Catalog behaviour configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Handling of overriding members missing on the base catalog
    pub missing_member: MissingMemberPolicy,
}

impl CatalogConfig {
    /// Configuration with the given missing-member policy
    pub fn with_missing_member(mut self, policy: MissingMemberPolicy) -> Self {
        self.missing_member = policy;
        self
    }
}

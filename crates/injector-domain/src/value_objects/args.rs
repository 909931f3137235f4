//! Provider call arguments

use std::collections::BTreeMap;

use super::Instance;

/// Positional and keyword arguments of a provider call
///
/// The providers of this crate family ignore their arguments, but overridden
/// providers forward them untouched to the provider they resolve to.
#[derive(Clone, Debug, Default)]
pub struct Args {
    positional: Vec<Instance>,
    keyword: BTreeMap<String, Instance>,
}

impl Args {
    /// Empty argument list
    pub fn none() -> Self {
        Self::default()
    }

    /// Append a positional argument
    pub fn with_arg(mut self, value: Instance) -> Self {
        self.positional.push(value);
        self
    }

    /// Set a keyword argument, replacing any previous value
    pub fn with_kwarg(mut self, name: impl Into<String>, value: Instance) -> Self {
        self.keyword.insert(name.into(), value);
        self
    }

    /// Positional arguments in call order
    pub fn positional(&self) -> &[Instance] {
        &self.positional
    }

    /// Keyword argument by name
    pub fn keyword(&self, name: &str) -> Option<&Instance> {
        self.keyword.get(name)
    }

    /// Keyword arguments ordered by name
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Instance)> {
        self.keyword.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether no argument was passed
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

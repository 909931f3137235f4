//! Provider override stack

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::provider::ProviderRef;

/// Ordered stack of providers overriding one provider
///
/// The call path only ever reads the stack, and does so through a lock-free
/// snapshot. Mutations replace the whole stack; they are not atomic with
/// respect to each other, so concurrent mutation of the same provider needs
/// external locking.
pub struct OverrideStack {
    overridden_by: ArcSwap<Vec<ProviderRef>>,
}

impl OverrideStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            overridden_by: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Whether no override is active
    pub fn is_empty(&self) -> bool {
        self.overridden_by.load().is_empty()
    }

    /// Number of active overrides
    pub fn len(&self) -> usize {
        self.overridden_by.load().len()
    }

    /// Most recent override
    pub fn last(&self) -> Option<ProviderRef> {
        self.overridden_by.load().last().cloned()
    }

    /// Copy of the stack, oldest first
    pub fn snapshot(&self) -> Vec<ProviderRef> {
        self.overridden_by.load().as_ref().clone()
    }

    pub(crate) fn push(&self, provider: ProviderRef) {
        self.overridden_by.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&provider));
            next
        });
    }

    pub(crate) fn pop(&self) -> Option<ProviderRef> {
        let mut popped = None;
        self.overridden_by.rcu(|current| {
            let mut next = Vec::clone(current);
            popped = next.pop();
            next
        });
        popped
    }

    pub(crate) fn clear(&self) {
        self.overridden_by.store(Arc::new(Vec::new()));
    }
}

impl Default for OverrideStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OverrideStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stack = self.overridden_by.load();
        f.debug_list()
            .entries(stack.iter().map(ToString::to_string))
            .finish()
    }
}

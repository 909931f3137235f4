//! Provider helper functions

use std::fmt::Write as _;
use std::sync::Arc;

use injector_domain::{Error, Instance, Result};

use crate::provider::ProviderRef;

/// Whether `instance` holds a provider
///
/// Providers travel as values when a [`Delegate`](crate::Delegate) produces
/// them; such instances hold a [`ProviderRef`].
pub fn is_provider(instance: &Instance) -> bool {
    instance.is::<ProviderRef>()
}

/// The provider held by `instance`
///
/// # Errors
///
/// Returns [`Error::NotAProvider`] if `instance` holds anything else.
pub fn ensure_is_provider(instance: &Instance) -> Result<ProviderRef> {
    instance
        .downcast_ref::<ProviderRef>()
        .cloned()
        .ok_or_else(|| Error::not_a_provider(format!("{instance:?}")))
}

/// Diagnostic representation of a provider
///
/// Renders as `<module.path.Type(provides) at 0x...>`, where `provides`
/// describes what the provider produces and is empty when unknown.
pub fn represent_provider<P: ?Sized>(provider: &P, provides: Option<&str>) -> String {
    let mut repr = String::from("<");
    repr.push_str(&std::any::type_name::<P>().replace("::", "."));
    repr.push('(');
    if let Some(provides) = provides {
        repr.push_str(provides);
    }
    let _ = write!(repr, ") at {:p}>", std::ptr::from_ref(provider).cast::<()>());
    repr
}

/// Whether `provider` and `other` are the same object
pub(crate) fn same_provider<P: ?Sized>(provider: &P, other: &ProviderRef) -> bool {
    std::ptr::addr_eq(std::ptr::from_ref(provider), Arc::as_ptr(other))
}

/// Whether `target` is `start` or sits anywhere in the overrides below it
///
/// Every stacked override is visited, not only the last ones: resetting an
/// override later can make an earlier one active again.
pub(crate) fn reaches_provider<P: ?Sized>(start: &ProviderRef, target: &P) -> bool {
    let mut pending = vec![Arc::clone(start)];
    let mut visited: Vec<ProviderRef> = Vec::new();

    while let Some(current) = pending.pop() {
        if same_provider(target, &current) {
            return true;
        }
        if visited.iter().any(|seen| Arc::ptr_eq(seen, &current)) {
            continue;
        }
        pending.extend(current.overrides().snapshot());
        visited.push(current);
    }
    false
}

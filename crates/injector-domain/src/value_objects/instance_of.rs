//! Required-type descriptors

use std::any::{Any, TypeId};
use std::fmt;

use super::Instance;

#[derive(Clone, Copy)]
enum TypeCheck {
    Exact(TypeId),
    Predicate(fn(&Instance) -> bool),
}

/// Describes the type a consumer requires from a provided value
///
/// Rust has no subclassing, so besides exact type matches a descriptor can
/// carry a predicate that accepts a family of types under one name.
///
/// # Example
///
/// ```
/// use injector_domain::{Instance, InstanceOf};
///
/// let number = InstanceOf::satisfying("Number", |i| i.is::<i32>() || i.is::<i64>());
///
/// assert!(number.matches(&Instance::new(3_i64)));
/// assert!(!number.matches(&Instance::new("3")));
/// assert!(InstanceOf::of::<String>().matches(&Instance::new(String::new())));
/// ```
#[derive(Clone, Copy)]
pub struct InstanceOf {
    name: &'static str,
    check: TypeCheck,
}

impl InstanceOf {
    /// Require exactly `T`
    pub fn of<T: Any>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            check: TypeCheck::Exact(TypeId::of::<T>()),
        }
    }

    /// Require any value accepted by `predicate`, reported as `name`
    pub fn satisfying(name: &'static str, predicate: fn(&Instance) -> bool) -> Self {
        Self {
            name,
            check: TypeCheck::Predicate(predicate),
        }
    }

    /// Name of the required type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `instance` satisfies this descriptor
    pub fn matches(&self, instance: &Instance) -> bool {
        match self.check {
            TypeCheck::Exact(type_id) => instance.value_type_id() == type_id,
            TypeCheck::Predicate(predicate) => predicate(instance),
        }
    }
}

impl fmt::Display for InstanceOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for InstanceOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceOf({})", self.name)
    }
}

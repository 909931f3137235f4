//! Type-erased provided values

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A value produced by a provider
///
/// Cloning an `Instance` clones the handle, not the value: every clone points
/// at the same allocation, so identity can be checked with
/// [`Instance::ptr_eq`].
///
/// # Example
///
/// ```
/// use injector_domain::Instance;
///
/// let instance = Instance::new(String::from("db://local"));
/// let copy = instance.clone();
///
/// assert!(instance.ptr_eq(&copy));
/// assert_eq!(copy.downcast_ref::<String>().map(String::as_str), Some("db://local"));
/// ```
#[derive(Clone)]
pub struct Instance {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Instance {
    /// Wrap an owned value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value without copying it
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the concrete type held
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the concrete type held
    pub fn value_type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Whether the held value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the held value as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Get a shared handle to the held value as `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Whether both instances point at the same allocation
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} at {:p}>", self.type_name, Arc::as_ptr(&self.value))
    }
}

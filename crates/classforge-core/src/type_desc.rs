//! Type descriptor predicates used to tag overload arguments.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// An argument-type predicate.
///
/// A `TypeDesc` answers one question: does this value satisfy this type?
/// Overload candidates carry one descriptor per declared argument position,
/// and dispatch asks each descriptor about the value actually supplied there.
///
/// Descriptors are opaque: the stock constructors live in [`crate::types`],
/// classes produce their own via `Class::instance_of`, and callers can build
/// arbitrary ones with [`TypeDesc::new`].
pub struct TypeDesc {
    name: String,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl TypeDesc {
    /// Create a descriptor from a name and a predicate.
    ///
    /// The name is diagnostic only; it never affects matching.
    pub fn new<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    /// Check whether a value satisfies this descriptor.
    pub fn is(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    /// The diagnostic name of this descriptor.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Clone for TypeDesc {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            test: Arc::clone(&self.test),
        }
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDesc").field(&self.name).finish()
    }
}

//! Instance objects and property access.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::class::Class;
use crate::error::CallError;
use crate::value::Value;

struct ObjectInner {
    class: Class,
    fields: RwLock<FxHashMap<String, Value>>,
}

/// A constructed object.
///
/// Instances are reference-counted: clones share the same field storage and
/// compare equal by identity. The field lock is held only for the duration
/// of a raw read or write, never while a getter, setter, or method runs, so
/// accessors are free to read other properties of the same instance.
pub struct Instance {
    inner: Arc<ObjectInner>,
}

impl Instance {
    pub(crate) fn new(class: Class) -> Self {
        Self {
            inner: Arc::new(ObjectInner {
                class,
                fields: RwLock::new(FxHashMap::default()),
            }),
        }
    }

    /// The class this instance was constructed from.
    pub fn class(&self) -> &Class {
        &self.inner.class
    }

    /// Check whether this instance belongs to `class`.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        Class::ptr_eq(&self.inner.class, class)
    }

    /// Check whether two handles refer to the same instance.
    pub fn ptr_eq(a: &Instance, b: &Instance) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Read a raw field, bypassing getters. Absent fields read as `Undefined`.
    pub fn field(&self, name: &str) -> Value {
        self.inner
            .fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Write a raw field, bypassing setters.
    pub fn set_field(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.inner
            .fields
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    /// Invoke an instance method with this instance as receiver.
    ///
    /// Direct methods run unconditionally with whatever arguments were
    /// supplied; overloaded methods dispatch.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let class = self.class();
        let members = class.members()?;
        let slot = members
            .methods
            .get(name)
            .ok_or_else(|| class.unknown_member(name))?;
        class.invoke_slot(name, slot, Some(self), args)
    }

    /// Read a property.
    ///
    /// A declared getter runs with this instance as receiver; otherwise the
    /// raw field is returned, `Undefined` when absent.
    pub fn get(&self, name: &str) -> Result<Value, CallError> {
        let class = self.class();
        let members = class.members()?;
        if let Some(getter) = members.getters.get(name) {
            return class.run(getter, Some(self), &[]);
        }
        Ok(self.field(name))
    }

    /// Write a property.
    ///
    /// A declared setter receives the value as its single dispatch argument
    /// (direct setters run unconditionally). A property with a getter but no
    /// setter is read-only and the write fails. With neither declared, the
    /// write lands on the raw field.
    ///
    /// Returns the setter's return value; raw writes return `Undefined`.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<Value, CallError> {
        let class = self.class();
        let members = class.members()?;
        let value = value.into();

        if let Some(slot) = members.setters.get(name) {
            let args = [value];
            return class.invoke_slot(name, slot, Some(self), &args);
        }
        if members.getters.contains_key(name) {
            return Err(CallError::ReadOnlyProperty {
                class: class.name().to_string(),
                property: name.to_string(),
            });
        }
        self.set_field(name, value);
        Ok(Value::Undefined)
    }
}

impl Clone for Instance {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Instance::ptr_eq(self, other)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.inner.class.name())
            .finish_non_exhaustive()
    }
}

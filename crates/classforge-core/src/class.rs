//! Class handles and member invocation.
//!
//! A [`Class`] is created in two phases: the bare handle first, member tables
//! second. The gap is what makes self-referential definitions possible: the
//! handle (and its instance predicate) can be closed over by the very member
//! implementations that are installed into it afterwards.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use rustc_hash::FxHashMap;

use crate::call_context::CallContext;
use crate::error::CallError;
use crate::native_fn::NativeFn;
use crate::object::Instance;
use crate::overload::OverloadSet;
use crate::type_desc::TypeDesc;
use crate::value::Value;

/// A member implementation slot.
///
/// Direct members run unconditionally; overloaded members go through
/// first-match resolution on every call.
#[derive(Clone, Debug)]
pub enum MemberSlot {
    /// A plain callable, invoked with no dispatch.
    Direct(NativeFn),
    /// An overload set, resolved per call.
    Overloaded(OverloadSet),
}

/// Validated member tables for one class.
///
/// Getters are plain callables by construction; every other kind may be
/// direct or overloaded.
#[derive(Clone, Debug, Default)]
pub struct Members {
    /// Constructor overloads. `None` makes construction a no-op.
    pub constructors: Option<OverloadSet>,
    /// Instance methods.
    pub methods: FxHashMap<String, MemberSlot>,
    /// Static members, invoked without a receiver.
    pub statics: FxHashMap<String, MemberSlot>,
    /// Property getters.
    pub getters: FxHashMap<String, NativeFn>,
    /// Property setters.
    pub setters: FxHashMap<String, MemberSlot>,
}

struct ClassInner {
    name: String,
    members: OnceLock<Members>,
}

/// A constructible, named class.
///
/// Handles are cheap to clone and share identity: clones refer to the same
/// class, and instance predicates test against that identity, never against
/// the name. Two classes defined from identical specifications remain
/// fully independent.
pub struct Class {
    inner: Arc<ClassInner>,
}

impl Class {
    /// Allocate a bare handle with no members installed.
    ///
    /// The handle is inert until [`Class::install`] runs; invoking any
    /// member on it fails with [`CallError::Incomplete`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ClassInner {
                name: name.into(),
                members: OnceLock::new(),
            }),
        }
    }

    /// Install the validated member tables.
    ///
    /// Returns `false` if members were already installed; the first install
    /// is the only one that takes effect.
    pub fn install(&self, members: Members) -> bool {
        self.inner.members.set(members).is_ok()
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Check whether member tables are installed.
    pub fn is_defined(&self) -> bool {
        self.inner.members.get().is_some()
    }

    /// Check whether two handles refer to the same class.
    pub fn ptr_eq(a: &Class, b: &Class) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Produce an "is an instance of this class" descriptor.
    ///
    /// The predicate closes over a weak handle, so storing it inside the
    /// class's own overload sets does not keep the class alive forever.
    pub fn instance_of(&self) -> TypeDesc {
        let target = Arc::downgrade(&self.inner);
        TypeDesc::new(self.name(), move |value| match value {
            Value::Object(instance) => instance_points_at(instance, &target),
            _ => false,
        })
    }

    /// Construct an instance.
    ///
    /// With a constructor section present, the arguments dispatch against it
    /// exactly like any other overloaded member; without one, construction
    /// is a no-op and the instance starts with no fields.
    pub fn construct(&self, args: &[Value]) -> Result<Instance, CallError> {
        let members = self.members()?;
        let instance = Instance::new(self.clone());
        if let Some(constructors) = &members.constructors {
            // Constructor return values are discarded.
            self.dispatch("constructor", constructors, Some(&instance), args)?;
        }
        Ok(instance)
    }

    /// Invoke a static member.
    pub fn call_static(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let members = self.members()?;
        let slot = members
            .statics
            .get(name)
            .ok_or_else(|| self.unknown_member(name))?;
        self.invoke_slot(name, slot, None, args)
    }

    pub(crate) fn members(&self) -> Result<&Members, CallError> {
        self.inner
            .members
            .get()
            .ok_or_else(|| CallError::Incomplete(self.inner.name.clone()))
    }

    pub(crate) fn invoke_slot(
        &self,
        member: &str,
        slot: &MemberSlot,
        receiver: Option<&Instance>,
        args: &[Value],
    ) -> Result<Value, CallError> {
        match slot {
            MemberSlot::Direct(f) => self.run(f, receiver, args),
            MemberSlot::Overloaded(set) => self.dispatch(member, set, receiver, args),
        }
    }

    pub(crate) fn dispatch(
        &self,
        member: &str,
        set: &OverloadSet,
        receiver: Option<&Instance>,
        args: &[Value],
    ) -> Result<Value, CallError> {
        let case = set.resolve(args).ok_or_else(|| CallError::NoOverloadMatch {
            class: self.inner.name.clone(),
            member: member.to_string(),
        })?;
        self.run(case.body(), receiver, args)
    }

    pub(crate) fn run(
        &self,
        f: &NativeFn,
        receiver: Option<&Instance>,
        args: &[Value],
    ) -> Result<Value, CallError> {
        let mut ctx = CallContext::new(receiver, args);
        f.call(&mut ctx)?;
        Ok(ctx.into_return())
    }

    pub(crate) fn unknown_member(&self, member: &str) -> CallError {
        CallError::UnknownMember {
            class: self.inner.name.clone(),
            member: member.to_string(),
        }
    }
}

fn instance_points_at(instance: &Instance, target: &Weak<ClassInner>) -> bool {
    match target.upgrade() {
        Some(inner) => Arc::ptr_eq(&instance.class().inner, &inner),
        None => false,
    }
}

impl Clone for Class {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Class::ptr_eq(self, other)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.inner.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

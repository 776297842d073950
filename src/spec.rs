//! Class specifications and their validation.
//!
//! A [`ClassSpec`] is the raw description a descriptor function hands back:
//! optional constructor overloads plus named statics, methods, getters, and
//! setters. [`ClassSpec::validate`] is the gate between that raw form and
//! the member tables a class actually runs on: it rejects the whole
//! specification at the first structural violation and never accepts
//! partially.

use classforge_core::class::{MemberSlot, Members};
use classforge_core::error::SpecError;
use classforge_core::native_fn::{NativeCallable, NativeFn};
use classforge_core::overload::{OverloadCase, OverloadSet};
use classforge_core::type_desc::TypeDesc;

use rustc_hash::FxHashMap;

/// A named member implementation: either a plain callable or an overload set.
#[derive(Clone, Debug)]
pub enum Member {
    /// A plain callable, installed as-is and invoked with no dispatch.
    Direct(NativeFn),
    /// Overload candidates, dispatched in declaration order.
    Overloaded(Vec<OverloadCase>),
}

impl Member {
    /// Wrap a callable as a direct member.
    pub fn direct<F>(f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Member::Direct(NativeFn::new(f))
    }

    /// Wrap overload candidates as a dispatched member.
    pub fn overloaded(cases: impl Into<Vec<OverloadCase>>) -> Self {
        Member::Overloaded(cases.into())
    }
}

impl From<NativeFn> for Member {
    fn from(f: NativeFn) -> Self {
        Member::Direct(f)
    }
}

impl From<Vec<OverloadCase>> for Member {
    fn from(cases: Vec<OverloadCase>) -> Self {
        Member::Overloaded(cases)
    }
}

/// Raw class specification, assembled by a descriptor function.
///
/// Every section is optional; an empty specification is a valid class with
/// no-op construction. Declaration order within a section is preserved:
/// for overloads it is the dispatch priority, and for validation it decides
/// which violation is reported first.
#[derive(Clone, Debug, Default)]
pub struct ClassSpec {
    constructors: Option<Vec<OverloadCase>>,
    statics: Vec<(String, Member)>,
    methods: Vec<(String, Member)>,
    getters: Vec<(String, Member)>,
    setters: Vec<(String, Member)>,
}

impl ClassSpec {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constructor overload.
    pub fn with_constructor<F>(mut self, args: Vec<TypeDesc>, body: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        self.constructors
            .get_or_insert_with(Vec::new)
            .push(OverloadCase::new(args, NativeFn::new(body)));
        self
    }

    /// Declare a static member.
    pub fn with_static(mut self, name: impl Into<String>, member: impl Into<Member>) -> Self {
        self.statics.push((name.into(), member.into()));
        self
    }

    /// Declare an instance method.
    pub fn with_method(mut self, name: impl Into<String>, member: impl Into<Member>) -> Self {
        self.methods.push((name.into(), member.into()));
        self
    }

    /// Declare a property getter. Getters must be plain callables;
    /// validation rejects an overloaded getter.
    pub fn with_getter(mut self, name: impl Into<String>, member: impl Into<Member>) -> Self {
        self.getters.push((name.into(), member.into()));
        self
    }

    /// Declare a property setter. The assigned value is the setter's single
    /// dispatch argument; a direct setter runs unconditionally.
    pub fn with_setter(mut self, name: impl Into<String>, member: impl Into<Member>) -> Self {
        self.setters.push((name.into(), member.into()));
        self
    }

    /// Validate the specification, producing installable member tables.
    ///
    /// Sections are checked in declaration order (constructors, statics,
    /// methods, getters, setters); the first violation rejects the whole
    /// specification.
    pub fn validate(self) -> Result<Members, SpecError> {
        let constructors = self.constructors.map(OverloadSet::new);
        let statics = collect_slots("static", self.statics)?;
        let methods = collect_slots("method", self.methods)?;
        let getters = collect_getters(self.getters)?;
        let setters = collect_slots("setter", self.setters)?;

        Ok(Members {
            constructors,
            methods,
            statics,
            getters,
            setters,
        })
    }
}

fn check_name(kind: &'static str, name: &str) -> Result<(), SpecError> {
    if name.is_empty() {
        return Err(SpecError::EmptyMemberName { kind });
    }
    Ok(())
}

fn collect_slots(
    kind: &'static str,
    entries: Vec<(String, Member)>,
) -> Result<FxHashMap<String, MemberSlot>, SpecError> {
    let mut slots = FxHashMap::default();
    for (name, member) in entries {
        check_name(kind, &name)?;
        let slot = match member {
            Member::Direct(f) => MemberSlot::Direct(f),
            Member::Overloaded(cases) => MemberSlot::Overloaded(OverloadSet::new(cases)),
        };
        if slots.insert(name.clone(), slot).is_some() {
            return Err(SpecError::DuplicateMember { kind, name });
        }
    }
    Ok(slots)
}

fn collect_getters(
    entries: Vec<(String, Member)>,
) -> Result<FxHashMap<String, NativeFn>, SpecError> {
    let mut getters = FxHashMap::default();
    for (name, member) in entries {
        check_name("getter", &name)?;
        let f = match member {
            Member::Direct(f) => f,
            Member::Overloaded(_) => return Err(SpecError::OverloadedGetter(name)),
        };
        if getters.insert(name.clone(), f).is_some() {
            return Err(SpecError::DuplicateMember {
                kind: "getter",
                name,
            });
        }
    }
    Ok(getters)
}

//! Overload candidates and first-match resolution.
//!
//! One resolution routine serves every dispatched member kind: constructors,
//! instance methods, statics, and setters all funnel through
//! [`OverloadSet::resolve`]. Candidates are scanned in declaration order and
//! the first full match wins; there is no cost ranking and no ambiguity
//! detection. Callers who want most-specific-first behavior declare their
//! candidates in that order.

use crate::native_fn::NativeFn;
use crate::type_desc::TypeDesc;
use crate::value::Value;

/// One overload candidate: a tuple of argument descriptors plus the
/// implementation to run when they all accept.
#[derive(Clone, Debug)]
pub struct OverloadCase {
    args: Vec<TypeDesc>,
    body: NativeFn,
}

impl OverloadCase {
    /// Create a candidate from argument descriptors and an implementation.
    pub fn new(args: Vec<TypeDesc>, body: NativeFn) -> Self {
        Self { args, body }
    }

    /// The number of declared argument positions.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The declared argument descriptors.
    pub fn arg_types(&self) -> &[TypeDesc] {
        &self.args
    }

    /// The implementation.
    pub fn body(&self) -> &NativeFn {
        &self.body
    }

    /// Check whether this candidate accepts the actual arguments.
    ///
    /// Every declared position must accept the value supplied there; a
    /// missing actual argument is tested as `Undefined`. Extra actual
    /// arguments beyond the declared arity are ignored, so a zero-arity
    /// candidate accepts every call.
    pub fn matches(&self, args: &[Value]) -> bool {
        self.args
            .iter()
            .enumerate()
            .all(|(i, desc)| desc.is(args.get(i).unwrap_or(&Value::Undefined)))
    }
}

/// An ordered collection of overload candidates for one member.
///
/// Declaration order is priority order. An empty set never resolves.
#[derive(Clone, Debug, Default)]
pub struct OverloadSet {
    cases: Vec<OverloadCase>,
}

impl OverloadSet {
    /// Create a set from candidates, preserving their order.
    pub fn new(cases: Vec<OverloadCase>) -> Self {
        Self { cases }
    }

    /// The number of candidates.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check whether the set has no candidates.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over the candidates in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OverloadCase> {
        self.cases.iter()
    }

    /// Select the first candidate that accepts the actual arguments.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve(&self, args: &[Value]) -> Option<&OverloadCase> {
        self.cases.iter().find(|case| case.matches(args))
    }
}

impl From<Vec<OverloadCase>> for OverloadSet {
    fn from(cases: Vec<OverloadCase>) -> Self {
        Self::new(cases)
    }
}

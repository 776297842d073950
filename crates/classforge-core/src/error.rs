//! Unified error types.
//!
//! Errors are partitioned by phase, mirroring the two moments things can go
//! wrong: while a class is being defined (`DefineError`, `SpecError`) and
//! while a member call is being dispatched (`CallError`, `NativeError`).
//!
//! ```text
//! DefineError (class definition)
//! ├── InvalidName     - class name fails the naming rule
//! └── Specification   - the member specification is malformed (SpecError)
//!
//! CallError (member invocation)
//! ├── NoOverloadMatch - no candidate accepts the actual arguments
//! ├── UnknownMember   - no member with that name exists
//! ├── ReadOnlyProperty- assignment to a getter-only property
//! ├── Incomplete      - the class handle has no members installed yet
//! └── Native          - a user callable reported a NativeError
//! ```
//!
//! Nothing is caught or retried internally; every error propagates to the
//! caller of the operation that produced it. A failed call leaves the class
//! and its instances fully usable.

use thiserror::Error;

// ============================================================================
// Definition Errors
// ============================================================================

/// Errors raised while defining a class.
///
/// Both variants are fatal to the definition: no members are installed and
/// no class handle is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefineError {
    /// The class name does not match `[A-Za-z][A-Za-z0-9_]*`.
    #[error("invalid class name: '{0}'")]
    InvalidName(String),

    /// The member specification is structurally malformed.
    #[error(transparent)]
    Specification(#[from] SpecError),
}

/// Errors raised by specification validation.
///
/// Validation stops at the first violation; the whole specification is
/// rejected, never partially accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A getter was declared as an overload set. Getters take no arguments,
    /// so there is nothing to dispatch on.
    #[error("getter '{0}' must be a plain function, not an overload set")]
    OverloadedGetter(String),

    /// The same name was declared twice within one member section.
    #[error("duplicate {kind}: '{name}' declared more than once")]
    DuplicateMember {
        /// Which section the duplicate appeared in (e.g. "method", "static").
        kind: &'static str,
        /// The duplicated member name.
        name: String,
    },

    /// A member was declared with an empty name.
    #[error("empty {kind} name")]
    EmptyMemberName {
        /// Which section the empty name appeared in.
        kind: &'static str,
    },
}

// ============================================================================
// Call Errors
// ============================================================================

/// Errors raised while invoking a constructor, method, static, or accessor.
///
/// Fatal to the call only; the class and its instances remain usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// No overload candidate accepted the actual arguments.
    #[error("no matching overload for '{class}.{member}'")]
    NoOverloadMatch {
        /// The class name.
        class: String,
        /// The member name ("constructor" for construction).
        member: String,
    },

    /// The named member does not exist on the class.
    #[error("'{class}' has no member '{member}'")]
    UnknownMember {
        /// The class name.
        class: String,
        /// The missing member name.
        member: String,
    },

    /// Assignment to a property that declares a getter but no setter.
    #[error("property '{class}.{property}' is read-only")]
    ReadOnlyProperty {
        /// The class name.
        class: String,
        /// The property name.
        property: String,
    },

    /// The class handle exists but its members are not installed yet.
    ///
    /// Only reachable by calling a handle smuggled out of its own
    /// descriptor function before definition finished.
    #[error("class '{0}' is not fully defined yet")]
    Incomplete(String),

    /// A user-supplied callable failed.
    #[error(transparent)]
    Native(#[from] NativeError),
}

/// Errors raised from inside user-supplied callables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// A typed argument access was out of bounds.
    #[error("argument index {index} out of bounds (got {count} arguments)")]
    ArgumentIndexOutOfBounds {
        /// The requested argument index.
        index: usize,
        /// The number of arguments actually supplied.
        count: usize,
    },

    /// A receiver was requested but the callable was invoked without one
    /// (statics have no receiver).
    #[error("no receiver available for this call")]
    NoReceiver,

    /// Free-form failure reported by the callable itself.
    #[error("{0}")]
    Custom(String),
}

impl NativeError {
    /// Create a custom error with the given message.
    pub fn custom(message: impl Into<String>) -> Self {
        NativeError::Custom(message.into())
    }
}

// Lets user callables bubble up nested accessor/method failures with `?`.
impl From<CallError> for NativeError {
    fn from(err: CallError) -> Self {
        match err {
            CallError::Native(inner) => inner,
            other => NativeError::Custom(other.to_string()),
        }
    }
}

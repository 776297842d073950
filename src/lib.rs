//! classforge - runtime class construction with multiple dispatch.
//!
//! Classes are defined at runtime from a specification: overloaded
//! constructors, instance methods, statics, and property accessors, where
//! each overload candidate pairs a tuple of argument-type predicates with an
//! implementation. Calls scan the candidates in declaration order and run
//! the first one whose predicates all accept the actual arguments.
//!
//! # Example
//!
//! ```
//! use classforge::{define, types, CallContext, ClassSpec, Member, Value};
//!
//! let c = define("C", |_class, _is_c| {
//!     ClassSpec::new()
//!         .with_constructor(vec![types::number()], |ctx: &mut CallContext<'_>| {
//!             ctx.this()?.set_field("x", ctx.arg(0)?.clone());
//!             Ok(())
//!         })
//!         .with_constructor(vec![types::string()], |ctx: &mut CallContext<'_>| {
//!             ctx.this()?.set_field("x", ctx.arg(0)?.clone());
//!             Ok(())
//!         })
//! })
//! .unwrap();
//!
//! let by_number = c.construct(&[5i64.into()]).unwrap();
//! assert_eq!(by_number.field("x"), Value::Int(5));
//!
//! let by_string = c.construct(&["hey".into()]).unwrap();
//! assert_eq!(by_string.field("x"), Value::from("hey"));
//!
//! // No candidate accepts a call with no arguments.
//! assert!(c.construct(&[]).is_err());
//! ```
//!
//! Dispatch uses declaration order, never specificity: when two candidates
//! both accept a call, the one declared first runs. Most-specific-first
//! ordering is the definer's responsibility.

mod builder;
mod spec;

pub use builder::define;
pub use spec::{ClassSpec, Member};

pub use classforge_core::call_context::CallContext;
pub use classforge_core::class::{Class, MemberSlot, Members};
pub use classforge_core::error::{CallError, DefineError, NativeError, SpecError};
pub use classforge_core::native_fn::{NativeCallable, NativeFn};
pub use classforge_core::object::Instance;
pub use classforge_core::overload::{OverloadCase, OverloadSet};
pub use classforge_core::type_desc::TypeDesc;
pub use classforge_core::types;
pub use classforge_core::value::Value;

//! Core object system for classforge: dynamic values, type-descriptor
//! predicates, type-erased callables, overload resolution, and the class
//! handles everything is wired onto.
//!
//! The definition layer (specification validation and the `define` entry
//! point) lives in the `classforge` crate; this crate owns everything that
//! exists at call time.

pub mod call_context;
pub mod class;
pub mod error;
pub mod native_fn;
pub mod object;
pub mod overload;
pub mod type_desc;
pub mod types;
pub mod value;

pub use call_context::CallContext;
pub use class::{Class, MemberSlot, Members};
pub use error::{CallError, DefineError, NativeError, SpecError};
pub use native_fn::{NativeCallable, NativeFn};
pub use object::Instance;
pub use overload::{OverloadCase, OverloadSet};
pub use type_desc::TypeDesc;
pub use value::Value;

//! Call context bridging dispatch and native Rust implementations.

use crate::error::NativeError;
use crate::object::Instance;
use crate::value::Value;

/// Context for native member calls.
///
/// This is handed to every constructor, method, static, getter, and setter
/// implementation. It provides access to the receiver and the positional
/// arguments, plus a return slot.
///
/// ## Argument Access
///
/// `arg(i)` fails when the index is past the supplied arguments; `arg_opt(i)`
/// yields `Undefined` instead, matching how dispatch treats missing
/// positions:
///
/// ```ignore
/// let x = ctx.arg(0)?.clone();
/// let maybe_y = ctx.arg_opt(1).clone();
/// ```
///
/// ## Return Values
///
/// A callable that never calls `set_return` returns `Undefined`.
pub struct CallContext<'call> {
    /// Receiver (`None` for statics and constructor-less construction).
    receiver: Option<&'call Instance>,
    /// Positional arguments as supplied at the call site.
    args: &'call [Value],
    /// Return value slot.
    ret: Value,
}

impl<'call> CallContext<'call> {
    /// Create a new call context.
    pub fn new(receiver: Option<&'call Instance>, args: &'call [Value]) -> Self {
        Self {
            receiver,
            args,
            ret: Value::Undefined,
        }
    }

    /// Get the number of arguments supplied at the call site.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get all arguments as a slice.
    pub fn args(&self) -> &[Value] {
        self.args
    }

    /// Get an argument by position.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentIndexOutOfBounds` if fewer arguments were supplied.
    pub fn arg(&self, index: usize) -> Result<&Value, NativeError> {
        self.args
            .get(index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds {
                index,
                count: self.args.len(),
            })
    }

    /// Get an argument by position, or `Undefined` when absent.
    pub fn arg_opt(&self, index: usize) -> &Value {
        self.args.get(index).unwrap_or(&Value::Undefined)
    }

    /// Get the receiver for instance calls.
    ///
    /// # Errors
    ///
    /// Returns `NoReceiver` when the callable was invoked without one.
    pub fn this(&self) -> Result<&Instance, NativeError> {
        self.receiver.ok_or(NativeError::NoReceiver)
    }

    /// Get the receiver, if any.
    pub fn receiver(&self) -> Option<&Instance> {
        self.receiver
    }

    /// Set the return value.
    pub fn set_return(&mut self, value: impl Into<Value>) {
        self.ret = value.into();
    }

    /// Consume the context, yielding the return value.
    pub fn into_return(self) -> Value {
        self.ret
    }
}

//! Native function storage and callable trait.

use std::fmt;
use std::sync::Arc;

use crate::call_context::CallContext;
use crate::error::NativeError;

/// Type-erased native function.
///
/// This wraps any callable that implements `NativeCallable`, allowing
/// implementations of different shapes to be stored uniformly in member
/// tables and overload sets.
///
/// The inner callable is wrapped in Arc so the same implementation can be
/// shared across clones of a class handle.
pub struct NativeFn {
    inner: Arc<dyn NativeCallable + Send + Sync>,
}

impl NativeFn {
    /// Create a new NativeFn from a callable.
    pub fn new<F>(f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Call this native function with the given context.
    pub fn call(&self, ctx: &mut CallContext<'_>) -> Result<(), NativeError> {
        self.inner.call(ctx)
    }
}

impl Clone for NativeFn {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").finish_non_exhaustive()
    }
}

/// Trait for callable native functions.
///
/// The `call` method receives a `CallContext` that provides access to the
/// receiver and arguments and allows setting the return value.
pub trait NativeCallable {
    /// Call this function with the given context.
    fn call(&self, ctx: &mut CallContext<'_>) -> Result<(), NativeError>;
}

// Implement NativeCallable for closures that take CallContext
impl<F> NativeCallable for F
where
    F: Fn(&mut CallContext<'_>) -> Result<(), NativeError>,
{
    fn call(&self, ctx: &mut CallContext<'_>) -> Result<(), NativeError> {
        (self)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn closure_is_callable() {
        let f = NativeFn::new(|ctx: &mut CallContext<'_>| {
            ctx.set_return(42i64);
            Ok(())
        });

        let args = [];
        let mut ctx = CallContext::new(None, &args);
        f.call(&mut ctx).unwrap();
        assert_eq!(ctx.into_return(), Value::Int(42));
    }

    #[test]
    fn clones_share_the_implementation() {
        let f = NativeFn::new(|ctx: &mut CallContext<'_>| {
            ctx.set_return("shared");
            Ok(())
        });
        let g = f.clone();

        let args = [];
        let mut ctx = CallContext::new(None, &args);
        g.call(&mut ctx).unwrap();
        assert_eq!(ctx.into_return(), Value::from("shared"));
    }
}

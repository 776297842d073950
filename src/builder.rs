//! The `define` entry point: name validation, two-phase handle wiring,
//! specification validation, member installation.

use classforge_core::class::Class;
use classforge_core::error::DefineError;
use classforge_core::type_desc::TypeDesc;

use crate::spec::ClassSpec;

/// Define a class.
///
/// The descriptor function receives the class handle itself plus an "is an
/// instance of this class" descriptor, both usable before any member exists.
/// This is what allows self-referential definitions: a method overload can
/// match on instances of the class it is being declared on, and an
/// implementation can close over the handle to construct more instances
/// later.
///
/// Definition is all-or-nothing: an invalid name fails before the descriptor
/// function runs, and a malformed specification fails before any member is
/// installed.
///
/// ```
/// use classforge::{define, types, CallContext, ClassSpec};
///
/// let point = define("Point", |_class, _is_point| {
///     ClassSpec::new().with_constructor(
///         vec![types::number(), types::number()],
///         |ctx: &mut CallContext<'_>| {
///             let this = ctx.this()?;
///             this.set_field("x", ctx.arg(0)?.clone());
///             this.set_field("y", ctx.arg(1)?.clone());
///             Ok(())
///         },
///     )
/// })
/// .unwrap();
///
/// let p = point.construct(&[5i64.into(), 7i64.into()]).unwrap();
/// assert_eq!(p.field("x"), 5i64.into());
/// ```
///
/// # Errors
///
/// * [`DefineError::InvalidName`] - the name does not match
///   `[A-Za-z][A-Za-z0-9_]*`.
/// * [`DefineError::Specification`] - the descriptor function produced a
///   malformed specification.
pub fn define<F>(name: &str, descriptor: F) -> Result<Class, DefineError>
where
    F: FnOnce(&Class, TypeDesc) -> ClassSpec,
{
    if !is_valid_class_name(name) {
        return Err(DefineError::InvalidName(name.to_string()));
    }

    let class = Class::new(name);
    let spec = descriptor(&class, class.instance_of());
    let members = spec.validate()?;

    let installed = class.install(members);
    debug_assert!(installed, "freshly allocated handle accepts one install");

    Ok(class)
}

/// Class names must start with an ASCII letter and continue with letters,
/// digits, or underscores. The whole name must match, not just a prefix.
fn is_valid_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

//! Stock type descriptors and combinators.
//!
//! These cover the usual dispatch vocabulary: primitive tags (`number`,
//! `string`, `boolean`, ...), the always-matching `any`, and combinators for
//! building richer predicates (`maybe`, `union`, `refinement`, `list_of`,
//! structural `interface`). Per-class instance predicates come from
//! `Class::instance_of`, not from here.

use crate::type_desc::TypeDesc;
use crate::value::Value;

/// Matches any value, including `Undefined` and `Null`.
pub fn any() -> TypeDesc {
    TypeDesc::new("Any", |_| true)
}

/// Matches `Undefined` only.
pub fn undefined() -> TypeDesc {
    TypeDesc::new("Undefined", Value::is_undefined)
}

/// Matches `Null` or `Undefined`.
pub fn nil() -> TypeDesc {
    TypeDesc::new("Nil", Value::is_nil)
}

/// Matches booleans.
pub fn boolean() -> TypeDesc {
    TypeDesc::new("Boolean", |v| matches!(v, Value::Bool(_)))
}

/// Matches integers.
pub fn integer() -> TypeDesc {
    TypeDesc::new("Integer", |v| matches!(v, Value::Int(_)))
}

/// Matches floats.
pub fn float() -> TypeDesc {
    TypeDesc::new("Float", |v| matches!(v, Value::Float(_)))
}

/// Matches integers and floats alike.
pub fn number() -> TypeDesc {
    TypeDesc::new("Number", |v| matches!(v, Value::Int(_) | Value::Float(_)))
}

/// Matches strings.
pub fn string() -> TypeDesc {
    TypeDesc::new("String", |v| matches!(v, Value::Str(_)))
}

/// Matches lists with any element types.
pub fn list() -> TypeDesc {
    TypeDesc::new("List", |v| matches!(v, Value::List(_)))
}

/// Matches any constructed object, regardless of class.
pub fn object() -> TypeDesc {
    TypeDesc::new("Object", |v| matches!(v, Value::Object(_)))
}

/// Matches lists whose every element satisfies `element`.
pub fn list_of(element: TypeDesc) -> TypeDesc {
    let name = format!("List<{}>", element.name());
    TypeDesc::new(name, move |v| match v {
        Value::List(items) => items.iter().all(|item| element.is(item)),
        _ => false,
    })
}

/// Matches values satisfying `inner`, plus `Null` and `Undefined`.
pub fn maybe(inner: TypeDesc) -> TypeDesc {
    let name = format!("Maybe<{}>", inner.name());
    TypeDesc::new(name, move |v| v.is_nil() || inner.is(v))
}

/// Matches values satisfying any one of `variants`.
pub fn union(variants: impl IntoIterator<Item = TypeDesc>) -> TypeDesc {
    let variants: Vec<TypeDesc> = variants.into_iter().collect();
    let name = variants
        .iter()
        .map(TypeDesc::name)
        .collect::<Vec<_>>()
        .join(" | ");
    TypeDesc::new(name, move |v| variants.iter().any(|t| t.is(v)))
}

/// Matches values satisfying `base` and the extra predicate.
pub fn refinement<F>(name: impl Into<String>, base: TypeDesc, predicate: F) -> TypeDesc
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    TypeDesc::new(name, move |v| base.is(v) && predicate(v))
}

/// Build a descriptor from scratch, with no base type.
pub fn irreducible<F>(name: impl Into<String>, predicate: F) -> TypeDesc
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    TypeDesc::new(name, predicate)
}

/// Structural interface: matches objects whose named properties each satisfy
/// the paired descriptor. Properties are read through accessors, so getter
/// results count; a property whose read fails does not match.
pub fn interface<I, S>(fields: I) -> TypeDesc
where
    I: IntoIterator<Item = (S, TypeDesc)>,
    S: Into<String>,
{
    let fields: Vec<(String, TypeDesc)> = fields
        .into_iter()
        .map(|(name, desc)| (name.into(), desc))
        .collect();
    TypeDesc::new("Interface", move |v| match v {
        Value::Object(instance) => fields.iter().all(|(name, desc)| {
            instance
                .get(name)
                .map(|value| desc.is(&value))
                .unwrap_or(false)
        }),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_tags() {
        assert!(any().is(&Value::Undefined));
        assert!(nil().is(&Value::Null));
        assert!(nil().is(&Value::Undefined));
        assert!(!nil().is(&Value::Int(0)));
        assert!(boolean().is(&Value::Bool(false)));
        assert!(number().is(&Value::Int(1)));
        assert!(number().is(&Value::Float(1.5)));
        assert!(!number().is(&Value::from("1")));
        assert!(string().is(&Value::from("hey")));
        assert!(integer().is(&Value::Int(1)));
        assert!(!integer().is(&Value::Float(1.0)));
        assert!(float().is(&Value::Float(1.0)));
    }

    #[test]
    fn list_combinators() {
        let numbers = list_of(number());
        assert!(numbers.is(&Value::List(vec![Value::Int(1), Value::Float(2.0)])));
        assert!(!numbers.is(&Value::List(vec![Value::Int(1), Value::from("x")])));
        assert!(numbers.is(&Value::List(vec![])));
        assert!(!numbers.is(&Value::Int(1)));
        assert_eq!(numbers.name(), "List<Number>");
    }

    #[test]
    fn maybe_accepts_nil() {
        let maybe_num = maybe(number());
        assert!(maybe_num.is(&Value::Undefined));
        assert!(maybe_num.is(&Value::Null));
        assert!(maybe_num.is(&Value::Int(1)));
        assert!(!maybe_num.is(&Value::from("1")));
    }

    #[test]
    fn union_matches_any_variant() {
        let num_or_str = union([number(), string()]);
        assert!(num_or_str.is(&Value::Int(1)));
        assert!(num_or_str.is(&Value::from("a")));
        assert!(!num_or_str.is(&Value::Bool(true)));
        assert_eq!(num_or_str.name(), "Number | String");
    }

    #[test]
    fn refinement_narrows_the_base() {
        let positive = refinement("Positive", number(), |v| match v {
            Value::Int(n) => *n > 0,
            Value::Float(f) => *f > 0.0,
            _ => false,
        });
        assert!(positive.is(&Value::Int(3)));
        assert!(!positive.is(&Value::Int(-3)));
        assert!(!positive.is(&Value::from("3")));
    }

    #[test]
    fn interface_checks_properties_structurally() {
        use crate::class::{Class, Members};

        let class = Class::new("Point");
        class.install(Members::default());
        let point = class.construct(&[]).unwrap();
        point.set_field("x", 1i64);
        point.set_field("y", 2i64);

        let point_like = interface([("x", number()), ("y", number())]);
        assert!(point_like.is(&Value::Object(point.clone())));
        assert!(!point_like.is(&Value::Int(1)));

        point.set_field("y", "nope");
        assert!(!point_like.is(&Value::Object(point)));
    }

    #[test]
    fn irreducible_predicate() {
        let even = irreducible("Even", |v| matches!(v, Value::Int(n) if n % 2 == 0));
        assert!(even.is(&Value::Int(4)));
        assert!(!even.is(&Value::Int(5)));
    }
}

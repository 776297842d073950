//! Definition-side behavior: names, handles, accessors, independence.

use classforge::{
    define, CallContext, CallError, Class, ClassSpec, DefineError, Member, SpecError, TypeDesc,
    Value,
};

fn empty_spec(_: &Class, _: TypeDesc) -> ClassSpec {
    ClassSpec::new()
}

#[test]
fn empty_class_constructs() {
    let c = define("C", empty_spec).unwrap();
    let instance = c.construct(&[]).unwrap();
    assert_eq!(instance.field("x"), Value::Undefined);
}

#[test]
fn class_name_validity() {
    assert!(define("C", empty_spec).is_ok());
    assert!(define("lowercase", empty_spec).is_ok());
    assert!(define("With_Underscore2", empty_spec).is_ok());

    for bad in ["2sg", "", "no spaces", "kebab-case"] {
        assert_eq!(
            define(bad, empty_spec).unwrap_err(),
            DefineError::InvalidName(bad.to_string()),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn descriptor_sees_the_returned_handle() {
    let mut captured: Option<Class> = None;
    let mut predicate: Option<TypeDesc> = None;

    let c = define("C", |class, is_c| {
        captured = Some(class.clone());
        predicate = Some(is_c);
        ClassSpec::new()
    })
    .unwrap();

    let captured = captured.unwrap();
    assert!(Class::ptr_eq(&c, &captured));

    let instance = c.construct(&[]).unwrap();
    assert!(predicate.unwrap().is(&Value::Object(instance)));
}

#[test]
fn calling_a_half_built_handle_fails() {
    let mut smuggled = None;

    let c = define("C", |class, _| {
        smuggled = Some(class.construct(&[]));
        ClassSpec::new()
    })
    .unwrap();

    assert_eq!(
        smuggled.unwrap(),
        Err(CallError::Incomplete("C".to_string()))
    );
    // Once defined, the same handle works.
    assert!(c.construct(&[]).is_ok());
}

#[test]
fn malformed_spec_rejects_the_definition() {
    let err = define("C", |_, _| {
        ClassSpec::new().with_getter(
            "x",
            Member::overloaded(vec![classforge::OverloadCase::new(
                vec![],
                classforge::NativeFn::new(|_: &mut CallContext<'_>| Ok(())),
            )]),
        )
    })
    .unwrap_err();

    assert_eq!(
        err,
        DefineError::Specification(SpecError::OverloadedGetter("x".to_string()))
    );
}

fn counter_spec(_: &Class, _: TypeDesc) -> ClassSpec {
    ClassSpec::new().with_constructor(vec![], |ctx: &mut CallContext<'_>| {
        ctx.this()?.set_field("count", 0i64);
        Ok(())
    })
}

#[test]
fn classes_from_the_same_descriptor_are_independent() {
    let a = define("Counter", counter_spec).unwrap();
    let b = define("Counter", counter_spec).unwrap();
    assert!(!Class::ptr_eq(&a, &b));

    let ia = a.construct(&[]).unwrap();
    let ib = b.construct(&[]).unwrap();

    ia.set_field("count", 99i64);
    assert_eq!(ia.field("count"), Value::Int(99));
    assert_eq!(ib.field("count"), Value::Int(0));

    // Predicates do not cross class boundaries either.
    assert!(!a.instance_of().is(&Value::Object(ib)));
}

#[test]
fn getters_run_with_the_instance_as_receiver() {
    let c = define("C", |_, _| {
        ClassSpec::new()
            .with_getter(
                "x",
                Member::direct(|ctx: &mut CallContext<'_>| {
                    ctx.set_return(42i64);
                    Ok(())
                }),
            )
            .with_getter(
                "y",
                Member::direct(|ctx: &mut CallContext<'_>| {
                    // Getters may read other getters through the receiver.
                    let x = ctx.this()?.get("x")?;
                    match x {
                        Value::Int(n) => ctx.set_return(n + 58),
                        other => ctx.set_return(other),
                    }
                    Ok(())
                }),
            )
    })
    .unwrap();

    let instance = c.construct(&[]).unwrap();
    assert_eq!(instance.get("x").unwrap(), Value::Int(42));
    assert_eq!(instance.get("y").unwrap(), Value::Int(100));
}

#[test]
fn getter_only_property_rejects_writes() {
    let c = define("C", |_, _| {
        ClassSpec::new().with_getter(
            "x",
            Member::direct(|ctx: &mut CallContext<'_>| {
                ctx.set_return(1i64);
                Ok(())
            }),
        )
    })
    .unwrap();

    let instance = c.construct(&[]).unwrap();
    assert_eq!(instance.get("x").unwrap(), Value::Int(1));
    assert_eq!(
        instance.set("x", 2i64),
        Err(CallError::ReadOnlyProperty {
            class: "C".to_string(),
            property: "x".to_string(),
        })
    );
}

#[test]
fn setter_only_property_reads_undefined() {
    let c = define("C", |_, _| {
        ClassSpec::new().with_setter(
            "x",
            Member::direct(|ctx: &mut CallContext<'_>| {
                ctx.this()?.set_field("_x", ctx.arg(0)?.clone());
                Ok(())
            }),
        )
    })
    .unwrap();

    let instance = c.construct(&[]).unwrap();
    instance.set("x", 9i64).unwrap();
    assert_eq!(instance.get("x").unwrap(), Value::Undefined);
    assert_eq!(instance.field("_x"), Value::Int(9));
}

#[test]
fn direct_setter_tracks_value_and_type_tag() {
    let c = define("C", |_, _| {
        ClassSpec::new()
            .with_getter(
                "val",
                Member::direct(|ctx: &mut CallContext<'_>| {
                    let v = ctx.this()?.field("_val");
                    ctx.set_return(v);
                    Ok(())
                }),
            )
            .with_getter(
                "valType",
                Member::direct(|ctx: &mut CallContext<'_>| {
                    let v = ctx.this()?.field("_valType");
                    ctx.set_return(v);
                    Ok(())
                }),
            )
            .with_setter(
                "val",
                Member::direct(|ctx: &mut CallContext<'_>| {
                    let v = ctx.arg(0)?.clone();
                    let this = ctx.this()?;
                    this.set_field("_valType", v.type_name());
                    this.set_field("_val", v.clone());
                    ctx.set_return(v);
                    Ok(())
                }),
            )
    })
    .unwrap();

    let instance = c.construct(&[]).unwrap();
    assert_eq!(instance.get("val").unwrap(), Value::Undefined);
    assert_eq!(instance.get("valType").unwrap(), Value::Undefined);

    assert_eq!(instance.set("val", 42i64).unwrap(), Value::Int(42));
    assert_eq!(instance.get("val").unwrap(), Value::Int(42));
    assert_eq!(instance.get("valType").unwrap(), Value::from("int"));

    instance.set("val", "hello").unwrap();
    assert_eq!(instance.get("val").unwrap(), Value::from("hello"));
    assert_eq!(instance.get("valType").unwrap(), Value::from("string"));
}

#[test]
fn undeclared_property_falls_through_to_raw_fields() {
    let c = define("C", empty_spec).unwrap();
    let instance = c.construct(&[]).unwrap();

    instance.set("x", 5i64).unwrap();
    assert_eq!(instance.get("x").unwrap(), Value::Int(5));
    assert_eq!(instance.field("x"), Value::Int(5));
}

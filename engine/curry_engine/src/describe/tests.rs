use curry_value::{CallArgs, NativeFunction, Signature, Value};
use pretty_assertions::assert_eq;

use super::{Description, ANONYMOUS_DOC};
use crate::curry;
use crate::tests::{add3, partial, summing};

#[test]
fn unapplied_instance() {
    let help = add3().describe();
    assert_eq!(help.name, "add");
    assert_eq!(help.display_name(), "add");
    assert_eq!(help.signature, "(x, y, z)");
    assert!(!help.has_bound_arguments());
    assert_eq!(help.call_count, 0);
    assert_eq!(help.calls_remaining, 3);
    assert_eq!(
        help.to_string(),
        "add = curry(3)(add(x, y, z))\n    Returns add(x)(y)(z) = x + y + z."
    );
}

#[test]
fn bound_positional_arguments() {
    let add = add3();
    let one = partial(&add, CallArgs::new().arg(1));
    assert_eq!(
        one.describe().to_string(),
        "add(1) = curry(2)(add(x, y, z), 1)\n    Returns add(x)(y)(z) = x + y + z."
    );

    let two = partial(&one, CallArgs::new().arg(2));
    let help = two.describe();
    assert_eq!(help.display_name(), "add(1, 2)");
    assert_eq!(help.calls_remaining, 1);
    assert_eq!(help.bound_positional, vec![Value::int(1), Value::int(2)]);
}

#[test]
fn bound_named_arguments_follow_positional() {
    let add = add3();
    let named = partial(&add, CallArgs::new().kwarg("z", 3));
    let mixed = partial(&named, CallArgs::new().arg(1));
    assert_eq!(mixed.describe().bound_arguments(), "1, z=3");
    assert_eq!(mixed.describe().display_name(), "add(1, z=3)");
}

#[test]
fn strings_render_quoted() {
    let signature = Signature::new(["greeting", "name"]);
    let body_signature = signature.clone();
    let greet = curry(2)
        .unwrap()
        .apply(NativeFunction::new("greet", signature, move |args| {
            let bound = args.bind("greet", &body_signature)?;
            let text = |name: &str| bound.get(name).and_then(Value::as_str).unwrap_or("?");
            Ok(Value::string(format!("{}, {}!", text("greeting"), text("name"))))
        }));
    let hello = partial(&greet, CallArgs::new().arg("hello"));
    assert_eq!(hello.describe().display_name(), "greet(\"hello\")");

    let greeting = hello.invoke(CallArgs::new().arg("world")).unwrap();
    assert_eq!(
        greeting.value().as_ref().and_then(Value::as_str),
        Some("hello, world!")
    );
}

#[test]
fn bound_values_render_like_call_sites() {
    let record = curry(2).unwrap().apply(NativeFunction::new(
        "record",
        Signature::open(),
        |_| Ok(Value::Void),
    ));
    let bound = partial(
        &record,
        CallArgs::new()
            .arg(1.5)
            .arg(true)
            .arg('c')
            .kwarg("tags", Value::list(vec![Value::int(1), Value::string("a")])),
    );
    assert_eq!(
        bound.describe().display_name(),
        "record(1.5, true, 'c', tags=[1, \"a\"])"
    );
}

#[test]
fn blank_doc_shows_placeholder() {
    let add = curry(2).unwrap().apply(summing("add", &["x", "y"]));
    let help = add.describe();
    assert_eq!(help.doc, "");
    assert_eq!(help.doc_or_default(), ANONYMOUS_DOC);
    assert_eq!(
        help.to_string(),
        "add = curry(2)(add(x, y))\n    Anonymous curried function."
    );

    let spaces = curry(1)
        .unwrap()
        .with_doc("   \n  ")
        .apply(summing("add", &["x"]));
    assert_eq!(spaces.describe().doc_or_default(), ANONYMOUS_DOC);
}

#[test]
fn multi_line_doc_is_indented() {
    let add = curry(1)
        .unwrap()
        .with_doc("Adds things.\n\nReturns the sum.")
        .apply(summing("add", &["x"]));
    assert_eq!(
        add.describe().to_string(),
        "add = curry(1)(add(x))\n    Adds things.\n    \n    Returns the sum."
    );
}

#[test]
fn describing_does_not_change_the_instance() {
    let add = add3();
    let one = partial(&add, CallArgs::new().arg(1));
    let before = one.describe();
    let _ = one.describe();
    assert_eq!(one.describe(), before);
    assert_eq!(one.state().call_count(), 1);
}

#[test]
fn partial_and_unapplied_descriptions_differ() {
    let add = add3();
    let bound = partial(&add, CallArgs::new().arg(1).arg(2));
    let unapplied: Description = add.describe();
    let applied = bound.describe();
    assert_ne!(unapplied, applied);
    assert_eq!(unapplied.name, applied.name);
    assert_eq!(unapplied.doc, applied.doc);
    assert_eq!(unapplied.signature, applied.signature);
}

//! Shared fixtures and relocated dispatch tests.

use curry_value::{
    integer_overflow, type_mismatch, CallArgs, NativeFunction, Signature, Value,
};

use crate::{curry, Curried, Outcome};


/// A function called `name` over `params` that returns the sum of its
/// (integer) arguments.
pub(crate) fn summing(name: &'static str, params: &[&str]) -> NativeFunction {
    let signature = Signature::new(params.iter().copied());
    let body_signature = signature.clone();
    NativeFunction::new(name, signature, move |args| {
        let bound = args.bind(name, &body_signature)?;
        let result = bound
            .values()
            .try_fold(0i64, |acc, value| {
                let n = value
                    .as_int()
                    .ok_or_else(|| type_mismatch("int", value.type_name()))?;
                acc.checked_add(n).ok_or_else(|| integer_overflow("addition"))
            })
            .map(Value::int);
        result
    })
}

/// `add(x, y)` curried over two calls.
pub(crate) fn add2() -> Curried {
    curry(2).unwrap().apply(summing("add", &["x", "y"]))
}

/// `add(x, y, z)` curried over three calls, documented.
pub(crate) fn add3() -> Curried {
    curry(3)
        .unwrap()
        .apply(summing("add", &["x", "y", "z"]).with_doc("Returns add(x)(y)(z) = x + y + z."))
}

/// Invoke and expect another partial application.
pub(crate) fn partial(curried: &Curried, args: CallArgs) -> Curried {
    match curried.invoke(args).unwrap() {
        Outcome::Partial(next) => next,
        Outcome::Complete(value) => panic!("expected a partial application, got {value}"),
    }
}

/// Invoke and expect the target's result.
pub(crate) fn complete(curried: &Curried, args: CallArgs) -> Value {
    match curried.invoke(args).unwrap() {
        Outcome::Complete(value) => value,
        Outcome::Partial(next) => panic!("expected a result, got {next:?}"),
    }
}

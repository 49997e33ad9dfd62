use super::*;

// Kind → message round-trip

#[test]
fn invalid_curry_depth_has_correct_kind() {
    let err = invalid_curry_depth(0);
    assert_eq!(err.kind, EvalErrorKind::InvalidCurryDepth { depth: 0 });
    assert_eq!(err.message, "curry depth must be at least 1, got 0");
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

#[test]
fn duplicate_argument_has_correct_kind() {
    let err = duplicate_argument("add", "x");
    assert_eq!(
        err.kind,
        EvalErrorKind::DuplicateArgument {
            function: "add".to_string(),
            name: "x".to_string(),
        }
    );
    assert_eq!(err.message, "add() got multiple values for argument 'x'");
    assert_eq!(err.category(), ErrorCategory::Binding);
}

#[test]
fn too_many_positional_pluralizes() {
    assert_eq!(
        too_many_positional("inc", 1, 2).message,
        "inc() takes 1 positional argument but 2 were given"
    );
    assert_eq!(
        too_many_positional("add", 2, 3).message,
        "add() takes 2 positional arguments but 3 were given"
    );
}

#[test]
fn unexpected_keyword_message() {
    let err = unexpected_keyword("add", "w");
    assert_eq!(err.message, "add() got an unexpected keyword argument 'w'");
    assert_eq!(err.category(), ErrorCategory::Binding);
}

#[test]
fn missing_argument_message() {
    let err = missing_argument("add", "y");
    assert_eq!(err.message, "add() missing required argument: 'y'");
}

#[test]
fn runtime_errors_are_runtime_category() {
    let errors = [
        type_mismatch("int", "str"),
        integer_overflow("addition"),
        division_by_zero(),
        not_callable("int"),
        EvalError::new("boom"),
    ];
    for err in &errors {
        assert_eq!(err.category(), ErrorCategory::Runtime, "{:?}", err.kind);
    }
}

#[test]
fn custom_error_keeps_message() {
    let err = EvalError::new("something broke");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "something broke".to_string()
        }
    );
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn notes_render_after_message() {
    let err = duplicate_argument("add", "x").with_note("introduced by call 2 of 2");
    assert_eq!(
        err.to_string(),
        "add() got multiple values for argument 'x'\n  note: introduced by call 2 of 2"
    );
}

#[test]
fn message_matches_kind_display() {
    let errors = [
        invalid_curry_depth(0),
        duplicate_argument("f", "a"),
        too_many_positional("f", 0, 1),
        unexpected_keyword("f", "a"),
        missing_argument("f", "a"),
        calls_exhausted("f", 2),
        type_mismatch("int", "bool"),
        integer_overflow("multiplication"),
        division_by_zero(),
        not_callable("str"),
    ];
    for err in &errors {
        assert_eq!(
            err.message,
            err.kind.to_string(),
            "message/kind mismatch for {:?}",
            err.kind
        );
    }
}

#[test]
fn calls_exhausted_message() {
    let err = calls_exhausted("add", 2);
    assert_eq!(err.message, "add() already received all 2 calls");
    assert_eq!(err.category(), ErrorCategory::Binding);
}

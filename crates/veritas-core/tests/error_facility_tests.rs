use std::collections::HashSet;

use veritas_core::errors::{ExError, ExErrorKind, VeritasError};
use veritas_core::value::{ArrayValue, Builtin};
use veritas_core::{assert_equal, assert_str_equal, Fault, StrEquality, Value};

#[test]
fn test_not_equal_verifiable_by_kind() {
    let err = assert_equal(&Value::I32(1), &Value::I32(2)).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotEqual);
    assert_eq!(ex_err.code(), "ERR_NOT_EQUAL");
    assert_eq!(ex_err.expected(), Some("1"));
    assert_eq!(ex_err.actual(), Some("2"));
}

#[test]
fn test_string_mismatch_shares_not_equal_kind() {
    let err = assert_str_equal("abc", "abd", StrEquality::default()).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotEqual);
    assert_eq!(ex_err.expected(), Some("\"abc\""));
    assert!(ex_err.message().contains("expected index 2"));
}

#[test]
fn test_member_fault_names_the_fault_type() {
    let err = VeritasError::from(Fault::new("InvalidCastException", "nope"));

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MemberFault);
    assert_eq!(ex_err.code(), "ERR_MEMBER_FAULT");
    assert_eq!(ex_err.type_name(), Some("InvalidCastException"));
    assert!(ex_err.message().contains("nope"));
}

#[test]
fn test_invalid_array_shape_is_invalid_input() {
    let err = ArrayValue::new(Builtin::I32.into(), vec![2, 2], vec![Value::I32(1)]).unwrap_err();
    assert_eq!(
        err,
        VeritasError::InvalidArrayShape {
            lengths: vec![2, 2],
            items: 1
        }
    );

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
}

#[test]
fn test_incomparable_carries_type_name() {
    let err = VeritasError::Incomparable {
        type_name: "Acme.Widget".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Incomparable);
    assert_eq!(ex_err.type_name(), Some("Acme.Widget"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Test that each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::NotEqual, "ERR_NOT_EQUAL"),
        (ExErrorKind::UnexpectedlyEqual, "ERR_UNEXPECTEDLY_EQUAL"),
        (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
        (ExErrorKind::UnexpectedlyInRange, "ERR_UNEXPECTEDLY_IN_RANGE"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::UnexpectedlyFound, "ERR_UNEXPECTEDLY_FOUND"),
        (ExErrorKind::Incomparable, "ERR_INCOMPARABLE"),
        (ExErrorKind::MemberFault, "ERR_MEMBER_FAULT"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    let codes: HashSet<&str> = kinds.iter().map(|(kind, _)| kind.code()).collect();
    assert_eq!(codes.len(), kinds.len());
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_ex_error_display_format() {
    let ex_err = ExError::new(ExErrorKind::OutOfRange)
        .with_op("assert_in_range")
        .with_message("value 11 outside 1..10")
        .with_type_name("int");

    assert_eq!(
        ex_err.to_string(),
        "[ERR_OUT_OF_RANGE] in operation 'assert_in_range': value 11 outside 1..10 (type: int)"
    );
}

#[test]
fn test_ex_error_source_chain() {
    let inner = ExError::new(ExErrorKind::MemberFault).with_message("getter failed");
    let outer = ExError::new(ExErrorKind::Internal).with_source(inner);

    let source = outer.source_error().map(ExError::kind);
    assert_eq!(source, Some(ExErrorKind::MemberFault));
    assert!(std::error::Error::source(&outer).is_some());
}

use std::collections::HashSet;
use workload_core::errors::{ExError, ExErrorKind, WorkloadError};

#[test]
fn test_staff_not_found_verifiable_by_kind() {
    let ex_err: ExError = WorkloadError::StaffNotFound {
        name: "ghost".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("ghost"));
}

#[test]
fn test_order_not_found_carries_id() {
    let ex_err: ExError = WorkloadError::OrderNotFound { order_id: 99 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity_id(), Some("99"));
}

#[test]
fn test_duplicate_name_distinct_from_constraint_violation() {
    let ex_err: ExError = WorkloadError::DuplicateStaffName {
        name: "alice".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::AlreadyExists);
    assert_ne!(ex_err.kind(), ExErrorKind::ConstraintViolation);
}

#[test]
fn test_missing_field_message_names_field() {
    let ex_err: ExError = WorkloadError::MissingField {
        field: "customer_name".to_string(),
    }
    .into();

    assert_eq!(ex_err.code(), "ERR_MISSING_FIELD");
    assert!(ex_err.message().contains("customer_name"));
}

#[test]
fn test_error_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidInput,
        ExErrorKind::MissingField,
        ExErrorKind::NotFound,
        ExErrorKind::AlreadyExists,
        ExErrorKind::ConstraintViolation,
        ExErrorKind::CannotDelete,
        ExErrorKind::Unauthorised,
        ExErrorKind::Io,
        ExErrorKind::Persistence,
    ];

    let codes: HashSet<&str> = kinds.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), kinds.len());
    assert!(codes.iter().all(|c| c.starts_with("ERR_")));
}

//! Presence checks for user-supplied input
//!
//! These run at the presentation boundary before a domain operation is
//! called. The domain operations themselves accept whatever they are given.

use crate::errors::{Result, WorkloadError};

/// Fail with `MissingField` when `value` is empty or whitespace
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WorkloadError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// A new order needs a customer name and at least one item
pub fn validate_order_input<S: AsRef<str>>(customer_name: &str, items: &[S]) -> Result<()> {
    require_non_empty("customer_name", customer_name)?;
    if items.iter().all(|i| i.as_ref().trim().is_empty()) {
        return Err(WorkloadError::MissingField {
            field: "items".to_string(),
        });
    }
    Ok(())
}

/// Adding staff requires name, password and groups
pub fn validate_new_staff(name: &str, password: &str, groups: &str) -> Result<()> {
    require_non_empty("name", name)?;
    require_non_empty("password", password)?;
    require_non_empty("groups", groups)
}

/// Editing staff requires the name and the new groups
pub fn validate_staff_edit(name: &str, groups: &str) -> Result<()> {
    require_non_empty("name", name)?;
    require_non_empty("groups", groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_requires_customer_name() {
        let err = validate_order_input("  ", &["Coke"]).unwrap_err();
        assert_eq!(
            err,
            WorkloadError::MissingField {
                field: "customer_name".to_string()
            }
        );
    }

    #[test]
    fn test_order_requires_an_item() {
        let empty: [&str; 0] = [];
        assert!(validate_order_input("bob", &empty).is_err());
        assert!(validate_order_input("bob", &[""]).is_err());
        assert!(validate_order_input("bob", &["Veg Pizza"]).is_ok());
    }

    #[test]
    fn test_new_staff_requires_every_field() {
        assert!(validate_new_staff("alice", "pw1", "Veg Pizza").is_ok());
        assert!(validate_new_staff("alice", "", "Veg Pizza").is_err());
        assert!(validate_new_staff("alice", "pw1", "").is_err());
        assert!(validate_new_staff("", "pw1", "Veg Pizza").is_err());
    }

    #[test]
    fn test_staff_edit_requires_groups() {
        assert!(validate_staff_edit("alice", "Drinks").is_ok());
        assert!(validate_staff_edit("alice", " ").is_err());
    }
}

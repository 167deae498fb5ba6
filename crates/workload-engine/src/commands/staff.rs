//! Staff administration handlers

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use workload_core::credentials::hash_password;
use workload_core::errors::{ExError, ExErrorKind, WorkloadError};
use workload_core::model::StaffSummary;
use workload_core::{log_op_end, log_op_error, log_op_start};
use workload_core_types::Sensitive;
use workload_store::errors::Result;
use workload_store::{OrderRepo, StaffRepo};

/// Add a staff member
///
/// The password is digested before it reaches storage.
///
/// ## Returns
///
/// The generated staff id
///
/// ## Errors
///
/// - `AlreadyExists`: A staff member with that name exists
/// - `Persistence`: Database error
pub fn add_staff(
    name: &str,
    password: &Sensitive<String>,
    groups: &str,
    conn: &Connection,
) -> Result<i64> {
    log_op_start!("add_staff", staff_name = name);
    let start = std::time::Instant::now();

    let staff_id = add_staff_impl(name, password, groups, conn).map_err(|e| {
        log_op_error!(
            "add_staff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "add_staff",
        duration_ms = start.elapsed().as_millis() as u64,
        staff_id = staff_id
    );

    Ok(staff_id)
}

fn add_staff_impl(
    name: &str,
    password: &Sensitive<String>,
    groups: &str,
    conn: &Connection,
) -> Result<i64> {
    // The only constraint an insert can break is the unique name
    StaffRepo::insert_staff(conn, name, &hash_password(password), groups).map_err(|e| {
        if e.kind() == ExErrorKind::ConstraintViolation {
            ExError::from(WorkloadError::DuplicateStaffName {
                name: name.to_string(),
            })
            .with_op("add_staff")
        } else {
            e
        }
    })
}

/// Replace a staff member's skill groups
///
/// ## Returns
///
/// Number of rows affected; 0 when no staff member has that name
pub fn edit_staff(name: &str, groups: &str, conn: &Connection) -> Result<usize> {
    log_op_start!("edit_staff", staff_name = name);
    let start = std::time::Instant::now();

    let affected = StaffRepo::update_staff_groups_by_name(conn, name, groups).map_err(|e| {
        log_op_error!(
            "edit_staff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "edit_staff",
        duration_ms = start.elapsed().as_millis() as u64,
        affected = affected
    );

    Ok(affected)
}

/// Remove a staff member
///
/// Refused while the staff member still holds `WIP` orders. Completed
/// orders that pointed at them lose their assignee.
///
/// ## Returns
///
/// Number of rows affected; 0 when no staff member has that name
///
/// ## Errors
///
/// - `CannotDelete`: The staff member holds open orders
/// - `Persistence`: Database error
pub fn delete_staff(name: &str, conn: &Connection) -> Result<usize> {
    log_op_start!("delete_staff", staff_name = name);
    let start = std::time::Instant::now();

    let affected = delete_staff_impl(name, conn).map_err(|e| {
        log_op_error!(
            "delete_staff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "delete_staff",
        duration_ms = start.elapsed().as_millis() as u64,
        affected = affected
    );

    Ok(affected)
}

fn delete_staff_impl(name: &str, conn: &Connection) -> Result<usize> {
    let affected = StaffRepo::delete_staff_by_name(conn, name)?;
    if affected > 0 {
        return Ok(affected);
    }

    // Nothing deleted: either unknown or still holding open orders
    let Some(staff) = StaffRepo::find_staff_by_name(conn, name)? else {
        return Ok(0);
    };
    let open_orders = OrderRepo::count_open_orders_for_staff(conn, staff.id)?;
    Err(ExError::from(WorkloadError::StaffHasOpenOrders {
        name: name.to_string(),
        open_orders,
    })
    .with_op("delete_staff"))
}

/// Every staff member's name and groups
pub fn get_all_staff(conn: &Connection) -> Result<Vec<StaffSummary>> {
    log_op_start!("get_all_staff");
    let start = std::time::Instant::now();

    let staff = StaffRepo::list_all_staff(conn).map_err(|e| {
        log_op_error!(
            "get_all_staff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "get_all_staff",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = staff.len()
    );

    Ok(staff)
}

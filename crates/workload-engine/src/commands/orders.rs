//! Order command handlers
//!
//! Placing, assigning and completing orders. None of these validate the
//! caller's input beyond what referential lookups require; presence checks
//! live in `workload_core::rules::validation` at the presentation boundary.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use std::collections::BTreeMap;
use workload_core::errors::{ExError, WorkloadError};
use workload_core::model::{join_list, Order, OrderStatus};
use workload_core::{log_op_end, log_op_error, log_op_start};
use workload_store::errors::Result;
use workload_store::{OrderRepo, StaffRepo};

/// Place a new order
///
/// Inserts one order in `WIP` with no assignee. Items are stored joined
/// with `,`.
///
/// ## Returns
///
/// The generated order id
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn place_order<S: AsRef<str>>(
    customer_name: &str,
    items: &[S],
    conn: &Connection,
) -> Result<i64> {
    log_op_start!("place_order", item_count = items.len());
    let start = std::time::Instant::now();

    let order_id =
        OrderRepo::insert_order(conn, customer_name, &join_list(items)).map_err(|e| {
            log_op_error!(
                "place_order",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "place_order",
        duration_ms = start.elapsed().as_millis() as u64,
        order_id = order_id
    );

    Ok(order_id)
}

/// Assign an order to a staff member by name
///
/// ## Errors
///
/// - `NotFound`: No staff member with that name, or no such order
/// - `Persistence`: Database error
pub fn assign_order(order_id: i64, staff_name: &str, conn: &Connection) -> Result<()> {
    log_op_start!("assign_order", order_id = order_id, staff_name = staff_name);
    let start = std::time::Instant::now();

    assign_order_impl(order_id, staff_name, conn).map_err(|e| {
        log_op_error!(
            "assign_order",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "assign_order",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(())
}

fn assign_order_impl(order_id: i64, staff_name: &str, conn: &Connection) -> Result<()> {
    let staff = StaffRepo::find_staff_by_name(conn, staff_name)?.ok_or_else(|| {
        ExError::from(WorkloadError::StaffNotFound {
            name: staff_name.to_string(),
        })
        .with_op("assign_order")
    })?;

    let affected = OrderRepo::update_order_assignee_by_id(conn, order_id, Some(staff.id))?;
    if affected == 0 {
        return Err(ExError::from(WorkloadError::OrderNotFound { order_id }).with_op("assign_order"));
    }

    Ok(())
}

/// Fetch one order
///
/// ## Errors
///
/// - `NotFound`: No order with that id
pub fn get_order(order_id: i64, conn: &Connection) -> Result<Order> {
    log_op_start!("get_order", order_id = order_id);
    let start = std::time::Instant::now();

    let order = OrderRepo::get_order(conn, order_id)
        .and_then(|found| {
            found.ok_or_else(|| {
                ExError::from(WorkloadError::OrderNotFound { order_id }).with_op("get_order")
            })
        })
        .map_err(|e| {
            log_op_error!(
                "get_order",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "get_order",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(order)
}

/// Automatic assignment placeholder
///
/// No assignment policy exists yet, so this touches nothing and reports
/// zero assigned orders.
pub fn auto_assign_orders(_conn: &Connection) -> Result<usize> {
    log_op_start!("auto_assign_orders");
    log_op_end!("auto_assign_orders", duration_ms = 0_u64, assigned = 0_u64);
    Ok(0)
}

/// All orders assigned to the named staff member, in storage order
pub fn get_staff_orders(staff_name: &str, conn: &Connection) -> Result<Vec<Order>> {
    log_op_start!("get_staff_orders", staff_name = staff_name);
    let start = std::time::Instant::now();

    let orders = OrderRepo::list_orders_by_assignee(conn, staff_name).map_err(|e| {
        log_op_error!(
            "get_staff_orders",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "get_staff_orders",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = orders.len()
    );

    Ok(orders)
}

/// Mark an order completed
///
/// Unconditional and idempotent: no check of the current status, and an
/// unknown id affects zero rows without error.
///
/// ## Returns
///
/// Number of rows affected (0 or 1)
pub fn complete_order(order_id: i64, conn: &Connection) -> Result<usize> {
    log_op_start!("complete_order", order_id = order_id);
    let start = std::time::Instant::now();

    let affected = OrderRepo::update_order_status_by_id(conn, order_id, OrderStatus::Completed)
        .map_err(|e| {
            log_op_error!(
                "complete_order",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    if affected == 0 {
        tracing::debug!(order_id, "complete_order matched no rows");
    }

    log_op_end!(
        "complete_order",
        duration_ms = start.elapsed().as_millis() as u64,
        affected = affected
    );

    Ok(affected)
}

/// `WIP` order counts for the given staff names
///
/// Names with no staff record count as zero.
pub fn pending_counts<S: AsRef<str>>(
    staff_names: &[S],
    conn: &Connection,
) -> Result<BTreeMap<String, usize>> {
    log_op_start!("pending_counts", staff_count = staff_names.len());
    let start = std::time::Instant::now();

    let all = OrderRepo::open_order_counts(conn).map_err(|e| {
        log_op_error!(
            "pending_counts",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let counts = staff_names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), all.get(name).copied().unwrap_or(0))
        })
        .collect();

    log_op_end!(
        "pending_counts",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(counts)
}

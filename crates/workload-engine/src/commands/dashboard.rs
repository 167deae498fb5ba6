//! Dashboard queries

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use workload_core::model::{DashboardRow, DashboardSummary};
use workload_core::{log_op_end, log_op_error, log_op_start};
use workload_store::errors::Result;
use workload_store::OrderRepo;

/// Every order's id, assignee and status
pub fn get_dashboard_data(conn: &Connection) -> Result<Vec<DashboardRow>> {
    log_op_start!("get_dashboard_data");
    let start = std::time::Instant::now();

    let rows = OrderRepo::list_dashboard_rows(conn).map_err(|e| {
        log_op_error!(
            "get_dashboard_data",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "get_dashboard_data",
        duration_ms = start.elapsed().as_millis() as u64,
        rows = rows.len()
    );

    Ok(rows)
}

/// Aggregate counts over the current dashboard data
pub fn dashboard_summary(conn: &Connection) -> Result<DashboardSummary> {
    let rows = get_dashboard_data(conn)?;
    Ok(DashboardSummary::from_rows(&rows))
}

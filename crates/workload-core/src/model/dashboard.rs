//! Dashboard projection and aggregate counts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::order::OrderStatus;

/// One order as seen by the dashboard: id, assignee and status only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub order_id: i64,
    pub assigned_to: Option<String>,
    pub status: OrderStatus,
}

/// Aggregate counts over all orders
///
/// `total == in_progress + completed` holds for every summary built by
/// `from_rows`, since every row carries exactly one of the two statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Completed orders per assignee; unassigned orders are not tallied
    pub completed_by_staff: BTreeMap<String, usize>,
}

impl DashboardSummary {
    pub fn from_rows(rows: &[DashboardRow]) -> Self {
        let mut summary = Self {
            total: rows.len(),
            ..Self::default()
        };

        for row in rows {
            match row.status {
                OrderStatus::Wip => summary.in_progress += 1,
                OrderStatus::Completed => {
                    summary.completed += 1;
                    if let Some(name) = &row.assigned_to {
                        *summary.completed_by_staff.entry(name.clone()).or_insert(0) += 1;
                    }
                }
            }
        }

        summary
    }

    /// One-line textual summary, the input to trend analysis
    pub fn describe(&self) -> String {
        format!(
            "Total Orders: {}, In Progress: {}, Completed: {}",
            self.total, self.in_progress, self.completed
        )
    }
}

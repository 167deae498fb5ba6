pub mod dashboard;
pub mod order;
pub mod staff;

pub use dashboard::{DashboardRow, DashboardSummary};
pub use order::{Order, OrderStatus};
pub use staff::{Staff, StaffSummary};

/// Separator used for the denormalized `items` and `groups` columns
pub const LIST_SEPARATOR: char = ',';

/// Split a comma-separated column into trimmed, non-empty entries
///
/// ```
/// use workload_core::model::split_list;
///
/// assert_eq!(split_list(" Veg Pizza, Coke ,,"), vec!["Veg Pizza", "Coke"]);
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join entries into the stored comma-separated form (no padding)
pub fn join_list<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

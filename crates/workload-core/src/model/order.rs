use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::split_list;
use crate::errors::WorkloadError;

/// Order lifecycle state
///
/// `Wip` is the initial state; `Completed` is terminal. The only transition
/// is `Wip -> Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "WIP")]
    Wip,
    Completed,
}

impl OrderStatus {
    /// The stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Wip => "WIP",
            OrderStatus::Completed => "Completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIP" => Ok(OrderStatus::Wip),
            "Completed" => Ok(OrderStatus::Completed),
            other => Err(WorkloadError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Generated on insert
    pub id: i64,

    pub customer_name: String,

    /// Comma-separated item names
    pub items: String,

    /// Name of the assigned staff member, if any
    pub assigned_to: Option<String>,

    pub status: OrderStatus,
}

impl Order {
    /// Parsed item names
    pub fn item_list(&self) -> Vec<String> {
        split_list(&self.items)
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Wip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_storage_form() {
        for status in [OrderStatus::Wip, OrderStatus::Completed] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "Cancelled".parse::<OrderStatus>().unwrap_err();
        assert_eq!(
            err,
            WorkloadError::InvalidStatus {
                value: "Cancelled".to_string()
            }
        );
    }

    #[test]
    fn test_default_status_is_wip() {
        assert_eq!(OrderStatus::default(), OrderStatus::Wip);
        assert!(!OrderStatus::Wip.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
    }

    #[test]
    fn test_status_serializes_as_stored_text() {
        assert_eq!(serde_json::to_string(&OrderStatus::Wip).unwrap(), "\"WIP\"");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).unwrap(),
            "\"Completed\""
        );
    }
}

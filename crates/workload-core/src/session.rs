//! Authenticated actor for one interaction
//!
//! Produced by a successful login and passed explicitly to whatever needs
//! to know who is acting; there is no ambient "currently logged in" state.

use serde::{Deserialize, Serialize};

use crate::model::Order;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub staff_id: i64,
    pub staff_name: String,
}

impl Session {
    pub fn new(staff_id: i64, staff_name: impl Into<String>) -> Self {
        Self {
            staff_id,
            staff_name: staff_name.into(),
        }
    }

    /// Whether the order is assigned to this session's staff member
    pub fn owns(&self, order: &Order) -> bool {
        order.assigned_to.as_deref() == Some(self.staff_name.as_str())
    }
}

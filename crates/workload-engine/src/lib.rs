//! Workload Engine - domain operations
//!
//! High-level operations (place/assign/complete orders, login, staff
//! administration, dashboard) that coordinate the core model with the
//! storage layer. Each operation runs on the caller's connection and owns
//! its lifecycle logging.

pub mod commands;

pub use commands::auth::{authenticate, login};
pub use commands::dashboard::{dashboard_summary, get_dashboard_data};
pub use commands::orders::{
    assign_order, auto_assign_orders, complete_order, get_order, get_staff_orders, pending_counts,
    place_order,
};
pub use commands::staff::{add_staff, delete_staff, edit_staff, get_all_staff};

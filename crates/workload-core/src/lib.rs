//! Workload Core - domain model and shared facilities
//!
//! This crate provides:
//! - Staff and Order models with the `WIP -> Completed` lifecycle
//! - Dashboard projection and aggregate counts
//! - Password digests, the item catalog and the explicit login `Session`
//! - The canonical error facility (`ExError`) and domain errors
//! - The structured logging facility and its lifecycle macros
//! - Presence checks used at the presentation boundary

pub mod catalog;
pub mod credentials;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, WorkloadError};
pub use model::{DashboardRow, DashboardSummary, Order, OrderStatus, Staff, StaffSummary};
pub use session::Session;

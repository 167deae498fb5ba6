//! Workload Store - SQLite persistence for staff and orders
//!
//! Provides:
//! - Connection management (`db`), one connection per interaction
//! - Embedded, checksummed schema migrations applied idempotently at startup
//! - `StaffRepo` and `OrderRepo`: parameterized single-statement operations
//!
//! Nothing here validates business rules; that belongs to the engine.

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::Database;
pub use errors::Result;
pub use repo::{OrderRepo, StaffRepo};

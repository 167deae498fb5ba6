//! Domain operation handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store only uses `tracing::debug!()` for internal details.

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod staff;

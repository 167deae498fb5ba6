//! Subcommand handlers
//!
//! Each handler validates its input, opens a connection for the
//! interaction, calls engine operations and prints the result. Assistant
//! output is printed after the result and never changes it.

pub mod admin;
pub mod catalog;
pub mod dashboard;
pub mod order;
pub mod staff;

/// Boxed error returned by every handler
pub type CliResult = Result<(), Box<dyn std::error::Error>>;

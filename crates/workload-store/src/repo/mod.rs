//! Repository layer: the storage operations for staff and orders
//!
//! Every function takes the caller's connection and runs one
//! parameterized statement (or a fixed read sequence).

pub mod order_repo;
pub mod staff_repo;

pub use order_repo::OrderRepo;
pub use staff_repo::StaffRepo;

//! Staff persistence

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use workload_core::model::{OrderStatus, Staff, StaffSummary};

/// SQLite repository for staff records
pub struct StaffRepo;

const STAFF_COLUMNS: &str = "id, name, password_hash, \"groups\"";

fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: row.get(0)?,
        name: row.get(1)?,
        password_hash: row.get(2)?,
        groups: row.get(3)?,
    })
}

impl StaffRepo {
    /// Insert a staff member; returns the generated id
    ///
    /// `password_hash` must already be a digest.
    pub fn insert_staff(
        conn: &Connection,
        name: &str,
        password_hash: &str,
        groups: &str,
    ) -> Result<i64> {
        conn.execute(
            "INSERT INTO staff (name, password_hash, \"groups\") VALUES (?1, ?2, ?3)",
            rusqlite::params![name, password_hash, groups],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(staff_id = id, "staff row inserted");
        Ok(id)
    }

    /// Replace the groups of the named staff member; returns affected rows
    pub fn update_staff_groups_by_name(conn: &Connection, name: &str, groups: &str) -> Result<usize> {
        conn.execute(
            "UPDATE staff SET \"groups\" = ?1 WHERE name = ?2",
            rusqlite::params![groups, name],
        )
        .map_err(from_rusqlite)
    }

    /// Delete the named staff member unless they hold a `WIP` order;
    /// returns affected rows
    ///
    /// The open-order check and the delete are one statement, so an
    /// assignment made by another connection cannot slip in between.
    pub fn delete_staff_by_name(conn: &Connection, name: &str) -> Result<usize> {
        conn.execute(
            "DELETE FROM staff WHERE name = ?1 AND NOT EXISTS (
                 SELECT 1 FROM orders
                 WHERE orders.assigned_staff_id = staff.id AND orders.status = ?2
             )",
            rusqlite::params![name, OrderStatus::Wip.as_str()],
        )
        .map_err(from_rusqlite)
    }

    /// List every staff member's name and groups, in insertion order
    pub fn list_all_staff(conn: &Connection) -> Result<Vec<StaffSummary>> {
        let mut stmt = conn
            .prepare("SELECT name, \"groups\" FROM staff ORDER BY id")
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StaffSummary {
                    name: row.get(0)?,
                    groups: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Exact match on (name, password digest)
    pub fn find_staff_by_name_and_password_hash(
        conn: &Connection,
        name: &str,
        password_hash: &str,
    ) -> Result<Option<Staff>> {
        conn.query_row(
            &format!(
                "SELECT {} FROM staff WHERE name = ?1 AND password_hash = ?2",
                STAFF_COLUMNS
            ),
            [name, password_hash],
            staff_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn find_staff_by_name(conn: &Connection, name: &str) -> Result<Option<Staff>> {
        conn.query_row(
            &format!("SELECT {} FROM staff WHERE name = ?1", STAFF_COLUMNS),
            [name],
            staff_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }
}

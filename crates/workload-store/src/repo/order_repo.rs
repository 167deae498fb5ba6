//! Order persistence
//!
//! Orders reference staff by id; every read joins the staff table so the
//! returned `Order.assigned_to` carries the assignee's current name.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use workload_core::model::{DashboardRow, Order, OrderStatus};

/// SQLite repository for orders
pub struct OrderRepo;

const ORDER_SELECT: &str = "SELECT o.id, o.customer_name, o.items, s.name, o.status
     FROM orders o LEFT JOIN staff s ON s.id = o.assigned_staff_id";

fn status_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<OrderStatus> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    Ok(Order {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        items: row.get(2)?,
        assigned_to: row.get(3)?,
        status: status_at(row, 4)?,
    })
}

fn collect_orders(conn: &Connection, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Order>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, order_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

impl OrderRepo {
    /// Insert a new order in `WIP` with no assignee; returns the generated id
    pub fn insert_order(conn: &Connection, customer_name: &str, items: &str) -> Result<i64> {
        conn.execute(
            "INSERT INTO orders (customer_name, items) VALUES (?1, ?2)",
            rusqlite::params![customer_name, items],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(order_id = id, "order row inserted");
        Ok(id)
    }

    pub fn get_order(conn: &Connection, order_id: i64) -> Result<Option<Order>> {
        conn.query_row(
            &format!("{} WHERE o.id = ?1", ORDER_SELECT),
            [order_id],
            order_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Orders assigned to the named staff member, in storage order
    pub fn list_orders_by_assignee(conn: &Connection, staff_name: &str) -> Result<Vec<Order>> {
        collect_orders(
            conn,
            &format!("{} WHERE s.name = ?1 ORDER BY o.id", ORDER_SELECT),
            &[&staff_name],
        )
    }

    pub fn list_all_orders(conn: &Connection) -> Result<Vec<Order>> {
        collect_orders(conn, &format!("{} ORDER BY o.id", ORDER_SELECT), &[])
    }

    /// The (id, assignee, status) projection used by the dashboard
    pub fn list_dashboard_rows(conn: &Connection) -> Result<Vec<DashboardRow>> {
        let mut stmt = conn
            .prepare(
                "SELECT o.id, s.name, o.status
                 FROM orders o LEFT JOIN staff s ON s.id = o.assigned_staff_id
                 ORDER BY o.id",
            )
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(DashboardRow {
                    order_id: row.get(0)?,
                    assigned_to: row.get(1)?,
                    status: status_at(row, 2)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Set the status of one order; returns affected rows (0 if unknown id)
    pub fn update_order_status_by_id(
        conn: &Connection,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<usize> {
        conn.execute(
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            rusqlite::params![status.as_str(), order_id],
        )
        .map_err(from_rusqlite)
    }

    /// Point an order at a staff id (or clear it); returns affected rows
    pub fn update_order_assignee_by_id(
        conn: &Connection,
        order_id: i64,
        staff_id: Option<i64>,
    ) -> Result<usize> {
        conn.execute(
            "UPDATE orders SET assigned_staff_id = ?1 WHERE id = ?2",
            rusqlite::params![staff_id, order_id],
        )
        .map_err(from_rusqlite)
    }

    /// Number of `WIP` orders assigned to a staff id
    pub fn count_open_orders_for_staff(conn: &Connection, staff_id: i64) -> Result<usize> {
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM orders WHERE assigned_staff_id = ?1 AND status = ?2",
                rusqlite::params![staff_id, OrderStatus::Wip.as_str()],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        Ok(count as usize)
    }

    /// `WIP` order count for every staff member, zero included
    pub fn open_order_counts(conn: &Connection) -> Result<BTreeMap<String, usize>> {
        let mut stmt = conn
            .prepare(
                "SELECT s.name, COUNT(o.id)
                 FROM staff s
                 LEFT JOIN orders o ON o.assigned_staff_id = s.id AND o.status = ?1
                 GROUP BY s.id, s.name",
            )
            .map_err(from_rusqlite)?;

        let counts = stmt
            .query_map([OrderStatus::Wip.as_str()], |row| {
                let name: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((name, count as usize))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<BTreeMap<_, _>, _>>()
            .map_err(from_rusqlite)?;

        Ok(counts)
    }
}

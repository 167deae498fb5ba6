//! Staff authentication
//!
//! A login succeeds when a staff row matches the name and the digest of the
//! supplied password exactly. Unknown name and wrong password are not
//! distinguished.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use workload_core::credentials::hash_password;
use workload_core::session::Session;
use workload_core::{log_op_end, log_op_error, log_op_start};
use workload_core_types::Sensitive;
use workload_store::errors::Result;
use workload_store::StaffRepo;

/// Check a name/password pair
pub fn authenticate(name: &str, password: &Sensitive<String>, conn: &Connection) -> Result<bool> {
    Ok(login(name, password, conn)?.is_some())
}

/// Authenticate and, on success, return the session for this staff member
pub fn login(
    name: &str,
    password: &Sensitive<String>,
    conn: &Connection,
) -> Result<Option<Session>> {
    log_op_start!("login", staff_name = name);
    let start = std::time::Instant::now();

    let staff = StaffRepo::find_staff_by_name_and_password_hash(
        conn,
        name,
        &hash_password(password),
    )
    .map_err(|e| {
        log_op_error!(
            "login",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "login",
        duration_ms = start.elapsed().as_millis() as u64,
        authenticated = staff.is_some()
    );

    Ok(staff.map(|s| Session::new(s.id, s.name)))
}

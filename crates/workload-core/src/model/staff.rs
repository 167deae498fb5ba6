use serde::{Deserialize, Serialize};

/// A staff member as stored
///
/// `password_hash` is always the hex SHA-256 digest produced by
/// `credentials::hash_password`, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Generated on insert
    pub id: i64,

    /// Display and login name (unique)
    pub name: String,

    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Comma-separated skill-group labels
    pub groups: String,
}

/// The admin listing projection: name and groups only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffSummary {
    pub name: String,
    pub groups: String,
}

impl From<Staff> for StaffSummary {
    fn from(staff: Staff) -> Self {
        Self {
            name: staff.name,
            groups: staff.groups,
        }
    }
}

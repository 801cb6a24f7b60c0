//! User accounts

use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username of the built-in account that can never be deleted
pub const ADMIN_USERNAME: &str = "admin";

/// Role label that unlocks the user registry
pub const ADMIN_ROLE_LABEL: &str = "ADMIN";

/// Privilege rank, lower is more privileged
///
/// Persisted as the integer `roleLevel`. Ordering follows the numeric level,
/// so `Admin < Leader < Member`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum RoleLevel {
    /// Site administrator (level 1)
    Admin = 1,
    /// Band leader, may manage content (level 2)
    Leader = 2,
    /// Band member, read-only (level 3)
    Member = 3,
}

impl RoleLevel {
    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for RoleLevel {
    type Error = String;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(RoleLevel::Admin),
            2 => Ok(RoleLevel::Leader),
            3 => Ok(RoleLevel::Member),
            other => Err(format!("unknown role level {}", other)),
        }
    }
}

impl From<RoleLevel> for i64 {
    fn from(level: RoleLevel) -> Self {
        level.as_i64()
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// A user account as stored under `br_users`
///
/// The password is plaintext; the session holds a full copy of this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub password: String,
    /// Display label, e.g. `ADMIN` or `Bandleiter`
    pub role: String,
    pub role_level: RoleLevel,
}

impl User {
    /// The built-in admin account is protected from deletion (by username)
    pub fn is_protected(&self) -> bool {
        self.username == ADMIN_USERNAME
    }

    pub fn has_admin_role(&self) -> bool {
        self.role == ADMIN_ROLE_LABEL
    }
}

/// Accounts written on first run
pub fn seed_users() -> Vec<User> {
    let seed = |id, username: &str, role: &str, role_level| User {
        id,
        username: username.to_string(),
        password: "password".to_string(),
        role: role.to_string(),
        role_level,
    };

    vec![
        seed(1, "admin", "ADMIN", RoleLevel::Admin),
        seed(2, "leiter", "Bandleiter", RoleLevel::Leader),
        seed(3, "member", "Bandmitglied", RoleLevel::Member),
    ]
}

//! Permission checks

use super::Session;
use crate::models::RoleLevel;

/// Highest level allowed to manage content (Bandleiter and above)
pub const CONTENT_MANAGER_LEVEL: RoleLevel = RoleLevel::Leader;

/// Highest level allowed to manage users (admin only)
pub const USER_MANAGER_LEVEL: RoleLevel = RoleLevel::Admin;

/// No session ⇒ false; otherwise the session level must be at most `required`
pub fn has_permission(session: Option<&Session>, required: RoleLevel) -> bool {
    session.is_some_and(|s| s.has_permission(required))
}

pub fn can_manage_content(session: Option<&Session>) -> bool {
    has_permission(session, CONTENT_MANAGER_LEVEL)
}

pub fn can_manage_users(session: Option<&Session>) -> bool {
    has_permission(session, USER_MANAGER_LEVEL)
}

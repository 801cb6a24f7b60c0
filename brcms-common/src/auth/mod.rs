//! Session and permission layer
//!
//! The current user is a snapshot stored under the session key. Permission
//! checks compare its role level against fixed policy thresholds. Page gates
//! turn a session into a capability token or a redirect.
//!
//! All of this is advisory: the credentials are plaintext and every check
//! runs on the operator's side.

pub mod gate;
pub mod permission;
pub mod session;
pub mod visibility;

pub use gate::{
    require_admin_access, require_content_access, AdminAccess, ContentAccess, Location, Redirect,
    NO_PERMISSION_NOTICE,
};
pub use permission::{
    can_manage_content, can_manage_users, has_permission, CONTENT_MANAGER_LEVEL,
    USER_MANAGER_LEVEL,
};
pub use session::{logout, Session};
pub use visibility::Visibility;

//! User registry
//!
//! List and delete over the user collection. Accounts are only ever created
//! by the first-run seed.
//!
//! The built-in `admin` account is protected by username comparison, while
//! deletion itself selects by id. Both checks are kept exactly that way.

use super::Confirmation;
use crate::auth::AdminAccess;
use crate::models::{RecordId, User};
use crate::storage::{CollectionKey, Store};
use crate::Result;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const USER_DELETE_PROMPT: &str = "Benutzer wirklich löschen?";

/// One line of the user table; the password is not part of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: RecordId,
    pub username: String,
    pub role: String,
    /// Delete action suppressed
    pub protected: bool,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            protected: user.is_protected(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDeleteOutcome {
    Deleted,
    /// Target is the protected admin account; nothing was asked or written
    Protected,
    NotFound,
    Cancelled,
}

/// List/delete over `br_users`
#[derive(Debug, Clone)]
pub struct UserRegistry {
    store: Store,
}

impl UserRegistry {
    /// Open the registry; requires the admin gate
    pub fn open(store: Store, access: &AdminAccess) -> Self {
        debug!("Opened user registry for '{}'", access.session().username());
        Self { store }
    }

    /// All users in stored order
    pub fn list(&self) -> Vec<UserRow> {
        self.users().iter().map(UserRow::from).collect()
    }

    fn users(&self) -> Vec<User> {
        self.store.load_collection(CollectionKey::Users)
    }

    /// Delete the user with `id` after confirmation
    ///
    /// Records named `admin` are never removed, whichever id they carry.
    /// An unknown id is still confirmed first, then nothing is written.
    pub fn delete(
        &self,
        id: RecordId,
        confirmation: &mut impl Confirmation,
    ) -> Result<UserDeleteOutcome> {
        let users = self.users();
        let targets: Vec<&User> = users.iter().filter(|u| u.id == id).collect();

        if !targets.is_empty() && targets.iter().all(|u| u.is_protected()) {
            warn!("Refusing to delete protected account (id {})", id);
            return Ok(UserDeleteOutcome::Protected);
        }
        if !confirmation.confirm(USER_DELETE_PROMPT) {
            return Ok(UserDeleteOutcome::Cancelled);
        }
        if targets.is_empty() {
            return Ok(UserDeleteOutcome::NotFound);
        }

        let remaining: Vec<User> = users
            .iter()
            .filter(|u| u.id != id || u.is_protected())
            .cloned()
            .collect();

        self.store.save_collection(CollectionKey::Users, &remaining)?;
        info!("Deleted user id {}", id);
        Ok(UserDeleteOutcome::Deleted)
    }
}

//! Current-login session
//!
//! Created by [`Session::login`], destroyed by [`logout`], read-only in
//! between. The stored snapshot is a copy of the user record taken at login
//! time, so it goes stale if that record later changes.

use super::{Location, Redirect};
use crate::models::{RoleLevel, User};
use crate::storage::{CollectionKey, Store};
use crate::{Error, Result};
use tracing::{info, warn};

/// The logged-in user, as stored under the session key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    pub(crate) fn from_user(user: User) -> Self {
        Self { user }
    }

    /// Read the current session, if any
    pub fn current(store: &Store) -> Option<Session> {
        store.read_session().map(Session::from_user)
    }

    /// Log in by exact match on username and password
    ///
    /// On success the session document is overwritten with a full copy of
    /// the matched record. On failure the session is left untouched and the
    /// error does not tell unknown users from wrong passwords.
    pub fn login(store: &Store, username: &str, password: &str) -> Result<Session> {
        let users: Vec<User> = store.load_collection(CollectionKey::Users);

        let Some(user) = users
            .into_iter()
            .find(|u| u.username == username && u.password == password)
        else {
            warn!("Login failed for '{}'", username);
            return Err(Error::InvalidCredentials);
        };

        store.write_session(&user)?;
        info!("Logged in '{}' (role {}, level {})", user.username, user.role, user.role_level);
        Ok(Session::from_user(user))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn role_level(&self) -> RoleLevel {
        self.user.role_level
    }

    /// True iff the session level is at most `required`
    pub fn has_permission(&self, required: RoleLevel) -> bool {
        self.user.role_level <= required
    }

    pub fn can_manage_content(&self) -> bool {
        super::can_manage_content(Some(self))
    }

    pub fn can_manage_users(&self) -> bool {
        super::can_manage_users(Some(self))
    }
}

/// Clear the session unconditionally and send the operator to the landing page
pub fn logout(store: &Store, location: Location) -> Result<Redirect> {
    store.clear_session()?;
    info!("Logged out");
    Ok(Redirect::to_landing(location, None))
}

//! Storage access layer
//!
//! Every collection is one JSON array stored under a fixed key. Reads parse
//! the whole document, writes replace it wholesale. There is no partial
//! update, no transaction and no schema migration.
//!
//! # Degradation
//!
//! A document that is absent is seeded on first access. A document that
//! fails to parse reads as an empty collection; it is never overwritten by
//! seeding, only by the next explicit save.

mod file;
mod keys;
mod memory;

pub use file::FileStorage;
pub use keys::{CollectionKey, SESSION_KEY};
pub use memory::MemoryStorage;

use crate::models::{seed_users, User};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Key-value storage contract (the browser local-storage shape)
///
/// Backends must be shareable: several editors and the session layer hold
/// the same backend at once.
pub trait Storage: Send + Sync {
    /// Raw document under `key`, or `None` if absent or unreadable
    fn get_item(&self, key: &str) -> Option<String>;

    /// True if anything is stored under `key`, readable or not
    fn contains_item(&self, key: &str) -> bool {
        self.get_item(key).is_some()
    }

    /// Store `value` under `key`, replacing any previous document
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Typed access to the known documents of a storage backend
///
/// Cloning a `Store` shares the backend. Two clones behave like two browser
/// tabs on the same storage: each read-modify-write replaces the whole
/// document, so the later writer wins.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Storage>,
}

impl Store {
    pub fn new(backend: impl Storage + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_shared(backend: Arc<dyn Storage>) -> Self {
        Self { backend }
    }

    /// In-memory store, used by tests and embedding
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Seed every known collection that is still absent
    pub fn initialize(&self) -> Result<()> {
        for key in CollectionKey::ALL {
            self.seed_if_absent(key)?;
        }
        Ok(())
    }

    /// Load a collection document
    ///
    /// Absent ⇒ seeded, then read. Unparseable ⇒ empty.
    pub fn load_collection<R: DeserializeOwned>(&self, key: CollectionKey) -> Vec<R> {
        if let Err(e) = self.seed_if_absent(key) {
            warn!("Failed to seed {}: {}", key, e);
        }

        let Some(raw) = self.backend.get_item(key.as_str()) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(records) => {
                debug!("Loaded {} records from {}", records.len(), key);
                records
            }
            Err(e) => {
                warn!("Malformed document under {} (treating as empty): {}", key, e);
                Vec::new()
            }
        }
    }

    /// Replace a collection document wholesale
    pub fn save_collection<R: Serialize>(&self, key: CollectionKey, records: &[R]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set_item(key.as_str(), &raw)?;
        debug!("Saved {} records to {}", records.len(), key);
        Ok(())
    }

    /// Current session snapshot; a malformed session reads as absent
    pub fn read_session(&self) -> Option<User> {
        let raw = self.backend.get_item(SESSION_KEY)?;
        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(user) => user,
            Err(e) => {
                warn!("Malformed session document (treating as logged out): {}", e);
                None
            }
        }
    }

    /// Overwrite the session with a copy of `user`
    pub fn write_session(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.backend.set_item(SESSION_KEY, &raw)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.backend.remove_item(SESSION_KEY)
    }

    fn seed_if_absent(&self, key: CollectionKey) -> Result<()> {
        if self.backend.contains_item(key.as_str()) {
            return Ok(());
        }

        match key {
            CollectionKey::Users => {
                let users = seed_users();
                self.save_collection(key, &users)?;
                info!("Seeded {} with {} built-in accounts", key, users.len());
            }
            _ => {
                self.backend.set_item(key.as_str(), "[]")?;
                info!("Initialized empty collection {}", key);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

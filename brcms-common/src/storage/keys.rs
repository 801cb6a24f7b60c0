//! Fixed storage keys
//!
//! The key names are the persisted layout shared by the public pages and the
//! management pages. They must not change, or existing documents are orphaned.

use std::fmt;

/// Key holding the single current-login snapshot
pub const SESSION_KEY: &str = "br_current_user";

/// Collection documents known to the storage layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    /// User accounts (seeded with the three built-in accounts)
    Users,
    /// Performance listings ("gigs")
    Performances,
    /// Audio tracks
    Tracks,
    /// Gallery images
    Gallery,
}

impl CollectionKey {
    /// Every collection key, in seeding order
    pub const ALL: [CollectionKey; 4] = [
        CollectionKey::Users,
        CollectionKey::Performances,
        CollectionKey::Tracks,
        CollectionKey::Gallery,
    ];

    /// Storage key string for this collection
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKey::Users => "br_users",
            CollectionKey::Performances => "br_gigs",
            CollectionKey::Tracks => "br_music",
            CollectionKey::Gallery => "br_gallery",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_persisted_layout() {
        assert_eq!(CollectionKey::Users.as_str(), "br_users");
        assert_eq!(CollectionKey::Performances.as_str(), "br_gigs");
        assert_eq!(CollectionKey::Tracks.as_str(), "br_music");
        assert_eq!(CollectionKey::Gallery.as_str(), "br_gallery");
        assert_eq!(SESSION_KEY, "br_current_user");
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<&str> = CollectionKey::ALL.iter().map(|k| k.as_str()).collect();
        keys.push(SESSION_KEY);
        let count = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), count);
    }
}

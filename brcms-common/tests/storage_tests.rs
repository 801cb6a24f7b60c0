//! Integration tests for the storage access layer
//!
//! Tests cover:
//! - First-access seeding of every known key
//! - Whole-document round trips on both backends
//! - Malformed or unreadable documents degrading to empty collections
//! - Last-writer-wins between two stores on one backend

use brcms_common::models::{Performance, Track, User};
use brcms_common::storage::{CollectionKey, SESSION_KEY};
use brcms_common::{FileStorage, MemoryStorage, Storage, Store};
use std::sync::Arc;
use tempfile::TempDir;

fn gig(id: i64, date: &str, venue: &str) -> Performance {
    Performance {
        id,
        date: date.to_string(),
        venue: venue.to_string(),
        description: None,
        image: None,
    }
}

#[test]
fn test_initialize_seeds_every_key() {
    let backend = Arc::new(MemoryStorage::new());
    let store = Store::from_shared(backend.clone());

    store.initialize().unwrap();

    assert_eq!(backend.get_item("br_gigs").as_deref(), Some("[]"));
    assert_eq!(backend.get_item("br_music").as_deref(), Some("[]"));
    assert_eq!(backend.get_item("br_gallery").as_deref(), Some("[]"));
    let users: Vec<User> = store.load_collection(CollectionKey::Users);
    assert_eq!(users.len(), 3);
    assert!(backend.get_item(SESSION_KEY).is_none(), "session is never seeded");
}

#[test]
fn test_load_seeds_absent_key() {
    let backend = Arc::new(MemoryStorage::new());
    let store = Store::from_shared(backend.clone());

    let tracks: Vec<Track> = store.load_collection(CollectionKey::Tracks);

    assert!(tracks.is_empty());
    assert_eq!(backend.get_item("br_music").as_deref(), Some("[]"));
}

#[test]
fn test_round_trip() {
    let store = Store::in_memory();
    let gigs = vec![gig(1, "2024-05-01", "Club X"), gig(2, "2024-06-01", "Halle Y")];

    store.save_collection(CollectionKey::Performances, &gigs).unwrap();
    let loaded: Vec<Performance> = store.load_collection(CollectionKey::Performances);

    assert_eq!(loaded, gigs);
}

#[test]
fn test_malformed_document_reads_empty_and_is_not_reseeded() {
    let backend = Arc::new(MemoryStorage::new());
    backend.set_item("br_users", "{not json").unwrap();
    let store = Store::from_shared(backend.clone());

    let users: Vec<User> = store.load_collection(CollectionKey::Users);
    store.initialize().unwrap();

    assert!(users.is_empty());
    assert_eq!(backend.get_item("br_users").as_deref(), Some("{not json"));
}

#[test]
fn test_unreadable_file_reads_empty_and_is_not_reseeded() {
    let temp_dir = TempDir::new().unwrap();
    let gigs_path = temp_dir.path().join("br_gigs.json");
    let users_path = temp_dir.path().join("br_users.json");
    let gigs_bytes = b"[{\"id\":1,\"date\":\"2024-05-01\",\"venue\":\"Caf\xE9\"}]".to_vec();
    let users_bytes = vec![0xFF, 0xFE, 0x5B, 0x5D];
    std::fs::write(&gigs_path, &gigs_bytes).unwrap();
    std::fs::write(&users_path, &users_bytes).unwrap();
    let store = Store::new(FileStorage::open(temp_dir.path()).unwrap());

    let gigs: Vec<Performance> = store.load_collection(CollectionKey::Performances);
    let users: Vec<User> = store.load_collection(CollectionKey::Users);
    store.initialize().unwrap();

    assert!(gigs.is_empty());
    assert!(users.is_empty());
    assert_eq!(std::fs::read(&gigs_path).unwrap(), gigs_bytes);
    assert_eq!(std::fs::read(&users_path).unwrap(), users_bytes);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("br_music.json")).unwrap(),
        "[]",
        "absent keys are still seeded"
    );
}

#[test]
fn test_null_document_reads_empty() {
    let backend = Arc::new(MemoryStorage::new());
    backend.set_item("br_gallery", "null").unwrap();
    let store = Store::from_shared(backend);

    let images: Vec<brcms_common::models::GalleryImage> =
        store.load_collection(CollectionKey::Gallery);

    assert!(images.is_empty());
}

#[test]
fn test_list_is_idempotent() {
    let store = Store::in_memory();
    store
        .save_collection(CollectionKey::Performances, &[gig(5, "2024-01-01", "Bar Z")])
        .unwrap();

    let first: Vec<Performance> = store.load_collection(CollectionKey::Performances);
    let second: Vec<Performance> = store.load_collection(CollectionKey::Performances);

    assert_eq!(first, second);
}

#[test]
fn test_file_storage_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let gigs = vec![gig(1, "2024-05-01", "Club X")];

    {
        let store = Store::new(FileStorage::open(temp_dir.path()).unwrap());
        store.save_collection(CollectionKey::Performances, &gigs).unwrap();
    }

    let store = Store::new(FileStorage::open(temp_dir.path()).unwrap());
    let loaded: Vec<Performance> = store.load_collection(CollectionKey::Performances);
    assert_eq!(loaded, gigs);
    assert!(temp_dir.path().join("br_gigs.json").exists());
}

#[test]
fn test_two_tabs_last_writer_wins() {
    let store = Store::in_memory();
    let other_tab = store.clone();

    // Both tabs read the same empty document
    let mut mine: Vec<Performance> = store.load_collection(CollectionKey::Performances);
    let mut theirs: Vec<Performance> = other_tab.load_collection(CollectionKey::Performances);

    mine.push(gig(1, "2024-05-01", "Club X"));
    theirs.push(gig(2, "2024-06-01", "Halle Y"));

    store.save_collection(CollectionKey::Performances, &mine).unwrap();
    other_tab.save_collection(CollectionKey::Performances, &theirs).unwrap();

    let loaded: Vec<Performance> = store.load_collection(CollectionKey::Performances);
    assert_eq!(loaded, theirs, "first write is silently lost");
}

//! Integration tests for the user registry
//!
//! Tests cover:
//! - Admin-label gate in front of the registry
//! - Protected admin account (username based, regardless of id)
//! - Deleting ordinary accounts by id

use brcms_common::auth::{require_admin_access, Location, Session};
use brcms_common::editor::{UserDeleteOutcome, UserRegistry};
use brcms_common::models::{RoleLevel, User};
use brcms_common::storage::CollectionKey;
use brcms_common::Store;

fn admin_registry(store: &Store) -> UserRegistry {
    let session = Session::login(store, "admin", "password").unwrap();
    let access = require_admin_access(Some(&session), Location::Root).unwrap();
    UserRegistry::open(store.clone(), &access)
}

fn stored_users(store: &Store) -> Vec<User> {
    store.load_collection(CollectionKey::Users)
}

#[test]
fn test_only_admin_label_opens_registry() {
    let store = Store::in_memory();

    let leader = Session::login(&store, "leiter", "password").unwrap();
    assert!(require_admin_access(Some(&leader), Location::Root).is_err());
    assert!(require_admin_access(None, Location::Components).is_err());

    let admin = Session::login(&store, "admin", "password").unwrap();
    assert!(require_admin_access(Some(&admin), Location::Root).is_ok());
}

#[test]
fn test_delete_member() {
    let store = Store::in_memory();
    let registry = admin_registry(&store);

    let outcome = registry.delete(3, &mut |_: &str| true).unwrap();

    assert_eq!(outcome, UserDeleteOutcome::Deleted);
    let names: Vec<String> = registry.list().into_iter().map(|r| r.username).collect();
    assert_eq!(names, vec!["admin", "leiter"]);
}

#[test]
fn test_admin_never_deleted() {
    let store = Store::in_memory();
    let registry = admin_registry(&store);

    for _ in 0..2 {
        let outcome = registry.delete(1, &mut |_: &str| true).unwrap();
        assert_eq!(outcome, UserDeleteOutcome::Protected);
    }

    assert!(stored_users(&store).iter().any(|u| u.username == "admin"));
}

#[test]
fn test_admin_protected_under_any_id() {
    let store = Store::in_memory();
    let mut users = stored_users(&store);
    users[0].id = 99;
    // A second record sharing the admin's id
    users.push(User {
        id: 99,
        username: "gast".to_string(),
        password: "pw".to_string(),
        role: "Bandmitglied".to_string(),
        role_level: RoleLevel::Member,
    });
    store.save_collection(CollectionKey::Users, &users).unwrap();
    let registry = admin_registry(&store);

    let outcome = registry.delete(99, &mut |_: &str| true).unwrap();

    assert_eq!(outcome, UserDeleteOutcome::Deleted);
    let remaining = stored_users(&store);
    assert!(remaining.iter().any(|u| u.username == "admin" && u.id == 99));
    assert!(!remaining.iter().any(|u| u.username == "gast"));
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let store = Store::in_memory();
    let registry = admin_registry(&store);
    let before = stored_users(&store);

    let mut prompts = Vec::new();
    let mut confirm = |message: &str| {
        prompts.push(message.to_string());
        true
    };

    let first = registry.delete(404, &mut confirm).unwrap();
    let second = registry.delete(404, &mut confirm).unwrap();

    assert_eq!(first, UserDeleteOutcome::NotFound);
    assert_eq!(second, UserDeleteOutcome::NotFound);
    assert_eq!(prompts, vec!["Benutzer wirklich löschen?"; 2]);
    assert_eq!(stored_users(&store), before);
}

#[test]
fn test_cancelled_unknown_id_reports_cancel() {
    let store = Store::in_memory();
    let registry = admin_registry(&store);

    let outcome = registry.delete(404, &mut |_: &str| false).unwrap();

    assert_eq!(outcome, UserDeleteOutcome::Cancelled);
}

#[test]
fn test_deleting_logged_in_user_leaves_session() {
    let store = Store::in_memory();
    Session::login(&store, "member", "password").unwrap();
    let registry = admin_registry(&store);
    Session::login(&store, "member", "password").unwrap();

    registry.delete(3, &mut |_: &str| true).unwrap();

    // The session is a copy; it outlives the account
    assert_eq!(Session::current(&store).unwrap().username(), "member");
}

//! Session lifecycle and concurrent readers

use crate::common::PermissionSetFactory;
use coordhub_access::auth::rbac::{PermissionType, features, has_permission};
use coordhub_access::auth::session::{FileStore, MemoryStore, Session, SessionStore};
use coordhub_access::config::SessionConfig;
use serde_json::json;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_restore_after_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    {
        let session = Session::new(SessionConfig::default(), FileStore::new(&path));
        session
            .login("tok", &json!({"id": 1}), PermissionSetFactory::tender_viewer())
            .unwrap();
    }

    let session = Session::restore(SessionConfig::default(), FileStore::new(&path));
    let current = session.current_permissions();
    assert!(session.is_authenticated());
    assert!(has_permission(
        current.as_deref(),
        features::TENDER_MANAGEMENT,
        PermissionType::Read
    ));
}

#[test]
fn test_persisted_payload_from_api_restores() {
    let store = Arc::new(MemoryStore::new());
    store.set("token", "tok".to_string()).unwrap();
    store.set("userData", r#"{"id": "u"}"#.to_string()).unwrap();
    store
        .set("permissions", PermissionSetFactory::wire_payload().to_string())
        .unwrap();

    let session = Session::restore(SessionConfig::default(), store);
    let current = session.current_permissions();
    assert!(has_permission(
        current.as_deref(),
        features::INVENTORY_MANAGEMENT,
        PermissionType::Write
    ));
}

#[test]
fn test_truncated_payload_does_not_panic() {
    let store = Arc::new(MemoryStore::new());
    let payload = PermissionSetFactory::wire_payload();
    store
        .set("permissions", payload[..payload.len() / 2].to_string())
        .unwrap();

    let session = Session::restore(SessionConfig::default(), store);
    assert!(session.current_permissions().is_none());
}

#[test]
fn test_readers_see_whole_sets_during_replacement() {
    let session = Arc::new(Session::new(
        SessionConfig::default(),
        Arc::new(MemoryStore::new()),
    ));
    session
        .login("tok", &json!({}), PermissionSetFactory::tender_viewer())
        .unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                for _ in 0..500 {
                    let current = session.current_permissions();
                    let set = current.as_deref();
                    // Each snapshot is exactly one of the two sets
                    let viewer = has_permission(set, features::TENDER_MANAGEMENT, PermissionType::Read)
                        && !has_permission(set, features::TENDER_MANAGEMENT, PermissionType::Write);
                    let admin = has_permission(set, features::USER_MANAGEMENT, PermissionType::Delete)
                        && has_permission(set, features::TENDER_MANAGEMENT, PermissionType::Write);
                    assert!(viewer ^ admin);
                }
            })
        })
        .collect();

    for i in 0..200 {
        let next = if i % 2 == 0 {
            PermissionSetFactory::department_admin()
        } else {
            PermissionSetFactory::tender_viewer()
        };
        session.replace_permissions(next).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}

#[test]
fn test_login_over_broken_store_fails_closed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let session = Session::new(SessionConfig::default(), FileStore::new(&path));
    session
        .login("admin", &json!({"id": "admin"}), PermissionSetFactory::department_admin())
        .unwrap();

    std::fs::write(&path, "{ truncated").unwrap();

    let result = session.login("viewer", &json!({"id": "viewer"}), PermissionSetFactory::tender_viewer());
    assert!(result.is_err());

    let current = session.current_permissions();
    assert!(!has_permission(
        current.as_deref(),
        features::USER_MANAGEMENT,
        PermissionType::Delete
    ));
    assert!(!session.is_authenticated());

    let restored = Session::restore(SessionConfig::default(), FileStore::new(&path));
    assert!(!restored.is_authenticated());
    assert!(restored.current_permissions().is_none());
}

use medimate::models::{Message, Role, Session, StoredEntry};
use medimate::session::{FilesystemSessionStore, SessionStore};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemSessionStore::new(temp_dir.path());

    let mut session = Session::new("token-123");
    session
        .history
        .push(StoredEntry::from(Message::text(Role::User, "hello")));
    session
        .history
        .push(StoredEntry::from(Message::text(Role::Model, "hi there")));

    store.save(&session).unwrap();

    let loaded = store.load("token-123").unwrap();
    assert_eq!(loaded.session_id, "token-123");
    assert_eq!(loaded.history.len(), 2);
}

#[test]
fn test_unknown_token_loads_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemSessionStore::new(temp_dir.path());

    assert!(store.load("never-seen").is_none());
}

#[test]
fn test_corrupt_session_file_is_treated_as_absent() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemSessionStore::new(temp_dir.path());

    fs::write(temp_dir.path().join("session-broken.json"), "{not json").unwrap();

    assert!(store.load("broken").is_none());
}

#[test]
fn test_legacy_history_entries_survive_persistence() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemSessionStore::new(temp_dir.path());

    let mut session = Session::new("mixed");
    session.history.push(
        serde_json::from_value(json!({"role": "user", "text": "old shape"})).unwrap(),
    );
    store.save(&session).unwrap();

    let loaded = store.load("mixed").unwrap();
    assert!(matches!(
        &loaded.history[0],
        StoredEntry::Legacy { text, .. } if text == "old shape"
    ));
}

#[test]
fn test_path_like_tokens_never_touch_the_filesystem() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemSessionStore::new(temp_dir.path());

    assert!(store.load("../outside").is_none());
    assert!(store.save(&Session::new("../outside")).is_err());
}

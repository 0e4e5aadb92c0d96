use serde::{Deserialize, Serialize};

use ayursutra_storage::records::{load_all, load_record, save_record};
use ayursutra_storage::{StorageError, Store};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    id: u32,
    text: String,
}

async fn open_store(dir: &tempfile::TempDir) -> Store {
    Store::open(dir.path().join("data")).await.expect("open store")
}

#[tokio::test]
async fn put_then_get_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    store.put("notes/1.json", b"{\"ok\":true}".to_vec()).await.unwrap();
    let bytes = store.get("notes/1.json").await.unwrap();
    assert_eq!(bytes, b"{\"ok\":true}");
}

#[tokio::test]
async fn get_of_a_missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    let err = store.get("notes/missing.json").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn traversal_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    let err = store.get("../outside.json").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey { .. }));

    let err = store.put("", Vec::new()).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey { .. }));
}

#[tokio::test]
async fn overwrite_replaces_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    store.put("a.json", b"one".to_vec()).await.unwrap();
    store.put("a.json", b"two".to_vec()).await.unwrap();
    assert_eq!(store.get("a.json").await.unwrap(), b"two");
}

#[tokio::test]
async fn list_returns_sorted_keys_under_a_prefix_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    store.put("assessments/u1/b.json", b"{}".to_vec()).await.unwrap();
    store.put("assessments/u1/a.json", b"{}".to_vec()).await.unwrap();
    store.put("assessments/u2/c.json", b"{}".to_vec()).await.unwrap();
    store.put("users/u1.json", b"{}".to_vec()).await.unwrap();

    let per_user = store.list("assessments/u1/").await.unwrap();
    assert_eq!(per_user, vec!["assessments/u1/a.json", "assessments/u1/b.json"]);

    let all = store.list("assessments/").await.unwrap();
    assert_eq!(all.len(), 3);

    let none = store.list("reports/").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn delete_removes_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    store.put("a.json", b"x".to_vec()).await.unwrap();
    store.delete("a.json").await.unwrap();
    assert!(!store.exists("a.json").await.unwrap());
    assert!(matches!(
        store.delete("a.json").await.unwrap_err(),
        StorageError::NotFound { .. }
    ));
}

#[tokio::test]
async fn typed_records_round_trip_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    let note = Note {
        id: 7,
        text: "warm oil massage".into(),
    };
    save_record(&store, "notes/7.json", &note).await.unwrap();

    let loaded: Note = load_record(&store, "notes/7.json").await.unwrap();
    assert_eq!(loaded, note);

    let all: Vec<Note> = load_all(&store, "notes/").await.unwrap();
    assert_eq!(all, vec![note]);
}

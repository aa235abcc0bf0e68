use super::*;

use std::collections::BTreeMap;

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_then_load_json_value() {
    let store = MemoryStore::new();
    assert!(save_json(&store, "darkMode", &true));

    assert_eq!(store.raw("darkMode").as_deref(), Some("true"));
    assert_eq!(load_json::<bool>(&store, "darkMode"), Some(true));
}

#[test]
fn load_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(load_json::<bool>(&store, "absent"), None);
    assert!(!load_json_or(&store, "absent", false));
}

#[test]
fn malformed_json_is_treated_as_missing() {
    let store = MemoryStore::new();
    store.set_item("autosave_event", "{not json").expect("seed raw value");

    let loaded: Option<BTreeMap<String, String>> = load_json(&store, "autosave_event");
    assert!(loaded.is_none());
}

#[test]
fn wrong_shape_is_treated_as_missing() {
    let store = MemoryStore::new();
    store.set_item("autosave_event", r#"{"capacity": 10}"#).expect("seed raw value");

    let loaded: Option<BTreeMap<String, String>> = load_json(&store, "autosave_event");
    assert!(loaded.is_none());
}

#[test]
fn unavailable_store_fails_open() {
    let store = MemoryStore::new();
    store.set_unavailable(true);

    assert!(!save_json(&store, "k", &1));
    assert_eq!(load_json::<i32>(&store, "k"), None);
    assert_eq!(load_json_or(&store, "k", 5), 5);
    assert!(!remove(&store, "k"));
}

#[test]
fn remove_deletes_entry() {
    let store = MemoryStore::new();
    save_json(&store, "k", &"v");
    assert!(remove(&store, "k"));
    assert!(store.is_empty());
}

// =============================================================
// MemoryStore quota
// =============================================================

#[test]
fn quota_rejects_oversized_write() {
    let store = MemoryStore::with_quota(16);
    let err = try_save_json(&store, "key", &"a value far too long for the quota").unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { ref key } if key == "key"));
    assert!(store.is_empty());
}

#[test]
fn quota_ignores_value_being_replaced() {
    let store = MemoryStore::with_quota(12);
    store.set_item("k", "12345678").expect("first write fits");
    store.set_item("k", "abcdefgh").expect("overwrite reuses the same budget");
    assert_eq!(store.raw("k").as_deref(), Some("abcdefgh"));
    assert_eq!(store.len(), 1);
}

#[test]
fn clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    save_json(&other, "shared", &42);
    assert_eq!(load_json::<i32>(&store, "shared"), Some(42));
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "local storage is not available");
    assert_eq!(
        StorageError::QuotaExceeded { key: "autosave_x".to_owned() }.to_string(),
        "storage quota exceeded while writing `autosave_x`"
    );
}

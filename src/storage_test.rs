use super::*;

#[test]
fn empty_store_loads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load("portfolio-theme-mode"), Ok(None));
}

#[test]
fn save_then_load_returns_value() {
    let mut store = MemoryStore::new();
    store.save("k", "dark").unwrap();
    assert_eq!(store.load("k"), Ok(Some("dark".to_owned())));
    assert_eq!(store.get("k"), Some("dark"));
}

#[test]
fn save_overwrites_previous_value() {
    let mut store = MemoryStore::with_entry("k", "light");
    store.save("k", "auto").unwrap();
    assert_eq!(store.get("k"), Some("auto"));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::with_entry("a", "dark");
    assert_eq!(store.load("b"), Ok(None));
}

#[test]
fn storage_error_messages_are_descriptive() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::Access("SecurityError".into()).to_string(),
        "storage access failed: SecurityError"
    );
}

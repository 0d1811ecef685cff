use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: String,
    label: &'static str,
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

fn item(id: &str, label: &'static str) -> Item {
    Item { id: id.to_owned(), label }
}

#[test]
fn default_store_is_empty() {
    let store = MemoryStore::<Item>::default();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn insert_appends_in_order() {
    let mut store = MemoryStore::default();
    store.insert(item("a", "first")).unwrap();
    store.insert(item("b", "second")).unwrap();
    store.insert(item("c", "third")).unwrap();
    let labels: Vec<_> = store.list().iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

#[test]
fn insert_rejects_duplicate_id_without_mutation() {
    let mut store = MemoryStore::default();
    store.insert(item("a", "first")).unwrap();
    let err = store.insert(item("a", "again")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId("a".to_owned()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").map(|i| i.label), Some("first"));
}

#[test]
fn remove_returns_matching_entry_and_keeps_order() {
    let mut store = MemoryStore::with_entries([item("a", "1"), item("b", "2"), item("c", "3")]);
    let removed = store.remove("b").unwrap();
    assert_eq!(removed.label, "2");
    let ids: Vec<_> = store.list().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn remove_absent_id_is_noop() {
    let mut store = MemoryStore::with_entries([item("a", "1")]);
    assert!(store.remove("zzz").is_none());
    assert!(store.remove("zzz").is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn with_entries_skips_repeated_ids() {
    let store = MemoryStore::with_entries([item("a", "1"), item("a", "2")]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").map(|i| i.label), Some("1"));
}

use super::*;
use crate::persist::MemoryStore;
use rayting_catalog::Show;

fn show(id: i64, title: &str) -> Show {
    Show {
        id,
        title: title.into(),
        ..Default::default()
    }
}

#[test]
fn replace_is_wholesale() {
    let mut store = ItemStore::new(Collection::Shows);
    store.replace(vec![show(1, "The Wire"), show(2, "Deadwood")]);
    assert_eq!(store.len(), 2);

    store.replace(vec![show(3, "Succession")]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].id, 3);
}

#[test]
fn cache_round_trip() {
    let mut kv = MemoryStore::new();
    let mut store = ItemStore::new(Collection::Shows);
    store.replace(vec![show(1, "The Wire")]);
    store.save_cache(&mut kv).unwrap();
    assert!(kv.get("cachedShows").is_some());
    assert!(store.cached_at(&kv).is_some());

    let mut fresh: ItemStore<Show> = ItemStore::new(Collection::Shows);
    assert!(fresh.load_cached(&kv));
    assert_eq!(fresh.items(), store.items());
}

#[test]
fn empty_or_corrupt_cache_is_ignored() {
    let mut kv = MemoryStore::new();
    let mut store: ItemStore<Show> = ItemStore::new(Collection::Shows);
    store.replace(vec![show(9, "Existing")]);

    kv.set("cachedShows", "[]").unwrap();
    assert!(!store.load_cached(&kv));
    kv.set("cachedShows", "{broken").unwrap();
    assert!(!store.load_cached(&kv));
    assert_eq!(store.len(), 1);
}

#[test]
fn clear_cache_removes_keys() {
    let mut kv = MemoryStore::new();
    let mut store = ItemStore::new(Collection::Shows);
    store.replace(vec![show(1, "The Wire")]);
    store.save_cache(&mut kv).unwrap();

    store.clear_cache(&mut kv).unwrap();
    assert!(kv.is_empty());
    assert!(store.cached_at(&kv).is_none());
}

use super::*;
use tempfile::TempDir;

#[test]
fn memory_store_get_set_remove() {
    let mut store = MemoryStore::new();
    assert!(store.get("films.searchTerm").is_none());

    store.set("films.searchTerm", "godfather").unwrap();
    assert_eq!(store.get("films.searchTerm").as_deref(), Some("godfather"));
    assert_eq!(store.len(), 1);

    store.remove("films.searchTerm").unwrap();
    assert!(store.is_empty());
    // removing a missing key is fine
    store.remove("films.searchTerm").unwrap();
}

#[test]
fn json_helpers() {
    let mut store = MemoryStore::new();
    set_json(&mut store, "nums", &vec![1, 2, 3]).unwrap();
    assert_eq!(get_json::<Vec<i32>, _>(&store, "nums"), Some(vec![1, 2, 3]));

    store.set("bad", "{nope").unwrap();
    assert_eq!(get_json::<Vec<i32>, _>(&store, "bad"), None);
}

#[test]
fn file_store_persists_across_opens() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("state.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("books.sortConfig", r#"{"sortBy":"pages"}"#).unwrap();
    store.set("books.searchTerm", "dune").unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let mut reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("books.searchTerm").as_deref(), Some("dune"));

    reopened.remove("books.searchTerm").unwrap();
    let again = FileStore::open(&path).unwrap();
    assert!(again.get("books.searchTerm").is_none());
    assert!(again.get("books.sortConfig").is_some());
}

#[test]
fn corrupt_file_opens_empty() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("state.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert!(store.get("anything").is_none());
}

#[test]
fn clear_deletes_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("state.json");
    let mut store = FileStore::open(&path).unwrap();
    store.set("k", "v").unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());
    assert!(store.get("k").is_none());
    // clearing twice is fine
    store.clear().unwrap();
}

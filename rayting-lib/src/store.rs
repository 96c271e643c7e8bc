//! In-memory item list for one collection, with a local cache.
//!
//! The list is only ever replaced wholesale: after any create, update or
//! delete the caller fetches the full list again and calls
//! [`ItemStore::replace`].

use chrono::{DateTime, Utc};
use rayting_catalog::Collection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PersistError;
use crate::persist::{KeyValueStore, get_json, set_json};

#[derive(Debug, Clone)]
pub struct ItemStore<T> {
    collection: Collection,
    items: Vec<T>,
}

impl<T> ItemStore<T> {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            items: Vec::new(),
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Swap in a freshly fetched list.
    pub fn replace(&mut self, items: Vec<T>) {
        log::debug!(
            "Replacing {} {} with {}",
            self.items.len(),
            self.collection,
            items.len()
        );
        self.items = items;
    }

    fn timestamp_key(&self) -> String {
        format!("{}.fetchedAt", self.collection.cache_key())
    }

    /// When the cache was last written, if known.
    pub fn cached_at<S: KeyValueStore + ?Sized>(&self, kv: &S) -> Option<DateTime<Utc>> {
        let raw = kv.get(&self.timestamp_key())?;
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Forget the cached list.
    pub fn clear_cache<S: KeyValueStore + ?Sized>(&self, kv: &mut S) -> Result<(), PersistError> {
        kv.remove(self.collection.cache_key())?;
        kv.remove(&self.timestamp_key())
    }
}

impl<T: Serialize + DeserializeOwned> ItemStore<T> {
    /// Load the cached list. Returns whether anything was loaded; an empty or
    /// unreadable cache leaves the store unchanged.
    pub fn load_cached<S: KeyValueStore + ?Sized>(&mut self, kv: &S) -> bool {
        match get_json::<Vec<T>, _>(kv, self.collection.cache_key()) {
            Some(items) if !items.is_empty() => {
                log::debug!("Loaded {} cached {}", items.len(), self.collection);
                self.items = items;
                true
            }
            Some(_) => {
                log::debug!("Cached {} list is empty", self.collection);
                false
            }
            None => false,
        }
    }

    /// Write the current list to the cache.
    pub fn save_cache<S: KeyValueStore + ?Sized>(&self, kv: &mut S) -> Result<(), PersistError> {
        set_json(kv, self.collection.cache_key(), &self.items)?;
        kv.set(&self.timestamp_key(), &Utc::now().to_rfc3339())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;

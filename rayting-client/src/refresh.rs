//! Keeping an [`ItemStore`] in sync with the backend.

use rayting_lib::{ItemStore, KeyValueStore};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::BackendClient;

/// What a refresh did to the store.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The store now holds a fresh list of this many items.
    Fresh(usize),
    /// The backend could not be reached or returned nothing usable; the
    /// previous (possibly cached) list was kept.
    KeptPrevious { reason: String },
}

impl RefreshOutcome {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// Fetch the full list for the store's collection and swap it in.
///
/// Failures are logged and leave the store untouched, so a dead backend
/// still lets the cached list be browsed. A successful fetch is written
/// back to the cache.
pub async fn refresh_store<T, S>(
    client: &BackendClient,
    store: &mut ItemStore<T>,
    kv: &mut S,
    bust_cache: bool,
) -> RefreshOutcome
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let collection = store.collection();
    let items: Vec<T> = match client.list_items(collection, bust_cache).await {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Could not fetch {}: {}", collection, e);
            return RefreshOutcome::KeptPrevious {
                reason: e.to_string(),
            };
        }
    };

    if items.is_empty() {
        log::warn!("Backend returned no {}; keeping previous list", collection);
        return RefreshOutcome::KeptPrevious {
            reason: "empty response".to_string(),
        };
    }

    let count = items.len();
    store.replace(items);
    if let Err(e) = store.save_cache(kv) {
        log::warn!("Could not cache {}: {}", collection, e);
    }
    RefreshOutcome::Fresh(count)
}

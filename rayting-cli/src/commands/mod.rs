pub(crate) mod analytics;
pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod filters;
pub(crate) mod list;
pub(crate) mod save;
pub(crate) mod show;

use rayting_client::{BackendClient, RefreshOutcome, refresh_store};
use rayting_lib::settings::{Resolved, resolve_api_url};
use rayting_lib::{Catalogued, FileStore, ItemStore};

use crate::error::CliError;
use crate::spinner::spinner;

/// Run `$body` with `$t` bound to the item type of `$collection`.
macro_rules! with_item_type {
    ($collection:expr, $t:ident => $body:expr) => {
        match $collection {
            rayting_catalog::Collection::Films => {
                type $t = rayting_catalog::Film;
                $body
            }
            rayting_catalog::Collection::Books => {
                type $t = rayting_catalog::Book;
                $body
            }
            rayting_catalog::Collection::Shows => {
                type $t = rayting_catalog::Show;
                $body
            }
        }
    };
}
pub(crate) use with_item_type;

/// Resolved backend plus its local state file.
pub(crate) struct Session {
    pub api: Resolved,
    pub kv: FileStore,
    pub quiet: bool,
}

impl Session {
    pub(crate) fn open(api_override: Option<&str>, quiet: bool) -> Result<Self, CliError> {
        let api = resolve_api_url(api_override);
        log::debug!("Backend: {} ({})", api.value, api.source);
        let kv = FileStore::open(rayting_client::cache::state_path(&api.value))?;
        Ok(Self { api, kv, quiet })
    }

    pub(crate) fn client(&self) -> Result<BackendClient, CliError> {
        Ok(BackendClient::new(&self.api.value)?)
    }
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))
}

/// Load the cached list for `T`, then refresh it from the backend unless
/// `offline`. A failed refresh falls back to the cache with a warning.
pub(crate) fn fetch_store<T: Catalogued>(
    session: &mut Session,
    offline: bool,
) -> Result<ItemStore<T>, CliError> {
    let collection = T::COLLECTION;
    let mut store = ItemStore::new(collection);
    let had_cache = store.load_cached(&session.kv);

    if offline {
        if !had_cache {
            log::warn!("No cached {}; run without --offline first", collection);
        }
        return Ok(store);
    }

    let client = session.client()?;
    let rt = runtime()?;
    let pb = spinner(format!("Fetching {}...", collection), session.quiet);
    let outcome = rt.block_on(refresh_store(
        &client,
        &mut store,
        &mut session.kv,
        matches!(collection, rayting_catalog::Collection::Books),
    ));
    pb.finish_and_clear();

    if let RefreshOutcome::KeptPrevious { reason } = outcome {
        if had_cache {
            let age = store
                .cached_at(&session.kv)
                .map(|t| format!(" from {}", t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M")))
                .unwrap_or_default();
            log::warn!("Showing cached {}{} ({})", collection, age, reason);
        } else {
            log::warn!("Could not load {} ({})", collection, reason);
        }
    }
    Ok(store)
}

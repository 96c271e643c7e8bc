//! Query state: search text, filter selections, sort and the analytics toggle.
//!
//! The state round-trips through a shareable query string
//! (`search=…&genre=Drama,Crime&sortBy=year&sortDirection=asc&analytics=true`)
//! and is remembered per collection through a [`KeyValueStore`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::CollectionConfig;
use crate::engine::derive_visible_refs;
use crate::error::PersistError;
use crate::persist::{KeyValueStore, get_json, set_json};
use crate::sort::{Direction, SortSpec};

const SEARCH_KEY: &str = "searchTerm";
const FILTER_KEY: &str = "activeFilter";
const SORT_KEY: &str = "sortConfig";
const ANALYTICS_KEY: &str = "showAnalytics";

/// Persisted shape of the sort spec; an empty `sortBy` means default.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSort {
    #[serde(default)]
    sort_by: String,
    #[serde(default)]
    direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    /// Dimension key → selected values. Empty lists mean "no filter".
    pub filters: BTreeMap<String, Vec<String>>,
    pub sort: SortSpec,
    pub analytics: bool,
}

fn decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(v) => v.into_owned(),
        Err(_) => spaced,
    }
}

fn split_values(raw: &str) -> Vec<String> {
    decode(raw)
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn without_empty(filters: BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    filters.into_iter().filter(|(_, v)| !v.is_empty()).collect()
}

impl QueryState {
    pub fn has_filters(&self) -> bool {
        self.filters.values().any(|v| !v.is_empty())
    }

    /// Select values for one dimension, replacing any previous selection.
    pub fn set_filter(&mut self, key: impl Into<String>, values: Vec<String>) {
        let key = key.into();
        if values.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, values);
        }
    }

    /// Encode as a query string (without the leading `?`). The default
    /// state encodes to the empty string.
    pub fn to_query_string<T>(&self, config: &CollectionConfig<T>) -> String {
        let mut params: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            params.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        for key in config.dimension_keys() {
            let Some(values) = self.filters.get(key).filter(|v| !v.is_empty()) else {
                continue;
            };
            let joined: Vec<_> = values.iter().map(|v| urlencoding::encode(v)).collect();
            params.push(format!("{}={}", key, joined.join(",")));
        }
        let field = self.sort.field.as_deref().filter(|f| !f.is_empty());
        if let Some(field) = field {
            params.push(format!("sortBy={}", urlencoding::encode(field)));
        }
        if field.is_some() || self.sort.direction != Direction::default() {
            params.push(format!("sortDirection={}", self.sort.direction));
        }
        if self.analytics {
            params.push("analytics=true".to_string());
        }

        params.join("&")
    }

    /// Decode a query string. A leading `?` is optional, unknown keys are
    /// ignored and absent keys take their defaults.
    pub fn from_query_string<T>(config: &CollectionConfig<T>, qs: &str) -> Self {
        let mut state = Self::default();
        let qs = qs.trim().trim_start_matches('?');

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(key);
            match key.as_str() {
                "search" => state.search = decode(value),
                "sortBy" => {
                    let field = decode(value);
                    state.sort.field = (!field.is_empty()).then_some(field);
                }
                "sortDirection" => {
                    state.sort.direction = decode(value).parse().unwrap_or_default();
                }
                "analytics" => state.analytics = decode(value) == "true",
                k if config.dimension(k).is_some() => {
                    let values = split_values(value);
                    if !values.is_empty() {
                        state.filters.insert(k.to_string(), values);
                    }
                }
                other => log::debug!("Ignoring unknown query parameter '{}'", other),
            }
        }
        state
    }

    /// State remembered in `store` for this collection.
    pub fn load<T, S>(config: &CollectionConfig<T>, store: &S) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let prefix = config.storage_prefix();
        let sort = get_json::<StoredSort, _>(store, &format!("{prefix}{SORT_KEY}"))
            .map(|s| SortSpec {
                field: (!s.sort_by.is_empty()).then_some(s.sort_by),
                direction: s.direction,
            })
            .unwrap_or_default();

        Self {
            search: store.get(&format!("{prefix}{SEARCH_KEY}")).unwrap_or_default(),
            filters: get_json(store, &format!("{prefix}{FILTER_KEY}"))
                .map(without_empty)
                .unwrap_or_default(),
            sort,
            analytics: store
                .get(&format!("{prefix}{ANALYTICS_KEY}"))
                .is_some_and(|v| v == "true"),
        }
    }

    /// Combine a query string with remembered state. Each group (search,
    /// filters, sort, analytics) comes from the URL when the URL sets it.
    pub fn restore<T, S>(config: &CollectionConfig<T>, qs: &str, store: &S) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let url = Self::from_query_string(config, qs);
        let saved = Self::load(config, store);
        let url_has_filters = url.has_filters();

        Self {
            search: if url.search.is_empty() {
                saved.search
            } else {
                url.search
            },
            filters: if url_has_filters {
                url.filters
            } else {
                saved.filters
            },
            sort: if url.sort.field.is_some() {
                url.sort
            } else {
                saved.sort
            },
            analytics: url.analytics || saved.analytics,
        }
    }

    /// Remember this state for the collection.
    pub fn persist<T, S>(&self, config: &CollectionConfig<T>, store: &mut S) -> Result<(), PersistError>
    where
        S: KeyValueStore + ?Sized,
    {
        let prefix = config.storage_prefix();
        store.set(&format!("{prefix}{SEARCH_KEY}"), &self.search)?;
        set_json(store, &format!("{prefix}{FILTER_KEY}"), &self.filters)?;
        let sort = StoredSort {
            sort_by: self.sort.field.clone().unwrap_or_default(),
            direction: self.sort.direction,
        };
        set_json(store, &format!("{prefix}{SORT_KEY}"), &sort)?;
        store.set(
            &format!("{prefix}{ANALYTICS_KEY}"),
            if self.analytics { "true" } else { "false" },
        )?;
        Ok(())
    }

    /// Forget the remembered state for the collection.
    pub fn clear<T, S>(config: &CollectionConfig<T>, store: &mut S) -> Result<(), PersistError>
    where
        S: KeyValueStore + ?Sized,
    {
        let prefix = config.storage_prefix();
        for key in [SEARCH_KEY, FILTER_KEY, SORT_KEY, ANALYTICS_KEY] {
            store.remove(&format!("{prefix}{key}"))?;
        }
        Ok(())
    }

    /// Run the engine with this state.
    pub fn visible<'a, T: rayting_catalog::CatalogItem>(
        &self,
        config: &CollectionConfig<T>,
        items: &'a [T],
    ) -> Vec<&'a T> {
        derive_visible_refs(config, items, &self.search, &self.filters, &self.sort)
    }
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;

//! The search → filter → sort pipeline.
//!
//! Pure and synchronous: the caller re-runs it in full whenever the item
//! list or the query state changes. Malformed fields make an item fail a
//! filter or sort last; nothing here returns an error.

use std::collections::BTreeMap;

use rayting_catalog::{CatalogItem, display_title};

use crate::config::CollectionConfig;
use crate::filter::matches_dimension;
use crate::sort::{SortSpec, compare_items};

/// Whether `item` matches an already lower-cased search string.
pub fn matches_search<T: CatalogItem>(config: &CollectionConfig<T>, item: &T, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    let title = item.title();
    if title.to_lowercase().contains(query_lower) {
        return true;
    }
    if config.reorder_titles && display_title(title).to_lowercase().contains(query_lower) {
        return true;
    }
    config
        .extra_search
        .iter()
        .filter_map(|read| read(item))
        .any(|field| field.to_lowercase().contains(query_lower))
}

/// Derive the visible, ordered subset of `items` as references.
///
/// Filter keys the collection does not define are ignored.
pub fn derive_visible_refs<'a, T: CatalogItem>(
    config: &CollectionConfig<T>,
    items: &'a [T],
    search: &str,
    filters: &BTreeMap<String, Vec<String>>,
    sort: &SortSpec,
) -> Vec<&'a T> {
    let query = search.to_lowercase();

    let active: Vec<_> = filters
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .filter_map(|(key, values)| match config.dimension(key) {
            Some(dim) => Some((dim, values.as_slice())),
            None => {
                log::debug!(
                    "Ignoring unknown {} filter '{}'",
                    config.collection.singular().to_lowercase(),
                    key
                );
                None
            }
        })
        .collect();

    let mut visible: Vec<&T> = items
        .iter()
        .filter(|item| matches_search(config, item, &query))
        .filter(|item| {
            active
                .iter()
                .all(|(dim, selected)| matches_dimension(dim, item, selected))
        })
        .collect();

    visible.sort_by(|a, b| compare_items(config, sort, a, b));

    log::debug!(
        "{} of {} {} visible (sort: {} {})",
        visible.len(),
        items.len(),
        config.collection,
        sort.effective_field(),
        sort.direction
    );
    visible
}

/// Derive the visible, ordered subset of `items` as a new vector.
///
/// `items` is never modified.
pub fn derive_visible_items<T: CatalogItem + Clone>(
    config: &CollectionConfig<T>,
    items: &[T],
    search: &str,
    filters: &BTreeMap<String, Vec<String>>,
    sort: &SortSpec,
) -> Vec<T> {
    derive_visible_refs(config, items, search, filters, sort)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;

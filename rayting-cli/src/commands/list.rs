use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rayting_catalog::{load_items, save_items};
use rayting_client::{CsvRecord, export_csv};
use rayting_lib::{Catalogued, CollectionConfig, ItemStore, KeyValueStore, QueryState};

use super::{Session, fetch_store};
use crate::cli_types::SelectionArgs;
use crate::display::{Describe, print_row};
use crate::error::CliError;

/// Turn the selection flags into a query state.
///
/// `--query` (or the remembered state with `--restore`) is the starting
/// point; explicit flags override it.
pub(crate) fn build_query<T, S>(
    config: &CollectionConfig<T>,
    selection: &SelectionArgs,
    kv: &S,
) -> Result<QueryState, CliError>
where
    S: KeyValueStore + ?Sized,
{
    let qs = selection.query.as_deref().unwrap_or("").trim().trim_start_matches('?');
    let mut state = if selection.restore {
        QueryState::restore(config, qs, kv)
    } else {
        QueryState::from_query_string(config, qs)
    };

    if let Some(search) = &selection.search {
        state.search = search.clone();
    }

    for raw in &selection.filters {
        let (key, values) = raw
            .split_once('=')
            .ok_or_else(|| CliError::usage(format!("Filter '{raw}' should look like DIM=V1,V2")))?;
        let key = key.trim();
        if config.dimension(key).is_none() {
            let known: Vec<_> = config.dimension_keys().collect();
            return Err(CliError::usage(format!(
                "Unknown filter '{}' for {} (expected one of: {})",
                key,
                config.collection,
                known.join(", ")
            )));
        }
        let values = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        state.set_filter(key, values);
    }

    if let Some(field) = &selection.sort {
        if config.sort_field(field).is_none() {
            log::warn!("Unknown sort field '{}'; items will be in title order", field);
        }
        state.sort.field = Some(field.clone());
    }
    if let Some(direction) = selection.direction {
        state.sort.direction = direction;
    }

    Ok(state)
}

/// Items to select from: a saved JSON list, or the cache refreshed from the
/// backend.
fn source_items<T: Catalogued>(
    session: &mut Session,
    selection: &SelectionArgs,
) -> Result<ItemStore<T>, CliError> {
    match &selection.file {
        Some(path) => {
            let mut store = ItemStore::new(T::COLLECTION);
            store.replace(load_items(path)?);
            log::debug!("Loaded {} {} from {}", store.len(), T::COLLECTION, path.display());
            Ok(store)
        }
        None => fetch_store(session, selection.offline),
    }
}

/// List the visible items.
pub(crate) fn run_list<T: Describe>(
    session: &mut Session,
    selection: &SelectionArgs,
    remember: bool,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let config = T::config();
    let state = build_query(&config, selection, &session.kv)?;
    let store = source_items::<T>(session, selection)?;
    let visible = state.visible(&config, store.items());

    if visible.is_empty() {
        log::info!(
            "{}",
            format!("No {} match.", config.collection)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let shown = limit.unwrap_or(visible.len()).min(visible.len());
    for item in &visible[..shown] {
        print_row(&config, *item);
    }

    log::info!("");
    log::info!(
        "{} of {} {}",
        if shown < visible.len() {
            format!("{} shown, {} matched", shown, visible.len())
        } else {
            format!("{} matched", visible.len())
        },
        store.len(),
        config.collection,
    );

    let qs = state.to_query_string(&config);
    if !qs.is_empty() {
        log::info!(
            "{} ?{}",
            "Query:".if_supports_color(Stdout, |t| t.dimmed()),
            qs
        );
    }

    if remember {
        state.persist(&config, &mut session.kv)?;
        log::info!("Remembered this view for {}.", config.collection);
    }
    Ok(())
}

/// Write the visible items to a CSV file, or a JSON list when `out` ends in
/// `.json`.
pub(crate) fn run_export<T: Describe + CsvRecord>(
    session: &mut Session,
    selection: &SelectionArgs,
    out: &Path,
) -> Result<(), CliError> {
    let config = T::config();
    let state = build_query(&config, selection, &session.kv)?;
    let store = source_items::<T>(session, selection)?;
    let visible = state.visible(&config, store.items());

    let as_json = out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let count = if as_json {
        save_items(out, &visible)?;
        visible.len()
    } else {
        export_csv(out, &visible)?
    };
    log::info!(
        "{} Exported {} {} to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        count,
        config.collection,
        out.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/list_tests.rs"]
mod tests;

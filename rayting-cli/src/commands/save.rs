//! Admin commands: add, edit, delete.

use std::io::{BufRead, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::Value;

use rayting_catalog::Collection;
use rayting_client::{ClientError, SaveOutcome};

use super::{Session, fetch_store, runtime, with_item_type};
use crate::error::CliError;
use crate::spinner::spinner;

/// Read a JSON object from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_body(path: &Path) -> Result<Value, CliError> {
    let text = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    let body: Value = serde_json::from_str(&text)?;
    if !body.is_object() {
        return Err(CliError::usage("Item JSON must be an object"));
    }
    Ok(body)
}

/// Refetch the whole list so the cache reflects the change.
fn refresh_after_change(session: &mut Session, collection: Collection) -> Result<(), CliError> {
    with_item_type!(collection, T => fetch_store::<T>(session, false).map(|_| ()))
}

fn report(outcome: SaveOutcome, collection: Collection, verb: &str) -> Result<(), CliError> {
    match outcome {
        SaveOutcome::Saved {
            id,
            message,
            metadata_fetched,
        } => {
            let what = match id {
                Some(id) => format!("{} #{}", collection.singular(), id),
                None => collection.singular().to_string(),
            };
            log::info!(
                "{} {} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                verb,
                what
            );
            if let Some(m) = message {
                log::debug!("Backend says: {}", m);
            }
            if metadata_fetched {
                log::info!("  Metadata was filled in from an external catalog.");
            }
            Ok(())
        }
        SaveOutcome::Duplicate { message, existing } => {
            log::warn!(
                "{} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                message
            );
            for entry in &existing {
                log::info!(
                    "  #{} {}{}",
                    entry.id,
                    entry.title.as_deref().unwrap_or("(untitled)"),
                    entry
                        .release_year
                        .map(|y| format!(" ({y})"))
                        .unwrap_or_default(),
                );
            }
            Err(CliError::usage(format!(
                "Not saved: {} already exists",
                collection.singular()
            )))
        }
    }
}

/// Create an item.
pub(crate) fn run_add(session: &mut Session, collection: Collection, json: &Path) -> Result<(), CliError> {
    let body = read_body(json)?;
    let client = session.client()?;
    let rt = runtime()?;
    let pb = spinner(format!("Adding {}...", collection.singular()), session.quiet);
    let outcome = rt.block_on(client.create_item(collection, &body));
    pb.finish_and_clear();

    report(outcome?, collection, "Added")?;
    refresh_after_change(session, collection)
}

/// Update an item.
pub(crate) fn run_edit(
    session: &mut Session,
    collection: Collection,
    id: i64,
    json: &Path,
) -> Result<(), CliError> {
    let body = read_body(json)?;
    let client = session.client()?;
    let rt = runtime()?;
    let pb = spinner(format!("Saving {} {}...", collection.singular(), id), session.quiet);
    let outcome = rt.block_on(client.update_item(collection, id, &body));
    pb.finish_and_clear();

    match outcome {
        Err(ClientError::NotFound) => Err(CliError::NotFound {
            collection: collection.singular().to_lowercase(),
            id,
        }),
        other => {
            report(other?, collection, "Updated")?;
            refresh_after_change(session, collection)
        }
    }
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Delete an item after confirmation.
pub(crate) fn run_delete(
    session: &mut Session,
    collection: Collection,
    id: i64,
    yes: bool,
) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete {} #{}?", collection.singular(), id))? {
        log::info!("Cancelled.");
        return Ok(());
    }

    let client = session.client()?;
    let rt = runtime()?;
    let pb = spinner(format!("Deleting {} {}...", collection.singular(), id), session.quiet);
    let result = rt.block_on(client.delete_item(collection, id));
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            log::info!(
                "{} Deleted {} #{}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                collection.singular(),
                id
            );
            refresh_after_change(session, collection)
        }
        Err(ClientError::NotFound) => Err(CliError::NotFound {
            collection: collection.singular().to_lowercase(),
            id,
        }),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.json");
        std::fs::write(&ok, r#"{"title": "Heat", "letter_rating": "A"}"#).unwrap();
        assert_eq!(read_body(&ok).unwrap()["title"], "Heat");

        let list = dir.path().join("list.json");
        std::fs::write(&list, "[1, 2]").unwrap();
        assert!(matches!(read_body(&list), Err(CliError::Usage(_))));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{").unwrap();
        assert!(matches!(read_body(&bad), Err(CliError::Json(_))));
    }

    #[test]
    fn duplicate_is_an_error() {
        let outcome = SaveOutcome::Duplicate {
            message: "A film with this title already exists".into(),
            existing: Vec::new(),
        };
        assert!(report(outcome, Collection::Films, "Added").is_err());

        let outcome = SaveOutcome::Saved {
            id: Some(3),
            message: None,
            metadata_fetched: false,
        };
        assert!(report(outcome, Collection::Films, "Added").is_ok());
    }
}

//! CSV export of the visible list.

use std::io::Write;
use std::path::Path;

use rayting_catalog::{Book, CatalogItem, Film, Show, display_title};

use crate::error::ClientError;

/// A catalog item that can be written as one CSV row.
pub trait CsvRecord {
    fn headers() -> Vec<&'static str>;
    fn record(&self) -> Vec<String>;
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl CsvRecord for Film {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "title",
            "rating",
            "score",
            "release_year",
            "date_seen",
            "year_watched",
            "location",
            "format",
            "rotten_tomatoes",
            "length_minutes",
            "genres",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            display_title(&self.title),
            opt(&self.letter_rating),
            self.score().to_string(),
            opt(&self.release_year),
            opt(&self.date_seen),
            opt(&self.year_watched),
            opt(&self.location),
            opt(&self.format),
            opt(&self.rotten_tomatoes),
            opt(&self.length_minutes),
            opt(&self.genres),
        ]
    }
}

impl CsvRecord for Book {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "title",
            "author",
            "rating",
            "score",
            "type",
            "form",
            "year",
            "date_read",
            "year_written",
            "pages",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.book_name.clone(),
            opt(&self.author),
            opt(&self.j_rayting),
            self.score().to_string(),
            opt(&self.book_type),
            opt(&self.form),
            opt(&self.year),
            opt(&self.date_read),
            opt(&self.year_written),
            opt(&self.pages),
        ]
    }
}

impl CsvRecord for Show {
    fn headers() -> Vec<&'static str> {
        vec![
            "id",
            "title",
            "rating",
            "score",
            "years",
            "seasons",
            "episodes",
            "imdb_rating",
            "genres",
            "date_watched",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            display_title(&self.title),
            opt(&self.j_rayting),
            self.score().to_string(),
            self.year_span().unwrap_or_default(),
            opt(&self.seasons),
            opt(&self.episodes),
            opt(&self.imdb_rating),
            opt(&self.genres),
            opt(&self.date_watched),
        ]
    }
}

/// Write a header row followed by one row per item.
pub fn write_csv<W: Write, T: CsvRecord>(writer: W, items: &[&T]) -> Result<(), ClientError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(T::headers())?;
    for item in items {
        out.write_record(item.record())?;
    }
    out.flush()?;
    Ok(())
}

/// Write `items` to a CSV file at `path`, replacing any existing file.
pub fn export_csv<T: CsvRecord>(path: &Path, items: &[&T]) -> Result<usize, ClientError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, items)?;
    log::info!("Exported {} rows to {}", items.len(), path.display());
    Ok(items.len())
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;

//! How items are shown on the terminal.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rayting_catalog::{Book, CatalogItem, DateField, Film, Show, display_date, display_title};
use rayting_lib::{Catalogued, CollectionConfig};

/// Per-collection presentation.
pub(crate) trait Describe: Catalogued {
    /// Secondary text shown after the title in lists.
    fn byline(&self) -> String;

    /// Every populated field, in display order, for `show`.
    fn details(&self) -> Vec<(&'static str, String)>;
}

fn push(out: &mut Vec<(&'static str, String)>, label: &'static str, value: Option<String>) {
    if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
        out.push((label, v));
    }
}

fn date(raw: &Option<String>, field: DateField) -> Option<String> {
    raw.as_deref().and_then(|d| display_date(d, field))
}

fn join(parts: Vec<Option<String>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(" · ")
}

impl Describe for Film {
    fn byline(&self) -> String {
        join(vec![
            self.release_year.map(|y| format!("({y})")),
            date(&self.date_seen, DateField::Consumed).map(|d| format!("seen {d}")),
        ])
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "Release year", self.release_year.map(|y| y.to_string()));
        push(&mut out, "Date seen", date(&self.date_seen, DateField::Consumed));
        push(&mut out, "Year watched", self.year_watched.clone());
        push(&mut out, "Location", self.location.clone());
        push(&mut out, "Format", self.format.clone());
        push(&mut out, "Rotten Tomatoes", self.rotten_tomatoes.clone());
        push(&mut out, "Length", self.length_minutes.map(|m| format!("{m} min")));
        push(&mut out, "RT per minute", self.rt_per_minute.clone());
        push(&mut out, "Genres", self.genres.clone());
        push(&mut out, "RT link", self.rt_link.clone());
        push(&mut out, "Poster", self.poster_url.clone());
        out
    }
}

impl Describe for Book {
    fn byline(&self) -> String {
        join(vec![
            self.author.as_ref().map(|a| format!("by {a}")),
            date(&self.date_read, DateField::Consumed).map(|d| format!("read {d}")),
        ])
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "Author", self.author.clone());
        push(&mut out, "Type", self.book_type.clone());
        push(&mut out, "Form", self.form.clone());
        push(&mut out, "Year read", self.year.clone());
        push(&mut out, "Date read", date(&self.date_read, DateField::Consumed));
        push(&mut out, "Year written", self.year_written.map(|y| y.to_string()));
        push(&mut out, "Published", date(&self.published_date, DateField::Written));
        push(&mut out, "Pages", self.pages.map(|p| p.to_string()));
        push(&mut out, "Google Books", self.google_books_id.clone());
        push(&mut out, "Notion", self.notion_link.clone());
        push(&mut out, "Cover", self.cover_url.clone());
        out
    }
}

impl Describe for Show {
    fn byline(&self) -> String {
        join(vec![
            self.year_span().map(|s| format!("({s})")),
            self.seasons.map(|s| format!("{s} seasons")),
        ])
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        push(&mut out, "Years", self.year_span());
        push(&mut out, "Seasons", self.seasons.map(|s| s.to_string()));
        push(&mut out, "Episodes", self.episodes.map(|e| e.to_string()));
        push(&mut out, "IMDb rating", self.imdb_rating.map(|r| format!("{r:.1}")));
        push(&mut out, "IMDb id", self.imdb_id.clone());
        push(&mut out, "Genres", self.genres.clone());
        push(&mut out, "Date watched", date(&self.date_watched, DateField::Consumed));
        push(&mut out, "Poster", self.poster_url.clone());
        out
    }
}

/// Title as shown to the user ("Matrix, The" becomes "The Matrix" where the
/// collection reorders titles).
pub(crate) fn shown_title<T: CatalogItem>(config: &CollectionConfig<T>, item: &T) -> String {
    if config.reorder_titles {
        display_title(item.title())
    } else {
        item.title().to_string()
    }
}

/// One line of `list` output.
pub(crate) fn print_row<T: Describe>(config: &CollectionConfig<T>, item: &T) {
    let rating = item.rating().unwrap_or("-");
    let top = config.top_tier.contains(&rating);
    let rating = format!("{:<6}", rating);
    let byline = item.byline();
    log::info!(
        "  {} {} {}",
        if top {
            rating.if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            rating.if_supports_color(Stdout, |t| t.cyan()).to_string()
        },
        shown_title(config, item).if_supports_color(Stdout, |t| t.bold()),
        byline.if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Full view of one item for `show`.
pub(crate) fn print_details<T: Describe>(config: &CollectionConfig<T>, item: &T) {
    log::info!(
        "{} {}",
        shown_title(config, item).if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", item.id()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {} {} (score {})",
        "J-Rayting:".if_supports_color(Stdout, |t| t.cyan()),
        item.rating().unwrap_or("-"),
        item.score(),
    );
    if let Some(rank) = item.a_grade_rank() {
        log::info!("  {} {}", "A-grade rank:".if_supports_color(Stdout, |t| t.cyan()), rank);
    }
    for (label, value) in item.details() {
        log::info!(
            "  {} {}",
            format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
            value
        );
    }
    if let Some(notes) = item.notes().filter(|n| !n.trim().is_empty()) {
        log::info!("");
        log::info!("{}", notes);
    }
}

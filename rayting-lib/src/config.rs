//! Per-collection engine configuration.
//!
//! Films, books and shows share one engine. What differs between them is
//! captured here as data: which filter dimensions exist and how each reads
//! its field, which sort fields exist, which grades form the top tier, and
//! which extra fields search looks at.

use chrono::Datelike;
use rayting_catalog::rating::ALL_GRADES;
use rayting_catalog::{
    Book, CatalogItem, Collection, DateField, Film, Show, consumption_year,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads an optional text field from an item.
pub type TextField<T> = fn(&T) -> Option<&str>;

/// Reads an optional numeric field from an item.
pub type NumberField<T> = fn(&T) -> Option<f64>;

/// How a filter dimension decides whether an item passes.
pub enum FilterKind<T> {
    /// Raw rating is selected, or a combo's higher grade is.
    Rating,
    /// Numeric value falls inside one of the selected bucket labels.
    NumericRange(NumberField<T>),
    /// One of the comma-separated tags is selected.
    Categorical(TextField<T>),
    /// Case-insensitive substring of a selected value.
    FreeText(TextField<T>),
    /// Normalized year equals a selected value.
    ExactYear(fn(&T) -> Option<String>),
}

/// A named filter dimension.
pub struct Dimension<T> {
    /// Key used in query strings and persisted state.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind<T>,
    /// Values offered in the filter menu.
    pub options: Vec<String>,
}

/// How a sort field compares two items (before direction is applied).
pub enum SortKind<T> {
    /// Top tier first, then derived score.
    Rating,
    /// Higher first; missing counts as 0.
    Numeric(NumberField<T>),
    /// Newer first; unparseable dates are the oldest.
    Date(TextField<T>, DateField),
}

pub struct SortField<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: SortKind<T>,
}

/// Everything the engine needs to know about one collection.
pub struct CollectionConfig<T> {
    pub collection: Collection,
    pub dimensions: Vec<Dimension<T>>,
    pub sort_fields: Vec<SortField<T>>,
    /// Ordered top-grade list for the rating sort. Membership is by raw rating.
    pub top_tier: &'static [&'static str],
    /// Whether search also matches the display-reordered title.
    pub reorder_titles: bool,
    /// Additional fields the search text is matched against.
    pub extra_search: Vec<TextField<T>>,
}

impl<T> CollectionConfig<T> {
    pub fn dimension(&self, key: &str) -> Option<&Dimension<T>> {
        self.dimensions.iter().find(|d| d.key == key)
    }

    pub fn sort_field(&self, key: &str) -> Option<&SortField<T>> {
        self.sort_fields.iter().find(|f| f.key == key)
    }

    pub fn dimension_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dimensions.iter().map(|d| d.key)
    }

    /// Key prefix for persisted query state, e.g. `"films."`.
    pub fn storage_prefix(&self) -> String {
        format!("{}.", self.collection.endpoint())
    }
}

/// An item type that has a collection and an engine configuration.
pub trait Catalogued: CatalogItem + Clone + Serialize + DeserializeOwned {
    const COLLECTION: Collection;

    fn config() -> CollectionConfig<Self>;
}

impl Catalogued for Film {
    const COLLECTION: Collection = Collection::Films;

    fn config() -> CollectionConfig<Self> {
        film_config()
    }
}

impl Catalogued for Book {
    const COLLECTION: Collection = Collection::Books;

    fn config() -> CollectionConfig<Self> {
        book_config()
    }
}

impl Catalogued for Show {
    const COLLECTION: Collection = Collection::Shows;

    fn config() -> CollectionConfig<Self> {
        show_config()
    }
}

// ── Offered values ──────────────────────────────────────────────────────────

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn rating_options() -> Vec<String> {
    ALL_GRADES.iter().map(|g| g.label().to_string()).collect()
}

/// Years from the current one down to `first`, then the sentinel.
fn year_options(first: i32, sentinel: &str) -> Vec<String> {
    let current = chrono::Local::now().year().max(first);
    (first..=current)
        .rev()
        .map(|y| y.to_string())
        .chain(std::iter::once(sentinel.to_string()))
        .collect()
}

// ── Films ───────────────────────────────────────────────────────────────────

fn film_release_year(f: &Film) -> Option<f64> {
    f.release_year.map(f64::from)
}

fn film_rt(f: &Film) -> Option<f64> {
    f.rt_percent()
}

fn film_length(f: &Film) -> Option<f64> {
    f.length_minutes.map(f64::from)
}

fn film_genres(f: &Film) -> Option<&str> {
    f.genres.as_deref()
}

fn film_date_seen(f: &Film) -> Option<&str> {
    f.date_seen.as_deref()
}

fn film_year_seen(f: &Film) -> Option<String> {
    consumption_year(f.year_watched.as_deref(), f.date_seen.as_deref())
}

pub fn film_config() -> CollectionConfig<Film> {
    CollectionConfig {
        collection: Collection::Films,
        dimensions: vec![
            Dimension {
                key: "rating",
                label: "J-Rayting",
                kind: FilterKind::Rating,
                options: rating_options(),
            },
            Dimension {
                key: "rt",
                label: "Rotten Tomatoes",
                kind: FilterKind::NumericRange(film_rt),
                options: strings(&[
                    "90-100", "80-89", "70-79", "60-69", "50-59", "40-49", "30-39", "20-29",
                    "10-19", "0-9",
                ]),
            },
            Dimension {
                key: "year",
                label: "Release decade",
                kind: FilterKind::NumericRange(film_release_year),
                options: strings(&[
                    "2020s", "2010s", "2000s", "1990s", "1980s", "1970s", "1960s", "1950s",
                    "Pre-1950",
                ]),
            },
            Dimension {
                key: "yearSeen",
                label: "Year seen",
                kind: FilterKind::ExactYear(film_year_seen),
                options: year_options(2006, "Pre-2006"),
            },
            Dimension {
                key: "genre",
                label: "Genre",
                kind: FilterKind::Categorical(film_genres),
                options: strings(&[
                    "Action",
                    "Adventure",
                    "Animation",
                    "Comedy",
                    "Crime",
                    "Documentary",
                    "Drama",
                    "Family",
                    "Fantasy",
                    "History",
                    "Horror",
                    "Music",
                    "Mystery",
                    "Romance",
                    "Science Fiction",
                    "Thriller",
                    "War",
                    "Western",
                ]),
            },
        ],
        sort_fields: vec![
            SortField {
                key: "rating",
                label: "J-Rayting",
                kind: SortKind::Rating,
            },
            SortField {
                key: "year",
                label: "Release year",
                kind: SortKind::Numeric(film_release_year),
            },
            SortField {
                key: "rt",
                label: "Rotten Tomatoes",
                kind: SortKind::Numeric(film_rt),
            },
            SortField {
                key: "date",
                label: "Date seen",
                kind: SortKind::Date(film_date_seen, DateField::Consumed),
            },
            SortField {
                key: "length",
                label: "Length",
                kind: SortKind::Numeric(film_length),
            },
        ],
        top_tier: &["A+", "A/A+", "A"],
        reorder_titles: true,
        extra_search: Vec::new(),
    }
}

// ── Books ───────────────────────────────────────────────────────────────────

fn book_type(b: &Book) -> Option<&str> {
    b.book_type.as_deref()
}

fn book_form(b: &Book) -> Option<&str> {
    b.form.as_deref()
}

fn book_author(b: &Book) -> Option<&str> {
    b.author.as_deref()
}

fn book_date_read(b: &Book) -> Option<&str> {
    b.date_read.as_deref()
}

fn book_published(b: &Book) -> Option<&str> {
    b.published_date.as_deref()
}

fn book_year_read(b: &Book) -> Option<String> {
    consumption_year(b.year.as_deref(), b.date_read.as_deref())
}

/// Year read as a number for sorting; sentinels like `"Pre-2000"` count as missing.
fn book_year_read_number(b: &Book) -> Option<f64> {
    b.year.as_deref().and_then(|y| y.trim().parse().ok())
}

fn book_year_written(b: &Book) -> Option<f64> {
    b.year_written.map(f64::from)
}

fn book_pages(b: &Book) -> Option<f64> {
    b.pages.map(f64::from)
}

pub fn book_config() -> CollectionConfig<Book> {
    CollectionConfig {
        collection: Collection::Books,
        dimensions: vec![
            Dimension {
                key: "rating",
                label: "J-Rayting",
                kind: FilterKind::Rating,
                options: rating_options(),
            },
            Dimension {
                key: "type",
                label: "Type",
                kind: FilterKind::Categorical(book_type),
                options: strings(&[
                    "Fiction",
                    "Non-fiction: Business",
                    "Non-fiction: Social",
                    "Non-fiction: Sport",
                    "Non-fiction: Bio",
                    "Non-fiction: Politics",
                    "Non-fiction: True Crime",
                    "Non-fiction",
                ]),
            },
            Dimension {
                key: "form",
                label: "Form",
                kind: FilterKind::Categorical(book_form),
                options: strings(&["Kindle", "Book"]),
            },
            Dimension {
                key: "year",
                label: "Year read",
                kind: FilterKind::ExactYear(book_year_read),
                options: year_options(2000, "Pre-2000"),
            },
            Dimension {
                key: "author",
                label: "Author",
                kind: FilterKind::FreeText(book_author),
                options: Vec::new(),
            },
        ],
        sort_fields: vec![
            SortField {
                key: "rating",
                label: "J-Rayting",
                kind: SortKind::Rating,
            },
            SortField {
                key: "date",
                label: "Date read",
                kind: SortKind::Date(book_date_read, DateField::Consumed),
            },
            SortField {
                key: "year",
                label: "Year read",
                kind: SortKind::Numeric(book_year_read_number),
            },
            SortField {
                key: "published",
                label: "Year written",
                kind: SortKind::Numeric(book_year_written),
            },
            SortField {
                key: "dateWritten",
                label: "Date published",
                kind: SortKind::Date(book_published, DateField::Written),
            },
            SortField {
                key: "pages",
                label: "Pages",
                kind: SortKind::Numeric(book_pages),
            },
        ],
        top_tier: &["A+", "A/A+", "A"],
        reorder_titles: false,
        extra_search: vec![book_author as TextField<Book>],
    }
}

// ── Shows ───────────────────────────────────────────────────────────────────

fn show_genres(s: &Show) -> Option<&str> {
    s.genres.as_deref()
}

fn show_start_year(s: &Show) -> Option<f64> {
    s.start_year.map(f64::from)
}

fn show_imdb(s: &Show) -> Option<f64> {
    s.imdb_rating
}

fn show_seasons(s: &Show) -> Option<f64> {
    s.seasons.map(f64::from)
}

fn show_episodes(s: &Show) -> Option<f64> {
    s.episodes.map(f64::from)
}

fn show_date_watched(s: &Show) -> Option<&str> {
    s.date_watched.as_deref()
}

pub fn show_config() -> CollectionConfig<Show> {
    CollectionConfig {
        collection: Collection::Shows,
        dimensions: vec![
            Dimension {
                key: "rating",
                label: "J-Rayting",
                kind: FilterKind::Rating,
                options: rating_options(),
            },
            Dimension {
                key: "genre",
                label: "Genre",
                kind: FilterKind::Categorical(show_genres),
                options: strings(&[
                    "Drama",
                    "Comedy",
                    "Crime",
                    "Action & Adventure",
                    "Sci-Fi & Fantasy",
                    "Mystery",
                    "Documentary",
                    "Animation",
                    "Family",
                    "Reality",
                    "War & Politics",
                ]),
            },
            Dimension {
                key: "decade",
                label: "Decade",
                kind: FilterKind::NumericRange(show_start_year),
                options: strings(&["2020s", "2010s", "2000s", "1990s", "Pre-1990"]),
            },
            Dimension {
                key: "imdb",
                label: "IMDb rating",
                kind: FilterKind::NumericRange(show_imdb),
                options: strings(&["≥9.0", "8.0-8.9", "7.0-7.9", "6.0-6.9", "5.0-5.9", "<5.0"]),
            },
        ],
        sort_fields: vec![
            SortField {
                key: "rating",
                label: "J-Rayting",
                kind: SortKind::Rating,
            },
            SortField {
                key: "year",
                label: "Start year",
                kind: SortKind::Numeric(show_start_year),
            },
            SortField {
                key: "imdb",
                label: "IMDb rating",
                kind: SortKind::Numeric(show_imdb),
            },
            SortField {
                key: "seasons",
                label: "Seasons",
                kind: SortKind::Numeric(show_seasons),
            },
            SortField {
                key: "episodes",
                label: "Episodes",
                kind: SortKind::Numeric(show_episodes),
            },
            SortField {
                key: "date",
                label: "Date watched",
                kind: SortKind::Date(show_date_watched, DateField::Consumed),
            },
        ],
        top_tier: &["A+", "A/A+", "A"],
        reorder_titles: false,
        extra_search: Vec::new(),
    }
}

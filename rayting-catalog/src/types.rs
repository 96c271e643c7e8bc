//! Data model types for the J-Rayting catalog.
//!
//! Field names follow the backend's JSON exactly so items can be fetched,
//! edited and sent back. Every attribute is optional and tolerant of the
//! historical data's mixed number/string encodings (see [`crate::loose`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::loose;

// ── Collection ──────────────────────────────────────────────────────────────

/// One of the three catalogued collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Films,
    Books,
    Shows,
}

/// All collections, in display order.
pub const ALL_COLLECTIONS: &[Collection] = &[Collection::Films, Collection::Books, Collection::Shows];

impl Collection {
    /// Path segment used by the backend (`/films`, `/books`, `/shows`).
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Films => "films",
            Self::Books => "books",
            Self::Shows => "shows",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Films => "Film",
            Self::Books => "Book",
            Self::Shows => "Show",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Films => "Films",
            Self::Books => "Books",
            Self::Shows => "Shows",
        }
    }

    /// Key under which the fetched list is cached locally.
    pub fn cache_key(&self) -> &'static str {
        match self {
            Self::Films => "cachedFilms",
            Self::Books => "cachedBooks",
            Self::Shows => "cachedShows",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Films => &["films", "film", "movies", "movie"],
            Self::Books => &["books", "book"],
            Self::Shows => &["shows", "show", "tv"],
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.endpoint())
    }
}

/// Error returned when a string cannot be parsed into a `Collection`.
#[derive(Debug, Clone)]
pub struct CollectionParseError(pub String);

impl std::fmt::Display for CollectionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown collection: '{}' (expected films, books or shows)", self.0)
    }
}

impl std::error::Error for CollectionParseError {}

impl std::str::FromStr for Collection {
    type Err = CollectionParseError;

    /// Parse a collection from its endpoint name or an alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_COLLECTIONS
            .iter()
            .copied()
            .find(|c| c.aliases().contains(&lower.as_str()))
            .ok_or_else(|| CollectionParseError(s.to_string()))
    }
}

// ── CatalogItem ─────────────────────────────────────────────────────────────

/// The fields every collection shares, whatever the JSON calls them.
pub trait CatalogItem {
    fn id(&self) -> i64;

    /// Primary display name (film/show `title`, book `book_name`).
    fn title(&self) -> &str;

    /// Raw J-Rayting label, possibly a combo like `"A-/A"`.
    fn rating(&self) -> Option<&str>;

    /// Stored numeric score. Zero is treated as absent.
    fn stored_score(&self) -> Option<i32>;

    fn a_grade_rank(&self) -> Option<u32>;

    fn notes(&self) -> Option<&str>;

    /// Effective numeric score: the stored score, else derived from the rating.
    fn score(&self) -> i32 {
        self.stored_score()
            .filter(|s| *s != 0)
            .unwrap_or_else(|| self.rating().map(crate::rating::score_for_label).unwrap_or(0))
    }
}

// ── Film ────────────────────────────────────────────────────────────────────

/// A watched film.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub letter_rating: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub score: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_u32")]
    pub a_grade_rank: Option<u32>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub order_number: Option<i32>,
    /// Date seen, in any of the historical formats (see [`crate::dates`]).
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub date_seen: Option<String>,
    /// Year watched, e.g. `"2019"` or the sentinel `"Pre-2006"`.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub year_watched: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub release_year: Option<i32>,
    /// Rotten Tomatoes percentage as text, e.g. `"85%"`.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub rotten_tomatoes: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub length_minutes: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub rt_per_minute: Option<String>,
    /// Comma-separated genre list.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub genres: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub rt_link: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub details_commentary: Option<String>,
    /// Fields this client does not model, kept for round-tripping.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Film {
    /// Rotten Tomatoes score as a number, `"85%"` → 85.
    pub fn rt_percent(&self) -> Option<f64> {
        self.rotten_tomatoes
            .as_deref()
            .and_then(|s| loose::leading_number(&s.replace('%', "")))
    }
}

impl CatalogItem for Film {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn rating(&self) -> Option<&str> {
        self.letter_rating.as_deref()
    }

    fn stored_score(&self) -> Option<i32> {
        self.score
    }

    fn a_grade_rank(&self) -> Option<u32> {
        self.a_grade_rank
    }

    fn notes(&self) -> Option<&str> {
        self.details_commentary.as_deref()
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

/// A book that has been read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: i64,
    #[serde(default)]
    pub book_name: String,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub j_rayting: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub score: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_u32")]
    pub a_grade_rank: Option<u32>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub order_number: Option<i32>,
    /// Category, e.g. `"Fiction"` or `"Non-fiction: Business"`.
    #[serde(rename = "type", default, deserialize_with = "loose::opt_string")]
    pub book_type: Option<String>,
    /// `"Kindle"` or `"Book"`.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub form: Option<String>,
    /// Year read, e.g. `"2021"` or the sentinel `"Pre-2000"`.
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub date_read: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub year_written: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub pages: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub cover_url: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub google_books_id: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub notion_link: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub details_commentary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem for Book {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.book_name
    }

    fn rating(&self) -> Option<&str> {
        self.j_rayting.as_deref()
    }

    fn stored_score(&self) -> Option<i32> {
        self.score
    }

    fn a_grade_rank(&self) -> Option<u32> {
        self.a_grade_rank
    }

    fn notes(&self) -> Option<&str> {
        self.details_commentary.as_deref()
    }
}

// ── Show ────────────────────────────────────────────────────────────────────

/// A watched TV show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub j_rayting: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub score: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_u32")]
    pub a_grade_rank: Option<u32>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub genres: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub start_year: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub end_year: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_bool")]
    pub is_ongoing: Option<bool>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub seasons: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub episodes: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    pub imdb_rating: Option<f64>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub imdb_id: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub date_watched: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub details_commentary: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Show {
    /// Year span for display: `"2008–2013"`, `"2019–"` for ongoing shows.
    pub fn year_span(&self) -> Option<String> {
        let start = self.start_year?;
        match (self.end_year, self.is_ongoing) {
            (_, Some(true)) => Some(format!("{start}–")),
            (Some(end), _) if end != start => Some(format!("{start}–{end}")),
            _ => Some(start.to_string()),
        }
    }
}

impl CatalogItem for Show {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn rating(&self) -> Option<&str> {
        self.j_rayting.as_deref()
    }

    fn stored_score(&self) -> Option<i32> {
        self.score
    }

    fn a_grade_rank(&self) -> Option<u32> {
        self.a_grade_rank
    }

    fn notes(&self) -> Option<&str> {
        self.details_commentary.as_deref()
    }
}

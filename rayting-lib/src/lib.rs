//! Shared browsing logic for the J-Rayting catalog.
//!
//! The centerpiece is [`derive_visible_items`]: a pure search → filter → sort
//! pipeline that every collection runs through, parameterized by a
//! per-collection [`CollectionConfig`]. Around it sit the query state that
//! drives it, the persistence port that remembers that state, and the
//! in-memory item store it reads from.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod persist;
pub mod query;
pub mod settings;
pub mod sort;
pub mod store;

pub use config::{
    Catalogued, CollectionConfig, Dimension, FilterKind, SortField, SortKind, book_config,
    film_config, show_config,
};
pub use engine::{derive_visible_items, derive_visible_refs, matches_search};
pub use error::{PersistError, SettingsError};
pub use filter::{Bucket, matches_dimension, parse_bucket};
pub use persist::{FileStore, KeyValueStore, MemoryStore};
pub use query::QueryState;
pub use sort::{Direction, DirectionParseError, SortSpec, compare_items};
pub use store::ItemStore;

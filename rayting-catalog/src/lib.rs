//! J-Rayting catalog data model, rating scale, title and date helpers.
//!
//! This crate defines the item types for the three collections (films, books,
//! shows) without any network or persistence dependencies. Everything here is
//! pure: malformed data degrades to "no value" instead of producing errors.

pub mod dates;
pub mod json;
pub mod loose;
pub mod rating;
pub mod title;
pub mod types;

pub use dates::{DateField, DatePrecision, ParsedDate, consumption_year, display_date, parse_date};
pub use json::{LoadError, load_items, save_items};
pub use rating::{Grade, Rating, effective_label, score_for_label};
pub use title::{display_title, natural_cmp};
pub use types::*;

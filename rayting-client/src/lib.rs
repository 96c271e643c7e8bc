//! HTTP client for the J-Rayting backend, plus the glue that keeps a local
//! item store in sync with it.

pub mod cache;
pub mod client;
pub mod error;
pub mod export;
pub mod refresh;
pub mod types;

pub use client::BackendClient;
pub use error::ClientError;
pub use export::{CsvRecord, export_csv, write_csv};
pub use refresh::{RefreshOutcome, refresh_store};
pub use types::{AnalyticsRow, DuplicateEntry, SaveOutcome};

//! Backend response types.

use rayting_catalog::loose;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// An existing item the backend considers a duplicate of the one being saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    #[serde(default, deserialize_with = "loose::id")]
    pub id: i64,
    #[serde(default, alias = "book_name", deserialize_with = "loose::opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_i32")]
    pub release_year: Option<i32>,
    #[serde(default, deserialize_with = "loose::opt_string")]
    pub rt_link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a create or update.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved {
        /// Present on create.
        id: Option<i64>,
        message: Option<String>,
        /// The backend filled in poster, genres or similar from an external catalog.
        metadata_fetched: bool,
    },
    /// HTTP 409: the item looks like one that already exists.
    Duplicate {
        message: String,
        existing: Vec<DuplicateEntry>,
    },
}

fn message_of(body: &Map<String, Value>) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|k| body.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

/// Interpret a create/update response from its status and body.
pub fn parse_save_response(status: u16, body: &str) -> Result<SaveOutcome, ClientError> {
    let json: Map<String, Value> = serde_json::from_str(body).unwrap_or_default();

    match status {
        200..=299 => Ok(SaveOutcome::Saved {
            id: json.get("id").and_then(Value::as_i64),
            message: message_of(&json),
            metadata_fetched: json
                .get("metadata_fetched")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }),
        409 => {
            let existing = json
                .iter()
                .filter(|(k, _)| k.starts_with("existing"))
                .find_map(|(_, v)| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|v| serde_json::from_value(v.clone()).ok())
                        .collect()
                })
                .unwrap_or_default();
            Ok(SaveOutcome::Duplicate {
                message: message_of(&json)
                    .unwrap_or_else(|| "An item with this title already exists".to_string()),
                existing,
            })
        }
        404 => Err(ClientError::NotFound),
        _ => Err(ClientError::Status {
            status,
            message: message_of(&json).unwrap_or_else(|| snippet(body)),
        }),
    }
}

/// First 200 characters of a response body, for error messages.
pub(crate) fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}

/// One pre-aggregated analytics bucket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAnalyticsRow")]
pub struct AnalyticsRow {
    pub dimension_value: String,
    pub count: u32,
    pub avg_score: Option<f64>,
}

/// Wire shape. Older endpoints name the bucket column after the dimension.
#[derive(Deserialize)]
struct RawAnalyticsRow {
    #[serde(
        default,
        alias = "year_watched",
        alias = "decade",
        alias = "genre",
        alias = "rt_range",
        alias = "score_range",
        alias = "year",
        alias = "type",
        alias = "form",
        alias = "author",
        deserialize_with = "loose::opt_string"
    )]
    dimension_value: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_u32")]
    count: Option<u32>,
    #[serde(default, deserialize_with = "loose::opt_f64")]
    avg_score: Option<f64>,
}

impl From<RawAnalyticsRow> for AnalyticsRow {
    fn from(raw: RawAnalyticsRow) -> Self {
        Self {
            dimension_value: raw.dimension_value.unwrap_or_else(|| "Unknown".to_string()),
            count: raw.count.unwrap_or(0),
            avg_score: raw.avg_score,
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;

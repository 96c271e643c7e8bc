//! Sort specification and item comparators.

use std::cmp::Ordering;
use std::fmt;

use rayting_catalog::{CatalogItem, natural_cmp, parse_date};
use serde::{Deserialize, Serialize};

use crate::config::{CollectionConfig, SortKind};

/// Sort field used when none is requested.
pub const DEFAULT_SORT_FIELD: &str = "rating";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    /// Best, newest, highest first.
    #[default]
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not `asc` or `desc`.
#[derive(Debug, Clone)]
pub struct DirectionParseError(pub String);

impl fmt::Display for DirectionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort direction: '{}' (expected asc or desc)", self.0)
    }
}

impl std::error::Error for DirectionParseError {}

impl std::str::FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(DirectionParseError(s.to_string())),
        }
    }
}

/// Requested sort: a field key (default rating) and a direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<String>,
    pub direction: Direction,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// The field key actually used.
    pub fn effective_field(&self) -> &str {
        self.field
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_SORT_FIELD)
    }
}

fn tier_position<T: CatalogItem>(config: &CollectionConfig<T>, item: &T) -> Option<usize> {
    let raw = item.rating()?.trim();
    config.top_tier.iter().position(|t| *t == raw)
}

/// Ranked before unranked; lower rank first.
fn cmp_rank(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_rating<T: CatalogItem>(config: &CollectionConfig<T>, a: &T, b: &T) -> Ordering {
    match (tier_position(config, a), tier_position(config, b)) {
        (Some(x), Some(y)) => x
            .cmp(&y)
            .then_with(|| cmp_rank(a.a_grade_rank(), b.a_grade_rank()))
            .then_with(|| b.score().cmp(&a.score())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.score().cmp(&a.score()),
    }
}

fn primary<T: CatalogItem>(config: &CollectionConfig<T>, field: &str, a: &T, b: &T) -> Ordering {
    let Some(sort_field) = config.sort_field(field) else {
        return Ordering::Equal;
    };
    match &sort_field.kind {
        SortKind::Rating => cmp_rating(config, a, b),
        SortKind::Numeric(read) => {
            let x = read(a).unwrap_or(0.0);
            let y = read(b).unwrap_or(0.0);
            y.total_cmp(&x)
        }
        SortKind::Date(read, kind) => {
            let x = read(a).map(|s| parse_date(s, *kind).sort_key());
            let y = read(b).map(|s| parse_date(s, *kind).sort_key());
            y.unwrap_or(chrono::NaiveDate::MIN)
                .cmp(&x.unwrap_or(chrono::NaiveDate::MIN))
        }
    }
}

/// Full comparator: primary field, then natural title order, then direction.
///
/// `Asc` negates the whole result, tie-break included.
pub fn compare_items<T: CatalogItem>(config: &CollectionConfig<T>, spec: &SortSpec, a: &T, b: &T) -> Ordering {
    let ord = primary(config, spec.effective_field(), a, b)
        .then_with(|| natural_cmp(a.title(), b.title()));
    match spec.direction {
        Direction::Desc => ord,
        Direction::Asc => ord.reverse(),
    }
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;

//! Filter predicates and bucket label parsing.

use rayting_catalog::{CatalogItem, effective_label};

use crate::config::{Dimension, FilterKind};

/// A numeric range parsed from a filter label. `min` is inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bucket {
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|m| value >= m) && self.max.is_none_or(|m| value < m)
    }
}

fn number(s: &str) -> Option<f64> {
    s.trim().trim_end_matches('%').parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Exclusive upper bound one step past `hi`, where the step is the label's
/// precision: `"89"` → 90, `"8.9"` → 9.0.
fn exclusive_upper(hi: &str) -> Option<f64> {
    let hi = hi.trim().trim_end_matches('%');
    let decimals = hi.split_once('.').map_or(0, |(_, frac)| frac.len()) as i32;
    let scale = 10f64.powi(decimals);
    let value = number(hi)?;
    Some(((value * scale).round() + 1.0) / scale)
}

/// Parse a bucket label.
///
/// - `"1990s"` → [1990, 2000)
/// - `"Pre-1950"` → below 1950
/// - `"90-100"` → 90 through 100 inclusive
/// - `"8.0-8.9"` → [8.0, 9.0)
/// - `"≥9.0"` / `">=9.0"` → 9.0 and above
/// - `"<5.0"` → below 5.0
///
/// Anything else is `None` and matches nothing.
pub fn parse_bucket(label: &str) -> Option<Bucket> {
    let s = label.trim();

    if let Some(rest) = s.strip_prefix("Pre-").or_else(|| s.strip_prefix("pre-")) {
        return Some(Bucket {
            min: None,
            max: Some(number(rest)?),
        });
    }
    if let Some(rest) = s.strip_prefix('≥').or_else(|| s.strip_prefix(">=")) {
        return Some(Bucket {
            min: Some(number(rest)?),
            max: None,
        });
    }
    if let Some(rest) = s.strip_prefix('<') {
        return Some(Bucket {
            min: None,
            max: Some(number(rest)?),
        });
    }
    if let Some(decade) = s.strip_suffix('s') {
        let start = number(decade)?;
        return Some(Bucket {
            min: Some(start),
            max: Some(start + 10.0),
        });
    }
    let (lo, hi) = s.split_once('-')?;
    Some(Bucket {
        min: Some(number(lo)?),
        max: Some(exclusive_upper(hi)?),
    })
}

fn tags(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Whether `item` passes one dimension given its selected values.
///
/// An empty selection passes everything.
pub fn matches_dimension<T: CatalogItem>(dim: &Dimension<T>, item: &T, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    match &dim.kind {
        FilterKind::Rating => {
            let Some(raw) = item.rating().map(str::trim).filter(|r| !r.is_empty()) else {
                return false;
            };
            let effective = effective_label(raw);
            selected.iter().any(|s| s == raw || *s == effective)
        }
        FilterKind::NumericRange(read) => {
            let Some(value) = read(item) else {
                return false;
            };
            selected
                .iter()
                .filter_map(|label| parse_bucket(label))
                .any(|b| b.contains(value))
        }
        FilterKind::Categorical(read) => {
            let Some(field) = read(item) else {
                return false;
            };
            tags(field).any(|t| selected.iter().any(|s| s == t))
        }
        FilterKind::FreeText(read) => {
            let Some(field) = read(item) else {
                return false;
            };
            let field = field.to_lowercase();
            selected
                .iter()
                .any(|s| field.contains(&s.trim().to_lowercase()))
        }
        FilterKind::ExactYear(read) => {
            let Some(year) = read(item) else {
                return false;
            };
            selected.iter().any(|s| s.trim() == year)
        }
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;

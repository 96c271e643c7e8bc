//! Parser for the catalog's hand-entered date fields.
//!
//! Dates were typed in over many years and follow no single convention:
//! `"February 15, 99"`, `"12/1/2025"`, `"2025-12-01"`, `"Jan-24"`, a bare
//! year, or free text such as `"Theatre"`. [`parse_date`] tries an ordered
//! list of matchers and returns a tagged result instead of a sentinel date.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Which kind of date field is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// When the item was watched or read (`date_seen`, `date_read`, `date_watched`).
    Consumed,
    /// When a book was written or published (`published_date`).
    Written,
}

/// How much of the date the source text actually specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePrecision {
    Day,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDate {
    Parsed {
        date: NaiveDate,
        precision: DatePrecision,
    },
    /// Not a recognisable date; holds the original text.
    Unparsed(String),
}

impl ParsedDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed { date, .. } => Some(*date),
            Self::Unparsed(_) => None,
        }
    }

    /// Comparable instant; anything unparsed sorts as the oldest possible date.
    pub fn sort_key(&self) -> NaiveDate {
        self.date().unwrap_or(NaiveDate::MIN)
    }
}

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number (1-12) for a full or three-letter month name.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.trim().trim_end_matches('.').to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| *m == lower || (lower.len() == 3 && m.starts_with(&lower)))
        .map(|i| i as u32 + 1)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Two-digit years below 50 are 20YY, the rest 19YY. Four-digit years pass through.
fn expand_year(s: &str) -> Option<i32> {
    if !all_digits(s) {
        return None;
    }
    let n: i32 = s.parse().ok()?;
    match s.len() {
        1 | 2 if n < 50 => Some(2000 + n),
        1 | 2 => Some(1900 + n),
        4 => Some(n),
        _ => None,
    }
}

fn day(date: NaiveDate) -> ParsedDate {
    ParsedDate::Parsed {
        date,
        precision: DatePrecision::Day,
    }
}

/// `February 15, 99` / `Feb 15, 1999`.
fn month_name_day_year(s: &str) -> Option<ParsedDate> {
    let mut parts = s.split_whitespace();
    let month = month_number(parts.next()?)?;
    let d: u32 = parts.next()?.trim_end_matches(',').parse().ok()?;
    let year = expand_year(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, d).map(day)
}

/// `12/1/2025` / `12/1/25`.
fn slash_mdy(s: &str) -> Option<ParsedDate> {
    let parts: Vec<&str> = s.split('/').map(str::trim).collect();
    let [m, d, y] = parts.as_slice() else {
        return None;
    };
    if !all_digits(m) || !all_digits(d) || !matches!(y.len(), 2 | 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_year(y)?, m.parse().ok()?, d.parse().ok()?).map(day)
}

/// `2025-12-01`, only when the first segment is a four-digit year.
fn iso_ymd(s: &str) -> Option<ParsedDate> {
    let parts: Vec<&str> = s.split('-').map(str::trim).collect();
    let [y, m, d] = parts.as_slice() else {
        return None;
    };
    if y.len() != 4 || !all_digits(y) || !all_digits(m) || !all_digits(d) {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?).map(day)
}

/// `Jan-24` / `April-08`, pinned to the first of the month.
fn month_dash_year(s: &str) -> Option<ParsedDate> {
    let (m, y) = s.split_once('-')?;
    if y.contains('-') {
        return None;
    }
    let month = month_number(m)?;
    let year = expand_year(y.trim())?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|date| ParsedDate::Parsed {
        date,
        precision: DatePrecision::Month,
    })
}

fn bare_year(s: &str) -> Option<ParsedDate> {
    if s.len() != 4 || !all_digits(s) {
        return None;
    }
    NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1).map(|date| ParsedDate::Parsed {
        date,
        precision: DatePrecision::Year,
    })
}

fn generic(s: &str) -> Option<ParsedDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(day(dt.date_naive()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(day(dt.date()));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Some(day(d));
    }

    // chrono's %Y accepts any digit count, so "May 2020" would read as
    // day 20 of year 20. Only try the day formats on three tokens ending in
    // a four-digit year.
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let four_digit_year = tokens.last().is_some_and(|y| y.len() == 4 && all_digits(y));
    if !four_digit_year {
        return None;
    }
    if tokens.len() == 3 {
        return ["%d %B %Y", "%B %d %Y"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .map(day);
    }
    if tokens.len() != 2 {
        return None;
    }
    // chrono needs a day to build a NaiveDate
    NaiveDate::parse_from_str(&format!("{s} 1"), "%B %Y %d")
        .ok()
        .map(|date| ParsedDate::Parsed {
            date,
            precision: DatePrecision::Month,
        })
}

/// Parse a hand-entered date. The first matching format wins.
pub fn parse_date(text: &str, field: DateField) -> ParsedDate {
    let s = text.trim();
    if s.is_empty() {
        return ParsedDate::Unparsed(String::new());
    }

    let parsed = month_name_day_year(s)
        .or_else(|| slash_mdy(s))
        .or_else(|| iso_ymd(s))
        .or_else(|| month_dash_year(s))
        .or_else(|| match field {
            DateField::Written => bare_year(s),
            DateField::Consumed => None,
        })
        .or_else(|| generic(s));

    parsed.unwrap_or_else(|| ParsedDate::Unparsed(text.to_string()))
}

/// Human-readable form: `"Jan 1, 2010"`, `"Apr 2008"` or `"2015"`.
///
/// Text that is not a date is shown as-is for consumption dates (it is
/// usually a note like `"Theatre"`) and hidden for written dates.
pub fn display_date(text: &str, field: DateField) -> Option<String> {
    match parse_date(text, field) {
        ParsedDate::Parsed { date, precision } => Some(match precision {
            DatePrecision::Day => date.format("%b %-d, %Y").to_string(),
            DatePrecision::Month => date.format("%b %Y").to_string(),
            DatePrecision::Year => date.format("%Y").to_string(),
        }),
        ParsedDate::Unparsed(s) if s.trim().is_empty() => None,
        ParsedDate::Unparsed(s) => match field {
            DateField::Consumed => Some(s),
            DateField::Written => None,
        },
    }
}

/// Normalized year an item was watched or read, as used by the exact-year
/// filter.
///
/// The explicit year field wins: whole numbers are stringified without a
/// fraction and labels (`"1990s"`, `"Pre-2006"`) are kept verbatim. Without
/// one, the year of the parsed consumption date is used.
pub fn consumption_year(year_field: Option<&str>, date_field: Option<&str>) -> Option<String> {
    if let Some(y) = year_field.map(str::trim).filter(|y| !y.is_empty()) {
        return Some(match y.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", f as i64),
            _ => y.to_string(),
        });
    }
    date_field
        .and_then(|d| parse_date(d, DateField::Consumed).date())
        .map(|d| d.year().to_string())
}

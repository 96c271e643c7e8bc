use chrono::NaiveDate;
use rayting_catalog::{
    DateField, DatePrecision, ParsedDate, consumption_year, display_date, parse_date,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parsed(text: &str) -> Option<NaiveDate> {
    parse_date(text, DateField::Consumed).date()
}

#[test]
fn slash_month_day_year() {
    assert_eq!(parsed("12/1/2025"), Some(ymd(2025, 12, 1)));
    assert_eq!(parsed("3/15/99"), Some(ymd(1999, 3, 15)));
    assert_eq!(parsed("3/15/07"), Some(ymd(2007, 3, 15)));
}

#[test]
fn iso_dates() {
    assert_eq!(parsed("2025-12-01"), Some(ymd(2025, 12, 1)));
    // first segment must be a four-digit year
    assert_eq!(parsed("12-01-2025"), None);
}

#[test]
fn month_dash_year() {
    assert_eq!(
        parse_date("Jan-24", DateField::Consumed),
        ParsedDate::Parsed {
            date: ymd(2024, 1, 1),
            precision: DatePrecision::Month,
        }
    );
    assert_eq!(parsed("Feb-99"), Some(ymd(1999, 2, 1)));
    assert_eq!(parsed("April-08"), Some(ymd(2008, 4, 1)));
}

#[test]
fn month_name_with_day() {
    assert_eq!(parsed("February 15, 99"), Some(ymd(1999, 2, 15)));
    assert_eq!(parsed("Feb 15, 2001"), Some(ymd(2001, 2, 15)));
    assert_eq!(parsed("february 15 1999"), Some(ymd(1999, 2, 15)));
}

#[test]
fn invalid_calendar_dates_are_unparsed() {
    assert_eq!(parsed("2/30/2020"), None);
    assert_eq!(parsed("2020-13-01"), None);
}

#[test]
fn bare_year_only_for_written_dates() {
    assert_eq!(
        parse_date("1851", DateField::Written),
        ParsedDate::Parsed {
            date: ymd(1851, 1, 1),
            precision: DatePrecision::Year,
        }
    );
    assert_eq!(parsed("1851"), None);
}

#[test]
fn generic_fallbacks() {
    assert_eq!(parsed("2020-05-06T10:11:12"), Some(ymd(2020, 5, 6)));
    assert_eq!(parsed("2020-05-06T10:11:12Z"), Some(ymd(2020, 5, 6)));
    assert_eq!(parsed("2020/05/06"), Some(ymd(2020, 5, 6)));
    assert_eq!(parsed("6 May 2020"), Some(ymd(2020, 5, 6)));
    assert_eq!(parsed("May 2020"), Some(ymd(2020, 5, 1)));
}

#[test]
fn month_and_year_text_is_month_precision() {
    assert_eq!(
        parse_date("September 2019", DateField::Consumed),
        ParsedDate::Parsed {
            date: ymd(2019, 9, 1),
            precision: DatePrecision::Month,
        }
    );
    assert_eq!(
        display_date("May 2020", DateField::Consumed),
        Some("May 2020".to_string())
    );
    assert_eq!(parsed("May 2020 extra"), None);
}

#[test]
fn free_text_sorts_oldest_and_displays_verbatim() {
    let p = parse_date("Theatre", DateField::Consumed);
    assert_eq!(p, ParsedDate::Unparsed("Theatre".to_string()));
    assert_eq!(p.sort_key(), NaiveDate::MIN);
    assert_eq!(
        display_date("Theatre", DateField::Consumed),
        Some("Theatre".to_string())
    );
    assert_eq!(display_date("Theatre", DateField::Written), None);
}

#[test]
fn empty_text() {
    assert_eq!(
        parse_date("  ", DateField::Consumed),
        ParsedDate::Unparsed(String::new())
    );
    assert_eq!(display_date("", DateField::Consumed), None);
}

#[test]
fn display_by_precision() {
    assert_eq!(
        display_date("1/1/2010", DateField::Consumed),
        Some("Jan 1, 2010".to_string())
    );
    assert_eq!(
        display_date("April-08", DateField::Consumed),
        Some("Apr 2008".to_string())
    );
    assert_eq!(
        display_date("2015", DateField::Written),
        Some("2015".to_string())
    );
}

#[test]
fn consumption_year_prefers_year_field() {
    assert_eq!(
        consumption_year(Some("2019"), Some("1/1/2020")),
        Some("2019".to_string())
    );
    assert_eq!(
        consumption_year(Some("2019.0"), None),
        Some("2019".to_string())
    );
    assert_eq!(
        consumption_year(Some("Pre-2006"), None),
        Some("Pre-2006".to_string())
    );
    assert_eq!(
        consumption_year(Some("1990s"), None),
        Some("1990s".to_string())
    );
}

#[test]
fn consumption_year_falls_back_to_date() {
    assert_eq!(
        consumption_year(None, Some("Jan-24")),
        Some("2024".to_string())
    );
    assert_eq!(
        consumption_year(Some("  "), Some("3/4/2011")),
        Some("2011".to_string())
    );
    assert_eq!(consumption_year(None, Some("Theatre")), None);
    assert_eq!(consumption_year(None, None), None);
}

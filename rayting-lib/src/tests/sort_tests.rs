use super::*;
use crate::config::{book_config, film_config, show_config};
use rayting_catalog::{Book, Film, Show};

fn film(title: &str, rating: &str) -> Film {
    Film {
        title: title.into(),
        letter_rating: Some(rating.into()),
        ..Default::default()
    }
}

fn show(title: &str, rating: &str, rank: Option<u32>) -> Show {
    Show {
        title: title.into(),
        j_rayting: Some(rating.into()),
        a_grade_rank: rank,
        ..Default::default()
    }
}

fn sorted<'a, T: CatalogItem>(config: &CollectionConfig<T>, spec: &SortSpec, items: &'a [T]) -> Vec<&'a str> {
    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by(|a, b| compare_items(config, spec, a, b));
    refs.into_iter().map(|i| i.title()).collect()
}

#[test]
fn direction_parsing() {
    assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
    assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Desc);
    assert!("sideways".parse::<Direction>().is_err());
    assert_eq!(Direction::default(), Direction::Desc);
}

#[test]
fn default_field_is_rating() {
    assert_eq!(SortSpec::default().effective_field(), "rating");
    let spec = SortSpec {
        field: Some(String::new()),
        direction: Direction::Desc,
    };
    assert_eq!(spec.effective_field(), "rating");
}

#[test]
fn score_descending_then_title() {
    let items = vec![film("Zorro", "B"), film("Abyss", "B"), film("Heat", "A-")];
    let order = sorted(&film_config(), &SortSpec::default(), &items);
    assert_eq!(order, vec!["Heat", "Abyss", "Zorro"]);
}

#[test]
fn film_top_tier_uses_rank() {
    let mut a = film("Second", "A");
    a.a_grade_rank = Some(2);
    let mut b = film("First", "A");
    b.a_grade_rank = Some(1);
    let unranked = film("Aardvark", "A");
    let items = vec![unranked, a, b, film("Below", "A-")];

    let order = sorted(&film_config(), &SortSpec::default(), &items);
    assert_eq!(order, vec!["First", "Second", "Aardvark", "Below"]);
}

#[test]
fn film_better_grades_precede_plain_a() {
    let mut ranked = film("Plain A", "A");
    ranked.a_grade_rank = Some(1);
    let items = vec![ranked, film("Masterpiece", "A+"), film("Combo", "A/A+")];

    let order = sorted(&film_config(), &SortSpec::default(), &items);
    assert_eq!(order, vec!["Masterpiece", "Combo", "Plain A"]);
}

#[test]
fn show_top_tier_order() {
    let items = vec![
        show("Plain A ranked", "A", Some(1)),
        show("Combo", "A/A+", None),
        show("Top", "A+", Some(5)),
        show("Top ranked", "A+", Some(1)),
        show("Below", "A-", None),
    ];
    let order = sorted(&show_config(), &SortSpec::default(), &items);
    assert_eq!(
        order,
        vec!["Top ranked", "Top", "Combo", "Plain A ranked", "Below"]
    );
}

#[test]
fn top_tier_membership_is_by_raw_rating() {
    // "A-/A" resolves to A but is not itself in the top-tier list
    let items = vec![show("Combo", "A-/A", Some(1)), show("Straight", "A", None)];
    let order = sorted(&show_config(), &SortSpec::default(), &items);
    assert_eq!(order, vec!["Straight", "Combo"]);
}

#[test]
fn unknown_rating_sorts_last() {
    let items = vec![film("Mystery", "??"), film("Known", "D")];
    let order = sorted(&film_config(), &SortSpec::default(), &items);
    assert_eq!(order, vec!["Known", "Mystery"]);
}

#[test]
fn numeric_missing_counts_as_zero() {
    let items = vec![
        Book {
            book_name: "Short".into(),
            pages: Some(120),
            ..Default::default()
        },
        Book {
            book_name: "Unknown".into(),
            ..Default::default()
        },
        Book {
            book_name: "Long".into(),
            pages: Some(900),
            ..Default::default()
        },
    ];
    let spec = SortSpec::new("pages", Direction::Desc);
    assert_eq!(
        sorted(&book_config(), &spec, &items),
        vec!["Long", "Short", "Unknown"]
    );
}

#[test]
fn dates_newest_first_and_unparsed_oldest() {
    let mut a = film("Old", "B");
    a.date_seen = Some("Feb-99".into());
    let mut b = film("New", "B");
    b.date_seen = Some("12/1/2025".into());
    let mut c = film("Cinema", "B");
    c.date_seen = Some("Theatre".into());
    let d = film("Undated", "B");

    let spec = SortSpec::new("date", Direction::Desc);
    let items = vec![a, b, c, d];
    assert_eq!(
        sorted(&film_config(), &spec, &items),
        vec!["New", "Old", "Cinema", "Undated"]
    );
}

#[test]
fn ascending_reverses_everything() {
    let items = vec![film("Zorro", "B"), film("Abyss", "B"), film("Heat", "A-")];
    let config = film_config();
    let desc = sorted(&config, &SortSpec::default(), &items);
    let asc = sorted(
        &config,
        &SortSpec {
            field: None,
            direction: Direction::Asc,
        },
        &items,
    );
    let mut reversed = desc.clone();
    reversed.reverse();
    assert_eq!(asc, reversed);
}

#[test]
fn unknown_field_falls_back_to_title() {
    let items = vec![film("Film 10", "A"), film("Film 2", "D"), film("2001", "B")];
    let spec = SortSpec::new("boxOffice", Direction::Desc);
    assert_eq!(
        sorted(&film_config(), &spec, &items),
        vec!["2001", "Film 2", "Film 10"]
    );
}

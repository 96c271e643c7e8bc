use super::*;
use rayting_lib::{Direction, MemoryStore, film_config};

fn selection() -> SelectionArgs {
    SelectionArgs::default()
}

#[test]
fn flags_build_state() {
    let config = film_config();
    let sel = SelectionArgs {
        search: Some("alien".into()),
        filters: vec!["rating=A+, A".into(), "genre=Horror".into()],
        sort: Some("rt".into()),
        direction: Some(Direction::Asc),
        ..selection()
    };
    let state = build_query(&config, &sel, &MemoryStore::new()).unwrap();
    assert_eq!(state.search, "alien");
    assert_eq!(state.filters["rating"], vec!["A+", "A"]);
    assert_eq!(state.filters["genre"], vec!["Horror"]);
    assert_eq!(state.sort.field.as_deref(), Some("rt"));
    assert_eq!(state.sort.direction, Direction::Asc);
}

#[test]
fn flags_override_query_string() {
    let config = film_config();
    let sel = SelectionArgs {
        query: Some("?search=heat&sortBy=rt&sortDirection=asc".into()),
        search: Some("alien".into()),
        ..selection()
    };
    let state = build_query(&config, &sel, &MemoryStore::new()).unwrap();
    assert_eq!(state.search, "alien");
    assert_eq!(state.sort.field.as_deref(), Some("rt"));
    assert_eq!(state.sort.direction, Direction::Asc);
}

#[test]
fn restore_reads_remembered_state() {
    let config = film_config();
    let mut kv = MemoryStore::new();
    let saved = QueryState {
        search: "matrix".into(),
        ..Default::default()
    };
    saved.persist(&config, &mut kv).unwrap();

    let sel = SelectionArgs {
        restore: true,
        ..selection()
    };
    let state = build_query(&config, &sel, &kv).unwrap();
    assert_eq!(state.search, "matrix");

    let state = build_query(&config, &selection(), &kv).unwrap();
    assert_eq!(state.search, "");
}

#[test]
fn bad_filters_are_rejected() {
    let config = film_config();
    let kv = MemoryStore::new();

    let sel = SelectionArgs {
        filters: vec!["rating".into()],
        ..selection()
    };
    assert!(matches!(
        build_query(&config, &sel, &kv),
        Err(CliError::Usage(_))
    ));

    let sel = SelectionArgs {
        filters: vec!["pages=100".into()],
        ..selection()
    };
    assert!(matches!(
        build_query(&config, &sel, &kv),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn empty_filter_values_clear_the_dimension() {
    let config = film_config();
    let sel = SelectionArgs {
        query: Some("genre=Drama".into()),
        filters: vec!["genre=".into()],
        ..selection()
    };
    let state = build_query(&config, &sel, &MemoryStore::new()).unwrap();
    assert!(!state.has_filters());
}

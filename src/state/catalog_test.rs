use super::*;

fn activity(category: Option<&str>) -> Activity {
    Activity {
        description: "D".to_owned(),
        schedule: "S".to_owned(),
        category: category.map(str::to_owned),
        max_participants: 10,
        participants: Vec::new(),
        time: None,
    }
}

fn catalog(names_and_categories: &[(&str, Option<&str>)]) -> Catalog {
    Catalog(
        names_and_categories
            .iter()
            .map(|(name, category)| ((*name).to_owned(), activity(*category)))
            .collect(),
    )
}

// =============================================================
// Fetch sequencing
// =============================================================

#[test]
fn begin_fetch_claims_increasing_sequence_numbers() {
    let mut state = CatalogState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(second > first);
    assert!(state.loading);
}

#[test]
fn apply_fetch_replaces_entries_on_success() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Ok(catalog(&[("Chess Club", None)]))));
    assert_eq!(state.entries.len(), 1);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_fetch_drops_stale_response() {
    let mut state = CatalogState::default();
    let old = state.begin_fetch();
    let new = state.begin_fetch();
    assert!(state.apply_fetch(new, Ok(catalog(&[("Art Class", None)]))));
    assert!(!state.apply_fetch(old, Ok(catalog(&[("Chess Club", None)]))));
    assert_eq!(state.entries[0].0, "Art Class");
}

#[test]
fn apply_fetch_keeps_loading_until_latest_lands() {
    let mut state = CatalogState::default();
    let old = state.begin_fetch();
    let _new = state.begin_fetch();
    assert!(state.apply_fetch(old, Ok(catalog(&[]))));
    assert!(state.loading);
}

#[test]
fn apply_fetch_failure_sets_error_and_keeps_entries() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Ok(catalog(&[("Chess Club", None)]))));
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, Err("boom".to_owned())));
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn apply_fetch_success_clears_previous_error() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Err("boom".to_owned()));
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(catalog(&[])));
    assert!(state.error.is_none());
}

// =============================================================
// Derived lists
// =============================================================

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(
        seq,
        Ok(catalog(&[
            ("A", Some("Games")),
            ("B", Some("Arts")),
            ("C", Some("Games")),
            ("D", Some("Sports")),
        ])),
    );
    assert_eq!(state.categories(), vec!["Games", "Arts", "Sports"]);
}

#[test]
fn categories_skip_missing_and_empty() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(catalog(&[("A", None), ("B", Some("")), ("C", Some("Games"))])));
    assert_eq!(state.categories(), vec!["Games"]);
}

#[test]
fn names_follow_backend_order() {
    let mut state = CatalogState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, Ok(catalog(&[("Zebra", None), ("Art", None)])));
    assert_eq!(state.names(), vec!["Zebra", "Art"]);
}

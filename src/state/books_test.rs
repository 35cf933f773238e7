use super::*;

fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_owned(),
        title: title.to_owned(),
        author: "Author".to_owned(),
        description: "Description".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn books_state_default_is_empty_and_idle() {
    let state = BooksState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert_eq!(state.error, None);
}

// =============================================================
// List fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_returns_increasing_tags() {
    let mut state = BooksState::default();
    let first = state.begin_fetch();
    assert!(state.loading);
    let second = state.begin_fetch();
    assert!(second > first);
}

#[test]
fn fetch_success_replaces_items_wholesale() {
    let mut state = BooksState::default();
    state.items = vec![book("b1", "Old")];
    let seq = state.begin_fetch();
    state.apply_fetch_success(seq, vec![book("b2", "New"), book("b3", "Newer")]);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "b2");
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn fetch_failure_keeps_items_and_sets_error() {
    let mut state = BooksState::default();
    state.items = vec![book("b1", "Kept")];
    let seq = state.begin_fetch();
    state.apply_fetch_failure(seq, "Failed to fetch books: status 500");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "b1");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch books: status 500"));
}

#[test]
fn successful_fetch_clears_previous_error() {
    let mut state = BooksState::default();
    let seq = state.begin_fetch();
    state.apply_fetch_failure(seq, "boom");
    let seq = state.begin_fetch();
    state.apply_fetch_success(seq, vec![book("b1", "Fresh")]);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn repeated_fetch_with_same_payload_is_idempotent() {
    let mut state = BooksState::default();
    let seq = state.begin_fetch();
    state.apply_fetch_success(seq, vec![book("b1", "Same"), book("b2", "Same")]);
    let first = state.items.clone();
    let seq = state.begin_fetch();
    state.apply_fetch_success(seq, vec![book("b1", "Same"), book("b2", "Same")]);
    assert_eq!(state.items, first);
}

// =============================================================
// Stale response discard
// =============================================================

#[test]
fn stale_success_is_discarded_entirely() {
    let mut state = BooksState::default();
    let old = state.begin_fetch();
    let latest = state.begin_fetch();
    state.apply_fetch_success(old, vec![book("b1", "Stale")]);
    assert!(state.items.is_empty());
    assert!(state.loading);
    state.apply_fetch_success(latest, vec![book("b2", "Fresh")]);
    assert_eq!(state.items[0].id, "b2");
    assert!(!state.loading);
}

#[test]
fn stale_failure_is_discarded_entirely() {
    let mut state = BooksState::default();
    let old = state.begin_fetch();
    let latest = state.begin_fetch();
    state.apply_fetch_failure(old, "stale failure");
    assert_eq!(state.error, None);
    assert!(state.loading);
    state.apply_fetch_success(latest, vec![]);
    assert_eq!(state.error, None);
}

#[test]
fn clear_invalidates_in_flight_fetch() {
    let mut state = BooksState::default();
    let seq = state.begin_fetch();
    state.clear();
    state.apply_fetch_success(seq, vec![book("b1", "Late")]);
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

// =============================================================
// Create lifecycle
// =============================================================

#[test]
fn begin_create_rejects_reentry_while_pending() {
    let mut state = BooksState::default();
    assert!(state.begin_create());
    assert!(!state.begin_create());
    state.finish_create();
    assert!(state.begin_create());
}

#[test]
fn fail_create_clears_pending_and_sets_error() {
    let mut state = BooksState::default();
    state.items = vec![book("b1", "Kept")];
    assert!(state.begin_create());
    state.fail_create("Failed to add book: status 500");
    assert!(!state.create_pending);
    assert_eq!(state.error.as_deref(), Some("Failed to add book: status 500"));
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_items_and_resets_flags() {
    let mut state = BooksState::default();
    state.items = vec![book("b1", "Gone")];
    state.loading = true;
    state.create_pending = true;
    state.error = Some("old".to_owned());
    state.clear();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert_eq!(state.error, None);
}

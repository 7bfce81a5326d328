//! Tests for the login/signup table columns.

use salesboard::client::{components::login_signup::columns, table::TableState};

use super::*;

/// Tests sorting by event type.
///
/// Verifies that logins sort before signups and that events of the same type keep their
/// original order.
///
/// Expected: odd ids (logins) first, each group in id order
#[test]
fn sorts_event_type_stably() {
    let events = RowsBuilder::login_signup_events().with_rows(6).build();
    let mut state = TableState::new();

    state.request_sort("event_type");
    let view = state.view(&events, &columns(), true);

    assert_eq!(ids(&view.rows), vec![1, 3, 5, 2, 4, 6]);
}

/// Tests disabling pagination.
///
/// Verifies that every row is visible and the footer is hidden without pagination.
///
/// Expected: all 23 rows, no pagination
#[test]
fn without_pagination_shows_everything() {
    let events = RowsBuilder::login_signup_events().with_rows(23).build();
    let state = TableState::new();

    let view = state.view(&events, &columns(), false);

    assert_eq!(view.rows.len(), 23);
    assert!(!view.show_pagination);
}

/// Tests a reload after navigating.
///
/// Verifies that reset returns to the first page and clears the selection while keeping
/// the active sort.
///
/// Expected: page 1, nothing selected, sort kept
#[test]
fn reset_after_reload_keeps_sort() {
    let events = RowsBuilder::login_signup_events().with_rows(30).build();
    let mut state = TableState::new();

    state.request_sort("ip_address");
    state.next_page(events.len());
    state.toggle_row(14);
    state.reset();

    assert_eq!(state.page(), 1);
    assert!(state.selected().is_empty());
    assert_eq!(state.sort().map(|sort| sort.key), Some("ip_address"));
}

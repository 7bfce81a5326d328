//! Tests for the store visits table columns.

use salesboard::{
    client::{components::store_visits::columns, table::TableState},
    model::store_visit::VisitPurpose,
};

use super::*;

/// Tests the notes column.
///
/// Verifies that free-text notes are shown but cannot be sorted by.
///
/// Expected: requesting a sort on notes keeps the original order
#[test]
fn notes_are_not_sortable() {
    let visits = RowsBuilder::store_visits()
        .with_row(|visit| visit.notes = Some("zebra".to_string()))
        .with_row(|visit| visit.notes = Some("apple".to_string()))
        .build();
    let mut state = TableState::new();

    state.request_sort("notes");
    let view = state.view(&visits, &columns(), true);

    assert_eq!(ids(&view.rows), vec![1, 2]);
}

/// Tests sorting by visit purpose.
///
/// Verifies that the purpose column sorts by its displayed label.
///
/// Expected: Complaint, Inquiry, Purchase
#[test]
fn sorts_purpose_by_label() {
    let visits = RowsBuilder::store_visits()
        .with_row(|visit| visit.visit_purpose = VisitPurpose::Purchase)
        .with_row(|visit| visit.visit_purpose = VisitPurpose::Complaint)
        .with_row(|visit| visit.visit_purpose = VisitPurpose::Inquiry)
        .build();
    let mut state = TableState::new();

    state.request_sort("visit_purpose");
    let view = state.view(&visits, &columns(), true);

    assert_eq!(ids(&view.rows), vec![2, 3, 1]);
}

/// Tests selection across a sort change.
///
/// Verifies that selected ids survive re-sorting even when their rows move to another page.
///
/// Expected: the same ids stay selected
#[test]
fn selection_survives_sort_change() {
    let visits = RowsBuilder::store_visits().with_rows(15).build();
    let columns = columns();
    let mut state = TableState::new();

    state.toggle_row(1);
    state.toggle_row(2);
    state.request_sort("store_name");
    state.request_sort("store_name");
    let view = state.view(&visits, &columns, true);

    assert!(!view.row_ids().contains(&1));
    assert_eq!(state.selected().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(view.selected_count, 2);
}

/// Tests an empty dataset.
///
/// Verifies that no rows are visible, pagination is hidden, and the header checkbox has
/// nothing to select.
///
/// Expected: empty view, Unchecked header
#[test]
fn empty_dataset() {
    let visits = RowsBuilder::store_visits().build();
    let state = TableState::new();

    let view = state.view(&visits, &columns(), true);

    assert!(view.is_empty());
    assert!(!view.show_pagination);
    assert_eq!(view.page_count, 0);
    assert_eq!(view.header, salesboard::client::table::HeaderCheckbox::Unchecked);
}

//! Tests for the website visits table columns.

use salesboard::client::{
    components::website_visits::columns,
    table::{ColumnKind, HeaderCheckbox, TableState, PAGE_SIZE},
};

use super::*;

/// Tests the declared columns.
///
/// Verifies that the table shows date, user, page, and duration followed by the actions
/// column, and that only the actions column is unsortable.
///
/// Expected: five columns, actions last
#[test]
fn declares_data_columns_then_actions() {
    let columns = columns();

    let keys: Vec<&str> = columns.iter().map(|column| column.key).collect();
    assert_eq!(
        keys,
        vec!["visit_date", "user_id", "page_url", "duration_seconds", "actions"]
    );

    let last = columns.last().unwrap();
    assert!(matches!(last.kind, ColumnKind::Actions));
    assert!(!last.is_sortable());
    assert!(columns[..4].iter().all(|column| column.is_sortable()));
}

/// Tests sorting by duration.
///
/// Verifies that the duration column sorts numerically rather than lexicographically, so
/// 100 seconds comes after 20 seconds.
///
/// Expected: ascending by duration
#[test]
fn sorts_duration_numerically() {
    let visits = RowsBuilder::website_visits()
        .with_row(|visit| visit.duration_seconds = 100)
        .with_row(|visit| visit.duration_seconds = 20)
        .with_row(|visit| visit.duration_seconds = 3)
        .build();
    let mut state = TableState::new();

    state.request_sort("duration_seconds");
    let view = state.view(&visits, &columns(), true);

    assert_eq!(ids(&view.rows), vec![3, 2, 1]);
}

/// Tests sorting by date descending across pages.
///
/// Verifies that the whole dataset is sorted before the page is sliced, so the first page
/// holds the newest visits of all 25.
///
/// Expected: ids 25..=16 on page one
#[test]
fn sorts_whole_dataset_before_paging() {
    let visits = RowsBuilder::website_visits().with_rows(25).build();
    let mut state = TableState::new();

    state.request_sort("visit_date");
    state.request_sort("visit_date");
    let view = state.view(&visits, &columns(), true);

    assert_eq!(view.rows.len(), PAGE_SIZE);
    assert_eq!(ids(&view.rows), (16..=25).rev().collect::<Vec<_>>());
    assert_eq!(view.page_count, 3);
}

/// Tests the last page of a dataset.
///
/// Verifies that the footer range and navigation flags describe a partial last page.
///
/// Expected: "21 to 25 of 25", no next page
#[test]
fn last_page_footer() {
    let visits = RowsBuilder::website_visits().with_rows(25).build();
    let mut state = TableState::new();

    state.go_to_page(3, visits.len());
    let view = state.view(&visits, &columns(), true);

    assert_eq!(view.first_entry(), 21);
    assert_eq!(view.last_entry(), 25);
    assert_eq!(view.total, 25);
    assert!(view.has_previous);
    assert!(!view.has_next);
    assert!(view.show_pagination);
}

/// Tests selecting a page and deselecting one row.
///
/// Verifies the tri-state header checkbox across select-all, a single deselect, and a
/// reselect.
///
/// Expected: Checked, Indeterminate, Checked
#[test]
fn header_checkbox_follows_page_selection() {
    let visits = RowsBuilder::website_visits().with_rows(12).build();
    let columns = columns();
    let mut state = TableState::new();

    let visible = state.view(&visits, &columns, true).row_ids();
    state.toggle_all(&visible);
    assert_eq!(state.view(&visits, &columns, true).header, HeaderCheckbox::Checked);

    state.toggle_row(visible[3]);
    assert_eq!(
        state.view(&visits, &columns, true).header,
        HeaderCheckbox::Indeterminate
    );

    state.toggle_row(visible[3]);
    assert_eq!(state.view(&visits, &columns, true).header, HeaderCheckbox::Checked);
    assert_eq!(state.selected().len(), PAGE_SIZE);
}

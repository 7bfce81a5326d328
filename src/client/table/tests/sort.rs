//! Tests for sorting.

use proptest::prelude::*;

use super::{columns, ids, row, rows, Row};
use crate::client::table::{CellValue, SortDirection, SortState, TableState};

/// Tests that an unsorted table keeps the dataset order.
///
/// Expected: rows in insertion order
#[test]
fn unsorted_keeps_original_order() {
    let data = vec![row(3, "c", 1), row(1, "a", 3), row(2, "b", 2)];
    let state = TableState::new();

    assert_eq!(ids(&state.sorted(&data, &columns())), vec![3, 1, 2]);
}

/// Tests the direction cycle of repeated header clicks.
///
/// Verifies unsorted -> ascending -> descending -> ascending on the same column, and that
/// switching to another column starts ascending again.
#[test]
fn request_sort_cycles_direction() {
    let mut state = TableState::new();
    assert_eq!(state.sort(), None);

    state.request_sort("name");
    assert_eq!(
        state.sort(),
        Some(SortState {
            key: "name",
            direction: SortDirection::Ascending
        })
    );

    state.request_sort("name");
    assert_eq!(state.sort().unwrap().direction, SortDirection::Descending);

    state.request_sort("name");
    assert_eq!(state.sort().unwrap().direction, SortDirection::Ascending);

    state.request_sort("name");
    state.request_sort("score");
    assert_eq!(
        state.sort(),
        Some(SortState {
            key: "score",
            direction: SortDirection::Ascending
        })
    );
}

/// Tests numeric and lexicographic comparison.
#[test]
fn sorts_by_value_type() {
    let data = vec![row(1, "b", 10), row(2, "a", 9), row(3, "c", 100)];
    let mut state = TableState::new();

    state.request_sort("score");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![2, 1, 3]);

    state.request_sort("name");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![2, 1, 3]);

    state.request_sort("name");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![3, 1, 2]);
}

/// Tests that sorting covers the whole dataset rather than the visible page.
///
/// Expected: the last row of the dataset shows first on page 1 when sorted by score
#[test]
fn sorts_entire_dataset_before_paging() {
    let data = rows(25);
    let mut state = TableState::new();

    // Scores count down, so ascending by score reverses the dataset
    state.request_sort("score");
    let view = state.view(&data, &columns(), true);

    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows[0].id, 25);
    assert_eq!(view.rows[9].id, 16);
}

/// Tests that equal keys keep their original order in both directions.
#[test]
fn equal_keys_are_stable() {
    let data = vec![row(1, "x", 5), row(2, "x", 5), row(3, "a", 1), row(4, "x", 5)];
    let mut state = TableState::new();

    state.request_sort("score");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![3, 1, 2, 4]);

    state.request_sort("score");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![1, 2, 4, 3]);
}

/// Tests that unsortable and actions columns leave the order untouched.
#[test]
fn ignores_unsortable_columns() {
    let data = vec![row(2, "b", 1), row(1, "a", 2)];
    let mut state = TableState::new();

    state.request_sort("id");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![2, 1]);

    state.request_sort("actions");
    assert_eq!(ids(&state.sorted(&data, &columns())), vec![2, 1]);
}

/// Tests ordering between different value kinds.
///
/// Expected: empty cells sort before anything else
#[test]
fn mixed_values_order_by_kind() {
    let mut values = vec![
        CellValue::from("text"),
        CellValue::Empty,
        CellValue::from(3_i64),
    ];
    values.sort();

    assert_eq!(
        values,
        vec![CellValue::Empty, CellValue::from(3_i64), CellValue::from("text")]
    );
}

fn unique_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::btree_set(-1000_i64..1000, 0..40).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| row(index as i64, &format!("{}", score), score))
            .collect()
    })
}

proptest! {
    /// Ascending, descending, then ascending again yields the first ascending order when the
    /// sort key has no duplicates.
    #[test]
    fn toggling_twice_restores_ascending_order(data in unique_rows(), seed in any::<u64>()) {
        let mut data = data;

        // Shuffle deterministically so the input is not already sorted
        let len = data.len().max(1);
        data.rotate_left((seed as usize) % len);

        let columns = columns();
        let mut state = TableState::new();

        state.request_sort("score");
        let ascending = ids(&state.sorted(&data, &columns));

        state.request_sort("score");
        let descending = ids(&state.sorted(&data, &columns));

        state.request_sort("score");
        let again = ids(&state.sorted(&data, &columns));

        let mut reversed = descending.clone();
        reversed.reverse();

        prop_assert_eq!(&ascending, &again);
        prop_assert_eq!(&ascending, &reversed);
    }
}

//! Tests for the table engine driven by the record tables' real column sets.
//!
//! These exercise sorting, paging, and selection over the transport records exactly as the
//! dashboard pages configure them.

mod login_signup;
mod store_visits;
mod website_visits;

use salesboard::client::table::{RowId, TableRow};
use salesboard_test_utils::prelude::*;

fn ids<R: TableRow>(rows: &[&R]) -> Vec<RowId> {
    rows.iter().map(|row| row.row_id()).collect()
}

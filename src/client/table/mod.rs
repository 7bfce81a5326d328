//! Generic client-side table engine.
//!
//! The engine owns sorting, pagination, and row selection over an arbitrary set of rows and an
//! ordered list of columns. It holds no rows itself: [`TableState`] is applied to the
//! caller's current dataset on every render through [`TableState::view`], which sorts the whole
//! dataset first and then slices out the current page.
//!
//! State is owned by the page that owns the data so that a reload can explicitly reset page and
//! selection through [`TableState::reset`]; nothing resets implicitly when the rows change.

pub mod column;
pub mod state;

#[cfg(test)]
mod tests;

pub use column::{CellValue, ColumnKind, TableColumn};
pub use state::{HeaderCheckbox, SortDirection, SortState, TableState, TableView, PAGE_SIZE};

/// Identifier of a row, unique within one dataset snapshot.
pub type RowId = i64;

/// A record that can be displayed by the table engine.
pub trait TableRow: Clone + PartialEq + 'static {
    /// Unique id used to track selection across sorting and paging.
    fn row_id(&self) -> RowId;
}

use std::collections::BTreeSet;

use crate::client::table::{CellValue, RowId, TableColumn, TableRow};

/// Number of rows on one page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The single active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// State of the select-all checkbox in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Sort, page, and selection state of one table.
///
/// Selection is tracked by row id and is independent of sorting and paging: an id stays
/// selected when its row moves to another page until the owner clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    sort: Option<SortState>,
    page: usize,
    selected: BTreeSet<RowId>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: None,
            page: 1,
            selected: BTreeSet::new(),
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn selected(&self) -> &BTreeSet<RowId> {
        &self.selected
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns to the first page and clears the selection; the sort is kept.
    ///
    /// Call after reloading the dataset. Like the other selection changes, this returns the
    /// updated (empty) selection so that the caller can report it.
    pub fn reset(&mut self) -> &BTreeSet<RowId> {
        self.page = 1;
        self.selected.clear();
        &self.selected
    }

    /// Sorts by `key`, or flips the direction when `key` is already the sort column.
    pub fn request_sort(&mut self, key: &'static str) {
        self.sort = Some(match self.sort {
            Some(sort) if sort.key == key => SortState {
                key,
                direction: sort.direction.toggled(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// The whole dataset in sort order.
    ///
    /// Rows with equal keys keep their original relative order in both directions. Without an
    /// active sort, or when the sort key names no sortable data column, the original order is
    /// returned.
    pub fn sorted<'a, R>(&self, rows: &'a [R], columns: &[TableColumn<R>]) -> Vec<&'a R> {
        let column = self.sort.and_then(|sort| {
            columns
                .iter()
                .find(|column| column.key == sort.key && column.is_sortable())
                .map(|column| (column, sort.direction))
        });

        let Some((column, direction)) = column else {
            return rows.iter().collect();
        };

        let mut keyed: Vec<(CellValue, &R)> = rows
            .iter()
            .map(|row| (column.value(row).unwrap_or(CellValue::Empty), row))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        });

        keyed.into_iter().map(|(_, row)| row).collect()
    }

    /// `ceil(total / PAGE_SIZE)`; zero for an empty dataset.
    pub fn page_count(total: usize) -> usize {
        total.div_ceil(PAGE_SIZE)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < Self::page_count(total)
    }

    /// Moves to `page`, clamped into `[1, page_count]`.
    pub fn go_to_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, Self::page_count(total).max(1));
    }

    /// No-op on the last page.
    pub fn next_page(&mut self, total: usize) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    /// No-op on the first page.
    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    /// Tri-state of the header checkbox for the rows currently visible.
    pub fn header_checkbox(&self, visible: &[RowId]) -> HeaderCheckbox {
        let selected = visible
            .iter()
            .filter(|id| self.selected.contains(id))
            .count();

        if selected == 0 {
            HeaderCheckbox::Unchecked
        } else if selected == visible.len() {
            HeaderCheckbox::Checked
        } else {
            HeaderCheckbox::Indeterminate
        }
    }

    /// Adds or removes one id and returns the full updated selection.
    pub fn toggle_row(&mut self, id: RowId) -> &BTreeSet<RowId> {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        &self.selected
    }

    /// Selects every visible row, or deselects them all when they are already all selected.
    ///
    /// Ids outside `visible` are left untouched. Returns the full updated selection.
    pub fn toggle_all(&mut self, visible: &[RowId]) -> &BTreeSet<RowId> {
        if self.header_checkbox(visible) == HeaderCheckbox::Checked {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().copied());
        }
        &self.selected
    }

    /// Clears the selection and returns the (empty) selection.
    pub fn clear_selection(&mut self) -> &BTreeSet<RowId> {
        self.selected.clear();
        &self.selected
    }

    /// Sorts the whole dataset, slices the current page, and computes the header and footer
    /// state for rendering.
    pub fn view<'a, R: TableRow>(
        &self,
        rows: &'a [R],
        columns: &[TableColumn<R>],
        paginate: bool,
    ) -> TableView<'a, R> {
        let sorted = self.sorted(rows, columns);
        let total = sorted.len();

        let visible: Vec<&R> = if paginate {
            sorted
                .into_iter()
                .skip((self.page - 1) * PAGE_SIZE)
                .take(PAGE_SIZE)
                .collect()
        } else {
            sorted
        };

        let visible_ids: Vec<RowId> = visible.iter().map(|row| row.row_id()).collect();

        TableView {
            header: self.header_checkbox(&visible_ids),
            selected_count: self.selected.len(),
            rows: visible,
            total,
            page: self.page,
            page_count: Self::page_count(total),
            has_previous: self.has_previous(),
            has_next: self.has_next(total),
            show_pagination: paginate && Self::page_count(total) > 1,
        }
    }
}

/// Everything needed to render one frame of a table.
#[derive(Debug)]
pub struct TableView<'a, R> {
    /// Rows on the current page, in sort order.
    pub rows: Vec<&'a R>,
    pub header: HeaderCheckbox,
    pub selected_count: usize,
    /// Size of the whole dataset.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub show_pagination: bool,
}

impl<R: TableRow> TableView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.row_id()).collect()
    }

    /// 1-based position of the first row on the page within the dataset.
    pub fn first_entry(&self) -> usize {
        ((self.page - 1) * PAGE_SIZE + 1).min(self.total)
    }

    /// 1-based position of the last row on the page within the dataset.
    pub fn last_entry(&self) -> usize {
        (self.page * PAGE_SIZE).min(self.total)
    }
}

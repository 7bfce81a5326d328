use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;

/// A cell's value as read by a column accessor.
///
/// Values of the same kind compare naturally (numerically, lexicographically, or
/// chronologically). Values of different kinds order by kind so that a column with mixed or
/// missing values still sorts deterministically, with empty cells first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Empty,
    Integer(i64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Integer(_) => 1,
            Self::Text(_) => 2,
            Self::DateTime(_) => 3,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Text(value) => f.write_str(value),
            Self::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// What a column renders.
pub enum ColumnKind<R> {
    /// Displays and sorts by the value read from the row.
    Data(fn(&R) -> CellValue),
    /// Per-row edit and delete controls; never sortable.
    Actions,
}

impl<R> Clone for ColumnKind<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnKind<R> {}

/// One column of a table.
pub struct TableColumn<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub kind: ColumnKind<R>,
    pub sortable: bool,
}

impl<R> TableColumn<R> {
    /// A sortable data column.
    pub fn data(key: &'static str, header: &'static str, accessor: fn(&R) -> CellValue) -> Self {
        Self {
            key,
            header,
            kind: ColumnKind::Data(accessor),
            sortable: true,
        }
    }

    /// The per-row actions column.
    pub fn actions() -> Self {
        Self {
            key: "actions",
            header: "Actions",
            kind: ColumnKind::Actions,
            sortable: false,
        }
    }

    /// Disables sorting on this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Whether clicking the header changes the sort.
    pub fn is_sortable(&self) -> bool {
        self.sortable && matches!(self.kind, ColumnKind::Data(_))
    }

    /// Reads this column's value from a row, `None` for the actions column.
    pub fn value(&self, row: &R) -> Option<CellValue> {
        match self.kind {
            ColumnKind::Data(accessor) => Some(accessor(row)),
            ColumnKind::Actions => None,
        }
    }
}

impl<R> Clone for TableColumn<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            kind: self.kind,
            sortable: self.sortable,
        }
    }
}

// Accessors are plain function pointers and are not compared; keys identify columns.
impl<R> PartialEq for TableColumn<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.sortable == other.sortable
            && matches!(
                (&self.kind, &other.kind),
                (ColumnKind::Data(_), ColumnKind::Data(_)) | (ColumnKind::Actions, ColumnKind::Actions)
            )
    }
}

impl<R> fmt::Debug for TableColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish()
    }
}

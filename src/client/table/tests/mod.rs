//! Tests for the table engine.

mod sort;

use crate::client::table::{CellValue, RowId, TableColumn, TableRow};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: RowId,
    name: String,
    score: i64,
}

impl TableRow for Row {
    fn row_id(&self) -> RowId {
        self.id
    }
}

fn row(id: RowId, name: &str, score: i64) -> Row {
    Row {
        id,
        name: name.to_string(),
        score,
    }
}

/// Rows with ids `1..=count`, names `row-01..` and scores counting down.
fn rows(count: usize) -> Vec<Row> {
    (1..=count as i64)
        .map(|id| row(id, &format!("row-{:02}", id), 1000 - id))
        .collect()
}

fn columns() -> Vec<TableColumn<Row>> {
    vec![
        TableColumn::data("name", "Name", |row: &Row| CellValue::from(row.name.as_str())),
        TableColumn::data("score", "Score", |row: &Row| CellValue::from(row.score)),
        TableColumn::data("id", "Id", |row: &Row| CellValue::from(row.id)).unsortable(),
        TableColumn::actions(),
    ]
}

fn ids(rows: &[&Row]) -> Vec<RowId> {
    rows.iter().map(|row| row.id).collect()
}

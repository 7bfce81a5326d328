use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::{BulkAction, DataTable},
        table::{RowId, TableColumn, TableState},
    },
    model::{store_visit::StoreVisitDto, Choice},
};

pub fn columns() -> Vec<TableColumn<StoreVisitDto>> {
    vec![
        TableColumn::data("visit_date", "Date", |visit| visit.visit_date.into()),
        TableColumn::data("user_id", "User ID", |visit| visit.user_id.as_str().into()),
        TableColumn::data("store_name", "Store", |visit| visit.store_name.as_str().into()),
        TableColumn::data("location", "Location", |visit| visit.location.as_str().into()),
        TableColumn::data("visit_purpose", "Purpose", |visit| {
            visit.visit_purpose.label().into()
        }),
        TableColumn::data("notes", "Notes", |visit: &StoreVisitDto| {
            visit.notes.as_deref().into()
        })
        .unsortable(),
        TableColumn::actions(),
    ]
}

#[component]
pub fn StoreVisitsTable(
    visits: Vec<StoreVisitDto>,
    state: Signal<TableState>,
    on_edit: EventHandler<StoreVisitDto>,
    on_delete: EventHandler<StoreVisitDto>,
    on_delete_selected: EventHandler<Vec<RowId>>,
    on_selection_change: Option<EventHandler<BTreeSet<RowId>>>,
) -> Element {
    rsx!(
        DataTable::<StoreVisitDto> {
            rows: visits,
            columns: columns(),
            state: state,
            on_edit: on_edit,
            on_delete: on_delete,
            on_selection_change: on_selection_change,
            bulk_actions: vec![BulkAction {
                label: "Delete Selected",
                on_apply: on_delete_selected,
            }],
        }
    )
}

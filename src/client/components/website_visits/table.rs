use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::{BulkAction, DataTable},
        table::{CellValue, RowId, TableColumn, TableState},
    },
    model::website_visit::WebsiteVisitDto,
};

pub fn columns() -> Vec<TableColumn<WebsiteVisitDto>> {
    vec![
        TableColumn::data("visit_date", "Date", |visit| visit.visit_date.into()),
        TableColumn::data("user_id", "User ID", |visit| visit.user_id.as_str().into()),
        TableColumn::data("page_url", "Page Visited", |visit| {
            visit.page_url.as_str().into()
        }),
        TableColumn::data("duration_seconds", "Duration (sec)", |visit| {
            CellValue::from(visit.duration_seconds)
        }),
        TableColumn::actions(),
    ]
}

#[component]
pub fn WebsiteVisitsTable(
    visits: Vec<WebsiteVisitDto>,
    state: Signal<TableState>,
    on_edit: EventHandler<WebsiteVisitDto>,
    on_delete: EventHandler<WebsiteVisitDto>,
    on_delete_selected: EventHandler<Vec<RowId>>,
    on_selection_change: Option<EventHandler<BTreeSet<RowId>>>,
) -> Element {
    rsx!(
        DataTable::<WebsiteVisitDto> {
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

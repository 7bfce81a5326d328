use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::{BulkAction, DataTable},
        table::{RowId, TableColumn, TableState},
    },
    model::{login_signup::LoginSignupEventDto, Choice},
};

pub fn columns() -> Vec<TableColumn<LoginSignupEventDto>> {
    vec![
        TableColumn::data("event_date", "Date", |event| event.event_date.into()),
        TableColumn::data("user_id", "User ID", |event| event.user_id.as_str().into()),
        TableColumn::data("event_type", "Event Type", |event| {
            event.event_type.label().into()
        }),
        TableColumn::data("ip_address", "IP Address", |event| {
            event.ip_address.as_str().into()
        }),
        TableColumn::data("user_agent", "User Agent", |event| {
            event.user_agent.as_str().into()
        }),
        TableColumn::data("status", "Status", |event| event.status.label().into()),
        TableColumn::actions(),
    ]
}

#[component]
pub fn LoginSignupTable(
    events: Vec<LoginSignupEventDto>,
    state: Signal<TableState>,
    on_edit: EventHandler<LoginSignupEventDto>,
    on_delete: EventHandler<LoginSignupEventDto>,
    on_delete_selected: EventHandler<Vec<RowId>>,
    on_selection_change: Option<EventHandler<BTreeSet<RowId>>>,
) -> Element {
    rsx!(
        DataTable::<LoginSignupEventDto> {
            rows: events,
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

use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaSort, FaSortDown, FaSortUp, FaTrash};
use dioxus_free_icons::Icon;

use crate::client::table::{
    ColumnKind, HeaderCheckbox, RowId, SortDirection, TableColumn, TableRow, TableState,
};

/// An operation applied to every selected row
#[derive(Clone, PartialEq)]
pub struct BulkAction {
    pub label: &'static str,
    pub on_apply: EventHandler<Vec<RowId>>,
}

/// Sortable, paginated, multi-selectable table over `rows`
///
/// `state` is owned by the caller so that it can reset page and selection after a reload.
/// Every selection change made through the table's checkboxes is reported synchronously through
/// `on_selection_change` with the full updated set. Changes the owner makes to `state` itself,
/// such as [`TableState::reset`] after a reload, are not reported; the owner gets the new set
/// from the call that made the change.
#[component]
pub fn DataTable<R: TableRow>(
    rows: Vec<R>,
    columns: Vec<TableColumn<R>>,
    state: Signal<TableState>,
    #[props(default = true)] pagination: bool,
    on_selection_change: Option<EventHandler<BTreeSet<RowId>>>,
    on_edit: Option<EventHandler<R>>,
    on_delete: Option<EventHandler<R>>,
    #[props(default)] bulk_actions: Vec<BulkAction>,
) -> Element {
    let mut state = state;
    let table = state();
    let view = table.view(&rows, &columns, pagination);

    let visible_ids = view.row_ids();
    let total = view.total;
    let header = view.header;
    let selected_count = view.selected_count;
    let column_span = columns.len() + 1;
    let nothing_visible = visible_ids.is_empty();
    let first_entry = view.first_entry();
    let last_entry = view.last_entry();

    let notify = move |selected: BTreeSet<RowId>| {
        if let Some(handler) = on_selection_change {
            handler.call(selected);
        }
    };

    let header_cells = columns.iter().map(|column| {
        let key = column.key;
        let label = column.header;

        if !column.is_sortable() {
            return rsx!(th { key: "{key}", "{label}" });
        }

        let sort_icon = match table.sort() {
            Some(sort) if sort.key == key && sort.direction == SortDirection::Ascending => {
                rsx!(Icon { width: 12, height: 12, icon: FaSortUp })
            }
            Some(sort) if sort.key == key => {
                rsx!(Icon { width: 12, height: 12, icon: FaSortDown })
            }
            _ => rsx!(Icon { width: 12, height: 12, icon: FaSort }),
        };

        rsx!(
            th {
                key: "{key}",
                class: "cursor-pointer select-none",
                onclick: move |_| state.write().request_sort(key),
                div { class: "flex items-center gap-2",
                    "{label}"
                    {sort_icon}
                }
            }
        )
    });

    let body_rows = view.rows.iter().map(|row| {
        let row: &R = row;
        let id = row.row_id();
        let selected = table.is_selected(id);

        let cells = columns.iter().map(|column| match column.kind {
            ColumnKind::Data(accessor) => {
                let value = accessor(row);
                rsx!(td { key: "{column.key}", "{value}" })
            }
            ColumnKind::Actions => {
                let edit_row = row.clone();
                let delete_row = row.clone();

                rsx!(
                    td { key: "{column.key}",
                        div { class: "flex gap-1",
                            if let Some(on_edit) = on_edit {
                                button {
                                    class: "btn btn-ghost btn-xs",
                                    aria_label: "Edit",
                                    onclick: move |_| on_edit.call(edit_row.clone()),
                                    Icon { width: 14, height: 14, icon: FaPen }
                                }
                            }
                            if let Some(on_delete) = on_delete {
                                button {
                                    class: "btn btn-ghost btn-xs text-error",
                                    aria_label: "Delete",
                                    onclick: move |_| on_delete.call(delete_row.clone()),
                                    Icon { width: 14, height: 14, icon: FaTrash }
                                }
                            }
                        }
                    }
                )
            }
        });

        rsx!(
            tr { key: "{id}", class: if selected { "bg-base-200" },
                td {
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        aria_label: "Select row",
                        checked: selected,
                        onchange: move |_| {
                            let selected = state.write().toggle_row(id).clone();
                            notify(selected);
                        },
                    }
                }
                {cells}
            }
        )
    });

    let bulk_buttons = bulk_actions.iter().map(|action| {
        let label = action.label;
        let on_apply = action.on_apply;

        rsx!(
            button {
                key: "{label}",
                class: "btn btn-sm btn-error",
                onclick: move |_| {
                    let ids: Vec<RowId> = state.read().selected().iter().copied().collect();
                    on_apply.call(ids);
                },
                "{label}"
            }
        )
    });

    let pages = 1..=view.page_count;
    let current_page = view.page;

    rsx!(
        div { class: "rounded-box border border-base-300",
            if selected_count > 0 && !bulk_actions.is_empty() {
                div { class: "flex items-center justify-between p-4 bg-base-200",
                    span { class: "text-sm", "{selected_count} of {total} row(s) selected" }
                    div { class: "flex gap-2", {bulk_buttons} }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { class: "w-12",
                                input {
                                    r#type: "checkbox",
                                    class: if header == HeaderCheckbox::Indeterminate {
                                        "checkbox checkbox-sm checkbox-indeterminate"
                                    } else {
                                        "checkbox checkbox-sm"
                                    },
                                    aria_label: "Select all rows on this page",
                                    aria_checked: match header {
                                        HeaderCheckbox::Checked => "true",
                                        HeaderCheckbox::Indeterminate => "mixed",
                                        HeaderCheckbox::Unchecked => "false",
                                    },
                                    checked: header == HeaderCheckbox::Checked,
                                    disabled: nothing_visible,
                                    onchange: move |_| {
                                        let selected = state.write().toggle_all(&visible_ids).clone();
                                        notify(selected);
                                    },
                                }
                            }
                            {header_cells}
                        }
                    }
                    tbody {
                        if view.is_empty() {
                            tr {
                                td { colspan: "{column_span}", class: "h-24 text-center",
                                    "No results found"
                                }
                            }
                        } else {
                            {body_rows}
                        }
                    }
                }
            }
            if view.show_pagination {
                div { class: "flex items-center justify-between px-4 py-3 border-t border-base-300",
                    p { class: "text-sm",
                        "Showing {first_entry} to {last_entry} of {total} entries"
                    }
                    div { class: "join",
                        button {
                            class: "join-item btn btn-sm",
                            disabled: !view.has_previous,
                            onclick: move |_| state.write().previous_page(),
                            "Previous"
                        }
                        for page in pages {
                            button {
                                key: "{page}",
                                class: if page == current_page { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                                onclick: move |_| state.write().go_to_page(page, total),
                                "{page}"
                            }
                        }
                        button {
                            class: "join-item btn btn-sm",
                            disabled: !view.has_next,
                            onclick: move |_| state.write().next_page(total),
                            "Next"
                        }
                    }
                }
            }
        }
    )
}

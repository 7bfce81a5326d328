use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{
            store_visits::{StoreVisitForm, StoreVisitsTable},
            ui::{ErrorBanner, LoadingSpinner, Modal},
            Page,
        },
        table::{RowId, TableRow},
        util::{use_records, EditTarget},
    },
    model::store_visit::{NewStoreVisitDto, StoreVisitDto},
};

#[component]
pub fn StoreVisits() -> Element {
    let records = use_records::<StoreVisitDto>();
    let mut collection = records.collection;
    let mut editor = use_signal(|| Option::<EditTarget<StoreVisitDto>>::None);

    let visits = collection.read().records().to_vec();
    let initial_load = collection.read().is_initial_load();
    let errors = collection.read().errors();
    let target = editor();
    let modal_title = match target {
        Some(EditTarget::Existing(_)) => "Edit Store Visit",
        _ => "Add Store Visit",
    };

    rsx!(
        Title { "Store Visits | Sales Dashboard" }
        Meta {
            name: "description",
            content: "In-store visits recorded for the sales lifecycle."
        }
        Page {
            title: "Store Visits",
            description: "Customer visits to physical stores",
            actions: rsx!(
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| editor.set(Some(EditTarget::New)),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add Store Visit"
                }
            ),
            ErrorBanner {
                errors: errors,
                on_dismiss: move |_| collection.write().dismiss_errors(),
            }
            if initial_load {
                LoadingSpinner {}
            } else {
                StoreVisitsTable {
                    visits: visits,
                    state: records.table,
                    on_edit: move |visit: StoreVisitDto| editor.set(Some(EditTarget::Existing(visit))),
                    on_delete: move |visit: StoreVisitDto| records.delete_many(vec![visit.row_id()]),
                    on_delete_selected: move |ids: Vec<RowId>| records.delete_many(ids),
                }
            }
        }
        Modal {
            open: target.is_some(),
            title: modal_title,
            on_close: move |_| editor.set(None),
            if let Some(target) = target.clone() {
                StoreVisitForm {
                    initial: target.record(),
                    on_submit: move |payload: NewStoreVisitDto| {
                        records.save(target.id(), payload, move || editor.set(None));
                    },
                    on_cancel: move |_| editor.set(None),
                }
            }
        }
    )
}

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{
            ui::{ErrorBanner, LoadingSpinner, Modal},
            website_visits::{WebsiteVisitForm, WebsiteVisitsTable},
            Page,
        },
        table::{RowId, TableRow},
        util::{use_records, EditTarget},
    },
    model::website_visit::{NewWebsiteVisitDto, WebsiteVisitDto},
};

#[component]
pub fn WebsiteVisits() -> Element {
    let records = use_records::<WebsiteVisitDto>();
    let mut collection = records.collection;
    let mut editor = use_signal(|| Option::<EditTarget<WebsiteVisitDto>>::None);

    let visits = collection.read().records().to_vec();
    let initial_load = collection.read().is_initial_load();
    let errors = collection.read().errors();
    let target = editor();
    let modal_title = match target {
        Some(EditTarget::Existing(_)) => "Edit Website Visit",
        _ => "Add Website Visit",
    };

    rsx!(
        Title { "Website Visits | Sales Dashboard" }
        Meta {
            name: "description",
            content: "Website visits recorded for the sales lifecycle."
        }
        Page {
            title: "Website Visits",
            description: "Every recorded visit to the website",
            actions: rsx!(
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: move |_| editor.set(Some(EditTarget::New)),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add Website Visit"
                }
            ),
            ErrorBanner {
                errors: errors,
                on_dismiss: move |_| collection.write().dismiss_errors(),
            }
            if initial_load {
                LoadingSpinner {}
            } else {
                WebsiteVisitsTable {
                    visits: visits,
                    state: records.table,
                    on_edit: move |visit: WebsiteVisitDto| editor.set(Some(EditTarget::Existing(visit))),
                    on_delete: move |visit: WebsiteVisitDto| records.delete_many(vec![visit.row_id()]),
                    on_delete_selected: move |ids: Vec<RowId>| records.delete_many(ids),
                }
            }
        }
        Modal {
            open: target.is_some(),
            title: modal_title,
            on_close: move |_| editor.set(None),
            if let Some(target) = target.clone() {
                WebsiteVisitForm {
                    initial: target.record(),
                    on_submit: move |payload: NewWebsiteVisitDto| {
                        records.save(target.id(), payload, move || editor.set(None));
                    },
                    on_cancel: move |_| editor.set(None),
                }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::{choice_options, SelectField, TextAreaField, TextField},
        form::{FormState, StoreVisitDraft, StoreVisitField},
    },
    model::store_visit::{NewStoreVisitDto, StoreVisitDto, VisitPurpose},
};

/// Create or edit a store visit
#[component]
pub fn StoreVisitForm(
    initial: Option<StoreVisitDto>,
    on_submit: EventHandler<NewStoreVisitDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let mut form = use_signal(|| {
        FormState::new(
            initial
                .as_ref()
                .map(StoreVisitDraft::from_record)
                .unwrap_or_default(),
        )
    });

    let state = form();
    let draft = state.draft().clone();

    rsx!(
        form {
            class: "flex flex-col gap-2",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();

                let payload = form.write().submit();
                if let Some(payload) = payload {
                    on_submit.call(payload);
                }
            },
            TextField {
                label: "User ID / Contact",
                name: StoreVisitField::UserId.name(),
                value: draft.user_id,
                error: state.error(StoreVisitField::UserId),
                on_input: move |value: String| form.write().update(StoreVisitField::UserId, value),
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                TextField {
                    label: "Store Name",
                    name: StoreVisitField::StoreName.name(),
                    value: draft.store_name,
                    error: state.error(StoreVisitField::StoreName),
                    on_input: move |value: String| form.write().update(StoreVisitField::StoreName, value),
                }
                TextField {
                    label: "Location",
                    name: StoreVisitField::Location.name(),
                    value: draft.location,
                    error: state.error(StoreVisitField::Location),
                    on_input: move |value: String| form.write().update(StoreVisitField::Location, value),
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                TextField {
                    label: "Visit Date",
                    name: StoreVisitField::VisitDate.name(),
                    input_type: "datetime-local",
                    value: draft.visit_date,
                    error: state.error(StoreVisitField::VisitDate),
                    on_input: move |value: String| form.write().update(StoreVisitField::VisitDate, value),
                }
                SelectField {
                    label: "Visit Purpose",
                    name: StoreVisitField::VisitPurpose.name(),
                    value: draft.visit_purpose,
                    options: choice_options::<VisitPurpose>(),
                    placeholder: "Select a purpose",
                    error: state.error(StoreVisitField::VisitPurpose),
                    on_change: move |value: String| {
                        form.write().update(StoreVisitField::VisitPurpose, value)
                    },
                }
            }
            TextAreaField {
                label: "Notes",
                name: StoreVisitField::Notes.name(),
                value: draft.notes,
                error: state.error(StoreVisitField::Notes),
                on_input: move |value: String| form.write().update(StoreVisitField::Notes, value),
            }
            div { class: "modal-action",
                button { r#type: "button", class: "btn", onclick: move |_| on_cancel.call(()), "Cancel" }
                button { r#type: "submit", class: "btn btn-primary",
                    if editing { "Update" } else { "Create" }
                }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::TextField,
        form::{FormState, WebsiteVisitDraft, WebsiteVisitField},
    },
    model::website_visit::{NewWebsiteVisitDto, WebsiteVisitDto},
};

/// Create or edit a website visit
///
/// Validates on submit and hands the payload to `on_submit`; sending it and closing the
/// surrounding modal is up to the caller.
#[component]
pub fn WebsiteVisitForm(
    initial: Option<WebsiteVisitDto>,
    on_submit: EventHandler<NewWebsiteVisitDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let mut form = use_signal(|| {
        FormState::new(
            initial
                .as_ref()
                .map(WebsiteVisitDraft::from_record)
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
                label: "User ID",
                name: WebsiteVisitField::UserId.name(),
                value: draft.user_id,
                error: state.error(WebsiteVisitField::UserId),
                on_input: move |value: String| form.write().update(WebsiteVisitField::UserId, value),
            }
            TextField {
                label: "Page URL",
                name: WebsiteVisitField::PageUrl.name(),
                input_type: "url",
                placeholder: "https://example.com/pricing",
                value: draft.page_url,
                error: state.error(WebsiteVisitField::PageUrl),
                on_input: move |value: String| form.write().update(WebsiteVisitField::PageUrl, value),
            }
            TextField {
                label: "Visit Date",
                name: WebsiteVisitField::VisitDate.name(),
                input_type: "datetime-local",
                value: draft.visit_date,
                error: state.error(WebsiteVisitField::VisitDate),
                on_input: move |value: String| form.write().update(WebsiteVisitField::VisitDate, value),
            }
            TextField {
                label: "Duration (seconds)",
                name: WebsiteVisitField::DurationSeconds.name(),
                input_type: "number",
                value: draft.duration_seconds,
                error: state.error(WebsiteVisitField::DurationSeconds),
                on_input: move |value: String| {
                    form.write().update(WebsiteVisitField::DurationSeconds, value)
                },
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

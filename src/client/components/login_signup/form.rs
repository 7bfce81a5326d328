use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::{choice_options, SelectField, TextField},
        form::{FormState, LoginSignupDraft, LoginSignupField},
    },
    model::login_signup::{EventStatus, EventType, LoginSignupEventDto, NewLoginSignupEventDto},
};

/// Record or edit a login/signup event
///
/// `event_type` preselects the type of a new event; it is ignored when editing.
#[component]
pub fn LoginSignupForm(
    initial: Option<LoginSignupEventDto>,
    event_type: Option<EventType>,
    on_submit: EventHandler<NewLoginSignupEventDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let mut form = use_signal(|| {
        let draft = match (&initial, event_type) {
            (Some(record), _) => LoginSignupDraft::from_record(record),
            (None, Some(event_type)) => LoginSignupDraft::with_event_type(event_type),
            (None, None) => LoginSignupDraft::default(),
        };
        FormState::new(draft)
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
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                TextField {
                    label: "User ID",
                    name: LoginSignupField::UserId.name(),
                    value: draft.user_id,
                    error: state.error(LoginSignupField::UserId),
                    on_input: move |value: String| form.write().update(LoginSignupField::UserId, value),
                }
                SelectField {
                    label: "Event Type",
                    name: LoginSignupField::EventType.name(),
                    value: draft.event_type,
                    options: choice_options::<EventType>(),
                    placeholder: "Select an event type",
                    error: state.error(LoginSignupField::EventType),
                    on_change: move |value: String| form.write().update(LoginSignupField::EventType, value),
                }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                TextField {
                    label: "Event Date",
                    name: LoginSignupField::EventDate.name(),
                    input_type: "datetime-local",
                    value: draft.event_date,
                    error: state.error(LoginSignupField::EventDate),
                    on_input: move |value: String| form.write().update(LoginSignupField::EventDate, value),
                }
                TextField {
                    label: "IP Address",
                    name: LoginSignupField::IpAddress.name(),
                    placeholder: "192.168.1.1",
                    value: draft.ip_address,
                    error: state.error(LoginSignupField::IpAddress),
                    on_input: move |value: String| form.write().update(LoginSignupField::IpAddress, value),
                }
            }
            TextField {
                label: "User Agent",
                name: LoginSignupField::UserAgent.name(),
                value: draft.user_agent,
                error: state.error(LoginSignupField::UserAgent),
                on_input: move |value: String| form.write().update(LoginSignupField::UserAgent, value),
            }
            SelectField {
                label: "Status",
                name: LoginSignupField::Status.name(),
                value: draft.status,
                options: choice_options::<EventStatus>(),
                placeholder: "Select a status",
                error: state.error(LoginSignupField::Status),
                on_change: move |value: String| form.write().update(LoginSignupField::Status, value),
            }
            div { class: "modal-action",
                button { r#type: "button", class: "btn", onclick: move |_| on_cancel.call(()), "Cancel" }
                button { r#type: "submit", class: "btn btn-primary",
                    if editing { "Update" } else { "Record" }
                }
            }
        }
    )
}

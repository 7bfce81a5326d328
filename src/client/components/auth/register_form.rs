use dioxus::prelude::*;

use crate::{
    client::{
        components::ui::{choice_options, SelectField, TextField},
        form::{FormState, RegisterDraft, RegisterField},
    },
    model::auth::{RegisterDto, Role},
};

#[component]
pub fn RegisterForm(
    on_submit: EventHandler<RegisterDto>,
    #[props(default)] submitting: bool,
) -> Element {
    let mut form = use_signal(|| FormState::new(RegisterDraft::default()));

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
                label: "Full Name",
                name: RegisterField::Name.name(),
                value: draft.name,
                error: state.error(RegisterField::Name),
                on_input: move |value: String| form.write().update(RegisterField::Name, value),
            }
            TextField {
                label: "Email",
                name: RegisterField::Email.name(),
                input_type: "email",
                placeholder: "name@example.com",
                value: draft.email,
                error: state.error(RegisterField::Email),
                on_input: move |value: String| form.write().update(RegisterField::Email, value),
            }
            TextField {
                label: "Password",
                name: RegisterField::Password.name(),
                input_type: "password",
                value: draft.password,
                error: state.error(RegisterField::Password),
                on_input: move |value: String| form.write().update(RegisterField::Password, value),
            }
            SelectField {
                label: "Role",
                name: RegisterField::Role.name(),
                value: draft.role,
                options: choice_options::<Role>(),
                placeholder: "Select a role",
                error: state.error(RegisterField::Role),
                on_change: move |value: String| form.write().update(RegisterField::Role, value),
            }
            button {
                r#type: "submit",
                class: "btn btn-primary mt-4",
                disabled: submitting,
                if submitting {
                    span { class: "loading loading-spinner loading-sm" }
                    "Creating account..."
                } else {
                    "Create account"
                }
            }
        }
    )
}

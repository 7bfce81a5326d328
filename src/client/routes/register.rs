use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{
            auth::RegisterForm,
            ui::{Alert, AlertKind},
            Page,
        },
        config::Config,
    },
    model::auth::RegisterDto,
};

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Registered(String),
    Failed(String),
}

#[component]
pub fn Register() -> Element {
    let config = use_context::<Config>();
    let mut submitting = use_signal(|| false);
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    // Bumped after a successful registration to remount an empty form
    let mut form_generation = use_signal(|| 0u32);

    let on_submit = move |dto: RegisterDto| {
        submitting.set(true);
        outcome.set(None);

        spawn(async move {
            let result = register(config, &dto).await;

            match result {
                Ok(()) => {
                    outcome.set(Some(Outcome::Registered(format!(
                        "Account created for {}",
                        dto.email
                    ))));
                    *form_generation.write() += 1;
                }
                Err(message) => outcome.set(Some(Outcome::Failed(message))),
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "Register | Sales Dashboard" }
        Meta {
            name: "description",
            content: "Create an account for the sales dashboard."
        }
        Page {
            title: "Register User",
            description: "Create an account and assign its role",
            div { class: "card bg-base-100 shadow-sm w-full max-w-lg",
                div { class: "card-body gap-4",
                    h2 { class: "card-title", "Create an account" }
                    {match outcome() {
                        Some(Outcome::Registered(message)) => rsx!(
                            Alert { kind: AlertKind::Success, on_dismiss: move |_| outcome.set(None), "{message}" }
                        ),
                        Some(Outcome::Failed(message)) => rsx!(
                            Alert { kind: AlertKind::Error, on_dismiss: move |_| outcome.set(None), "{message}" }
                        ),
                        None => rsx!(),
                    }}
                    RegisterForm {
                        key: "{form_generation}",
                        submitting: submitting(),
                        on_submit: on_submit,
                    }
                }
            }
        }
    )
}

#[cfg(feature = "web")]
async fn register(config: Config, dto: &RegisterDto) -> Result<(), String> {
    use crate::client::api;

    api::register(&config, dto).await.map_err(|err| {
        tracing::error!("Failed to register {}: {}", dto.email, err);
        err.user_message()
    })
}

#[cfg(not(feature = "web"))]
async fn register(_config: Config, _dto: &RegisterDto) -> Result<(), String> {
    Err("Registration is only available in the web build".to_string())
}

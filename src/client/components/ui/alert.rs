use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleInfo, FaTriangleExclamation, FaXmark,
};
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Warning => "alert-warning",
            Self::Error => "alert-error",
        }
    }
}

#[component]
pub fn Alert(
    #[props(default)] kind: AlertKind,
    title: Option<String>,
    on_dismiss: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let class = kind.class();

    rsx!(
        div { role: "alert", class: "alert {class} flex items-start",
            {match kind {
                AlertKind::Success => rsx!(Icon { width: 20, height: 20, icon: FaCircleCheck }),
                AlertKind::Info => rsx!(Icon { width: 20, height: 20, icon: FaCircleInfo }),
                AlertKind::Warning | AlertKind::Error => {
                    rsx!(Icon { width: 20, height: 20, icon: FaTriangleExclamation })
                }
            }}
            div { class: "flex-1",
                if let Some(title) = title {
                    h5 { class: "font-medium mb-1", "{title}" }
                }
                div { class: "text-sm", {children} }
            }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    class: "btn btn-ghost btn-xs",
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    Icon { width: 14, height: 14, icon: FaXmark }
                }
            }
        }
    )
}

/// Banner listing request failures of a page
#[component]
pub fn ErrorBanner(errors: Vec<String>, on_dismiss: EventHandler<()>) -> Element {
    if errors.is_empty() {
        return rsx!();
    }

    rsx!(
        Alert { kind: AlertKind::Error, on_dismiss: on_dismiss,
            for message in errors {
                p { "{message}" }
            }
        }
    )
}

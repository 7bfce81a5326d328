use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[component]
pub fn LoadingSpinner(#[props(default)] size: SpinnerSize) -> Element {
    let size = match size {
        SpinnerSize::Small => "loading-sm",
        SpinnerSize::Medium => "loading-md",
        SpinnerSize::Large => "loading-lg",
    };

    rsx!(
        div { class: "flex items-center justify-center p-8",
            span { class: "loading loading-spinner {size}", role: "status",
                span { class: "sr-only", "Loading..." }
            }
        }
    )
}

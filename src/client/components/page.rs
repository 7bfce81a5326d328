use dioxus::prelude::*;

/// Content area of a dashboard page with its heading
///
/// `actions` is rendered at the right of the heading, e.g. the buttons opening a form.
#[component]
pub fn Page(
    title: &'static str,
    description: Option<&'static str>,
    actions: Option<Element>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div { class: "flex flex-col gap-6 p-6 {class}",
            div { class: "flex flex-wrap items-center justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold", "{title}" }
                    if let Some(description) = description {
                        p { class: "mt-1 text-sm opacity-70", "{description}" }
                    }
                }
                if let Some(actions) = actions {
                    div { class: "flex gap-2", {actions} }
                }
            }
            {children}
        }
    )
}

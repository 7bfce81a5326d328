use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

/// Dialog rendered over the page while `open`
///
/// Children are only mounted while the modal is open, so a form inside starts from its
/// initial values every time.
#[component]
pub fn Modal(
    open: bool,
    title: &'static str,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx!();
    }

    rsx!(
        div { class: "modal modal-open", role: "dialog",
            div { class: "modal-box max-w-xl",
                div { class: "flex items-center justify-between mb-4",
                    h3 { class: "text-lg font-bold", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { width: 14, height: 14, icon: FaXmark }
                    }
                }
                {children}
            }
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    )
}

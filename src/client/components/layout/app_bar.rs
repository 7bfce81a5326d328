use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};
use dioxus_free_icons::Icon;

#[component]
pub fn AppBar(sidebar_open: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "navbar bg-base-100 border-b border-base-300 sticky top-0 z-10",
            div {
                class: "navbar-start gap-2",
                button {
                    class: "btn btn-ghost btn-square",
                    aria_label: "Toggle navigation",
                    onclick: move |_| on_toggle.call(()),
                    if sidebar_open {
                        Icon { width: 20, height: 20, icon: FaXmark }
                    } else {
                        Icon { width: 20, height: 20, icon: FaBars }
                    }
                }
                h1 { class: "text-lg font-semibold",
                    "Sales Lifecycle Dashboard"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::client::overview::format_count;

#[component]
pub fn StatsCard(title: &'static str, value: usize, description: &'static str) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                p { class: "text-sm font-medium opacity-70", "{title}" }
                p { class: "text-2xl font-bold", {format_count(value)} }
                p { class: "text-xs opacity-60", "{description}" }
            }
        }
    )
}

use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not Found | Sales Dashboard" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl font-bold", "Page not found" }
            p { class: "opacity-70", "Nothing lives at {path}" }
            Link { to: Route::Overview {}, class: "btn btn-primary", "Back to dashboard" }
        }
    )
}

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{config::Config, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error, using defaults: {}", e);
            Config::default()
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Sales Dashboard" }
        Router::<Route> {}
    }
}

use dioxus::prelude::*;

use crate::client::overview::{format_count, FunnelStage};

#[component]
pub fn FunnelChart(stages: Vec<FunnelStage>) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "User Journey Funnel" }
                div { class: "flex flex-col gap-4",
                    for stage in stages {
                        div { key: "{stage.name}", class: "flex flex-col gap-1",
                            div { class: "flex justify-between text-sm",
                                span { class: "font-medium", "{stage.name}" }
                                span { {format_count(stage.count)} }
                            }
                            div { class: "w-full bg-base-300 rounded-full h-4",
                                div {
                                    class: "bg-primary h-4 rounded-full transition-all duration-500 ease-out",
                                    style: format!("width: {:.1}%", stage.percentage),
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

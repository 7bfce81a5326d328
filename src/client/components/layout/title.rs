use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChartLine;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn SalesboardTitle() -> Element {
    rsx!(
        Link {
            to: Route::Overview {},
            div { class: "flex items-center gap-2",
                Icon { width: 24, height: 24, icon: FaChartLine }
                p { class: "text-lg font-bold",
                    "Sales Dashboard"
                }
                p { class: "text-xs",
                    "v{VERSION}"
                }
            }
        }
    )
}

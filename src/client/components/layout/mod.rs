pub mod app_bar;
pub mod sidebar;
pub mod title;

pub use app_bar::AppBar;
pub use sidebar::Sidebar;
pub use title::SalesboardTitle;

use dioxus::prelude::*;

use crate::client::router::Route;

/// Shell of every dashboard route: top bar, collapsible sidebar, and the routed page
#[component]
pub fn DashboardLayout() -> Element {
    let mut sidebar_open = use_signal(|| true);

    rsx!(
        div { class: "flex min-h-screen bg-base-200",
            if sidebar_open() {
                aside { class: "w-64 shrink-0",
                    Sidebar {}
                }
            }
            div { class: "flex flex-1 flex-col min-w-0",
                AppBar {
                    sidebar_open: sidebar_open(),
                    on_toggle: move |_| sidebar_open.toggle(),
                }
                main { class: "flex-1",
                    Outlet::<Route> {}
                }
            }
        }
    )
}

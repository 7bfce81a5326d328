use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartLine, FaGlobe, FaRightFromBracket, FaStore, FaUser, FaUserPlus,
};
use dioxus_free_icons::Icon;

use crate::client::{components::layout::SalesboardTitle, router::Route};

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        div { class: "flex h-full flex-col border-r border-base-300 bg-base-100",
            div { class: "flex h-16 items-center border-b border-base-300 px-6",
                SalesboardTitle {}
            }
            nav { class: "flex-1 overflow-y-auto px-3 py-4",
                ul { class: "menu w-full gap-1",
                    SidebarLink { to: Route::Overview {}, label: "Dashboard",
                        Icon { width: 18, height: 18, icon: FaChartLine }
                    }
                    SidebarLink { to: Route::WebsiteVisits {}, label: "Website Visits",
                        Icon { width: 18, height: 18, icon: FaGlobe }
                    }
                    SidebarLink { to: Route::StoreVisits {}, label: "Store Visits",
                        Icon { width: 18, height: 18, icon: FaStore }
                    }
                    SidebarLink { to: Route::LoginSignup {}, label: "Login/Signup",
                        Icon { width: 18, height: 18, icon: FaUser }
                    }
                    SidebarLink { to: Route::Register {}, label: "Register User",
                        Icon { width: 18, height: 18, icon: FaUserPlus }
                    }
                }
            }
            div { class: "border-t border-base-300 p-4",
                a { href: "/api/auth/logout",
                    button { class: "btn btn-outline w-full flex gap-2",
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Logout"
                    }
                }
            }
        }
    }
}

/// Navigation entry, highlighted while its route is active
#[component]
fn SidebarLink(to: Route, label: &'static str, children: Element) -> Element {
    let route = use_route::<Route>();
    let class = if route == to { "menu-active" } else { "" };

    rsx! {
        li {
            Link { to: to, class: class,
                {children}
                "{label}"
            }
        }
    }
}

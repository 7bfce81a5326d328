use dioxus::prelude::*;

use crate::client::{
    components::DashboardLayout,
    routes::{LoginSignup, NotFound, Overview, Register, StoreVisits, WebsiteVisits},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Overview {})]

    #[layout(DashboardLayout)]

        #[nest("/dashboard")]

            #[route("/")]
            Overview {},

            #[route("/website-visits")]
            WebsiteVisits {},

            #[route("/store-visits")]
            StoreVisits {},

            #[route("/login-signup")]
            LoginSignup {},

        #[end_nest]

        #[route("/register")]
        Register {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

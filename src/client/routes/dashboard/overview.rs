use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    components::{
        dashboard::{FunnelChart, StatsCard},
        ui::{ErrorBanner, LoadingSpinner},
        Page,
    },
    config::Config,
    error::ApiError,
    overview::OverviewStats,
};

/// Fetch the three collections concurrently and derive the overview figures
#[cfg(feature = "web")]
async fn load_stats(config: Config) -> Result<OverviewStats, ApiError> {
    use crate::{
        client::api,
        model::{
            login_signup::LoginSignupEventDto, store_visit::StoreVisitDto,
            website_visit::WebsiteVisitDto,
        },
    };

    let (website_visits, store_visits, events) = futures::join!(
        api::fetch_all::<WebsiteVisitDto>(&config),
        api::fetch_all::<StoreVisitDto>(&config),
        api::fetch_all::<LoginSignupEventDto>(&config),
    );

    Ok(OverviewStats::from_records(
        &website_visits?,
        &store_visits?,
        &events?,
    ))
}

#[cfg(not(feature = "web"))]
async fn load_stats(_config: Config) -> Result<OverviewStats, ApiError> {
    Err(ApiError::web_only())
}

#[component]
pub fn Overview() -> Element {
    let config = use_context::<Config>();
    let mut dismissed = use_signal(|| false);

    let stats = use_resource(move || async move {
        let result = load_stats(config).await;

        #[cfg(feature = "web")]
        {
            if let Err(err) = &result {
                tracing::error!("Failed to load dashboard overview: {}", err);
            }
        }

        result
    });

    let content = match &*stats.read() {
        None => rsx!(LoadingSpinner {}),
        Some(result) => {
            let (figures, errors) = match result {
                Ok(figures) => (*figures, Vec::new()),
                Err(err) => (
                    OverviewStats::default(),
                    vec![format!("Failed to load dashboard overview: {}", err.user_message())],
                ),
            };
            let errors = if dismissed() { Vec::new() } else { errors };

            rsx!(
                ErrorBanner {
                    errors: errors,
                    on_dismiss: move |_| dismissed.set(true),
                }
                div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    StatsCard {
                        title: "Website Visits",
                        value: figures.website_visits,
                        description: "Recorded page visits",
                    }
                    StatsCard {
                        title: "Store Visits",
                        value: figures.store_visits,
                        description: "Recorded in-store visits",
                    }
                    StatsCard {
                        title: "New Signups",
                        value: figures.signups,
                        description: "Successful signups",
                    }
                    StatsCard {
                        title: "Active Users",
                        value: figures.active_users,
                        description: "Users with a successful login",
                    }
                }
                FunnelChart { stages: figures.funnel() }
            )
        }
    };

    rsx!(
        Title { "Dashboard | Sales Dashboard" }
        Meta {
            name: "description",
            content: "Track and optimize your complete sales lifecycle."
        }
        Page {
            title: "Dashboard Overview",
            description: "Track your sales lifecycle performance",
            {content}
        }
    )
}

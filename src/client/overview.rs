//! Figures shown on the dashboard overview, derived from the fetched collections.

use std::collections::BTreeSet;

use crate::model::{
    login_signup::{EventStatus, EventType, LoginSignupEventDto},
    store_visit::StoreVisitDto,
    website_visit::WebsiteVisitDto,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewStats {
    pub website_visits: usize,
    pub store_visits: usize,
    /// Successful signups
    pub signups: usize,
    /// Distinct users with at least one successful login
    pub active_users: usize,
}

impl OverviewStats {
    pub fn from_records(
        website_visits: &[WebsiteVisitDto],
        store_visits: &[StoreVisitDto],
        events: &[LoginSignupEventDto],
    ) -> Self {
        let successful = |event_type: EventType| {
            events
                .iter()
                .filter(move |event| {
                    event.event_type == event_type && event.status == EventStatus::Success
                })
        };

        let active_users: BTreeSet<&str> = successful(EventType::Login)
            .map(|event| event.user_id.as_str())
            .collect();

        Self {
            website_visits: website_visits.len(),
            store_visits: store_visits.len(),
            signups: successful(EventType::Signup).count(),
            active_users: active_users.len(),
        }
    }

    /// Website visits -> store visits -> signups
    pub fn funnel(&self) -> Vec<FunnelStage> {
        let stages = [
            ("Website Visits", self.website_visits),
            ("Store Visits", self.store_visits),
            ("Signups", self.signups),
        ];
        let largest = stages.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

        stages
            .into_iter()
            .map(|(name, count)| FunnelStage {
                name,
                count,
                percentage: (count as f64 / largest as f64) * 100.0,
            })
            .collect()
    }
}

/// One bar of the funnel chart, sized relative to the largest stage
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub name: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// `1254` -> `"1,254"`
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn event(id: i64, user_id: &str, event_type: EventType, status: EventStatus) -> LoginSignupEventDto {
        LoginSignupEventDto {
            id,
            user_id: user_id.to_string(),
            event_type,
            event_date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            ip_address: "10.0.0.1".to_string(),
            user_agent: String::new(),
            status,
        }
    }

    /// Tests counting login/signup events.
    ///
    /// Verifies that only successful signups count and that active users are distinct.
    ///
    /// Expected: 1 signup, 2 active users
    #[test]
    fn counts_successful_events() {
        let events = vec![
            event(1, "u1", EventType::Signup, EventStatus::Success),
            event(2, "u2", EventType::Signup, EventStatus::Failed),
            event(3, "u1", EventType::Login, EventStatus::Success),
            event(4, "u1", EventType::Login, EventStatus::Success),
            event(5, "u3", EventType::Login, EventStatus::Success),
            event(6, "u4", EventType::Login, EventStatus::Failed),
        ];

        let stats = OverviewStats::from_records(&[], &[], &events);

        assert_eq!(stats.signups, 1);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.website_visits, 0);
    }

    /// Tests funnel widths.
    ///
    /// Verifies that every stage is sized relative to the largest one.
    ///
    /// Expected: 100%, 50%, 10%
    #[test]
    fn funnel_relative_to_largest() {
        let stats = OverviewStats {
            website_visits: 200,
            store_visits: 100,
            signups: 20,
            active_users: 0,
        };

        let percentages: Vec<f64> = stats.funnel().iter().map(|stage| stage.percentage).collect();

        assert_eq!(percentages, vec![100.0, 50.0, 10.0]);
    }

    /// Tests the funnel of an empty dashboard.
    ///
    /// Verifies that no division by zero happens.
    ///
    /// Expected: every stage at 0%
    #[test]
    fn empty_funnel() {
        let funnel = OverviewStats::default().funnel();

        assert_eq!(funnel.len(), 3);
        assert!(funnel.iter().all(|stage| stage.percentage == 0.0));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(842), "842");
        assert_eq!(format_count(1254), "1,254");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}

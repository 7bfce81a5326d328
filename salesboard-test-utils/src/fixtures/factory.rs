//! Factory functions for records and form drafts.
//!
//! Every value is derived from the arguments so that two calls with the same arguments return
//! equal records, which keeps sort-order assertions deterministic.

use chrono::{NaiveDate, NaiveDateTime};
use salesboard::{
    client::form::{LoginSignupDraft, RegisterDraft, StoreVisitDraft, WebsiteVisitDraft},
    model::{
        login_signup::{EventStatus, EventType, LoginSignupEventDto},
        store_visit::{StoreVisitDto, VisitPurpose},
        website_visit::WebsiteVisitDto,
    },
};

/// Create a timestamp on a day of January 2024.
///
/// # Arguments
/// - `day` - Day of the month, wrapped into `1..=28`
///
/// # Returns
/// - `NaiveDateTime` - 10:00 on that day
pub fn visit_date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, (day.saturating_sub(1) % 28) + 1)
        .and_then(|date| date.and_hms_opt(10, 0, 0))
        .expect("valid fixture date")
}

/// Create a website visit for testing.
///
/// # Arguments
/// - `id` - Record id, also used to derive the user, page, date, and duration
///
/// # Returns
/// - `WebsiteVisitDto` - A visit lasting `id * 10` seconds
pub fn mock_website_visit(id: i64) -> WebsiteVisitDto {
    WebsiteVisitDto {
        id,
        user_id: format!("user-{}", id),
        page_url: format!("https://example.com/page/{}", id),
        visit_date: visit_date(id as u32),
        duration_seconds: (id.unsigned_abs() as u32).max(1) * 10,
    }
}

/// Create a store visit for testing.
///
/// # Arguments
/// - `id` - Record id, also used to derive the user, store, and date
///
/// # Returns
/// - `StoreVisitDto` - A purchase visit without notes
pub fn mock_store_visit(id: i64) -> StoreVisitDto {
    StoreVisitDto {
        id,
        user_id: format!("customer-{}", id),
        store_name: format!("Store {}", id),
        location: "Downtown".to_string(),
        visit_date: visit_date(id as u32),
        visit_purpose: VisitPurpose::Purchase,
        notes: None,
    }
}

/// Create a successful login/signup event for testing.
///
/// # Arguments
/// - `id` - Record id, also used to derive the user, date, and IP address
/// - `event_type` - Login or signup
///
/// # Returns
/// - `LoginSignupEventDto` - A successful event from `10.0.0.<id>`
pub fn mock_login_signup_event(id: i64, event_type: EventType) -> LoginSignupEventDto {
    LoginSignupEventDto {
        id,
        user_id: format!("user-{}", id),
        event_type,
        event_date: visit_date(id as u32),
        ip_address: format!("10.0.0.{}", id.rem_euclid(256)),
        user_agent: "Mozilla/5.0".to_string(),
        status: EventStatus::Success,
    }
}

/// Create a website visit draft that passes validation.
pub fn valid_website_visit_draft() -> WebsiteVisitDraft {
    WebsiteVisitDraft {
        user_id: "user-1".to_string(),
        page_url: "https://example.com/pricing".to_string(),
        visit_date: "2024-01-15T10:30".to_string(),
        duration_seconds: "30".to_string(),
    }
}

/// Create a store visit draft that passes validation.
pub fn valid_store_visit_draft() -> StoreVisitDraft {
    StoreVisitDraft {
        user_id: "customer-1".to_string(),
        store_name: "Main Street".to_string(),
        location: "Downtown".to_string(),
        visit_date: "2024-01-15T10:30".to_string(),
        visit_purpose: "inquiry".to_string(),
        notes: String::new(),
    }
}

/// Create a login/signup draft that passes validation.
pub fn valid_login_signup_draft() -> LoginSignupDraft {
    LoginSignupDraft {
        user_id: "user-1".to_string(),
        event_type: "login".to_string(),
        event_date: "2024-01-15T10:30".to_string(),
        ip_address: "192.168.1.1".to_string(),
        user_agent: "Mozilla/5.0".to_string(),
        status: "success".to_string(),
    }
}

/// Create a registration draft that passes validation.
pub fn valid_register_draft() -> RegisterDraft {
    RegisterDraft {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "hunter22".to_string(),
        role: "manager".to_string(),
    }
}

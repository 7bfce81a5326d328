use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::format;

/// A recorded visit to a page of the website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteVisitDto {
    pub id: i64,
    #[serde(deserialize_with = "format::user_id")]
    pub user_id: String,
    pub page_url: String,
    #[serde(with = "format::datetime")]
    pub visit_date: NaiveDateTime,
    pub duration_seconds: u32,
}

/// Create/update payload for a website visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWebsiteVisitDto {
    pub user_id: String,
    pub page_url: String,
    #[serde(with = "format::datetime")]
    pub visit_date: NaiveDateTime,
    pub duration_seconds: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_user_id_and_local_date() {
        let json = r#"{
            "id": 4,
            "user_id": 1201,
            "page_url": "https://example.com/pricing",
            "visit_date": "2024-05-01T10:30",
            "duration_seconds": 42
        }"#;

        let visit: WebsiteVisitDto = serde_json::from_str(json).unwrap();

        assert_eq!(visit.user_id, "1201");
        assert_eq!(visit.duration_seconds, 42);
        assert_eq!(visit.visit_date.to_string(), "2024-05-01 10:30:00");
    }

    #[test]
    fn rejects_negative_duration() {
        let json = r#"{
            "id": 4,
            "user_id": "u-1",
            "page_url": "https://example.com",
            "visit_date": "2024-05-01T10:30:00Z",
            "duration_seconds": -3
        }"#;

        assert!(serde_json::from_str::<WebsiteVisitDto>(json).is_err());
    }
}

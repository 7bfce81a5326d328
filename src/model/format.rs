//! Lenient serde helpers for fields whose wire shape varies between backends.
//!
//! Dates arrive either as RFC 3339 timestamps (`2024-05-01T10:30:00Z`), as naive timestamps with
//! seconds, or as the `datetime-local` form value without seconds. User ids arrive either as
//! strings or as numbers. Anything else is rejected with a decode error rather than being
//! rendered as garbage.

use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Format used for `<input type="datetime-local">` values.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses any of the accepted timestamp shapes into a naive UTC timestamp.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Formats a timestamp for a `datetime-local` input.
pub fn to_datetime_local(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// `#[serde(with = "datetime")]` for [`NaiveDateTime`] fields.
pub mod datetime {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        parse_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {:?}", raw)))
    }
}

/// Accepts a user id given either as a JSON string or a JSON integer.
pub fn user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

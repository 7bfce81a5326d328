//! Field validators shared by the record forms.
//!
//! All validators are pure and operate on the raw string held by an input.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::model::{format::parse_datetime, Choice};

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("IPv4 pattern compiles")
});

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://.+").expect("URL pattern compiles")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// IPv4 dotted quad with every octet in `0..=255`.
pub fn is_ipv4(value: &str) -> bool {
    IPV4.is_match(value)
}

/// Starts with `http://` or `https://` followed by at least one character.
pub fn is_http_url(value: &str) -> bool {
    HTTP_URL.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Parses a strictly positive integer such as a duration in seconds.
pub fn parse_positive_int(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Parses a `datetime-local` input value (RFC 3339 is accepted as well).
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}

/// Resolves a select's raw value to one of its declared options.
pub fn parse_choice<C: Choice>(value: &str) -> Option<C> {
    C::from_value(value)
}

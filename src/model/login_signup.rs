use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{format, Choice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Login,
    Signup,
}

impl Choice for EventType {
    const ALL: &'static [Self] = &[Self::Login, Self::Signup];

    fn value(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Signup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Success,
    Failed,
}

impl Choice for EventStatus {
    const ALL: &'static [Self] = &[Self::Success, Self::Failed];

    fn value(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failed => "Failed",
        }
    }
}

/// A login or signup attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSignupEventDto {
    pub id: i64,
    #[serde(deserialize_with = "format::user_id")]
    pub user_id: String,
    pub event_type: EventType,
    #[serde(with = "format::datetime")]
    pub event_date: NaiveDateTime,
    pub ip_address: String,
    #[serde(default)]
    pub user_agent: String,
    pub status: EventStatus,
}

/// Create/update payload for a login or signup event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoginSignupEventDto {
    pub user_id: String,
    pub event_type: EventType,
    #[serde(with = "format::datetime")]
    pub event_date: NaiveDateTime,
    pub ip_address: String,
    pub user_agent: String,
    pub status: EventStatus,
}

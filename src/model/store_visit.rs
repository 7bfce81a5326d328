use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{format, Choice};

/// Why a customer came into a store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitPurpose {
    Purchase,
    Inquiry,
    Return,
    Complaint,
    #[default]
    Other,
}

impl Choice for VisitPurpose {
    const ALL: &'static [Self] = &[
        Self::Purchase,
        Self::Inquiry,
        Self::Return,
        Self::Complaint,
        Self::Other,
    ];

    fn value(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Inquiry => "inquiry",
            Self::Return => "return",
            Self::Complaint => "complaint",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Inquiry => "Inquiry",
            Self::Return => "Return",
            Self::Complaint => "Complaint",
            Self::Other => "Other",
        }
    }
}

/// A recorded visit to a physical store.
///
/// Older backends identify the visitor by `contact_info` instead of `user_id` and may omit the
/// store name, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreVisitDto {
    pub id: i64,
    #[serde(alias = "contact_info", deserialize_with = "format::user_id")]
    pub user_id: String,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(with = "format::datetime")]
    pub visit_date: NaiveDateTime,
    #[serde(default)]
    pub visit_purpose: VisitPurpose,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update payload for a store visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStoreVisitDto {
    pub user_id: String,
    pub store_name: String,
    pub location: String,
    #[serde(with = "format::datetime")]
    pub visit_date: NaiveDateTime,
    pub visit_purpose: VisitPurpose,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

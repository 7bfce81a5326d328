use serde::{Deserialize, Serialize};

use crate::model::Choice;

/// Account role selectable at registration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
    Viewer,
}

impl Choice for Role {
    const ALL: &'static [Self] = &[Self::Admin, Self::Manager, Self::User, Self::Viewer];

    fn value(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
            Self::Viewer => "viewer",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::User => "User",
            Self::Viewer => "Viewer",
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of `POST /api/auth/register`; a present `error` means the account was not created
/// even if the status code claims success.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterResponseDto {
    #[serde(default)]
    pub error: Option<String>,
}

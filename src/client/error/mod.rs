//! Error types for the dashboard client.
//!
//! Request failures are caught at the page boundary and rendered as a banner message through
//! their `Display` implementation; they never abort rendering. Field validation failures are not
//! errors in this sense and live in [`crate::client::form::FieldErrors`].

pub mod api;
pub mod config;

pub use api::ApiError;
pub use config::ConfigError;

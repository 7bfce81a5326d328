//! JSON transport types exchanged with the dashboard API.
//!
//! Records are owned by the backend; the client only deserializes the list endpoints and
//! serializes create/update payloads. Enumerated fields implement [`Choice`] so that forms can
//! render them as selects and validate submitted values against the declared options.

pub mod api;
pub mod auth;
pub mod format;
pub mod login_signup;
pub mod store_visit;
pub mod website_visit;

/// A closed set of options rendered as a `<select>` and carried over the wire as a string.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Wire value, also used as the `<option value>`.
    fn value(self) -> &'static str;

    /// Human readable label.
    fn label(self) -> &'static str;

    /// Looks up an option by its wire value.
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.value() == value)
    }
}

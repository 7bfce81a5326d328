use salesboard::{
    client::form::{LoginSignupDraft, LoginSignupField},
    model::login_signup::{EventStatus, EventType},
};

use super::*;

/// Tests an out-of-range IP address.
///
/// Verifies that a dotted quad with an octet above 255 is rejected.
///
/// Expected: None with "Please enter a valid IP address"
#[test]
fn rejects_out_of_range_ip() {
    let mut form = FormState::new(factory::valid_login_signup_draft());

    form.update(LoginSignupField::IpAddress, "999.1.1.1".to_string());

    assert!(form.submit().is_none());
    assert_eq!(
        form.error(LoginSignupField::IpAddress).as_deref(),
        Some("Please enter a valid IP address")
    );
}

/// Tests a valid private IP address.
///
/// Verifies that the payload carries typed enumerations.
///
/// Expected: payload with Login and Success
#[test]
fn accepts_private_ip() {
    let mut form = FormState::new(factory::valid_login_signup_draft());

    let payload = form.submit().unwrap();

    assert_eq!(payload.ip_address, "192.168.1.1");
    assert_eq!(payload.event_type, EventType::Login);
    assert_eq!(payload.status, EventStatus::Success);
}

/// Tests the "Record Signup" preset.
///
/// Verifies that a draft started from a preset event type only misses the other fields.
///
/// Expected: no event type error
#[test]
fn signup_preset_fills_event_type() {
    let mut form = FormState::new(LoginSignupDraft::with_event_type(EventType::Signup));

    assert!(form.submit().is_none());
    assert!(form.error(LoginSignupField::EventType).is_none());
    assert!(form.error(LoginSignupField::IpAddress).is_some());
}

/// Tests a select holding a value outside its options.
///
/// Verifies that enumerated fields must hold one of the declared options.
///
/// Expected: None with a status error
#[test]
fn rejects_unknown_status() {
    let mut form = FormState::new(factory::valid_login_signup_draft());

    form.update(LoginSignupField::Status, "pending".to_string());

    assert!(form.submit().is_none());
    assert_eq!(
        form.error(LoginSignupField::Status).as_deref(),
        Some("Please select a valid status")
    );
}

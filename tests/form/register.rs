use salesboard::{
    client::form::{RegisterDraft, RegisterField},
    model::auth::Role,
};

use super::*;

/// Tests an empty registration form.
///
/// Verifies that every required field is reported and the role defaults to user.
///
/// Expected: name, email, and password errors only
#[test]
fn empty_form_reports_required_fields() {
    let mut form = FormState::new(RegisterDraft::default());

    assert!(form.submit().is_none());
    assert!(form.error(RegisterField::Name).is_some());
    assert!(form.error(RegisterField::Email).is_some());
    assert!(form.error(RegisterField::Password).is_some());
    assert!(form.error(RegisterField::Role).is_none());
}

/// Tests a complete registration.
///
/// Verifies that the payload carries the selected role.
///
/// Expected: RegisterDto with Role::Manager
#[test]
fn submits_selected_role() {
    let mut form = FormState::new(factory::valid_register_draft());

    let dto = form.submit().unwrap();

    assert_eq!(dto.role, Role::Manager);
    assert_eq!(dto.email, "jane@example.com");
}

use salesboard::client::form::{WebsiteVisitDraft, WebsiteVisitField};

use super::*;

/// Tests submitting a negative duration.
///
/// Verifies that the submit is blocked and only the duration field reports an error.
///
/// Expected: None with a duration error
#[test]
fn rejects_negative_duration() {
    let mut form = FormState::new(factory::valid_website_visit_draft());

    form.update(WebsiteVisitField::DurationSeconds, "-5".to_string());

    assert!(form.submit().is_none());
    assert_eq!(
        form.error(WebsiteVisitField::DurationSeconds).as_deref(),
        Some("Duration must be a positive number")
    );
    assert_eq!(form.errors().len(), 1);
}

/// Tests submitting a non-numeric duration.
///
/// Verifies that text is rejected with the same message as a negative number.
///
/// Expected: None with a duration error
#[test]
fn rejects_text_duration() {
    let mut form = FormState::new(factory::valid_website_visit_draft());

    form.update(WebsiteVisitField::DurationSeconds, "abc".to_string());

    assert!(form.submit().is_none());
    assert!(form.error(WebsiteVisitField::DurationSeconds).is_some());
}

/// Tests correcting a field after a failed submit.
///
/// Verifies that editing the field clears its error immediately and that the next submit
/// yields the coerced payload.
///
/// Expected: error cleared on update, payload with duration 30
#[test]
fn correcting_field_clears_error_then_submits() {
    let mut form = FormState::new(WebsiteVisitDraft {
        page_url: "example.com".to_string(),
        ..factory::valid_website_visit_draft()
    });

    assert!(form.submit().is_none());
    assert_eq!(
        form.error(WebsiteVisitField::PageUrl).as_deref(),
        Some("Please enter a valid URL")
    );

    form.update(WebsiteVisitField::PageUrl, "https://example.com".to_string());
    assert!(form.error(WebsiteVisitField::PageUrl).is_none());

    let payload = form.submit().unwrap();
    assert_eq!(payload.duration_seconds, 30);
    assert_eq!(payload.page_url, "https://example.com");
}

/// Tests pre-filling from an existing record.
///
/// Verifies that an edit form built from a record submits the same values back.
///
/// Expected: payload equal to the record's fields
#[test]
fn edit_form_round_trips_record() {
    let visit = factory::mock_website_visit(4);
    let mut form = FormState::new(WebsiteVisitDraft::from_record(&visit));

    let payload = form.submit().unwrap();

    assert_eq!(payload.user_id, visit.user_id);
    assert_eq!(payload.page_url, visit.page_url);
    assert_eq!(payload.visit_date, visit.visit_date);
    assert_eq!(payload.duration_seconds, visit.duration_seconds);
}

//! Tests for the submit cycle of the record forms.
//!
//! Each test drives a [`FormState`] the way the form components do: fields are updated from
//! raw input strings and the payload is only produced by a successful submit.
//!
//! [`FormState`]: salesboard::client::form::FormState

mod login_signup;
mod register;
mod website_visit;

use salesboard::client::form::FormState;
use salesboard_test_utils::prelude::*;

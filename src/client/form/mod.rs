//! Form state shared by the record forms.
//!
//! A form holds a draft of raw input strings and a map of field errors. Validation only runs on
//! submit through [`FormState::submit`]; editing a field clears that field's error. A successful
//! submit yields the typed payload and leaves sending it to the caller.

pub mod login_signup;
pub mod register;
pub mod store_visit;
pub mod website_visit;

use std::collections::BTreeMap;
use std::fmt::Debug;

pub use login_signup::{LoginSignupDraft, LoginSignupField};
pub use register::{RegisterDraft, RegisterField};
pub use store_visit::{StoreVisitDraft, StoreVisitField};
pub use website_visit::{WebsiteVisitDraft, WebsiteVisitField};

/// Field -> message for every field that failed validation.
pub type FieldErrors<F> = BTreeMap<F, String>;

/// The raw input of one form.
pub trait RecordDraft: Clone + PartialEq + Default + 'static {
    /// Identifies an input of the form.
    type Field: Copy + Ord + Debug + 'static;
    /// Typed payload produced by a successful validation.
    type Output;

    /// Replaces the raw value of one field.
    fn set(&mut self, field: Self::Field, value: String);

    /// Validates every field and builds the payload.
    fn validate(&self) -> Result<Self::Output, FieldErrors<Self::Field>>;
}

/// A draft plus the errors of its last submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<D: RecordDraft> {
    draft: D,
    errors: FieldErrors<D::Field>,
}

impl<D: RecordDraft> FormState<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors<D::Field> {
        &self.errors
    }

    pub fn error(&self, field: D::Field) -> Option<String> {
        self.errors.get(&field).cloned()
    }

    /// Sets a field and clears its error.
    pub fn update(&mut self, field: D::Field, value: String) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Validates the draft, recording the errors on failure.
    pub fn submit(&mut self) -> Option<D::Output> {
        match self.draft.validate() {
            Ok(output) => {
                self.errors.clear();
                Some(output)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

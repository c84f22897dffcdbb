//! The form state holder.
//!
//! `ContactForm` owns the field values, the single error slot and the
//! success banner flag. It is synchronous; the controller drives it from
//! async tasks.

use super::view::{FormStatus, FormView};
use crate::error::FormResult;
use crate::models::{ContactDetails, Field, FieldValue};
use crate::validation::{Validation, Validator};

/// Notice shown after a submission that was not accepted.
pub const SUBMIT_FAILED_MESSAGE: &str = "Submission failed, please try again";

/// Validation work produced by a mutation.
///
/// Results must be handed back through [`ContactForm::apply_validation`]
/// with the same revision; results for an older revision are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingValidation {
    pub revision: u64,
    pub details: ContactDetails,
}

/// Field values plus the user-facing state derived from them.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    details: ContactDetails,
    error: Option<String>,
    failure: Option<String>,
    revision: u64,
    submitting: bool,
    /// Generation of the banner currently shown
    banner: Option<u64>,
    banner_generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Incremented by every mutation and by reset.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_empty() && self.error.is_none() && !self.submitting
    }

    /// Replace one field and return the revalidation to run.
    ///
    /// Returns `None` when the form is back at its initial values: the empty
    /// form is never validated automatically and shows no error.
    pub fn set_field(
        &mut self,
        field: Field,
        value: FieldValue,
    ) -> FormResult<Option<PendingValidation>> {
        self.details.set(field, value)?;
        Ok(self.after_change())
    }

    /// Flip the consent checkbox.
    pub fn toggle_consent(&mut self) -> Option<PendingValidation> {
        self.details.email_consent = !self.details.email_consent;
        self.after_change()
    }

    fn after_change(&mut self) -> Option<PendingValidation> {
        self.revision += 1;
        self.failure = None;

        if self.is_empty() {
            self.error = None;
            return None;
        }

        Some(PendingValidation {
            revision: self.revision,
            details: self.details.clone(),
        })
    }

    /// Apply a validation result if it belongs to the current revision.
    ///
    /// Returns `false` when the result is stale and was ignored.
    pub fn apply_validation(&mut self, revision: u64, outcome: &Validation) -> bool {
        if revision != self.revision {
            return false;
        }
        self.error = outcome.message().map(str::to_string);
        true
    }

    /// Set a field and revalidate immediately.
    pub fn update(
        &mut self,
        field: Field,
        value: FieldValue,
        validator: &Validator,
    ) -> FormResult<()> {
        if let Some(pending) = self.set_field(field, value)? {
            let outcome = validator.validate(&pending.details);
            self.apply_validation(pending.revision, &outcome);
        }
        Ok(())
    }

    /// Restore the initial values and clear the error slot.
    ///
    /// Bumping the revision discards any revalidation still in flight. A
    /// visible banner and a pending submission are left alone.
    pub fn reset(&mut self) {
        self.details = ContactDetails::default();
        self.error = None;
        self.failure = None;
        self.revision += 1;
    }

    /// Validate for submission, regardless of emptiness.
    ///
    /// On success the form enters the submitting state and the details to
    /// send are returned. On failure the message lands in the error slot.
    pub fn begin_submit(&mut self, validator: &Validator) -> Result<ContactDetails, String> {
        self.failure = None;
        match validator.validate(&self.details) {
            Validation::Valid => {
                self.error = None;
                self.submitting = true;
                Ok(self.details.clone())
            }
            Validation::Invalid(message) => {
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }

    /// Record an accepted submission and show the banner.
    ///
    /// Returns the banner generation the hide timer must present.
    pub fn finish_accepted(&mut self, clear_fields: bool) -> u64 {
        self.submitting = false;
        if clear_fields {
            self.reset();
        }
        self.banner_generation += 1;
        self.banner = Some(self.banner_generation);
        self.banner_generation
    }

    /// Record a submission that was not accepted.
    pub fn finish_failed(&mut self) {
        self.submitting = false;
        self.failure = Some(SUBMIT_FAILED_MESSAGE.to_string());
    }

    /// Hide the banner if `generation` is still the one showing.
    pub fn hide_banner(&mut self, generation: u64) -> bool {
        if self.banner == Some(generation) {
            self.banner = None;
            true
        } else {
            false
        }
    }

    pub fn status(&self) -> FormStatus {
        if self.submitting {
            FormStatus::Submitting
        } else if self.banner_visible() {
            FormStatus::Success
        } else if self.is_empty() {
            FormStatus::Empty
        } else if self.error.is_some() {
            FormStatus::EditingInvalid
        } else {
            FormStatus::EditingValid
        }
    }

    pub fn view(&self) -> FormView {
        FormView {
            details: self.details.clone(),
            error: self.error.clone(),
            failure: self.failure.clone(),
            banner_visible: self.banner_visible(),
            submit_enabled: self.can_submit(),
            status: self.status(),
        }
    }
}

//! Render-ready snapshots of the form.

use crate::models::ContactDetails;
use std::fmt;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// All fields at their initial values
    Empty,
    /// Edited, and the last applied validation failed
    EditingInvalid,
    /// Edited, and no validation error is shown
    EditingValid,
    /// A submission is in flight
    Submitting,
    /// The success banner is showing
    Success,
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormStatus::Empty => "empty",
            FormStatus::EditingInvalid => "editing (invalid)",
            FormStatus::EditingValid => "editing (valid)",
            FormStatus::Submitting => "submitting",
            FormStatus::Success => "success",
        };
        f.write_str(label)
    }
}

/// Everything a renderer needs to draw the form once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub details: ContactDetails,

    /// Message of the first failing validation rule
    pub error: Option<String>,

    /// Notice left by a failed submission
    pub failure: Option<String>,

    pub banner_visible: bool,
    pub submit_enabled: bool,
    pub status: FormStatus,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            details: ContactDetails::default(),
            error: None,
            failure: None,
            banner_visible: false,
            submit_enabled: false,
            status: FormStatus::Empty,
        }
    }
}

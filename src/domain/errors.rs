//! Domain validation errors.

use std::fmt;

/// Rule failures for contact details.
///
/// The `Display` form of each variant is the exact message shown to the
/// user in the form's error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The name is empty after trimming.
    NameRequired,

    /// The email field is empty.
    EmailRequired,

    /// The email does not have the shape of an address.
    InvalidEmail,

    /// The birthdate is present but is not a calendar date.
    InvalidBirthDate,

    /// Consent to email contact was not given.
    ConsentRequired,
}

impl ValidationError {
    /// The user-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "Name is required",
            Self::EmailRequired => "Email is required",
            Self::InvalidEmail => "Invalid email",
            Self::InvalidBirthDate => "Birthdate must be a valid date",
            Self::ConsentRequired => "Must agree to being contacted via email",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

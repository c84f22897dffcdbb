//! Whole-object validation for contact details.
//!
//! Validation is an ordered table of predicate + message pairs. The first
//! rule that fails decides the single message shown to the user.

use crate::domain::{check_birth_date, check_email, ValidationError};
use crate::models::{ContactDetails, Field};
use std::fmt;

/// Result of validating a full `ContactDetails` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(message) => Some(message),
        }
    }
}

/// One row of the rule table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Field the rule inspects
    pub field: Field,

    /// Failure reported when the predicate does not hold
    pub error: ValidationError,

    passes: fn(&ContactDetails) -> bool,
}

impl Rule {
    pub const fn new(
        field: Field,
        error: ValidationError,
        passes: fn(&ContactDetails) -> bool,
    ) -> Self {
        Self {
            field,
            error,
            passes,
        }
    }

    pub fn check(&self, details: &ContactDetails) -> Result<(), ValidationError> {
        if (self.passes)(details) {
            Ok(())
        } else {
            Err(self.error)
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("error", &self.error)
            .finish()
    }
}

fn name_present(d: &ContactDetails) -> bool {
    !d.name.trim().is_empty()
}

fn email_present(d: &ContactDetails) -> bool {
    !d.email.is_empty()
}

fn email_shaped(d: &ContactDetails) -> bool {
    check_email(&d.email).is_ok()
}

fn birth_date_parses(d: &ContactDetails) -> bool {
    check_birth_date(&d.birth_date).is_ok()
}

fn consent_given(d: &ContactDetails) -> bool {
    d.email_consent
}

/// Contact form rules, highest precedence first.
const CONTACT_RULES: [Rule; 5] = [
    Rule::new(Field::Name, ValidationError::NameRequired, name_present),
    Rule::new(Field::Email, ValidationError::EmailRequired, email_present),
    Rule::new(Field::Email, ValidationError::InvalidEmail, email_shaped),
    Rule::new(
        Field::BirthDate,
        ValidationError::InvalidBirthDate,
        birth_date_parses,
    ),
    Rule::new(
        Field::EmailConsent,
        ValidationError::ConsentRequired,
        consent_given,
    ),
];

/// Ordered rule table validator.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator with the contact form's rule table.
    pub fn new() -> Self {
        Self::with_rules(CONTACT_RULES.to_vec())
    }

    /// Validator with a custom rule table, evaluated in order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The highest-precedence failing rule, if any.
    pub fn first_failure(&self, details: &ContactDetails) -> Option<ValidationError> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(details).err())
    }

    /// Validate the whole object.
    pub fn validate(&self, details: &ContactDetails) -> Validation {
        match self.first_failure(details) {
            None => Validation::Valid,
            Some(err) => {
                tracing::trace!(rule = ?err, "Validation failed");
                Validation::Invalid(err.to_string())
            }
        }
    }
}

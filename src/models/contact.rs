//! Contact details collected by the form.

use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four values the contact form collects.
///
/// Every field is always present. The default value is the form's initial
/// "empty" state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    /// Full name as typed
    pub name: String,

    /// Email address as typed
    pub email: String,

    /// Birthdate in `YYYY-MM-DD` form, or empty
    #[serde(default)]
    pub birth_date: String,

    /// Whether the person agreed to be contacted via email
    #[serde(default)]
    pub email_consent: bool,
}

impl ContactDetails {
    /// Create contact details from all four values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: impl Into<String>,
        email_consent: bool,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            birth_date: birth_date.into(),
            email_consent,
        }
    }

    /// True when every field still holds its initial value.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.birth_date.is_empty()
            && !self.email_consent
    }

    /// Read one field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::BirthDate => FieldValue::Text(self.birth_date.clone()),
            Field::EmailConsent => FieldValue::Flag(self.email_consent),
        }
    }

    /// Replace exactly one field, leaving the others untouched.
    ///
    /// # Errors
    ///
    /// Returns `FormError::FieldTypeMismatch` when the value kind does not
    /// fit the field. The details are unchanged in that case.
    pub fn set(&mut self, field: Field, value: FieldValue) -> FormResult<()> {
        match (field, value) {
            (Field::Name, FieldValue::Text(text)) => self.name = text,
            (Field::Email, FieldValue::Text(text)) => self.email = text,
            (Field::BirthDate, FieldValue::Text(text)) => self.birth_date = text,
            (Field::EmailConsent, FieldValue::Flag(flag)) => self.email_consent = flag,
            (field, _) => {
                return Err(FormError::FieldTypeMismatch {
                    field: field.name(),
                    expected: field.kind(),
                })
            }
        }
        Ok(())
    }
}

/// Names the fields of `ContactDetails`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    BirthDate,
    EmailConsent,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::BirthDate,
        Field::EmailConsent,
    ];

    /// Wire name of the field, as used in the JSON body.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::BirthDate => "birthDate",
            Field::EmailConsent => "emailConsent",
        }
    }

    /// Human label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::BirthDate => "Birthdate",
            Field::EmailConsent => "I agree to be contacted via email",
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Field::EmailConsent => "boolean",
            _ => "text",
        }
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "birthDate" | "birthdate" | "birth_date" => Ok(Field::BirthDate),
            "emailConsent" | "email_consent" | "consent" => Ok(Field::EmailConsent),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value assigned to a field: text inputs carry text, the checkbox a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

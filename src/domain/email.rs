//! Email address shape check.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shape accepted by an HTML `input type=email`.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email shape pattern is valid")
});

/// Check that `email` is present and shaped like an address.
///
/// # Errors
///
/// Returns `ValidationError::EmailRequired` for an empty string and
/// `ValidationError::InvalidEmail` if the shape does not match.
///
/// # Example
///
/// ```
/// use contact_form::domain::{check_email, ValidationError};
///
/// assert!(check_email("dale@example.com").is_ok());
/// assert_eq!(check_email("dale"), Err(ValidationError::InvalidEmail));
/// ```
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

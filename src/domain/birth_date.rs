//! Birthdate format check.

use super::errors::ValidationError;
use chrono::NaiveDate;

/// Format produced by an HTML date input.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check an optional birthdate field. Empty is allowed; anything else must
/// be a real `YYYY-MM-DD` calendar date exactly as entered, since the text
/// is submitted as typed.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthDate` for `1990-02-30`, other
/// formats, or surrounding whitespace.
///
/// # Example
///
/// ```
/// use contact_form::domain::check_birth_date;
///
/// assert!(check_birth_date("").is_ok());
/// assert!(check_birth_date("1990-01-01").is_ok());
/// assert!(check_birth_date("1990-02-30").is_err());
/// ```
pub fn check_birth_date(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Ok(());
    }
    if text.trim() != text {
        return Err(ValidationError::InvalidBirthDate);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidBirthDate)
}

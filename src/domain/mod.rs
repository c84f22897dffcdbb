//! Domain checks and error kinds.
//!
//! Field-level checks for the values a contact form collects. Each check
//! reports the `ValidationError` the rule table shows to the user.

pub mod birth_date;
pub mod email;
pub mod errors;

pub use birth_date::check_birth_date;
pub use email::check_email;
pub use errors::ValidationError;

//! Error types for the contact form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when submitting contact details to the remote endpoint.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Endpoint returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Endpoint answered, but not with 201 Created
    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },

    /// Failed to serialize the request or parse the response
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by form mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field with this name exists on the form
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The value kind does not fit the field (text into a checkbox, etc.)
    #[error("Field {field} expects a {expected} value")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

//! Contact Form - collect, validate and submit contact details.
//!
//! This library implements a single contact form: four fields, an ordered
//! validation rule table, and one JSON POST to a remote endpoint that
//! signals acceptance with `201 Created`.
//!
//! # Architecture
//!
//! - **models**: The contact details and field addressing
//! - **domain**: Email and birthdate checks
//! - **validation**: Ordered rule table producing a single error message
//! - **form**: State holder, async controller and view snapshots
//! - **client**: HTTP submission client and its async wrapper
//! - **ui**: Terminal commands and text rendering
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Submission and validation counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod ui;
pub mod validation;

pub use client::{AsyncContactClient, ContactClient, ContactSubmitter, SubmitReceipt};
pub use config::Config;
pub use error::{ConfigError, FormError, SubmitError};
pub use form::{
    ContactForm, ControllerOptions, FormController, FormStatus, FormView, SubmitOutcome,
};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactDetails, Field, FieldValue};
pub use validation::{Validation, Validator};

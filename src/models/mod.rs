//! Data models for the contact form.
//!
//! This module contains the contact details the form collects and the
//! types used to address and assign individual fields.

pub mod contact;

pub use contact::{ContactDetails, Field, FieldValue};

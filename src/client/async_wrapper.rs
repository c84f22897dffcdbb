//! Async wrapper around the synchronous ContactClient.
//!
//! This module provides an async interface to the synchronous ContactClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! so the form stays responsive while a submission is pending.

use super::{ContactClient, SubmitReceipt};
use crate::error::{SubmitError, SubmitResult};
use crate::models::ContactDetails;
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can deliver validated contact details.
///
/// The form controller only talks to this trait, so tests can substitute an
/// in-memory submitter for the HTTP client.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, details: &ContactDetails) -> SubmitResult<SubmitReceipt>;
}

/// Async wrapper around synchronous ContactClient.
#[derive(Clone)]
pub struct AsyncContactClient {
    client: Arc<ContactClient>,
}

impl AsyncContactClient {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &ContactClient {
        &self.client
    }
}

#[async_trait]
impl ContactSubmitter for AsyncContactClient {
    async fn submit(&self, details: &ContactDetails) -> SubmitResult<SubmitReceipt> {
        let client = self.client.clone();
        let details = details.clone();

        tokio::task::spawn_blocking(move || client.submit(&details))
            .await
            .map_err(|e| SubmitError::HttpError(format!("Task join error: {}", e)))?
    }
}

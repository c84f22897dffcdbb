use async_trait::async_trait;
use contact_form::client::{ContactSubmitter, SubmitReceipt};
use contact_form::error::{SubmitError, SubmitResult};
use contact_form::models::ContactDetails;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Canned answer for the next submission.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockResponse {
    Created(Option<String>),
    Status(u16),
    Timeout,
}

/// Mock submitter for testing.
///
/// Records every submitted payload and answers with a configurable
/// response. When gated, submissions wait until `release` is called.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmitter {
    response: Arc<Mutex<MockResponse>>,
    submitted: Arc<Mutex<Vec<ContactDetails>>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockSubmitter {
    /// Create a submitter that answers 201 Created.
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(MockResponse::Created(Some("11".to_string())))),
            submitted: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Create a submitter that holds every request until released.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    pub fn respond_with(&self, response: MockResponse) {
        *self.response.lock().unwrap() = response;
    }

    /// Let one held request complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn submitted(&self) -> Vec<ContactDetails> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactSubmitter for MockSubmitter {
    async fn submit(&self, details: &ContactDetails) -> SubmitResult<SubmitReceipt> {
        self.submitted.lock().unwrap().push(details.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let response = self.response.lock().unwrap().clone();
        match response {
            MockResponse::Created(id) => Ok(SubmitReceipt { status: 201, id }),
            MockResponse::Status(status) if status < 300 => {
                Err(SubmitError::UnexpectedStatus { status })
            }
            MockResponse::Status(status) => Err(SubmitError::ApiError {
                status,
                message: "mock failure".to_string(),
            }),
            MockResponse::Timeout => Err(SubmitError::Timeout),
        }
    }
}

//! Async controller around the form state.
//!
//! The controller owns the single `ContactForm` and is the only writer to
//! it. Every change is published as a `FormView` on a watch channel, so a
//! renderer subscribes once and redraws whenever something moves.

use super::state::{ContactForm, PendingValidation};
use super::view::FormView;
use crate::client::{ContactSubmitter, SubmitReceipt};
use crate::config::{Config, DEFAULT_SUCCESS_BANNER_MS};
use crate::error::FormResult;
use crate::metrics::Metrics;
use crate::models::{Field, FieldValue};
use crate::validation::Validator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Behaviour knobs for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// How long the success banner stays up
    pub banner_duration: Duration,

    /// Clear the fields once a submission is accepted
    pub clear_on_success: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            banner_duration: Duration::from_millis(DEFAULT_SUCCESS_BANNER_MS),
            clear_on_success: false,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            banner_duration: config.success_banner_duration(),
            clear_on_success: config.clear_on_success,
        }
    }
}

/// Result of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(String),
    /// The endpoint answered 201 Created
    Accepted(SubmitReceipt),
    /// The request failed or was not answered with 201
    Failed(String),
    /// Another submission is still in flight
    Busy,
}

/// Handle to a scheduled revalidation.
#[derive(Debug)]
pub struct Revalidation {
    handle: Option<JoinHandle<bool>>,
}

impl Revalidation {
    fn skipped() -> Self {
        Self { handle: None }
    }

    /// False when the change left the form empty and nothing was scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }

    /// Wait for the revalidation; true if its result was applied.
    pub async fn settled(self) -> bool {
        match self.handle {
            Some(handle) => handle.await.unwrap_or(false),
            None => false,
        }
    }
}

/// Event-driven shell around `ContactForm`.
#[derive(Clone)]
pub struct FormController {
    form: Arc<Mutex<ContactForm>>,
    validator: Arc<Validator>,
    submitter: Arc<dyn ContactSubmitter>,
    options: ControllerOptions,
    updates: Arc<watch::Sender<FormView>>,
    metrics: Metrics,
}

impl FormController {
    pub fn new(submitter: Arc<dyn ContactSubmitter>, options: ControllerOptions) -> Self {
        let (updates, _) = watch::channel(FormView::default());

        Self {
            form: Arc::new(Mutex::new(ContactForm::new())),
            validator: Arc::new(Validator::new()),
            submitter,
            options,
            updates: Arc::new(updates),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    /// Receive a fresh `FormView` after every change.
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.updates.subscribe()
    }

    pub async fn view(&self) -> FormView {
        self.form.lock().await.view()
    }

    fn publish(&self, form: &ContactForm) {
        self.updates.send_replace(form.view());
    }

    /// Replace one field and schedule revalidation.
    pub async fn set_field(&self, field: Field, value: FieldValue) -> FormResult<Revalidation> {
        let pending = {
            let mut form = self.form.lock().await;
            let pending = form.set_field(field, value)?;
            self.publish(&form);
            pending
        };
        debug!(field = %field, "Field updated");
        Ok(self.schedule(pending))
    }

    /// Flip the consent checkbox and schedule revalidation.
    pub async fn toggle_consent(&self) -> Revalidation {
        let pending = {
            let mut form = self.form.lock().await;
            let pending = form.toggle_consent();
            self.publish(&form);
            pending
        };
        self.schedule(pending)
    }

    /// Restore the initial values and clear the error.
    pub async fn reset(&self) {
        let mut form = self.form.lock().await;
        form.reset();
        self.publish(&form);
        debug!("Form reset");
    }

    fn schedule(&self, pending: Option<PendingValidation>) -> Revalidation {
        match pending {
            None => Revalidation::skipped(),
            Some(pending) => {
                let this = self.clone();
                Revalidation {
                    handle: Some(tokio::spawn(async move { this.revalidate(pending).await })),
                }
            }
        }
    }

    async fn revalidate(&self, pending: PendingValidation) -> bool {
        let outcome = self.validator.validate(&pending.details);

        let mut form = self.form.lock().await;
        let applied = form.apply_validation(pending.revision, &outcome);
        self.metrics.record_validation(applied);

        if applied {
            self.publish(&form);
        } else {
            debug!(
                revision = pending.revision,
                current = form.revision(),
                "Dropping stale validation result"
            );
        }
        applied
    }

    /// Validate synchronously, then POST the details.
    ///
    /// The form lock is not held while the request is in flight, so edits
    /// and resets stay possible during submission.
    pub async fn submit(&self) -> SubmitOutcome {
        let details = {
            let mut form = self.form.lock().await;
            if form.is_submitting() {
                return SubmitOutcome::Busy;
            }
            let result = form.begin_submit(&self.validator);
            self.publish(&form);
            match result {
                Ok(details) => details,
                Err(message) => {
                    debug!(%message, "Submit blocked by validation");
                    return SubmitOutcome::Invalid(message);
                }
            }
        };

        let result = self.submitter.submit(&details).await;

        let mut form = self.form.lock().await;
        match result {
            Ok(receipt) => {
                self.metrics.record_submission_accepted();
                info!(id = ?receipt.id, "Contact details submitted");

                let generation = form.finish_accepted(self.options.clear_on_success);
                self.publish(&form);
                drop(form);

                self.schedule_banner_hide(generation);
                SubmitOutcome::Accepted(receipt)
            }
            Err(e) => {
                self.metrics.record_submission_failed();
                warn!("Submission failed: {}", e);

                form.finish_failed();
                self.publish(&form);
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Single-shot timer that hides the banner it was started for.
    fn schedule_banner_hide(&self, generation: u64) {
        let this = self.clone();
        let duration = self.options.banner_duration;

        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut form = this.form.lock().await;
            if form.hide_banner(generation) {
                debug!(generation, "Success banner hidden");
                this.publish(&form);
            }
        });
    }
}

//! Integration tests for the async form controller.

mod mocks;

use contact_form::form::{ControllerOptions, FormController, FormStatus, SubmitOutcome};
use contact_form::form::SUBMIT_FAILED_MESSAGE;
use contact_form::{ContactDetails, ContactSubmitter, Field, FieldValue};
use mocks::{MockResponse, MockSubmitter};
use std::sync::Arc;
use std::time::Duration;

fn controller_with(submitter: &MockSubmitter, options: ControllerOptions) -> FormController {
    FormController::new(
        Arc::new(submitter.clone()) as Arc<dyn ContactSubmitter>,
        options,
    )
}

async fn fill(controller: &FormController, details: &ContactDetails) {
    for field in Field::ALL {
        controller
            .set_field(field, details.get(field))
            .await
            .unwrap()
            .settled()
            .await;
    }
}

fn dale() -> ContactDetails {
    ContactDetails::new("Dale", "dale@example.com", "1990-01-01", true)
}

#[tokio::test]
async fn test_fresh_form_shows_no_error() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let view = controller.view().await;
    assert_eq!(view.error, None);
    assert!(!view.submit_enabled);
    assert_eq!(view.status, FormStatus::Empty);
}

#[tokio::test]
async fn test_valid_details_enable_submit() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    fill(&controller, &dale()).await;

    let view = controller.view().await;
    assert_eq!(view.error, None);
    assert!(view.submit_enabled);
    assert_eq!(view.status, FormStatus::EditingValid);
}

#[tokio::test]
async fn test_invalid_email_shows_message() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let mut details = dale();
    details.email = "not-an-email".to_string();
    fill(&controller, &details).await;

    let view = controller.view().await;
    assert_eq!(view.error.as_deref(), Some("Invalid email"));
    assert!(!view.submit_enabled);
}

#[tokio::test]
async fn test_stale_revalidation_is_dropped() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let first = controller
        .set_field(Field::Name, "Dale".into())
        .await
        .unwrap();
    let second = controller
        .set_field(Field::Email, "bad".into())
        .await
        .unwrap();

    assert!(!first.settled().await);
    assert!(second.settled().await);

    let view = controller.view().await;
    assert_eq!(view.error.as_deref(), Some("Invalid email"));
    assert_eq!(controller.metrics().validations_total(), 2);
    assert_eq!(controller.metrics().stale_validations_total(), 1);
}

#[tokio::test]
async fn test_returning_to_empty_skips_validation() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    controller
        .set_field(Field::Name, "D".into())
        .await
        .unwrap()
        .settled()
        .await;
    assert!(controller.view().await.error.is_some());

    let revalidation = controller.set_field(Field::Name, "".into()).await.unwrap();
    assert!(!revalidation.is_scheduled());

    let view = controller.view().await;
    assert_eq!(view.error, None);
    assert!(!view.submit_enabled);
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let mut details = dale();
    details.birth_date = "1990-02-30".to_string();
    fill(&controller, &details).await;
    assert_eq!(
        controller.view().await.error.as_deref(),
        Some("Birthdate must be a valid date")
    );

    controller.reset().await;

    let view = controller.view().await;
    assert_eq!(view.details, ContactDetails::default());
    assert_eq!(view.error, None);
    assert_eq!(view.status, FormStatus::Empty);
}

#[tokio::test]
async fn test_reset_discards_in_flight_revalidation() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let pending = controller
        .set_field(Field::Name, "Dale".into())
        .await
        .unwrap();
    controller.reset().await;

    assert!(!pending.settled().await);
    assert_eq!(controller.view().await.error, None);
}

#[tokio::test]
async fn test_toggle_consent() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let mut details = dale();
    details.email_consent = false;
    fill(&controller, &details).await;
    assert_eq!(
        controller.view().await.error.as_deref(),
        Some("Must agree to being contacted via email")
    );

    controller.toggle_consent().await.settled().await;

    let view = controller.view().await;
    assert!(view.details.email_consent);
    assert!(view.submit_enabled);
}

#[tokio::test]
async fn test_set_field_type_mismatch() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let result = controller
        .set_field(Field::EmailConsent, FieldValue::Text("yes".to_string()))
        .await;
    assert!(result.is_err());
    assert!(controller.view().await.details.is_empty());
}

#[tokio::test]
async fn test_submit_invalid_does_not_send() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid("Name is required".to_string()));
    assert_eq!(submitter.call_count(), 0);
    assert_eq!(
        controller.view().await.error.as_deref(),
        Some("Name is required")
    );
}

#[tokio::test]
async fn test_submit_sends_details_and_keeps_fields() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());
    fill(&controller, &dale()).await;

    let outcome = controller.submit().await;

    match outcome {
        SubmitOutcome::Accepted(receipt) => {
            assert_eq!(receipt.status, 201);
            assert_eq!(receipt.id.as_deref(), Some("11"));
        }
        other => panic!("Expected Accepted, got: {:?}", other),
    }
    assert_eq!(submitter.submitted(), vec![dale()]);

    let view = controller.view().await;
    assert!(view.banner_visible);
    assert_eq!(view.status, FormStatus::Success);
    assert_eq!(view.details, dale());
    assert_eq!(controller.metrics().submissions_accepted_total(), 1);
}

#[tokio::test]
async fn test_submit_can_clear_fields() {
    let submitter = MockSubmitter::new();
    let options = ControllerOptions {
        clear_on_success: true,
        ..ControllerOptions::default()
    };
    let controller = controller_with(&submitter, options);
    fill(&controller, &dale()).await;

    assert!(matches!(controller.submit().await, SubmitOutcome::Accepted(_)));

    let view = controller.view().await;
    assert!(view.details.is_empty());
    assert!(view.banner_visible);
}

#[tokio::test(start_paused = true)]
async fn test_banner_hides_after_exactly_four_seconds() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());
    fill(&controller, &dale()).await;
    let mut updates = controller.subscribe();

    assert!(matches!(controller.submit().await, SubmitOutcome::Accepted(_)));
    let shown_at = tokio::time::Instant::now();
    assert!(updates.borrow_and_update().banner_visible);

    tokio::time::sleep(Duration::from_millis(3999)).await;
    assert!(controller.view().await.banner_visible);

    loop {
        updates.changed().await.unwrap();
        if !updates.borrow_and_update().banner_visible {
            break;
        }
    }

    assert_eq!(shown_at.elapsed(), Duration::from_millis(4000));
    assert_eq!(controller.view().await.status, FormStatus::EditingValid);
}

#[tokio::test(start_paused = true)]
async fn test_banner_duration_is_configurable() {
    let submitter = MockSubmitter::new();
    let options = ControllerOptions {
        banner_duration: Duration::from_millis(250),
        ..ControllerOptions::default()
    };
    let controller = controller_with(&submitter, options);
    fill(&controller, &dale()).await;

    controller.submit().await;
    assert!(controller.view().await.banner_visible);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!controller.view().await.banner_visible);
}

#[tokio::test]
async fn test_non_created_response_reports_failure() {
    let submitter = MockSubmitter::new();
    submitter.respond_with(MockResponse::Status(200));
    let controller = controller_with(&submitter, ControllerOptions::default());
    fill(&controller, &dale()).await;

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Unexpected response status: 200".to_string())
    );
    let view = controller.view().await;
    assert!(!view.banner_visible);
    assert_eq!(view.failure.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert_eq!(view.error, None);
    assert!(view.submit_enabled);
    assert_eq!(controller.metrics().submissions_failed_total(), 1);
}

#[tokio::test]
async fn test_timeout_reports_failure() {
    let submitter = MockSubmitter::new();
    submitter.respond_with(MockResponse::Timeout);
    let controller = controller_with(&submitter, ControllerOptions::default());
    fill(&controller, &dale()).await;

    assert_eq!(
        controller.submit().await,
        SubmitOutcome::Failed("Request timeout".to_string())
    );
    assert_eq!(controller.view().await.status, FormStatus::EditingValid);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_busy() {
    let submitter = MockSubmitter::gated();
    let controller = controller_with(&submitter, ControllerOptions::default());
    fill(&controller, &dale()).await;

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };
    while submitter.call_count() == 0 {
        tokio::task::yield_now().await;
    }

    let view = controller.view().await;
    assert_eq!(view.status, FormStatus::Submitting);
    assert!(!view.submit_enabled);
    assert_eq!(controller.submit().await, SubmitOutcome::Busy);

    submitter.release();
    assert!(matches!(first.await.unwrap(), SubmitOutcome::Accepted(_)));
    assert_eq!(submitter.call_count(), 1);
}

#[tokio::test]
async fn test_subscribers_see_every_change() {
    let submitter = MockSubmitter::new();
    let controller = controller_with(&submitter, ControllerOptions::default());
    let mut updates = controller.subscribe();

    controller
        .set_field(Field::Name, "Dale".into())
        .await
        .unwrap()
        .settled()
        .await;

    assert!(updates.has_changed().unwrap());
    let view = updates.borrow_and_update().clone();
    assert_eq!(view.details.name, "Dale");
    assert_eq!(view.error.as_deref(), Some("Email is required"));
}

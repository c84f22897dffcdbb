//! Contact Form - Main entry point
//!
//! Renders the contact form on stdout and drives it from line commands on
//! stdin. Logs go to stderr so they never interleave with the form.

use anyhow::Result;
use contact_form::client::{AsyncContactClient, ContactSubmitter};
use contact_form::ui::{self, Command, Flow, Session};
use contact_form::{Config, ContactClient, ControllerOptions, FormController, Metrics};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries the form)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Submitting to {}", config.endpoint_url);

    let metrics = Metrics::new();
    let client = ContactClient::new(&config).with_metrics(metrics.clone());
    let submitter = Arc::new(AsyncContactClient::new(client)) as Arc<dyn ContactSubmitter>;
    let controller =
        FormController::new(submitter, ControllerOptions::from(&config)).with_metrics(metrics);

    // Redraw on every published change
    let mut updates = controller.subscribe();
    let renderer = tokio::spawn(async move {
        println!("{}", ui::render(&updates.borrow_and_update()));
        while updates.changed().await.is_ok() {
            println!("{}", ui::render(&updates.borrow_and_update()));
        }
    });

    println!("{}", ui::HELP);

    let mut session = Session::new(controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.dispatch(command).await {
            Flow::Continue => {}
            Flow::Message(message) => println!("{}", message),
            Flow::Redraw => println!("{}", ui::render(&session.controller().view().await)),
            Flow::Exit => break,
        }
    }

    // The request itself is bounded by the client timeout.
    session.finish().await;
    renderer.abort();

    let summary = session.controller().metrics().summary();
    info!(
        accepted = summary.submissions_accepted_total,
        failed = summary.submissions_failed_total,
        validations = summary.validations_total,
        stale = summary.stale_validations_total,
        "Contact form closed"
    );
    if summary.http_errors_total > 0 {
        error!("{} submission request(s) failed", summary.http_errors_total);
    }

    Ok(())
}

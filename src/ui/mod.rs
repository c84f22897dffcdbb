//! Terminal surface for the form: line commands in, rendered text out.

pub mod command;
pub mod render;

pub use command::{Command, CommandError, HELP};
pub use render::render;

use crate::form::{FormController, SubmitOutcome};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Shown when `submit` is typed while the button is disabled.
pub const SUBMIT_DISABLED: &str = "Submit is disabled until the form is valid";

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Print this message, then continue
    Message(String),
    /// Redraw the current form
    Redraw,
    Exit,
}

/// One terminal session over a form controller.
///
/// Submissions run in the background so the prompt stays responsive; the
/// session keeps their handles so none is lost on exit.
pub struct Session {
    controller: FormController,
    submissions: JoinSet<SubmitOutcome>,
}

impl Session {
    pub fn new(controller: FormController) -> Self {
        Self {
            controller,
            submissions: JoinSet::new(),
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Apply one command to the form.
    ///
    /// Rendering happens through the controller's subscription, so most
    /// commands return `Flow::Continue`.
    pub async fn dispatch(&mut self, command: Command) -> Flow {
        debug!(?command, "Dispatching command");
        match command {
            Command::Set(field, value) => match self.controller.set_field(field, value).await {
                Ok(_) => Flow::Continue,
                Err(e) => Flow::Message(e.to_string()),
            },
            Command::Toggle => {
                self.controller.toggle_consent().await;
                Flow::Continue
            }
            Command::Clear => {
                self.controller.reset().await;
                Flow::Continue
            }
            Command::Submit => {
                // A disabled button does nothing, not even validate.
                if !self.controller.view().await.submit_enabled {
                    return Flow::Message(SUBMIT_DISABLED.to_string());
                }
                while self.submissions.try_join_next().is_some() {}

                let controller = self.controller.clone();
                self.submissions.spawn(async move { controller.submit().await });
                Flow::Continue
            }
            Command::Show => Flow::Redraw,
            Command::Help => Flow::Message(HELP.to_string()),
            Command::Quit => Flow::Exit,
        }
    }

    /// Wait for every submission still in flight.
    ///
    /// Returns how many outcomes were collected.
    pub async fn finish(&mut self) -> usize {
        if !self.submissions.is_empty() {
            info!("Waiting for in-flight submission");
        }

        let mut collected = 0;
        while let Some(result) = self.submissions.join_next().await {
            match result {
                Ok(outcome) => debug!(?outcome, "Submission finished"),
                Err(e) => warn!("Submission task ended abnormally: {}", e),
            }
            collected += 1;
        }
        collected
    }
}

//! The contact form: state holder, async controller and view snapshots.

pub mod controller;
pub mod state;
pub mod view;

pub use controller::{ControllerOptions, FormController, Revalidation, SubmitOutcome};
pub use state::{ContactForm, PendingValidation, SUBMIT_FAILED_MESSAGE};
pub use view::{FormStatus, FormView};

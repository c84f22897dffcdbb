//! Plain-text rendering of a form snapshot.

use crate::form::FormView;
use crate::models::Field;
use std::fmt::Write;

pub const TITLE: &str = "Contact Us";
pub const SUCCESS_BANNER: &str = "Success!";

/// Draw the form as it should appear right now.
pub fn render(view: &FormView) -> String {
    let mut out = String::new();
    let details = &view.details;

    let _ = writeln!(out, "== {} ==", TITLE);

    if view.banner_visible {
        let _ = writeln!(out, "  {}", SUCCESS_BANNER);
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "  ! {}", error);
    }
    if let Some(failure) = &view.failure {
        let _ = writeln!(out, "  ! {}", failure);
    }

    let _ = writeln!(out, "  {}: {}", Field::Name.label(), details.name);
    let _ = writeln!(out, "  {}: {}", Field::Email.label(), details.email);
    let _ = writeln!(out, "  {}: {}", Field::BirthDate.label(), details.birth_date);
    let _ = writeln!(
        out,
        "  [{}] {}",
        if details.email_consent { "x" } else { " " },
        Field::EmailConsent.label()
    );

    let submit = if view.submit_enabled {
        "[submit]"
    } else {
        "[submit (disabled)]"
    };
    let _ = writeln!(out, "  {} [clear]", submit);

    out
}

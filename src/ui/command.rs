//! Line commands typed at the terminal.

use crate::error::FormError;
use crate::models::{Field, FieldValue};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help')")]
    UnknownCommand(String),

    #[error("Usage: set <field> <value>")]
    MissingField,

    #[error(transparent)]
    Field(#[from] FormError),

    #[error("Expected true or false, got: {0}")]
    InvalidFlag(String),
}

/// A user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a field's value
    Set(Field, FieldValue),
    /// Flip the consent checkbox
    Toggle,
    Submit,
    /// The form's "clear" button
    Clear,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set <field> <value>   fields: name, email, birthDate (YYYY-MM-DD), emailConsent (true/false)
  toggle                toggle the email consent checkbox
  submit                validate and send the form
  clear                 reset every field
  show                  redraw the form
  quit                  exit";

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Text values keep their inner spacing but not the gap after the
    /// field name; `set name` with no value empties the field.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "set" => Self::parse_set(rest)?,
            "toggle" => Command::Toggle,
            "submit" => Command::Submit,
            "clear" | "reset" => Command::Clear,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }

    fn parse_set(rest: &str) -> Result<Self, CommandError> {
        let rest = rest.trim_start();
        let (name, value) = match rest.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value.trim_start().trim_end_matches(['\r', '\n'])),
            None => (rest.trim_end(), ""),
        };
        if name.is_empty() {
            return Err(CommandError::MissingField);
        }

        let field = Field::from_str(name)?;
        let value = match field {
            Field::EmailConsent => FieldValue::Flag(parse_flag(value.trim())?),
            _ => FieldValue::Text(value.to_string()),
        };
        Ok(Command::Set(field, value))
    }
}

fn parse_flag(text: &str) -> Result<bool, CommandError> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(CommandError::InvalidFlag(text.to_string())),
    }
}

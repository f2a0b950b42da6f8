//! Shell events and their line syntax.
//!
//! ```text
//! goto /user
//! login | register | logout
//! edit
//! set email jane@example.com
//! submit | save
//! cancel
//! show
//! ```

use crate::error::ShellError;
use crate::profile::ProfileField;
use std::str::FromStr;

/// One user interaction delivered to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(String),
    Login,
    Register,
    Logout,
    Edit,
    FieldChange(ProfileField, String),
    Submit,
    Cancel,
    Show,
}

impl Event {
    /// Parse a script line. Blank lines and `#` comments yield `None`.
    ///
    /// Only the line terminator is stripped; a `set` value keeps any trailing
    /// whitespace.
    pub fn parse_line(line: &str) -> Result<Option<Event>, ShellError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Event::Navigate(_) => "goto",
            Event::Login => "login",
            Event::Register => "register",
            Event::Logout => "logout",
            Event::Edit => "edit",
            Event::FieldChange(..) => "set",
            Event::Submit => "submit",
            Event::Cancel => "cancel",
            Event::Show => "show",
        }
    }
}

impl FromStr for Event {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (verb, rest) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (s, ""),
        };

        let no_args = |event: Event| {
            if rest.trim().is_empty() {
                Ok(event)
            } else {
                Err(ShellError::InvalidEvent(format!(
                    "`{}` takes no arguments",
                    verb
                )))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "goto" | "go" | "navigate" => {
                let path = rest.trim();
                if path.is_empty() {
                    Err(ShellError::InvalidEvent("`goto` needs a path".to_string()))
                } else {
                    Ok(Event::Navigate(path.to_string()))
                }
            }
            "login" => no_args(Event::Login),
            "register" => no_args(Event::Register),
            "logout" => no_args(Event::Logout),
            "edit" => no_args(Event::Edit),
            "submit" | "save" => no_args(Event::Submit),
            "cancel" => no_args(Event::Cancel),
            "show" => no_args(Event::Show),
            "set" => {
                // value is everything after the single space following the field
                let rest = rest.trim_start();
                let (field, value) = match rest.split_once(' ') {
                    Some((field, value)) => (field, value),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(ShellError::InvalidEvent(
                        "`set` needs a field and a value".to_string(),
                    ));
                }
                let field: ProfileField = field.parse()?;
                Ok(Event::FieldChange(field, value.to_string()))
            }
            other => Err(ShellError::InvalidEvent(format!("unknown command `{}`", other))),
        }
    }
}

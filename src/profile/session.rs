//! Edit session controller
//!
//! Holds the committed profile and, while editing, a draft copy. The draft is
//! only reachable through `update_field` and becomes the committed record only
//! when `submit` finds no validation errors.
//!
//! Transitions:
//!
//! | from    | operation      | to                                  |
//! |---------|----------------|-------------------------------------|
//! | Viewing | `begin_edit`   | Editing                             |
//! | Editing | `update_field` | Editing                             |
//! | Editing | `submit`       | Viewing (valid) / Editing (invalid) |
//! | Editing | `cancel`       | Viewing                             |
//!
//! Any other call is an integration bug and returns
//! [`ProfileError::InvalidStateTransition`].

use crate::error::ProfileError;
use crate::profile::record::{ProfileField, ProfileRecord};
use crate::profile::requirements::{checklist_state, PasswordRequirement};
use crate::profile::validation::{validate, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Profile screen mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Viewing,
    Editing,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Viewing => f.write_str("viewing"),
            Mode::Editing => f.write_str("editing"),
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was valid and is now the committed record
    Committed,
    /// Draft was invalid; nothing was applied
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed)
    }
}

/// Draft state that only exists while editing
#[derive(Debug, Clone)]
struct Draft {
    record: ProfileRecord,
    errors: ValidationErrors,
    touched: BTreeSet<ProfileField>,
    submit_attempted: bool,
}

impl Draft {
    fn from_committed(committed: &ProfileRecord) -> Self {
        let record = committed.clone();
        let errors = validate(&record);
        Self {
            record,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
        }
    }
}

/// One profile view's edit workflow
#[derive(Debug, Clone)]
pub struct EditSession {
    committed: ProfileRecord,
    draft: Option<Draft>,
}

impl EditSession {
    /// Start in viewing mode with `committed` as the current record
    pub fn new(committed: ProfileRecord) -> Self {
        Self {
            committed,
            draft: None,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.draft.is_some() {
            Mode::Editing
        } else {
            Mode::Viewing
        }
    }

    pub fn committed(&self) -> &ProfileRecord {
        &self.committed
    }

    pub fn draft(&self) -> Option<&ProfileRecord> {
        self.draft.as_ref().map(|d| &d.record)
    }

    /// Draft while editing, committed record while viewing
    pub fn current(&self) -> &ProfileRecord {
        self.draft().unwrap_or(&self.committed)
    }

    /// Full error set for the draft; empty while viewing
    pub fn errors(&self) -> ValidationErrors {
        self.draft
            .as_ref()
            .map(|d| d.errors.clone())
            .unwrap_or_default()
    }

    /// Errors the form should display right now.
    ///
    /// Before the first submit attempt only fields changed in this edit show
    /// their errors; afterwards every failing field does.
    pub fn visible_errors(&self) -> ValidationErrors {
        match &self.draft {
            Some(d) if d.submit_attempted => d.errors.clone(),
            Some(d) => d.errors.filtered(|field| d.touched.contains(&field)),
            None => ValidationErrors::new(),
        }
    }

    /// Live password checklist for the current record
    pub fn checklist(&self) -> Vec<(&'static PasswordRequirement, bool)> {
        checklist_state(&self.current().password)
    }

    pub fn begin_edit(&mut self) -> Result<(), ProfileError> {
        self.require(Mode::Viewing, "begin edit")?;
        self.draft = Some(Draft::from_committed(&self.committed));
        debug!("Profile edit started");
        Ok(())
    }

    /// Apply a keystroke-level change to the draft. Any value is accepted;
    /// validity is reported through `errors`, not enforced here.
    pub fn update_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), ProfileError> {
        let Some(draft) = self.draft.as_mut() else {
            return Err(self.invalid_transition("update a field"));
        };
        draft.record.set(field, value);
        draft.touched.insert(field);
        draft.errors = validate(&draft.record);
        debug!(
            field = %field,
            valid = !draft.errors.contains(field),
            "Profile field updated"
        );
        Ok(())
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, ProfileError> {
        let draft = match self.draft.take() {
            Some(draft) => draft,
            None => return Err(self.invalid_transition("submit")),
        };

        let errors = validate(&draft.record);
        if errors.is_empty() {
            self.committed = draft.record;
            info!("Profile committed");
            return Ok(SubmitOutcome::Committed);
        }

        let failing: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
        warn!(fields = ?failing, "Profile submit rejected");
        self.draft = Some(Draft {
            errors: errors.clone(),
            submit_attempted: true,
            ..draft
        });
        Ok(SubmitOutcome::Rejected(errors))
    }

    pub fn cancel(&mut self) -> Result<(), ProfileError> {
        self.require(Mode::Editing, "cancel")?;
        self.draft = None;
        debug!("Profile edit cancelled");
        Ok(())
    }

    fn require(&self, expected: Mode, operation: &'static str) -> Result<(), ProfileError> {
        if self.mode() == expected {
            Ok(())
        } else {
            Err(self.invalid_transition(operation))
        }
    }

    fn invalid_transition(&self, operation: &'static str) -> ProfileError {
        let mode = self.mode();
        warn!(operation, %mode, "Invalid profile state transition");
        ProfileError::InvalidStateTransition { operation, mode }
    }
}

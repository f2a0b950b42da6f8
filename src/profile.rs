//! Profile domain: record model, password requirements, validation rules, and
//! the view/edit session state machine.

pub mod record;
pub mod requirements;
pub mod session;
pub mod validation;

pub use record::{ProfileField, ProfileRecord};
pub use requirements::{checklist_state, PasswordRequirement, RequirementKey, PASSWORD_REQUIREMENTS};
pub use session::{EditSession, Mode, SubmitOutcome};
pub use validation::{validate, validate_field, FieldError, FieldErrorKind, ValidationErrors};

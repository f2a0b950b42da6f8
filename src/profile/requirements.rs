//! Password requirements
//!
//! A fixed, ordered list of predicates. The same list drives the live
//! checklist shown while typing and the blocking password rule on submit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Stable identifier for each requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKey {
    Min,
    Uppercase,
    Lowercase,
    Number,
    Special,
}

impl RequirementKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RequirementKey::Min => "min",
            RequirementKey::Uppercase => "uppercase",
            RequirementKey::Lowercase => "lowercase",
            RequirementKey::Number => "number",
            RequirementKey::Special => "special",
        }
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single password rule
pub struct PasswordRequirement {
    pub key: RequirementKey,
    /// Checklist label
    pub label: &'static str,
    /// Message reported by validation when this is the first unmet rule
    pub message: &'static str,
    predicate: fn(&str) -> bool,
}

impl fmt::Debug for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRequirement")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

impl PasswordRequirement {
    pub fn is_satisfied(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

fn has_min_length(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase(pw: &str) -> bool {
    pw.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(pw: &str) -> bool {
    pw.chars().any(|c| c.is_ascii_lowercase())
}

fn has_number(pw: &str) -> bool {
    pw.chars().any(|c| c.is_ascii_digit())
}

// Anything outside A-Z a-z 0-9 counts, including whitespace and non-ASCII.
fn has_special(pw: &str) -> bool {
    pw.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Requirements in evaluation order: length, uppercase, lowercase, digit, symbol
pub static PASSWORD_REQUIREMENTS: [PasswordRequirement; 5] = [
    PasswordRequirement {
        key: RequirementKey::Min,
        label: "At least 8 characters",
        message: "Password must be at least 8 characters",
        predicate: has_min_length,
    },
    PasswordRequirement {
        key: RequirementKey::Uppercase,
        label: "At least 1 uppercase letter",
        message: "Password must contain at least one uppercase letter",
        predicate: has_uppercase,
    },
    PasswordRequirement {
        key: RequirementKey::Lowercase,
        label: "At least 1 lowercase letter",
        message: "Password must contain at least one lowercase letter",
        predicate: has_lowercase,
    },
    PasswordRequirement {
        key: RequirementKey::Number,
        label: "At least 1 number",
        message: "Password must contain at least one number",
        predicate: has_number,
    },
    PasswordRequirement {
        key: RequirementKey::Special,
        label: "At least 1 special character",
        message: "Password must contain at least one special character",
        predicate: has_special,
    },
];

/// Evaluate every requirement against `password`, in fixed order.
///
/// Non-blocking: callers use this for live feedback regardless of whether the
/// form has been submitted. The empty password satisfies none.
pub fn checklist_state(password: &str) -> Vec<(&'static PasswordRequirement, bool)> {
    PASSWORD_REQUIREMENTS
        .iter()
        .map(|req| (req, req.is_satisfied(password)))
        .collect()
}

/// First requirement `password` fails, if any
pub fn first_unmet(password: &str) -> Option<&'static PasswordRequirement> {
    PASSWORD_REQUIREMENTS
        .iter()
        .find(|req| !req.is_satisfied(password))
}

//! Profile validation rules
//!
//! Each field is checked by an independent, ordered list of rules; the first
//! failing rule supplies the field's message. Validation never fails as a
//! `Result`: an invalid record yields a populated [`ValidationErrors`].

use crate::profile::record::{ProfileField, ProfileRecord};
use crate::profile::requirements::{first_unmet, RequirementKey};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `local@domain` shape accepted by HTML email inputs
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Why a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    InvalidFormat,
    /// Password failed the named requirement
    Requirement(RequirementKey),
}

/// A field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn required(field: ProfileField) -> Self {
        Self::new(
            FieldErrorKind::Required,
            format!("{} is required", field.label()),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Field -> error mapping. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ProfileField, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ProfileField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: ProfileField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Fields with errors, in form order
    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &FieldError)> + '_ {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    /// Keep only the entries whose field passes `keep`
    pub fn filtered(&self, mut keep: impl FnMut(ProfileField) -> bool) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(field, _)| keep(**field))
                .map(|(field, err)| (*field, err.clone()))
                .collect(),
        )
    }
}

/// Validate a single field of `record`
pub fn validate_field(field: ProfileField, record: &ProfileRecord) -> Option<FieldError> {
    let value = record.get(field);
    match field {
        ProfileField::Name => {
            if value.trim().is_empty() {
                return Some(FieldError::required(field));
            }
        }
        ProfileField::Email => {
            if value.is_empty() {
                return Some(FieldError::required(field));
            }
            if !EMAIL_PATTERN.is_match(value) {
                return Some(FieldError::new(
                    FieldErrorKind::InvalidFormat,
                    "Invalid email address",
                ));
            }
        }
        ProfileField::Password => {
            if value.is_empty() {
                return Some(FieldError::required(field));
            }
            if let Some(req) = first_unmet(value) {
                return Some(FieldError::new(
                    FieldErrorKind::Requirement(req.key),
                    req.message,
                ));
            }
        }
        ProfileField::Bio => {
            if value.is_empty() {
                return Some(FieldError::required(field));
            }
        }
    }
    None
}

/// Validate every field of `record`. Pure and deterministic.
pub fn validate(record: &ProfileRecord) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in ProfileField::ALL {
        if let Some(err) = validate_field(field, record) {
            errors.insert(field, err);
        }
    }
    errors
}

//! Profile record and field addressing.

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user profile as shown on the profile screen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub bio: String,
}

impl ProfileRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            bio: bio.into(),
        }
    }

    /// Value of a single field
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Password => &self.password,
            ProfileField::Bio => &self.bio,
        }
    }

    /// Replace a single field. Any string is accepted.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Password => &mut self.password,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value.into();
    }

    /// Password rendered as one `*` per character
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

impl Default for ProfileRecord {
    /// The mock user the profile screen starts with.
    fn default() -> Self {
        Self::new("Jane Doe", "jane.doe@example.com", "password123", "")
    }
}

/// Addressable profile form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
    Password,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Password,
        ProfileField::Bio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Password => "password",
            ProfileField::Bio => "bio",
        }
    }

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Password => "Password",
            ProfileField::Bio => "Bio",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            "password" => Ok(ProfileField::Password),
            "bio" => Ok(ProfileField::Bio),
            other => Err(ProfileError::UnknownField(other.to_string())),
        }
    }
}

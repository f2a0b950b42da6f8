//! Header authentication state.
//!
//! There is no backing service: logging in or registering just installs a
//! canned user, and logging out clears it.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Username installed by "Log In"
pub const LOGIN_USERNAME: &str = "JohnDoe";
/// Username installed by "Register"
pub const REGISTER_USERNAME: &str = "NewUser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    user: Option<User>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self) {
        self.sign_in(LOGIN_USERNAME);
    }

    pub fn register(&mut self) {
        self.sign_in(REGISTER_USERNAME);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(username = %user.username, "User logged out");
        }
    }

    fn sign_in(&mut self, username: &str) {
        info!(username, "User signed in");
        self.user = Some(User {
            username: username.to_string(),
        });
    }
}

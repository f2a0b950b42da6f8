//! Static route table: path -> screen.

use crate::error::ShellError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens reachable by navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Home,
    User,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Home => f.write_str("home"),
            Screen::User => f.write_str("user"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
}

pub const HOME_PATH: &str = "/";
pub const USER_PATH: &str = "/user";

pub static ROUTES: [Route; 2] = [
    Route {
        path: HOME_PATH,
        screen: Screen::Home,
    },
    Route {
        path: USER_PATH,
        screen: Screen::User,
    },
];

/// Look up `path`. A single trailing slash is ignored (`/user/` == `/user`).
pub fn resolve(path: &str) -> Result<&'static Route, ShellError> {
    let trimmed = path.trim();
    let normalized = if trimmed.len() > 1 {
        trimmed.strip_suffix('/').unwrap_or(trimmed)
    } else {
        trimmed
    };
    ROUTES
        .iter()
        .find(|route| route.path == normalized)
        .ok_or_else(|| ShellError::RouteNotFound(path.to_string()))
}

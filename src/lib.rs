//! Profile Shell: a terminal application shell
//!
//! A header with mock login state, a two-route navigation table, a static home
//! screen, and a user-profile screen whose edit mode is backed by field
//! validation and a live password-requirements checklist.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod profile;
pub mod shell;

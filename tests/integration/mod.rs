//! Integration tests for the profile shell

mod cli_commands;
mod config_integration;
mod edit_session_workflow;
mod test_utils;
mod validation_rules;

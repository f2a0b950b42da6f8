//! Property-based tests for validation and edit-session guarantees

mod session_properties;
mod validation_properties;

//! CLI presentation: text and JSON formatters for command results.

use crate::error::ShellError;
use crate::profile::{PasswordRequirement, ProfileField, SubmitOutcome, ValidationErrors};
use crate::shell::Route;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

fn to_pretty(value: &serde_json::Value) -> Result<String, ShellError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn format_validation_result(
    errors: &ValidationErrors,
    format: &str,
) -> Result<String, ShellError> {
    if format == "json" {
        return to_pretty(&json!({
            "valid": errors.is_empty(),
            "errors": errors,
        }));
    }
    if errors.is_empty() {
        return Ok("Profile is valid".to_string());
    }
    let mut s = format!("Profile is invalid ({} field(s)):", errors.len());
    for (field, err) in errors.iter() {
        s.push_str(&format!("\n  - {}: {}", field, err));
    }
    Ok(s)
}

pub fn format_checklist(
    checklist: &[(&'static PasswordRequirement, bool)],
    format: &str,
) -> Result<String, ShellError> {
    if format == "json" {
        let items: Vec<serde_json::Value> = checklist
            .iter()
            .map(|(req, satisfied)| {
                json!({
                    "key": req.key,
                    "label": req.label,
                    "satisfied": satisfied,
                })
            })
            .collect();
        return to_pretty(&serde_json::Value::Array(items));
    }
    Ok(checklist
        .iter()
        .map(|(req, satisfied)| {
            let mark = if *satisfied { "[x]" } else { "[ ]" };
            format!("{} {}", mark, req.label)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn format_routes(routes: &[Route], format: &str) -> Result<String, ShellError> {
    if format == "json" {
        return to_pretty(&serde_json::to_value(routes)?);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Path", "Screen"]);
    for route in routes {
        table.add_row(vec![route.path.to_string(), route.screen.to_string()]);
    }
    Ok(table.to_string())
}

/// One-line status after a submit event
pub fn format_submit_outcome(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Committed => "Profile saved.".to_string(),
        SubmitOutcome::Rejected(errors) => {
            let fields: Vec<&str> = errors.fields().map(ProfileField::as_str).collect();
            format!("Profile not saved: fix {}.", fields.join(", "))
        }
    }
}

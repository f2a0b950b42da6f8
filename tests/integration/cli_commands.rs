//! End-to-end tests through the binary

use super::test_utils::run_cli;
use tempfile::TempDir;

#[test]
fn routes_lists_both_paths() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(temp.path(), &["routes", "--format", "json"], None);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["path"], "/");
    assert_eq!(value[1]["path"], "/user");
}

#[test]
fn validate_exit_status_follows_result() {
    let temp = TempDir::new().unwrap();
    let ok = run_cli(
        temp.path(),
        &[
            "validate",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--password",
            "Password1!",
            "--bio",
            "Hi",
        ],
        None,
    );
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("Profile is valid"));

    let bad = run_cli(
        temp.path(),
        &["validate", "--name", "Ada", "--email", "nope"],
        None,
    );
    assert!(!bad.status.success());
    let stdout = String::from_utf8_lossy(&bad.stdout);
    assert!(stdout.contains("email: Invalid email address"));
    assert!(stdout.contains("password: Password is required"));
}

#[test]
fn checklist_json() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(temp.path(), &["checklist", "abcDEF12", "--format", "json"], None);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let satisfied: Vec<bool> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["satisfied"].as_bool().unwrap())
        .collect();
    assert_eq!(satisfied, vec![true, true, true, true, false]);
}

#[test]
fn run_script_from_stdin() {
    let temp = TempDir::new().unwrap();
    let script = "login\ngoto /user\nedit\nset password N3w-password\nset bio Tester\nsave\n";
    let output = run_cli(temp.path(), &["run"], Some(script));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Hello, JohnDoe"));
    assert!(stdout.contains("Profile saved."));
    assert!(stdout.contains("Processed 6 event(s)"));
}

#[test]
fn run_script_failure_reports_line() {
    let temp = TempDir::new().unwrap();
    let output = run_cli(temp.path(), &["run"], Some("goto /user\ncancel\n"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("cannot cancel while viewing"));
}

#[test]
fn workspace_config_changes_title() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[shell]\ntitle = \"Acme Portal\"\n").unwrap();

    let output = run_cli(temp.path(), &["run"], Some("show\n"));
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Acme Portal"));
}

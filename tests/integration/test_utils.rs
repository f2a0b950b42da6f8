//! Shared helpers for integration tests

use profile_shell::profile::{EditSession, ProfileField, ProfileRecord};
use std::path::Path;
use std::process::{Command, Output};

pub fn valid_record() -> ProfileRecord {
    ProfileRecord::new("Jane Doe", "jane.doe@example.com", "Password1!", "Writes Rust")
}

/// Session already in editing mode over `committed`
pub fn editing(committed: ProfileRecord) -> EditSession {
    let mut session = EditSession::new(committed);
    session.begin_edit().unwrap();
    session
}

pub fn set_all(session: &mut EditSession, record: &ProfileRecord) {
    for field in ProfileField::ALL {
        session.update_field(field, record.get(field)).unwrap();
    }
}

/// Run the binary with isolated config/state directories
pub fn run_cli(home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    use std::io::Write;
    use std::process::Stdio;

    let bin = env!("CARGO_BIN_EXE_profile-shell");
    let mut child = Command::new(bin)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("xdg-config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("PROFILE_SHELL_LOG")
        .args(["--workspace", home.to_str().unwrap(), "--quiet", "--no-color"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(input) = stdin {
        child
            .stdin
            .as_mut()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    }
    drop(child.stdin.take());
    child.wait_with_output().unwrap()
}

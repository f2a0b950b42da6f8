//! Config loading precedence

use profile_shell::config::ConfigLoader;
use tempfile::TempDir;

#[test]
fn explicit_file_sets_profile_and_shell() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
[shell]
title = "Portal"
color = false

[profile]
name = "Grace Hopper"
email = "grace@example.com"
password = "Nanosecond1!"
bio = "Admiral"

[logging]
level = "info"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.shell.title, "Portal");
    assert!(!config.shell.color);
    assert_eq!(config.profile.name, "Grace Hopper");
    assert_eq!(config.logging.format, "json");
    assert!(config.validate().is_ok());
}

#[test]
fn workspace_env_file_overrides_base_file() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[shell]\ntitle = \"Base\"\n").unwrap();
    // "development" is the default environment name
    std::fs::write(
        config_dir.join("development.toml"),
        "[shell]\ntitle = \"Dev\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.shell.title, "Dev");
}

#[test]
fn malformed_file_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[shell\ntitle = ").unwrap();
    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

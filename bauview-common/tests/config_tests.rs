//! Configuration resolution tests
//!
//! Environment-override tests mutate process-wide state, so they run
//! serially.

use bauview_common::config::{Config, DEFAULT_BRANCH, DEFAULT_FOLDER, DEFAULT_REPO};
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    for key in [
        "BAUVIEW_REPO",
        "BAUVIEW_BRANCH",
        "BAUVIEW_FOLDER",
        "BAUVIEW_TOKEN",
        "BAUVIEW_SIDE_TABLE_URL",
        "BAUVIEW_PLAN_IMAGE_URL",
        "BAUVIEW_PORT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_file_or_env() {
    clear_env();

    let config = Config::load_from(None).unwrap();
    assert_eq!(config.repo, DEFAULT_REPO);
    assert_eq!(config.branch, DEFAULT_BRANCH);
    assert_eq!(config.folder, DEFAULT_FOLDER);
    assert!(config.token.is_none());
}

#[test]
#[serial]
fn test_toml_file_overrides_defaults() {
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
repo = "example/detections"
folder = "results"
port = 6000
"#
    )
    .unwrap();

    let config = Config::load_from(Some(&path)).unwrap();
    assert_eq!(config.repo, "example/detections");
    assert_eq!(config.folder, "results");
    assert_eq!(config.port, 6000);
    // Unlisted keys keep their defaults
    assert_eq!(config.branch, DEFAULT_BRANCH);
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "repo = \"example/from-file\"\n").unwrap();

    std::env::set_var("BAUVIEW_REPO", "example/from-env");
    std::env::set_var("BAUVIEW_TOKEN", "secret");
    let config = Config::load_from(Some(&path)).unwrap();
    clear_env();

    assert_eq!(config.repo, "example/from-env");
    assert_eq!(config.token.as_deref(), Some("secret"));
}

#[test]
#[serial]
fn test_blank_token_env_is_ignored() {
    clear_env();

    std::env::set_var("BAUVIEW_TOKEN", "  ");
    let config = Config::load_from(None).unwrap();
    clear_env();

    assert!(config.token.is_none());
}

#[test]
#[serial]
fn test_invalid_repo_rejected() {
    clear_env();

    std::env::set_var("BAUVIEW_REPO", "not-a-repo");
    let result = Config::load_from(None);
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_from(Some(&path)).unwrap();
    assert_eq!(config.repo, DEFAULT_REPO);
}

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".library-dashboard").join("config.json")
}

/// An address nothing listens on.
fn closed_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/", port)
}

const BINARY_NAME: &str = "library-dashboard";

fn cli(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("LIBRARY_API_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_home();
    cli(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("borrow"))
        .stdout(contains("--api-url"));
}

#[test]
/// Configure should write the API URL to the config file.
fn configure_writes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    cli(&tmp)
        .args(["configure", "--api-url", "http://library.test/api/"])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("http://library.test/api/"));
}

#[test]
/// Configure without a URL should fail and leave no file behind.
fn configure_without_url_fails() {
    let tmp = temp_home();
    cli(&tmp).arg("configure").assert().failure();
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"api_url":"http://library.test/api/"}"#).unwrap();
    assert!(config_path.exists());

    cli(&tmp).arg("reset").assert().success();

    assert!(!config_path.exists());
}

#[test]
/// Reset is fine when there is nothing to delete.
fn reset_without_config_succeeds() {
    let tmp = temp_home();
    cli(&tmp).arg("reset").assert().success();
}

#[test]
/// A backend that refuses connections makes the books command fail.
fn books_against_unreachable_backend_fails() {
    let tmp = temp_home();
    cli(&tmp)
        .args(["books", "--api-url", &closed_api_url()])
        .assert()
        .code(1)
        .stderr(contains("[ERROR]"))
        .stderr(contains("Network error"))
        .stderr(contains("reqwest::Error").not());
}

#[test]
/// The saved URL is used when no --api-url is given.
fn stats_uses_saved_api_url() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        format!(r#"{{"api_url":"{}"}}"#, closed_api_url()),
    )
    .unwrap();

    cli(&tmp).arg("stats").assert().failure();
}

//! Integration tests for the `mpdc` binary entry point.
//!
//! Verifies help output, command validation, and configuration file loading
//! through the real binary.

use std::fs;
use std::net::TcpListener;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn help_lists_commands() {
    let mut command = cargo_bin_cmd!("mpdc");
    command.arg("help");
    command
        .assert()
        .success()
        .stdout(contains("simplestatus"))
        .stdout(contains("Database commands:"));
}

#[test]
fn unknown_command_exits_with_failure() {
    let mut command = cargo_bin_cmd!("mpdc");
    command.arg("frobnicate");
    command
        .assert()
        .failure()
        .stderr(contains("unknown command 'frobnicate'"));
}

#[test]
fn configuration_file_selects_the_daemon() {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind probe listener");
    let port = listener.local_addr().expect("probe address").port();
    drop(listener);

    let directory = tempfile::tempdir().expect("temporary directory");
    let path = directory.path().join("mpdc.toml");
    fs::write(&path, format!("host = \"127.0.0.1\"\nport = {port}\n")).expect("write config");

    let mut command = cargo_bin_cmd!("mpdc");
    command
        .env_remove("MPD_HOST")
        .env_remove("MPD_PORT")
        .arg("--config-path")
        .arg(&path)
        .arg("status");
    command
        .assert()
        .failure()
        .stderr(contains(format!("127.0.0.1:{port}")));
}

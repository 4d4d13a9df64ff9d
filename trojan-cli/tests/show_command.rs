//! Integration tests for the `show` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_show_without_config_prints_empty_tree() {
    let env = TestEnv::new();

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn test_show_renders_config_file() {
    let env = TestEnv::new();
    env.write_config("config.json", r#"{"app":{"name":"X","port":80}}"#);

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"X\""))
        .stdout(predicate::str::contains("\"port\": 80"));
}

#[test]
fn test_show_yaml_format() {
    let env = TestEnv::new();
    env.write_config("config.json", r#"{"app":{"port":80}}"#);

    env.command()
        .args(["show", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port: 80"));
}

#[test]
fn test_show_applies_environment_overrides() {
    let env = TestEnv::new();
    env.write_config("config.json", r#"{"app":{"name":"X","port":80}}"#);

    env.command()
        .env("TROJAN_APP__PORT", "9090")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 9090"))
        .stdout(predicate::str::contains("\"name\": \"X\""));
}

#[test]
fn test_show_first_candidate_wins() {
    let env = TestEnv::new();
    env.write_config("config.yaml", "source: yaml\n");
    env.write_config("config.json", r#"{"source":"json"}"#);

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"yaml\""));
}

#[test]
fn test_show_explicit_config_is_tried_first() {
    let env = TestEnv::new();
    env.write_config("config.yaml", "source: default\n");
    let custom = env.write_config("custom.json", r#"{"source":"custom"}"#);

    env.command()
        .arg("--config")
        .arg(&custom)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"custom\""));
}

#[test]
fn test_show_skips_broken_candidate() {
    let env = TestEnv::new();
    env.write_config("config.yaml", "invalid: yaml: syntax:");
    env.write_config("config.json", r#"{"source":"json"}"#);

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"json\""));
}

#[test]
fn test_show_custom_prefix() {
    let env = TestEnv::new();

    env.command()
        .env("MYAPP_PORT", "1")
        .env("TROJAN_PORT", "2")
        .args(["--prefix", "MYAPP_", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 1"));
}

#[test]
fn test_show_ignores_non_matching_variables() {
    let env = TestEnv::new();

    env.command()
        .env("OTHER_KEY", "1")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn test_show_verbose_reports_loaded_file() {
    let env = TestEnv::new();
    env.write_config("config.json", r#"{"app":{"port":80}}"#);

    env.command()
        .args(["--verbose", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded from"));
}

//! Exit codes, suggestions and the auxiliary subcommands.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dsforge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dsforge").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn loopback_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"name": "app", "keywords": ["loopback"]}"#,
    )
    .unwrap();
    dir
}

#[test]
fn invalid_port_is_a_user_error_with_suggestions() {
    let project = loopback_project();

    dsforge(&project)
        .args(["datasource", "ds", "--connector", "db2", "--port", "abc", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for 'port'"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("--port 5432"));

    assert!(!project.path().join("src").exists());
}

#[test]
fn invalid_json_option_is_rejected() {
    let project = loopback_project();

    dsforge(&project)
        .args(["datasource", "ds", "--connector", "rest", "--options", "{oops", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'options'"));
}

#[test]
fn invalid_name_is_rejected() {
    let project = loopback_project();

    dsforge(&project)
        .args(["datasource", "1st-db", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid datasource name"));
}

#[test]
fn missing_name_without_prompts_is_rejected() {
    let project = loopback_project();

    dsforge(&project)
        .args(["datasource", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn data_file_outside_project_is_rejected() {
    let project = loopback_project();

    dsforge(&project)
        .args(["datasource", "m", "--connector", "memory", "--file", "../db.json", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'file'"));
}

#[test]
fn data_file_naming_a_directory_is_rejected() {
    let project = loopback_project();
    fs::create_dir(project.path().join("data")).unwrap();

    dsforge(&project)
        .args(["datasource", "m", "--connector", "memory", "--file", "data", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is a directory"));

    assert!(!project.path().join("src").exists());
}

#[test]
fn malformed_set_is_a_usage_error() {
    let project = loopback_project();

    dsforge(&project)
        .args(["datasource", "ds", "--set", "novalue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn broken_connectors_file_is_a_configuration_error() {
    let project = loopback_project();
    fs::write(project.path().join("connectors.json"), "{ nope").unwrap();
    fs::write(
        project.path().join(".dsforge.toml"),
        "[generator]\nconnectors_file = \"connectors.json\"\n",
    )
    .unwrap();

    dsforge(&project)
        .args(["datasource", "ds", "--yes"])
        .assert()
        .code(4);
}

#[test]
fn datasources_dir_outside_project_is_a_configuration_error() {
    let project = loopback_project();
    fs::write(
        project.path().join(".dsforge.toml"),
        "[generator]\ndatasources_dir = \"../outside\"\n",
    )
    .unwrap();

    dsforge(&project)
        .args(["datasource", "ds", "--connector", "db2", "--yes"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cannot point outside the project"));

    let parent = project.path().parent().unwrap();
    assert!(!parent.join("outside").exists());
}

#[test]
fn missing_config_file_exits_with_configuration_code() {
    let dir = tempfile::tempdir().unwrap();

    dsforge(&dir)
        .args(["--config", "missing.toml", "connectors"])
        .assert()
        .code(4);
}

#[test]
fn connectors_lists_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();

    dsforge(&dir)
        .args(["connectors", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("memory"))
        .stdout(predicate::str::contains("cloudant"))
        .stdout(predicate::str::contains("rest"));
}

#[test]
fn connectors_file_extends_catalog() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("connectors.json"),
        r#"{"kafka": {"description": "Kafka", "settings": {"brokers": {"type": "array"}}}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(".dsforge.toml"),
        "[generator]\nconnectors_file = \"connectors.json\"\n",
    )
    .unwrap();

    dsforge(&dir)
        .args(["connectors", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kafka\""))
        .stdout(predicate::str::contains("\"memory\""));
}

#[test]
fn completions_are_generated() {
    let dir = tempfile::tempdir().unwrap();

    dsforge(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dsforge"));
}

#[test]
fn config_get_reads_local_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".dsforge.toml"), "[defaults]\nconnector = \"mysql\"\n").unwrap();

    dsforge(&dir)
        .args(["config", "get", "defaults.connector"])
        .assert()
        .success()
        .stdout(predicate::str::diff("mysql\n"));
}

#[test]
fn config_get_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();

    dsforge(&dir)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn init_local_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();

    dsforge(&dir).args(["init", "--local"]).assert().success();
    let written = fs::read_to_string(dir.path().join(".dsforge.toml")).unwrap();
    assert!(written.contains("connector = \"memory\""));

    fs::write(dir.path().join(".dsforge.toml"), "# edited\n").unwrap();
    dsforge(&dir)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".dsforge.toml")).unwrap(),
        "# edited\n"
    );
}

#[test]
fn version_flag() {
    let dir = tempfile::tempdir().unwrap();

    dsforge(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

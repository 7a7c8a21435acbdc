//! # CLI Integration Tests / CLI 集成测试
//!
//! End-to-end tests of the `endpoint-checker` binary: configuration
//! scaffolding, configuration errors, a run against a dead endpoint and a
//! full run against a served calculation service.
//!
//! `endpoint-checker` 二进制文件的端到端测试：配置脚手架、配置错误、
//! 针对无响应端点的运行，以及针对已启动计算服务的完整运行。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::process::Command;
use std::time::Duration;

/// Writes a suite configuration into a scratch directory.
fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_init_non_interactive_writes_a_loadable_suite() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Checks.toml");

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("init")
        .arg("--lang")
        .arg("en")
        .arg("--non-interactive")
        .arg("--output")
        .arg(&output);

    cmd.assert().success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("[[cases]]"));
    assert!(content.contains("base_url"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let output = write_config(&dir, "Checks.toml", "# pre-existing\n");

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("init")
        .arg("--lang")
        .arg("en")
        .arg("--non-interactive")
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    // The existing file was left untouched.
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "# pre-existing\n");
}

#[test]
fn test_run_with_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("run")
        .arg("--lang")
        .arg("en")
        .arg("--config")
        .arg(dir.path().join("no-such-file.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read check suite file"));
}

#[test]
fn test_run_with_malformed_config_fails_before_any_case() {
    let dir = tempfile::tempdir().unwrap();
    // `expected` is missing from the only case.
    let config = write_config(
        &dir,
        "broken.toml",
        r#"
[[cases]]
name = "incomplete"
op = "add"
lhs = 1
rhs = 2
"#,
    );

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("run").arg("--lang").arg("en").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse check suite file"));
}

#[test]
fn test_run_with_duplicate_case_names_fails_and_names_the_case() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "dupes.toml",
        r#"
[[cases]]
name = "same"
op = "add"
lhs = 1
rhs = 1
expected = 2

[[cases]]
name = "same"
op = "add"
lhs = 2
rhs = 2
expected = 4
"#,
    );

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("run").arg("--lang").arg("en").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("same"));
}

#[test]
fn test_run_against_dead_endpoint_reports_errors_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens on port 1; every case becomes an infrastructure error.
    let config = write_config(
        &dir,
        "dead.toml",
        r#"
base_url = "http://127.0.0.1:1"

[[cases]]
name = "add-small"
op = "add"
lhs = 2
rhs = 2
expected = 4

[[cases]]
name = "subtract-equal"
op = "subtract"
lhs = 2
rhs = 2
expected = 0
"#,
    );

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("run").arg("--lang").arg("en").arg("--config").arg(&config);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("--- Check Summary ---"))
        .stdout(predicate::str::contains("Errored: 2"))
        .stdout(predicate::str::contains("CHECK FAILURES DETECTED"))
        .stdout(predicate::str::contains("Infrastructure error in"));
}

#[test]
fn test_full_run_against_served_endpoint_passes() {
    // Reserve an ephemeral port, free it, and hand it to the service.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let addr = format!("127.0.0.1:{}", port);

    let mut service = std::process::Command::new(assert_cmd::cargo::cargo_bin("endpoint-checker"))
        .arg("serve")
        .arg("--lang")
        .arg("en")
        .arg("--addr")
        .arg(&addr)
        .spawn()
        .expect("failed to start the calculation service");

    // Wait for the service to accept connections.
    let mut ready = false;
    for _ in 0..50 {
        if TcpStream::connect(&addr).is_ok() {
            ready = true;
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "live.toml",
        &format!(
            r#"
base_url = "http://{}"

[[cases]]
name = "add-small"
op = "add"
lhs = 2
rhs = 2
expected = 4

[[cases]]
name = "multiply-zero"
op = "multiply"
lhs = 0
rhs = 5
expected = 0
"#,
            addr
        ),
    );

    let mut cmd = Command::cargo_bin("endpoint-checker").unwrap();
    cmd.arg("run").arg("--lang").arg("en").arg("--config").arg(&config);
    let assertion = cmd.assert();

    let _ = service.kill();
    let _ = service.wait();

    assert!(ready, "calculation service never came up on {}", addr);
    assertion
        .success()
        .stdout(predicate::str::contains("ALL CHECKS PASSED"))
        .stdout(predicate::str::contains("Passed: 2"));
}

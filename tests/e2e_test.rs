/// End-to-end tests for the CLI
///
/// Remote services are pointed at a closed local port, so every run exercises
/// the degraded paths. Alerts are checked through the dry-run console output.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

fn host_pair() -> String {
    format!(
        "{},{}",
        fixture("ora-prod-01.json"),
        fixture("ora-prod-01.previous.json")
    )
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--host"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: --host is required
    #[test]
    fn test_exit_code_missing_host() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Concurrency must be at least 1
    #[test]
    fn test_exit_code_zero_concurrency() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .args(["--host", &fixture("ora-prod-01.json"), "--concurrency", "0"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Snapshots of different hosts paired together
    #[test]
    fn test_exit_code_mismatched_hosts() {
        let pair = format!(
            "{},{}",
            fixture("ora-prod-01.json"),
            fixture("ora-test-02.json")
        );
        cargo_bin_cmd!("oracle-license-reconciler")
            .args(["--host", &pair, "--config", &fixture("reconciler.config.yml")])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("belongs to host"));
    }

    /// Exit code 3: Application error - snapshot file does not exist
    #[test]
    fn test_exit_code_missing_snapshot() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .args([
                "--host",
                "/nonexistent/host.json",
                "--config",
                &fixture("reconciler.config.yml"),
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read snapshot file"));
    }

    /// Exit code 3: Application error - snapshot file is not valid JSON
    #[test]
    fn test_exit_code_invalid_snapshot() {
        cargo_bin_cmd!("oracle-license-reconciler")
            .args([
                "--host",
                &fixture("reconciler.config.yml"),
                "--config",
                &fixture("reconciler.config.yml"),
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse snapshot file"));
    }
}

#[test]
fn test_dry_run_prints_alerts_and_reconciled_snapshot() {
    cargo_bin_cmd!("oracle-license-reconciler")
        .env_remove("RUST_LOG")
        .args([
            "--host",
            &host_pair(),
            "--config",
            &fixture("reconciler.config.yml"),
            "--dry-run",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"hostname\": \"ora-prod-01\""))
        .stdout(predicate::str::contains("\"agentVersion\": \"2.5.0\""))
        .stderr(predicate::str::contains("NEW_DATABASE"))
        .stderr(predicate::str::contains("NEW_LICENSE"))
        .stderr(predicate::str::contains("NEW_OPTION"))
        .stderr(predicate::str::contains("UNLISTED_RUNNING_DATABASE"))
        .stderr(predicate::str::contains("4 alert(s), 4 submitted"));
}

#[test]
fn test_new_option_lists_only_optional_features() {
    cargo_bin_cmd!("oracle-license-reconciler")
        .env_remove("RUST_LOG")
        .args([
            "--host",
            &host_pair(),
            "--config",
            &fixture("reconciler.config.yml"),
            "--dry-run",
        ])
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "has enabled new features (Diagnostics Pack) on server",
        ))
        .stderr(predicate::str::contains("Oracle STD").not());
}

#[test]
fn test_output_file_holds_every_host() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("reconciled.json");

    cargo_bin_cmd!("oracle-license-reconciler")
        .env_remove("RUST_LOG")
        .args([
            "--host",
            &host_pair(),
            "--host",
            &fixture("ora-test-02.json"),
            "--config",
            &fixture("reconciler.config.yml"),
            "--output",
            &output_path.display().to_string(),
            "--dry-run",
        ])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("secondary entitlement skipped"));

    let content = std::fs::read_to_string(&output_path).unwrap();
    let snapshots: serde_json::Value = serde_json::from_str(&content).unwrap();
    let snapshots = snapshots.as_array().unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0]["hostname"], "ora-prod-01");
    assert_eq!(snapshots[1]["hostname"], "ora-test-02");
    // Standby left untouched when the fleet inventory is unreachable
    assert_eq!(
        snapshots[1]["databases"][0]["licenses"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[test]
fn test_unreachable_alert_service_is_not_fatal() {
    cargo_bin_cmd!("oracle-license-reconciler")
        .env_remove("RUST_LOG")
        .args([
            "--host",
            &host_pair(),
            "--config",
            &fixture("reconciler.config.yml"),
        ])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Can't throw new alert"))
        .stderr(predicate::str::contains("4 alert(s), 0 submitted"));
}

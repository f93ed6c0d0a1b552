use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::{Command, cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn runner() -> Command {
    cargo_bin_cmd!("run-it-smoke-tests")
}

/// Writes a stand-in Maven that records its arguments and fails on `fail_on`.
fn fake_mvn(dir: &Path, fail_on: &str) -> (PathBuf, PathBuf) {
    let log = dir.join("mvn.log");
    let script = dir.join("mvn");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\n\
            echo \"$*\" >> '{log}'\n\
            case \" $* \" in\n  *' {fail_on} '*) exit 3 ;;\nesac\n\
            exit 0\n",
            log = log.display(),
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    (script, log)
}

fn logged_calls(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

// -- Help & flags --

#[test]
fn help_lists_both_flag_groups() {
    runner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Common options"))
        .stdout(predicate::str::contains("Integration test options"))
        .stdout(predicate::str::contains("--it-artifact-bucket"));
}

#[test]
fn unknown_flag_fails_before_maven_runs() {
    let tmp = TempDir::new().unwrap();
    let (mvn, log) = fake_mvn(tmp.path(), "never");

    runner()
        .args(["--mvn", mvn.to_str().unwrap(), "--it-regoin", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--it-regoin"));

    assert!(logged_calls(&log).is_empty());
}

// -- Workflow --

#[test]
fn successful_build_logs_success() {
    runner()
        .args(["--mvn", "true"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Build Successful!"));
}

#[test]
fn failed_install_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let (mvn, log) = fake_mvn(tmp.path(), "install");

    runner()
        .args(["--mvn", mvn.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to run `mvn clean install`"))
        .stderr(predicate::str::contains("Build Successful!").not());

    let calls = logged_calls(&log);
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("-B clean install -f pom.xml -am"));
    assert!(calls[0].contains("-T8"));
}

#[test]
fn failed_verify_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let (mvn, log) = fake_mvn(tmp.path(), "verify");

    runner()
        .args([
            "--mvn",
            mvn.to_str().unwrap(),
            "--it-project",
            "test-project",
            "--it-artifact-bucket",
            "artifacts",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to run `mvn verify`"))
        .stderr(predicate::str::contains("exit status: 3"));

    let calls = logged_calls(&log);
    assert_eq!(calls.len(), 2);
    assert!(calls[1].starts_with("-B verify -f pom.xml"));
    assert!(calls[1].contains("-DitParallelism=4"));
    assert!(calls[1].contains("-DspannerInstanceId=teleport"));
    assert!(calls[1].contains("-Dproject=test-project"));
    assert!(calls[1].contains("-DstageBucket=artifacts"));
}

#[test]
fn missing_maven_is_reported() {
    runner()
        .args(["--mvn", "teleport-ci-no-such-mvn"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("teleport-ci-no-such-mvn"));
}

// -- Config & modules --

#[test]
fn config_file_supplies_defaults() {
    let tmp = TempDir::new().unwrap();
    let (mvn, log) = fake_mvn(tmp.path(), "never");
    let config = tmp.path().join("ci.toml");
    std::fs::write(
        &config,
        format!(
            "[maven]\nprogram = '{}'\n\n[it]\nregion = 'europe-west1'\nproject = 'from-config'\n",
            mvn.display()
        ),
    )
    .unwrap();

    runner()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--it-project",
            "from-cli",
        ])
        .assert()
        .success();

    let calls = logged_calls(&log);
    assert_eq!(calls.len(), 2);
    assert!(calls[1].contains("-Dregion=europe-west1"));
    assert!(calls[1].contains("-Dproject=from-cli"));
}

#[test]
fn missing_config_file_is_fatal() {
    let tmp = TempDir::new().unwrap();

    runner()
        .args([
            "--mvn",
            "true",
            "--config",
            tmp.path().join("missing.toml").to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn changed_files_select_modules() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    for module in ["", "v1", "v2"] {
        std::fs::create_dir_all(repo.join(module)).unwrap();
        std::fs::write(repo.join(module).join("pom.xml"), "<project/>").unwrap();
    }
    let (mvn, log) = fake_mvn(tmp.path(), "never");
    let pom = repo.join("pom.xml");

    runner()
        .args([
            "--mvn",
            mvn.to_str().unwrap(),
            "--pom",
            pom.to_str().unwrap(),
            "--changed-files",
            "v2/src/B.java,v1/src/A.java",
        ])
        .assert()
        .success();

    let calls = logged_calls(&log);
    assert_eq!(calls.len(), 2);
    for call in calls {
        assert!(call.contains(&format!("-f {} -pl v1,v2 ", pom.display())));
    }
}

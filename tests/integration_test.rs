// tests/integration_test.rs
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_release-stability"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-stability"));
    assert!(stdout.contains("Classify changes by stability"));
}

#[test]
fn test_parse_prints_both_forms() {
    let output = run(&["parse", "MINOR"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("lowercase: minor"));
    assert!(stdout.contains("uppercase: MINOR"));
}

#[test]
fn test_parse_rejects_blank_value() {
    let output = run(&["parse", " "]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is not a valid stability"));
}

#[test]
fn test_levels() {
    let output = run(&["levels"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for level in ["unknown", "patch", "minor", "pedantic"] {
        assert!(stdout.contains(level));
    }
}

#[test]
fn test_next_with_fixture_config() {
    let output = run(&[
        "--config",
        "tests/fixtures/config_with_aliases.toml",
        "next",
        "--current",
        "v1.9.0",
        "--change",
        "New endpoint=feature",
        "--change",
        "Fix=bug",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("v1.10.0"));
    assert!(stdout.contains("Stability: MINOR"));
}

#[test]
fn test_next_fails_on_unlabeled_change() {
    let output = run(&[
        "--config",
        "tests/fixtures/does-not-exist.toml",
        "next",
        "--current",
        "1.0.0",
    ]);

    // Missing explicit config file is an error
    assert!(!output.status.success());

    let output = Command::new(env!("CARGO_BIN_EXE_release-stability"))
        .args(["next", "--current", "1.0.0", "--change", "Mystery=question"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no stability label"));
}

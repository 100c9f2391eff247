// tests/cli_test.rs
use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--bin", "release-toolkit", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn test_help() {
    let stdout = stdout_of(&["--help"]);
    assert!(stdout.contains("release-toolkit"));
    assert!(stdout.contains("bump"));
}

#[test]
fn test_bump_minor() {
    assert_eq!(stdout_of(&["bump", "19.9", "--part", "minor"]), "20.0");
}

#[test]
fn test_bump_marketing_scheme() {
    assert_eq!(
        stdout_of(&["bump", "13.9.1", "--part", "minor", "--scheme", "marketing"]),
        "14.0"
    );
}

#[test]
fn test_bump_pre_release() {
    assert_eq!(
        stdout_of(&["bump", "1.2-rc-1", "--part", "pre-release"]),
        "1.2-rc-2"
    );
}

#[test]
fn test_previous_calendar_release_with_flag() {
    assert_eq!(
        stdout_of(&[
            "previous",
            "2024.1",
            "--scheme",
            "calendar-date",
            "--previous-year-minor",
            "22"
        ]),
        "2023.22"
    );
}

#[test]
fn test_format_four_part() {
    assert_eq!(
        stdout_of(&["format", "1.2rc3", "--style", "four-part"]),
        "1.2.0.3"
    );
}

#[test]
fn test_build_code() {
    assert_eq!(
        stdout_of(&["build-code", "1.2.3.4", "--encoding", "derived-concat-v1"]),
        "101020304"
    );
}

#[test]
fn test_compare() {
    assert_eq!(stdout_of(&["compare", "1.2-rc-1", "1.2"]), "1.2-rc-1 < 1.2");
}

#[test]
fn test_latest() {
    assert_eq!(
        stdout_of(&["latest", "--pattern", "release/{version}", "release/9.9", "release/10.1", "main"]),
        "10.1"
    );
}

#[test]
fn test_latest_skips_build_zero_by_default() {
    assert_eq!(stdout_of(&["latest", "1.2.3.0", "1.1"]), "1.1");
}

#[test]
fn test_latest_prints_build_zero_in_four_parts() {
    assert_eq!(
        stdout_of(&["latest", "--include-pre-releases", "1.2.3.0", "1.1"]),
        "1.2.3.0"
    );
}

#[test]
fn test_previous_four_part_build_under_semantic_config() {
    assert_eq!(
        stdout_of(&["previous", "1.2.3.1", "--part", "pre-release", "--scheme", "four-part"]),
        "1.2.3.0"
    );
    assert_eq!(stdout_of(&["format", "1.2.3.0", "--style", "four-part"]), "1.2.3.0");
}

#[test]
fn test_bump_build_zero_under_semantic() {
    assert_eq!(
        stdout_of(&["bump", "1.2.3.0", "--part", "pre-release"]),
        "1.2.3-rc-1"
    );
}

#[test]
fn test_invalid_version_fails() {
    let output = run(&["bump", "trunk"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("trunk"));
}

//! CLI integration tests for Slipway.
//!
//! These exercise the validate-and-publish surface end to end. Build and
//! package paths that invoke cmake are covered up to the fail-fast abort;
//! driving a real cmake project is out of scope for the test suite.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the slipway binary command.
fn slipway() -> Command {
    Command::cargo_bin("slipway").unwrap()
}

/// Create a recipe directory with the standard test manifest.
fn recipe_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("recipe.toml"),
        r#"
[package]
name = "libnine"
version = "0.4.1"
description = "file protocol parser"
license = "Apache-2.0"

[library]
name = "nine"
supported-standards = ["17", "gnu17", "20", "gnu20"]

[options]
shared = false
position_independent_code = true
"#,
    )
    .unwrap();
    tmp
}

// ============================================================================
// slipway check
// ============================================================================

#[test]
fn test_check_rejects_gcc_below_floor() {
    let tmp = recipe_dir();

    slipway()
        .args([
            "check",
            "--compiler",
            "gcc",
            "--compiler-version",
            "6",
            "--std",
            "17",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("gcc 6 is not supported"));
}

#[test]
fn test_check_accepts_gcc_9_with_cxx20() {
    let tmp = recipe_dir();

    slipway()
        .args([
            "check",
            "--compiler",
            "gcc",
            "--compiler-version",
            "9",
            "--std",
            "20",
        ])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("can build libnine 0.4.1"));
}

#[test]
fn test_check_accepts_clang_at_floor_without_std() {
    let tmp = recipe_dir();

    slipway()
        .args(["check", "--compiler", "clang", "--compiler-version", "5"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn test_check_never_version_rejects_unknown_compiler() {
    let tmp = recipe_dir();

    slipway()
        .args([
            "check",
            "--compiler",
            "msvc",
            "--compiler-version",
            "14",
            "--std",
            "17",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn test_check_rejects_unsupported_standard() {
    let tmp = recipe_dir();

    slipway()
        .args([
            "check",
            "--compiler",
            "gcc",
            "--compiler-version",
            "9",
            "--std",
            "14",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("14 requested"));
}

#[test]
fn test_check_gcc_10_is_not_lexically_compared() {
    let tmp = recipe_dir();

    // "10" < "7" as strings; must still pass the floor check.
    slipway()
        .args(["check", "--compiler", "gcc", "--compiler-version", "10"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn test_check_reads_settings_from_environment() {
    let tmp = recipe_dir();

    slipway()
        .arg("check")
        .env("SLIPWAY_COMPILER", "apple-clang")
        .env("SLIPWAY_COMPILER_VERSION", "8")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("apple-clang 8 is not supported"));
}

#[test]
fn test_check_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    slipway()
        .args(["check", "--compiler", "gcc", "--compiler-version", "9"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no recipe.toml found"));
}

// ============================================================================
// slipway build (fail-fast path only; success needs cmake + sources)
// ============================================================================

#[test]
fn test_build_aborts_on_rejected_toolchain() {
    let tmp = recipe_dir();

    slipway()
        .args([
            "build",
            "--compiler",
            "clang",
            "--compiler-version",
            "4",
            "--os",
            "linux",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("clang 4 is not supported"));

    // Nothing was configured before the abort.
    assert!(!tmp.path().join("build").exists());
}

#[test]
fn test_build_rejects_unknown_option_override() {
    let tmp = recipe_dir();

    slipway()
        .args([
            "build",
            "--compiler",
            "gcc",
            "--compiler-version",
            "9",
            "-o",
            "lto=true",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option `lto`"));
}

// ============================================================================
// slipway info
// ============================================================================

#[test]
fn test_info_on_linux_appends_math_library() {
    let tmp = recipe_dir();

    let output = slipway()
        .args(["info", "--os", "linux"])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["name"], "libnine");
    assert_eq!(info["libs"][0], "nine");
    assert_eq!(info["libs"][1], "m");
}

#[test]
fn test_info_on_windows_links_only_the_library() {
    let tmp = recipe_dir();

    let output = slipway()
        .args(["info", "--os", "windows"])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["libs"].as_array().unwrap().len(), 1);
}

#[test]
fn test_info_with_manifest_dir_flag() {
    let tmp = recipe_dir();

    slipway()
        .args(["info", "--os", "macos"])
        .arg("--manifest-dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nine\""));
}

// ============================================================================
// slipway completions
// ============================================================================

#[test]
fn test_completions_bash() {
    slipway()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slipway"));
}

//! Integration tests for the forepath CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with config discovery pinned to an empty sandbox.
fn forepath_in(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("forepath"));
    cmd.current_dir(temp.path());
    cmd.env("XDG_CONFIG_HOME", temp.path().join("xdg-config"));
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forepath"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("precedence on PATH"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forepath"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn activate_prints_exactly_two_status_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.args(["activate", "--dir", "/x/bin"]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("Prepended /x/bin to PATH"));
    assert!(stdout.contains("take precedence"));
    Ok(())
}

#[test]
fn activate_exits_zero_even_though_effect_dies_with_the_process() -> Result<(), Box<dyn std::error::Error>>
{
    // Executed (not sourced) the change cannot outlive the process; the
    // command still reports success both times.
    let temp = TempDir::new()?;
    for _ in 0..2 {
        let mut cmd = forepath_in(&temp);
        cmd.env("PATH", "/usr/bin:/bin");
        cmd.args(["activate", "--dir", "/x/bin"]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Prepended /x/bin to PATH"));
    }
    Ok(())
}

#[test]
fn activate_is_the_default_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".forepath.yml"), "bin_dir: /x/bin\n")?;

    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Prepended /x/bin to PATH"));
    Ok(())
}

#[test]
fn activate_quiet_still_prints_both_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.args(["--quiet", "activate", "--dir", "/x/bin"]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert_eq!(stdout.lines().count(), 2);
    Ok(())
}

#[test]
fn env_emits_exact_bash_export() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.args(["env", "--dir", "/x/bin", "--shell", "bash"]);
    cmd.assert()
        .success()
        .stdout("export PATH=\"/x/bin:/usr/bin:/bin\"\n");
    Ok(())
}

#[test]
fn env_with_empty_path_pins_bare_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env_remove("PATH");
    cmd.args(["env", "--dir", "/x/bin", "--shell", "bash"]);
    cmd.assert().success().stdout("export PATH=\"/x/bin\"\n");
    Ok(())
}

#[test]
fn env_emits_fish_syntax() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin");
    cmd.args(["env", "--dir", "/x/bin", "--shell", "fish"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("set -gx PATH"));
    Ok(())
}

#[test]
fn env_rejects_unknown_shell() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.args(["env", "--dir", "/x/bin", "--shell", "csh"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
    Ok(())
}

#[test]
fn project_config_feeds_env_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".forepath.yml"), "bin_dir: /cfg/bin\n")?;

    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin");
    cmd.args(["env", "--shell", "bash"]);
    cmd.assert()
        .success()
        .stdout("export PATH=\"/cfg/bin:/usr/bin\"\n");
    Ok(())
}

#[test]
#[cfg(unix)]
fn run_child_sees_prepended_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.args([
        "run",
        "--dir",
        "/x/bin",
        "sh",
        "-c",
        "case \"$PATH\" in /x/bin:*) exit 0;; *) exit 3;; esac",
    ]);
    cmd.assert().success();
    Ok(())
}

#[test]
#[cfg(unix)]
fn run_propagates_child_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.args(["run", "--dir", "/x/bin", "sh", "-c", "exit 7"]);
    cmd.assert().failure().code(7);
    Ok(())
}

#[test]
fn status_json_reports_active_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/x/bin:/usr/bin");
    cmd.args(["status", "--json", "--dir", "/x/bin"]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let report: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(report["active"], serde_json::json!(true));
    assert_eq!(report["position"], serde_json::json!(1));
    assert_eq!(report["occurrences"], serde_json::json!(1));
    assert_eq!(report["bin_dir"], serde_json::json!("/x/bin"));
    Ok(())
}

#[test]
fn status_json_counts_duplicate_activations() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/x/bin:/x/bin:/usr/bin");
    cmd.args(["status", "--json", "--dir", "/x/bin"]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let report: serde_json::Value = serde_json::from_str(&stdout)?;

    assert_eq!(report["occurrences"], serde_json::json!(2));
    Ok(())
}

#[test]
fn status_human_output_shows_inactive_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin:/bin");
    cmd.args(["status", "--dir", "/x/bin"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not on PATH"));
    Ok(())
}

#[test]
fn init_creates_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.arg("init");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created .forepath.yml"));
    assert!(temp.path().join(".forepath.yml").exists());
    Ok(())
}

#[test]
fn init_fails_if_config_exists() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".forepath.yml"), "manager: cargo\n")?;
    let mut cmd = forepath_in(&temp);
    cmd.arg("init");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    Ok(())
}

#[test]
fn init_force_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".forepath.yml"), "manager: cargo\n")?;
    let mut cmd = forepath_in(&temp);
    cmd.args(["init", "--force"]);
    cmd.assert().success();
    let content = fs::read_to_string(temp.path().join(".forepath.yml"))?;
    assert!(content.contains("manager: homebrew"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forepath"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("forepath"));
    Ok(())
}

#[test]
fn unknown_manager_fails_with_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.args(["activate", "--manager", "frobnicate"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown package manager"));
    Ok(())
}

#[test]
fn explicit_config_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.args(["--config", "/nonexistent/forepath.yml", "status"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_reports_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".forepath.yml"), "manager: [unclosed\n")?;
    let mut cmd = forepath_in(&temp);
    cmd.args(["status", "--dir", "/x/bin"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("forepath"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = forepath_in(&temp);
    cmd.env("PATH", "/usr/bin");
    cmd.args(["--debug", "activate", "--dir", "/x/bin"]);
    cmd.assert().success();
    Ok(())
}

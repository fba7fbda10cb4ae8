#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn padlevel_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("padlevel"));
    cmd.env_remove("PADLEVEL_LOG")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_render_sums_all_levels() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["render", "-u", "*", "-w", "3", "-w", "4", "-l", "1", "--delimit"])
        .assert()
        .success()
        .stdout("|*******|\n");
}

#[test]
fn test_render_up_to_active() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args([
            "render", "-u", "*", "-w", "3", "-w", "4", "-l", "1", "-m", "up-to-active",
        ])
        .assert()
        .success()
        .stdout("***\n");
}

#[test]
fn test_render_set_updates_level() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["render", "-w", "15", "-s", "1=20", "--delimit"])
        .assert()
        .success()
        .stdout(format!("|{}|\n", " ".repeat(20)));
}

#[test]
fn test_render_missing_level_fails() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["render", "-s", "0=15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot lookup padding level: 0"));
}

#[test]
fn test_render_negative_level_fails() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["render", "-s", "-2=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be less than 0"));
}

#[test]
fn test_out_of_range_level_warns() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["render", "-u", "#", "-w", "2", "-l", "9"])
        .assert()
        .success()
        .stdout("##\n")
        .stderr(predicate::str::contains("outside 1..=1"));
}

#[test]
fn test_config_drives_render() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["config", "unit", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unit set to -"));

    padlevel_cmd(&temp)
        .args(["config", "widths", "2,2"])
        .assert()
        .success();

    padlevel_cmd(&temp)
        .assert()
        .success()
        .stdout("----\n");

    padlevel_cmd(&temp)
        .args(["config", "widths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2,2"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["config", "colour", "red"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    assert!(!temp.path().join("config.json").exists());
}

#[test]
fn test_table_lists_levels() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["table", "-w", "2", "-w", "3", "-l", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level"))
        .stdout(predicate::str::contains("2 levels, active level 1"))
        .stdout(predicate::str::contains("5 columns"));
}

#[test]
fn test_table_empty() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("No levels."));
}

#[test]
fn test_render_oversized_width_fails() {
    let temp = TempDir::new().unwrap();

    padlevel_cmd(&temp)
        .args(["render", "-w", "18446744073709551615", "-w", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceeds the total limit"));

    padlevel_cmd(&temp)
        .args(["render", "-w", "1", "-s", "1=70000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("padding width 70000 at level 1"));
}

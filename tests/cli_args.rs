//! Tests for the `pokeinfo` binary.

mod common;

use common::temp_config;
use std::process::{Command, Output};

fn pokeinfo_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pokeinfo"))
}

/// Run `pokeinfo --offline show <name>` against a config that skips the
/// roster delay, so the user's own config is never read.
fn show_offline(name: &str) -> Output {
    let (_dir, config_path) = temp_config("[lookup]\noffline_delay_ms = 0\n");
    pokeinfo_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("--offline")
        .arg("show")
        .arg(name)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_shows_offline_option() {
    let output = pokeinfo_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--offline"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("show"));
}

#[test]
fn test_show_known_pokemon_succeeds() {
    let output = show_offline("pikachu");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pikachu (025)"));
    assert!(stdout.contains("HP: 35"));
}

#[test]
fn test_show_unknown_pokemon_prints_fallback_and_fails() {
    let output = show_offline("missingno");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "There was an error: Pokemon not found");
}

#[test]
fn test_show_blank_name_prints_idle_prompt() {
    let output = show_offline("   ");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Submit a pokemon");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config_path) = temp_config("[lookup]\ntimeout_seconds = 0\n");
    let output = pokeinfo_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("show")
        .arg("pikachu")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
    assert!(stderr.contains("timeout_seconds"));
}

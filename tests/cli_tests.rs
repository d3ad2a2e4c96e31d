// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use clap::Parser;
use filemanip::cli::Cli;
use tempfile::TempDir;

#[test]
fn test_parse_no_words_reads_stdin() {
    let cli = Cli::try_parse_from(["filemanip"]).expect("Valid command parsing");
    assert!(cli.words.is_empty());
}

#[test]
fn test_parse_words() {
    let cli = Cli::try_parse_from(["filemanip", "copy", "a.txt", "b.txt"])
        .expect("Valid command parsing");
    assert_eq!(cli.words, vec!["copy", "a.txt", "b.txt"]);
}

#[test]
fn test_global_verbose_flag() {
    let cli = Cli::try_parse_from(["filemanip", "-vv", "copy", "a", "b"])
        .expect("Valid command parsing");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.words.len(), 3);
}

fn run_binary(dir: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_filemanip"))
        .arg("--config")
        .arg(dir.path().join("no-settings.toml"))
        .arg("-C")
        .arg(dir.path())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("binary should finish")
}

#[test]
fn test_binary_reverse_from_stdin() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("in.txt"), "abc\n").unwrap();

    let output = run_binary(&dir, &[], "reverse in.txt out/nested/file.txt\n");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("out/nested/file.txt")).unwrap(),
        "\ncba"
    );
}

#[test]
fn test_binary_words_instead_of_stdin() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("f.txt"), "ab").unwrap();

    let output = run_binary(&dir, &["duplicate-contents", "f.txt", "3"], "");

    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.txt")).unwrap(),
        "ababab"
    );
}

#[test]
fn test_binary_replace_all_flag() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("f.txt"), "ababab").unwrap();

    let output = run_binary(&dir, &["--replace-all"], "replace-string f.txt ab X\n");

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(dir.path().join("f.txt")).unwrap(), "XXX");
}

#[test]
fn test_binary_invalid_prompt_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    let output = run_binary(&dir, &[], "reverse foo.txt\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid prompt"));
}

#[test]
fn test_binary_empty_stdin_is_invalid_prompt() {
    let dir = TempDir::new().unwrap();

    let output = run_binary(&dir, &[], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid prompt"));
}

#[test]
fn test_binary_read_failure_reported_on_one_line() {
    let dir = TempDir::new().unwrap();

    let output = run_binary(&dir, &[], "reverse missing.txt out.txt\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was: {:?}", stderr);
    assert!(stderr.starts_with("Error: Cannot read file missing.txt"));
    assert!(!stderr.contains('\u{1b}'));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_binary_unknown_command() {
    let dir = TempDir::new().unwrap();

    let output = run_binary(&dir, &[], "frobnicate a b\n");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command: frobnicate"));
}

#[test]
fn test_binary_only_first_line_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "A").unwrap();

    let output = run_binary(&dir, &[], "copy a.txt b.txt\ncopy a.txt c.txt\n");

    assert!(output.status.success());
    assert!(dir.path().join("b.txt").exists());
    assert!(!dir.path().join("c.txt").exists());
}

#[test]
fn test_binary_invalid_settings_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[replace]\nmode = \"sometimes\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_filemanip"))
        .arg("--config")
        .arg(&config)
        .args(["copy", "a", "b"])
        .stdin(Stdio::null())
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TOML error"));
}

#[test]
fn test_binary_directory_flag_resolves_relative_paths() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("src.txt"), "relative").unwrap();

    let output = run_binary(&dir, &["copy", "src.txt", "dst/out.txt"], "");

    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("dst/out.txt")).unwrap(),
        "relative"
    );
}

#[test]
fn test_binary_missing_directory_is_config_error() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_filemanip"))
        .arg("-C")
        .arg(dir.path().join("does-not-exist"))
        .args(["copy", "a", "b"])
        .stdin(Stdio::null())
        .output()
        .expect("binary should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("Configuration error: cannot change to"));
}

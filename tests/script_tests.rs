//! Integration tests for script files and configuration

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::notes_cmd;

#[test]
fn test_script_runs_commands() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.txt");
    fs::write(
        &script,
        "# build a note\nnew\ntitle Plan\ntag q3\nwait 300\n\nlist\n",
    )
    .unwrap();

    notes_cmd()
        .arg("--no-samples")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("* [1] Plan"))
        .stdout(predicate::str::contains("#q3"));
}

#[test]
fn test_script_error_aborts_with_line_number() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    fs::write(&script, "new\nfrobnicate\nlist\n").unwrap();

    notes_cmd()
        .arg("--no-samples")
        .arg(&script)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains("Notes (").not());
}

#[test]
fn test_script_invalid_note_id_exit_code() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad_id.txt");
    fs::write(&script, "select abc\n").unwrap();

    notes_cmd().arg(&script).assert().code(3);
}

#[test]
fn test_script_unknown_note_exit_code() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("missing.txt");
    fs::write(&script, "delete 99\n").unwrap();

    notes_cmd()
        .arg(&script)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Note not found: 99"));
}

#[test]
fn test_script_quit_skips_rest() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("quit.txt");
    fs::write(&script, "list\nquit\nfrobnicate\n").unwrap();

    notes_cmd().arg(&script).assert().success();
}

#[test]
fn test_missing_script_fails() {
    let temp = TempDir::new().unwrap();

    notes_cmd()
        .arg(temp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn test_config_file_applies() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("notes.toml");
    fs::write(&config, "seed_samples = false\ndebounce_ms = 0\n").unwrap();

    notes_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("list\nnew\ntitle Quick\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes (0)"))
        .stdout(predicate::str::contains("* [1] Quick"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    notes_cmd()
        .arg("-c")
        .arg(temp.path().join("absent.toml"))
        .write_stdin("list\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_cli_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("notes.toml");
    fs::write(&config, "seed_samples = true\n").unwrap();

    notes_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--no-samples")
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes (0)"));
}

#[test]
fn test_cli_debounce_out_of_range_rejected() {
    notes_cmd()
        .arg("--no-samples")
        .arg("--debounce-ms")
        .arg("120000")
        .write_stdin("new\ntitle x\nlist\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("debounce_ms must be at most 60000"));
}

#[test]
fn test_cli_debounce_beyond_u64_range_does_not_crash() {
    notes_cmd()
        .arg("--no-samples")
        .arg("--debounce-ms")
        .arg("18446744073709551615")
        .write_stdin("new\ntitle x\nlist\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_script_blank_tag_is_ignored() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("blank_tag.txt");
    fs::write(&script, "new\ntag\ntag   \ntag work\nshow\n").unwrap();

    notes_cmd()
        .arg("--no-samples")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: #work\n"));
}

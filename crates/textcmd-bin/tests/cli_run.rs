//! End-to-end runs of the `textcmd` binary inside a scratch directory.

use std::path::Path;
use std::process::{Command, Output};

fn textcmd(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textcmd"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn textcmd")
}

#[test]
fn demo_runs_without_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let out = textcmd(dir.path(), &[]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Hello, World!\nHello, \nHello, World!\n"
    );
    assert!(dir.path().join("textcmd.log").exists());
}

#[test]
fn script_file_and_config_are_honored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("textcmd.toml"),
        "[history]\ncapacity = 1\n[log]\nfile = \"run.log\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("edits.txt"),
        "insert 0 ab\ninsert 2 cd\nundo\nundo\nprint\n",
    )
    .unwrap();
    let out = textcmd(dir.path(), &["edits.txt"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "ab\n");
    assert!(dir.path().join("run.log").exists());
}

#[test]
fn invalid_script_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.txt"), "insert 0 a\ndelete 0 9\n").unwrap();
    let out = textcmd(dir.path(), &["bad.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}

#[test]
fn malformed_config_warning_reaches_log_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("textcmd.toml"), "[history]\ncapacity = \"lots\"\n").unwrap();
    let out = textcmd(dir.path(), &[]);
    assert!(out.status.success());
    let log = std::fs::read_to_string(dir.path().join("textcmd.log")).unwrap();
    assert!(log.contains("WARN config:"), "log was: {log}");
    assert!(log.contains("config_parse_failed_using_defaults"), "log was: {log}");
}

#[test]
fn unreadable_config_override_is_warned() {
    let dir = tempfile::tempdir().unwrap();
    let out = textcmd(dir.path(), &["--config", "missing.toml"]);
    assert!(out.status.success());
    let log = std::fs::read_to_string(dir.path().join("textcmd.log")).unwrap();
    assert!(log.contains("config_unreadable_using_defaults"), "log was: {log}");
    assert!(log.contains("missing.toml"), "log was: {log}");
}

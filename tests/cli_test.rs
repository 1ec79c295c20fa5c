use std::fs;
use std::path::Path;
use std::process::{Command, Output};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn trawl(root: &Path, tokens: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trawl"))
        .arg(root)
        .args(tokens)
        .output()
        .expect("binary should spawn")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Exit codes and diagnostics
// ---------------------------------------------------------------------------

#[test]
fn by_name_prints_matches_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "top").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("a.txt"), "nested").unwrap();
    fs::write(sub.join("b.txt"), "other").unwrap();

    let output = trawl(dir.path(), &["-name", "a.txt"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.ends_with("a.txt")));
}

#[test]
fn listing_empty_directory_prints_nothing_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();

    let output = trawl(dir.path(), &["where-to-look"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_criterion_exits_one_with_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = trawl(dir.path(), &["badcriterion"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid criteria: badcriterion"));
}

#[test]
fn missing_exec_command_exits_one_with_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = trawl(dir.path(), &["-exec", "a.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing command for -exec"));
}

#[test]
fn too_few_arguments_exits_one_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_trawl"))
        .output()
        .expect("binary should spawn");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn unreadable_root_exits_one_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let output = trawl(&missing, &["where-to-look"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open directory"));
}

#[test]
fn delete_failures_do_not_change_the_exit_path() {
    let dir = tempfile::tempdir().unwrap();
    let full = dir.path().join("notes_box");
    fs::create_dir(&full).unwrap();
    fs::write(full.join("inner.txt"), "keeps it non-empty").unwrap();

    let output = trawl(dir.path(), &["-delete", "notes"]);

    assert!(output.status.success(), "failed removal is non-fatal");
    assert!(full.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("remove"));
}

#[test]
fn exec_reports_executed_commands() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hit"), "").unwrap();

    let output = trawl(dir.path(), &["-exec", "hit", "true"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Executed: true "));
}

#[test]
fn failed_exec_is_logged_but_exit_stays_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hit"), "").unwrap();

    let output = trawl(dir.path(), &["-exec", "hit", "false"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("system"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn assistant(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

#[test]
fn test_interactive_session_greets_and_saves_on_close() {
    let temp_dir = tempfile::tempdir().unwrap();

    assistant(temp_dir.path())
        .write_stdin("hello\nadd Ivan 0501234567\nadd-birthday Ivan 01.10.1985\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Birthday added."))
        .stdout(predicate::str::contains("Data saved. Good bye!"));

    assert!(temp_dir.path().join("addressbook.json").exists());
    assert!(temp_dir.path().join("notes.json").exists());
}

#[test]
fn test_data_survives_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    assistant(temp_dir.path())
        .write_stdin("add Eva 0671234567\nadd-email Eva eva@example.com\nadd-note plan trip #travel\nexit\n")
        .assert()
        .success();

    assistant(temp_dir.path())
        .write_stdin("phone Eva\nshow-email Eva\nnotes-by-tag #Travel\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0671234567"))
        .stdout(predicate::str::contains("eva@example.com"))
        .stdout(predicate::str::contains("1. plan trip | Tags: #travel"));
}

#[test]
fn test_end_of_input_also_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    assistant(temp_dir.path())
        .write_stdin("add Ivan\n")
        .assert()
        .success();

    assistant(temp_dir.path())
        .args(["run", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivan"));
}

#[test]
fn test_mistakes_are_reported_and_session_continues() {
    let temp_dir = tempfile::tempdir().unwrap();

    assistant(temp_dir.path())
        .write_stdin("add Ivan 123\nphone Ghost\nshow\nadd\nshow-note abc\nadd Ivan\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone number must contain exactly 10 digits.",
        ))
        .stdout(predicate::str::contains("Contact not found."))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Did you mean: show-birthday"))
        .stdout(predicate::str::contains(
            "Enter the command followed by necessary arguments.",
        ))
        .stdout(predicate::str::contains("Note id must be a positive integer"))
        .stdout(predicate::str::contains("Contact added."));
}

#[test]
fn test_run_subcommand_executes_and_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    assistant(temp_dir.path())
        .args(["run", "add", "Lilia", "0931234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."));

    assistant(temp_dir.path())
        .args(["run", "add-note", "call", "Lilia", "#family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added (ID: 1)."));

    assistant(temp_dir.path())
        .args(["run", "delete-note", "1"])
        .assert()
        .success();

    // ids are never reused
    assistant(temp_dir.path())
        .args(["run", "add-note", "again"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added (ID: 2)."));

    assistant(temp_dir.path())
        .args(["run", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lilia"))
        .stdout(predicate::str::contains("0931234567"));
}

#[test]
fn test_assistant_home_env_selects_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env("ASSISTANT_HOME", temp_dir.path())
        .args(["run", "add", "Eva"])
        .assert()
        .success();

    assert!(temp_dir.path().join("addressbook.json").exists());
}

#[test]
fn test_config_window_applies_to_birthdays() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"birthday_window_days": 0}"#,
    )
    .unwrap();

    assistant(temp_dir.path())
        .args(["run", "birthdays"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No upcoming birthdays in the next 0 days.",
        ));
}

#[test]
fn test_corrupt_snapshot_fails_with_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("addressbook.json"), "{ not json").unwrap();

    assistant(temp_dir.path())
        .args(["run", "all"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_hidden_complete_lists_matches() {
    let temp_dir = tempfile::tempdir().unwrap();

    assistant(temp_dir.path())
        .args(["__complete", "add-"])
        .assert()
        .success()
        .stdout("add-birthday\nadd-email\nadd-note\nadd-tag\n");

    assistant(temp_dir.path())
        .args(["__complete", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

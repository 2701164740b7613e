use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/telegram_subset.json")
}

#[allow(deprecated)]
fn gen_cmd() -> Command {
    Command::cargo_bin("botsmith-gen").unwrap()
}

#[test]
fn test_help_flag() {
    gen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--schema"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_schema_is_required() {
    gen_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--schema"));
}

#[test]
fn test_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("gen_helpers.go");

    gen_cmd()
        .arg("--schema")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("// THIS FILE IS AUTOGENERATED. DO NOT EDIT.\n"));
    assert!(content.contains("func (m Message) Forward(b *Bot, chatId int64"));
}

#[test]
fn test_dry_run_prints_and_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("gen_helpers.go");

    gen_cmd()
        .arg("--schema")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "// THIS FILE IS AUTOGENERATED. DO NOT EDIT.\n",
        ))
        .stdout(predicate::str::contains("// Leave Helper method for Bot.LeaveChat."));

    assert!(!output.exists());
}

#[test]
fn test_package_client_and_regen_flags() {
    gen_cmd()
        .arg("--schema")
        .arg(fixture_path())
        .args(["--package", "tgbot"])
        .args(["--client", "Client"])
        .args(["--client-param", "cl"])
        .args(["--regen-command", "make helpers"])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("\npackage tgbot\n"))
        .stdout(predicate::str::contains("// Regen by running 'make helpers' in the repo root."))
        .stdout(predicate::str::contains("func (c Chat) Leave(cl *Client, opts *LeaveChatOpts)"))
        .stdout(predicate::str::contains("\treturn cl.LeaveChat(c.Id, opts)\n"));
}

#[test]
fn test_client_param_matching_receiver_renames_receiver() {
    gen_cmd()
        .arg("--schema")
        .arg(fixture_path())
        .args(["--client-param", "c"])
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("func (c_ Chat) Leave(c *Bot, opts *LeaveChatOpts)"))
        .stdout(predicate::str::contains("\treturn c.LeaveChat(c_.Id, opts)\n"));
}

#[test]
fn test_missing_schema_file_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("gen_helpers.go");

    gen_cmd()
        .arg("--schema")
        .arg(temp_dir.path().join("absent.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read API description"));

    assert!(!output.exists());
}

#[test]
fn test_malformed_schema_fails() {
    let temp_dir = TempDir::new().unwrap();
    let schema = temp_dir.path().join("api.json");
    fs::write(&schema, "{ not json").unwrap();

    gen_cmd()
        .arg("--schema")
        .arg(&schema)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse API description"));
}

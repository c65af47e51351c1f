use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;

fn text2slide(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("text2slide").expect("bin");
    cmd.current_dir(dir)
        .env_remove("TEXT2SLIDE_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn split_prints_numbered_slides() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("talk.txt"), "Hello\n\nWorld\nagain\n").unwrap();

    text2slide(tmp.path())
        .args(["split", "talk.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- 1/2 ---\nHello\n"))
        .stdout(predicate::str::contains("--- 2/2 ---\nWorld\nagain\n"));
}

#[test]
fn split_json_from_stdin() {
    let tmp = tempfile::tempdir().unwrap();
    let output = text2slide(tmp.path())
        .args(["split", "-", "--json"])
        .write_stdin("Intro\n\nsee https://example.com.\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slides = value.as_array().unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0]["text"], "Intro");
    assert_eq!(slides[1]["links"][0], "https://example.com");
}

#[test]
fn split_blank_input_fails() {
    let tmp = tempfile::tempdir().unwrap();
    text2slide(tmp.path())
        .args(["split", "-"])
        .write_stdin("  \n\n ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some text."));
}

#[test]
fn share_prints_link() {
    let tmp = tempfile::tempdir().unwrap();
    text2slide(tmp.path())
        .args(["share", "-", "--base", "https://slides.example/deck?old=1"])
        .write_stdin("Hello\n\nWorld")
        .assert()
        .success()
        .stdout("https://slides.example/deck?slides=Hello%0A%0AWorld\n");
}

#[test]
fn share_uses_configured_base() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join(".text2slide")).unwrap();
    fs::write(
        tmp.path().join(".text2slide/config.toml"),
        "share_base_url = \"https://config.example/\"\n",
    )
    .unwrap();

    text2slide(tmp.path())
        .args(["share", "-"])
        .write_stdin("A")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://config.example/?slides=A"));
}

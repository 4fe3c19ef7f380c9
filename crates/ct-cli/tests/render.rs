//! Integration tests for the render command

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const THREAD_JSON: &str = r#"{
  "roots": [
    {
      "id": "1",
      "author": "John Doe",
      "text": "This is a great post!",
      "created_at": "2026-08-29T12:00:00Z",
      "replies": [
        {
          "id": "2",
          "author": "Jane Smith",
          "text": "I agree!",
          "created_at": "2026-08-29T12:05:00Z",
          "replies": []
        }
      ]
    },
    {
      "id": "3",
      "author": "Bob Johnson",
      "text": "Thanks for sharing",
      "created_at": "2026-08-29T12:10:00Z",
      "replies": []
    }
  ]
}"#;

#[test]
fn test_render_thread_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", THREAD_JSON).unwrap();

    Command::cargo_bin("comment-thread")
        .unwrap()
        .arg("render")
        .arg(file.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("  Jane Smith"))
        .stdout(predicate::str::contains("3 comments"));
}

#[test]
fn test_render_with_ids() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", THREAD_JSON).unwrap();

    Command::cargo_bin("comment-thread")
        .unwrap()
        .arg("render")
        .arg(file.path())
        .arg("--ids")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2]"));
}

#[test]
fn test_render_missing_file() {
    Command::cargo_bin("comment-thread")
        .unwrap()
        .arg("render")
        .arg("/nonexistent/thread.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read thread file"));
}

#[test]
fn test_render_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not a thread").unwrap();

    Command::cargo_bin("comment-thread")
        .unwrap()
        .arg("render")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse thread file"));
}

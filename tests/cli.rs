//! End-to-end tests for the `library` binary
//!
//! Each test runs against its own temp data directory via the
//! LIBRARY_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn library(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("library").unwrap();
    cmd.env("LIBRARY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_stores() {
    let dir = TempDir::new().unwrap();

    library(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("data").join("books.txt").exists());
    assert!(dir.path().join("data").join("users.txt").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn add_and_list_books() {
    let dir = TempDir::new().unwrap();

    library(&dir)
        .args(["book", "add", "Dune", "Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added book 'Dune'"));

    library(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune").and(predicate::str::contains("available")));
}

#[test]
fn borrow_and_return_round_trip() {
    let dir = TempDir::new().unwrap();

    library(&dir).args(["book", "add", "Dune", "Herbert"]).assert().success();
    library(&dir).args(["user", "register", "Bob"]).assert().success();

    library(&dir)
        .args(["borrow", "Bob", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Dune' borrowed by Bob"));

    // State persisted across invocations
    library(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lent"));

    library(&dir)
        .args(["user", "show", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune, Herbert"));

    library(&dir)
        .args(["return", "Bob", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Dune' returned by Bob"));

    library(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("available"));
}

#[test]
fn borrow_by_list_number() {
    let dir = TempDir::new().unwrap();

    library(&dir).args(["book", "add", "Dune", "Herbert"]).assert().success();
    library(&dir).args(["book", "add", "Hyperion", "Simmons"]).assert().success();
    library(&dir).args(["user", "register", "Bob"]).assert().success();

    library(&dir)
        .args(["borrow", "Bob", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Hyperion' borrowed by Bob"));
}

#[test]
fn double_lend_fails() {
    let dir = TempDir::new().unwrap();

    library(&dir).args(["book", "add", "Dune", "Herbert"]).assert().success();
    library(&dir).args(["user", "register", "Bob"]).assert().success();
    library(&dir).args(["user", "register", "Alice"]).assert().success();
    library(&dir).args(["borrow", "Bob", "Dune"]).assert().success();

    library(&dir)
        .args(["borrow", "Alice", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already lent out"));
}

#[test]
fn duplicate_registration_fails_case_insensitively() {
    let dir = TempDir::new().unwrap();

    library(&dir).args(["user", "register", "Alice"]).assert().success();

    library(&dir)
        .args(["user", "register", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn removing_lent_book_fails() {
    let dir = TempDir::new().unwrap();

    library(&dir).args(["book", "add", "Dune", "Herbert"]).assert().success();
    library(&dir).args(["user", "register", "Bob"]).assert().success();
    library(&dir).args(["borrow", "Bob", "Dune"]).assert().success();

    library(&dir)
        .args(["book", "remove", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be removed"));
}

#[test]
fn stores_use_flat_text_format() {
    let dir = TempDir::new().unwrap();

    library(&dir).args(["book", "add", "Dune", "Herbert"]).assert().success();
    library(&dir).args(["user", "register", "Bob"]).assert().success();
    library(&dir).args(["borrow", "Bob", "Dune"]).assert().success();

    let books = std::fs::read_to_string(dir.path().join("data").join("books.txt")).unwrap();
    assert_eq!(books, "Dune,Herbert,lent\n");

    let users = std::fs::read_to_string(dir.path().join("data").join("users.txt")).unwrap();
    assert_eq!(users, "Bob:Dune\n");
}

#[test]
fn malformed_store_lines_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("books.txt"), "Dune,Herbert,available\nbroken line\n").unwrap();

    library(&dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune").and(predicate::str::contains("broken").not()));
}

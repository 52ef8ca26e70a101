use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn rolodex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ROLODEX_PASSWORD")
        .env_remove("ROLODEX_TODAY")
        .arg("--database")
        .arg(dir.path().join("contacts.bin"))
        .arg("--password")
        .arg("secret");
    cmd
}

#[test]
fn add_contact() {
    let dir = tempdir().unwrap();

    // Add a contact
    rolodex(&dir)
        .args(["add", "Alice", "0123456789"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."));

    // Confirm newly added contact exist
    rolodex(&dir)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Alice"))
        .stdout(predicate::str::contains("phones: 0123456789"));

    // Attempt to add duplicate contact
    rolodex(&dir)
        .args(["add", "Alice", "1111111111"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact 'Alice' already exists"));

    rolodex(&dir)
        .args(["phone", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1111111111").not());
}

#[test]
fn invalid_inputs() {
    let dir = tempdir().unwrap();

    // INVALID COMMAND
    rolodex(&dir)
        .args(["and", "Alice", "0123456789"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // INVALID NUMBER
    for phone in ["12345", "012345678901", "01234S6789"] {
        rolodex(&dir)
            .args(["add", "Alice", phone])
            .assert()
            .success()
            .stderr(predicate::str::contains("Invalid phone"));
    }

    // Nothing was stored
    rolodex(&dir)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));
}

#[test]
fn change_and_find_phone() {
    let dir = tempdir().unwrap();

    rolodex(&dir)
        .args(["add", "Alice", "1111111111"])
        .assert()
        .success();

    rolodex(&dir)
        .args(["change", "Alice", "1111111111", "2222222222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone changed."));

    rolodex(&dir)
        .args(["phone", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2222222222"))
        .stdout(predicate::str::contains("1111111111").not());

    // Old number is gone
    rolodex(&dir)
        .args(["change", "Alice", "1111111111", "3333333333"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone not found."));

    rolodex(&dir)
        .args(["find-phone", "2222222222"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Alice\n"));

    rolodex(&dir)
        .args(["remove-phone", "Alice", "2222222222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone removed."));

    rolodex(&dir)
        .args(["find-phone", "2222222222"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No contact found with this phone number.",
        ));
}

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn runs_without_arguments() {
    let mut cmd = Command::cargo_bin("tack").unwrap();
    cmd.assert().success();
}

#[test]
fn checks_add_program() {
    let mut cmd = Command::cargo_bin("tack").unwrap();
    cmd.arg("check").arg("tests/files/add.asm");

    cmd.assert()
        .success()
        .stdout(contains("encoded 6 instructions"));
}

#[test]
fn checks_max_program() {
    let mut cmd = Command::cargo_bin("tack").unwrap();
    cmd.arg("check").arg("tests/files/max.asm");

    cmd.assert()
        .success()
        .stdout(contains("encoded 16 instructions"));
}

#[test]
fn rejects_unknown_extension() {
    let mut cmd = Command::cargo_bin("tack").unwrap();
    cmd.arg("check").arg("tests/expected/add.hack");

    cmd.assert().failure();
}

#[test]
fn assembles_add_program() {
    let dest = std::env::temp_dir().join("tack_add_test.hack");
    let mut cmd = Command::cargo_bin("tack").unwrap();
    cmd.arg("assemble").arg("tests/files/add.asm").arg(&dest);

    cmd.assert().success();
    let emitted = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        emitted.replace("\r\n", "\n"),
        include_str!("expected/add.hack").replace("\r\n", "\n")
    );
    let _ = fs::remove_file(&dest);
}

#[test]
fn assembles_max_program() {
    let dest = std::env::temp_dir().join("tack_max_test.hack");
    let mut cmd = Command::cargo_bin("tack").unwrap();
    cmd.arg("assemble").arg("tests/files/max.asm").arg(&dest);

    cmd.assert().success();
    let emitted = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        emitted.replace("\r\n", "\n"),
        include_str!("expected/max.hack").replace("\r\n", "\n")
    );
    let _ = fs::remove_file(&dest);
}

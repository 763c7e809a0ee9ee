use assert_cmd::Command;
use predicates::prelude::*;

fn delete_paper() -> Command {
    let mut cmd = Command::cargo_bin("delete-paper").unwrap();
    // Help and version must not depend on any pipeline environment.
    cmd.env_remove("DATABASE_URL").env_remove("DATA_DIR");
    cmd
}

#[test]
fn test_help_needs_no_environment() {
    delete_paper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("arXiv code"));
}

#[test]
fn test_version_needs_no_environment() {
    delete_paper()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("delete-paper"));
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    delete_paper()
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARXIV_CODE"));
}

use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "enertia-console";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Start subcommand help should list its flags.
fn start_help_lists_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--no-background-color"))
        .stdout(contains("--seed"));
}

#[test]
/// Version flag should print the crate version.
fn version_flag_prints_version() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
/// An unknown subcommand should fail with usage output.
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("observe");
    cmd.assert().failure().stderr(contains("Usage"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn textflut_cmd() -> Command {
    Command::cargo_bin("textflut").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    textflut_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixelflut canvas"));
}

#[test]
fn text_argument_is_required() {
    textflut_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn unknown_font_exits_with_status_one() {
    textflut_cmd()
        .args(["--font", "not-an-installed-font-family", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Can't find font 'not-an-installed-font-family'",
        ))
        .stderr(predicate::str::contains("Available fonts:"));
}

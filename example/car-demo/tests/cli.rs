use assert_cmd::Command;
use predicates::prelude::*;

fn demo_cmd() -> Command {
    Command::cargo_bin("car-demo").unwrap()
}

#[test]
fn augments_car_by_default() {
    demo_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("public String getName() {"))
        .stdout(predicate::str::contains("public int getPrice() {"))
        .stdout(predicate::str::contains("private Car() {}"))
        .stdout(predicate::str::contains("setName").not())
        .stderr(predicate::str::contains("note: Processing >> Car"))
        .stderr(predicate::str::contains("note: getName"));
}

#[test]
fn setter_flag_adds_setters() {
    demo_cmd()
        .args(["--setter", "--no-getter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public void setName(String _name) {"))
        .stdout(predicate::str::contains("price = _price;"))
        .stdout(predicate::str::contains("getName").not());
}

#[test]
fn access_flag_sets_constructor_access() {
    demo_cmd()
        .args(["--access", "public"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public Car() {}"));
}

#[test]
fn quiet_skips_member_notes() {
    demo_cmd()
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing >> Car"))
        .stderr(predicate::str::contains("note: getName").not());
}

#[test]
fn show_before_prints_both_versions() {
    let output = demo_cmd().arg("--show-before").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let (before, after) = stdout.split_once("// after").unwrap();
    assert!(!before.contains("getName"));
    assert!(after.contains("getName"));
}

#[test]
fn rejects_unknown_access() {
    demo_cmd()
        .args(["--access", "friend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

//! End-to-end tests for the onoma binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn onoma() -> Command {
    Command::cargo_bin("onoma").unwrap()
}

#[test]
fn test_list_prints_every_kind() {
    onoma()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("ash"))
        .stdout(predicate::str::contains("sep"))
        .stdout(predicate::str::contains("common"));
}

#[test]
fn test_list_filters_by_kind() {
    onoma()
        .args(["list", "--kind", "sep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sep"))
        .stdout(predicate::str::contains("ash").not());
}

#[test]
fn test_show_text_output() {
    onoma()
        .args(["show", "gen", "rules", "english"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tch"));
}

#[test]
fn test_show_json_output_is_valid_json() {
    let output = onoma()
        .args(["show", "gen", "rules", "french", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rules: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(rules.as_array().is_some_and(|array| !array.is_empty()));
}

#[test]
fn test_show_unknown_language_fails() {
    onoma()
        .args(["show", "gen", "rules", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("klingon"));
}

#[test]
fn test_check_accepts_a_clean_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clean.txt");
    fs::write(&path, "// a comment\n\"a\" \"\" \"\" \"a\"\n").unwrap();

    onoma()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no problems"));
}

#[test]
fn test_check_reports_malformed_lines_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "\"a\" \"\" \"\" \"a\"\nonly three fields\n").unwrap();

    onoma()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("broken:2"));
}

#[test]
fn test_check_follows_includes_in_the_same_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("outer.txt"),
        "#include inner\n\"a\" \"\" \"\" \"a\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("inner.txt"), "\"b\" \"\" \"\" \"b\"\n").unwrap();

    onoma()
        .arg("check")
        .arg(dir.path().join("outer.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rules"));
}

#[test]
fn test_check_missing_include_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dangling.txt");
    fs::write(&path, "#include nowhere\n").unwrap();

    onoma()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn test_probe_reports_first_match() {
    onoma()
        .args(["probe", "gen", "schmidt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sch\" -> \"S\""));
}

#[test]
fn test_probe_with_concrete_language() {
    onoma()
        .args(["probe", "gen", "stein", "--languages", "german"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ei\" -> \"aj\""));
}

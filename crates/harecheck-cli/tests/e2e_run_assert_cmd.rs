//! End-to-end runs of the binary against the offline fake provider.

use assert_cmd::Command;
use predicates::prelude::*;

fn harecheck() -> Command {
    let mut cmd = Command::cargo_bin("harecheck").unwrap();
    // keep the environment out of the picture so tests are hermetic
    cmd.env_remove("OPENAI_API_KEY");
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn fake_provider_run_writes_the_artifact_and_prints_done() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("scores.svg");

    harecheck()
        .args(["run", "--provider", "fake", "--fake-response", "B", "--trials", "2", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."));

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn invalid_answers_are_warned_about_but_do_not_abort() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("scores.svg");

    harecheck()
        .args(["run", "--provider", "fake", "--fake-response", "X", "--trials", "1", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Some answers were invalid."));

    assert!(out.exists());
}

#[test]
fn per_trial_score_and_diagnosis_are_logged() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("scores.svg");

    harecheck()
        .args(["run", "--provider", "fake", "--fake-response", "C", "--trials", "1", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Score: 40 [Psychopath]"));
}

#[test]
fn openai_provider_without_key_is_fatal() {
    harecheck()
        .args(["run", "--trials", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API key"));
}

#[test]
fn unknown_provider_is_fatal() {
    harecheck()
        .args(["run", "--provider", "carrier-pigeon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown provider"));
}

#[test]
fn config_file_sets_the_run_shape_and_flags_override_it() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("run.yaml");
    let out = tmp.path().join("from-flag.svg");
    std::fs::write(&cfg, "trials: 9\noutput: from-config.svg\n").unwrap();

    // --trials and --output override the file values
    harecheck()
        .args(["run", "--provider", "fake", "--trials", "1", "--config"])
        .arg(&cfg)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn statements_lists_the_twenty_item_bank() {
    let assert = harecheck().arg("statements").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 20);
    assert!(stdout.contains(" 1. "));
    assert!(stdout.contains("20. "));
}

#[test]
fn version_prints_the_crate_version() {
    harecheck()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

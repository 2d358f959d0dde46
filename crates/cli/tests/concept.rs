use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[allow(deprecated)]
fn lnu() -> Command {
    let mut cmd = Command::cargo_bin("lnu").expect("binary");
    cmd.env_remove("LNU_LEXICON")
        .env_remove("LNU_RULES")
        .arg("--quiet");
    cmd
}

fn run_json(cmd: &mut Command) -> (bool, Value) {
    let output = cmd.output().expect("command run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

#[test]
fn concept_selects_cold_keeper_for_food_cooling() {
    let (ok, body) = run_json(lnu().args(["concept", "a box that keeps food cold"]));
    assert!(ok, "{body}");
    assert_eq!(body["mode"], "concept");
    assert_eq!(body["rule"], "cold-keeper");
    assert_eq!(body["fallback"], false);
    assert_eq!(body["candidates"][0]["word"], "tke'kewe'kn");
}

#[test]
fn concept_without_keywords_uses_the_fallback_rule() {
    let (ok, body) = run_json(lnu().args(["concept", "a device for counting stars"]));
    assert!(ok, "{body}");
    assert_eq!(body["rule"], "helper-pattern");
    assert_eq!(body["fallback"], true);
    let candidates = body["candidates"].as_array().expect("candidates");
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0]["caution"]
        .as_str()
        .is_some_and(|caution| !caution.trim().is_empty()));
}

#[test]
fn concept_purpose_flag_is_scanned() {
    let (ok, body) = run_json(lnu().args(["concept", "kitchen box", "--purpose", "keeps food cold"]));
    assert!(ok, "{body}");
    assert_eq!(body["rule"], "cold-keeper");
    assert_eq!(body["purpose"], "keeps food cold");
}

#[test]
fn process_dispatches_by_mode_name() {
    let (ok, body) = run_json(lnu().args(["process", "--mode", "lexical", "kataq"]));
    assert!(ok, "{body}");
    assert_eq!(body["mode"], "lexical");
    assert_eq!(body["entry"]["needs_review"], true);

    let (ok, body) = run_json(lnu().args(["process", "--mode", "concept", "a fridge"]));
    assert!(ok, "{body}");
    assert_eq!(body["mode"], "concept");
    assert_eq!(body["rule"], "cold-keeper");
}

#[test]
fn process_rejects_unknown_mode() {
    let (ok, body) = run_json(lnu().args(["process", "--mode", "translate", "kwe'"]));
    assert!(!ok);
    assert_eq!(body["code"], "invalid_mode");
    assert!(body["message"].as_str().unwrap_or_default().contains("translate"));
}

#[test]
fn process_blank_concept_is_empty_input_not_fallback() {
    let (ok, body) = run_json(lnu().args(["process", "--mode", "concept", " "]));
    assert!(!ok);
    assert_eq!(body["code"], "empty_input");
}

#[test]
fn pretty_output_is_indented() {
    lnu()
        .args(["--pretty", "concept", "lamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"candidates\""));
}

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn components_dir(root: &Path, names: &[&str]) -> PathBuf {
    let dir = root.join("src").join("components");
    fs::create_dir_all(&dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"export {}\n").unwrap();
    }
    dir
}

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("reuse-advisor").expect("binary")
}

#[allow(deprecated)]
fn check_json(dir: &Path, name: &str, extra: &[&str]) -> Value {
    let output = cli()
        .arg("check")
        .arg(name)
        .arg("--components-dir")
        .arg(dir)
        .arg("--json")
        .args(extra)
        .output()
        .expect("check run");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn check_reports_similar_component() {
    let temp = tempdir().unwrap();
    let dir = components_dir(temp.path(), &["ConfirmDialog.tsx"]);

    cli()
        .arg("check")
        .arg("ConfirmModal.tsx")
        .arg("--components-dir")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("ConfirmDialog.tsx"))
        .stdout(predicate::str::contains("dialog"));
}

#[test]
fn check_json_report_carries_scores_and_groups() {
    let temp = tempdir().unwrap();
    let dir = components_dir(temp.path(), &["ConfirmDialog.tsx"]);

    let report = check_json(&dir, "ConfirmModal.tsx", &[]);

    assert_eq!(report["target"], "ConfirmModal.tsx");
    assert_eq!(report["normalized"], "confirmmodal");
    let matches = report["matches"].as_array().expect("matches");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "ConfirmDialog.tsx");
    assert!(matches[0]["score"].as_f64().unwrap() >= 0.60);
    assert_eq!(matches[0]["groups"], serde_json::json!(["dialog"]));
}

#[test]
fn check_without_matches_reports_no_duplicates() {
    let temp = tempdir().unwrap();
    let dir = components_dir(temp.path(), &["Button.tsx", "Card.tsx"]);

    cli()
        .arg("check")
        .arg("Widget42.tsx")
        .arg("--components-dir")
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No similar components found"));
}

#[test]
fn threshold_flag_narrows_matches() {
    let temp = tempdir().unwrap();
    let dir = components_dir(temp.path(), &["ConfirmDialog.tsx"]);

    let report = check_json(&dir, "ConfirmModal.tsx", &["--threshold", "0.99"]);

    assert!(report["matches"].as_array().unwrap().is_empty());
}

#[test]
fn max_results_flag_caps_matches() {
    let temp = tempdir().unwrap();
    let dir = components_dir(
        temp.path(),
        &["Modal.tsx", "Popup.tsx", "AlertDialog.tsx", "Lightbox.tsx"],
    );

    let report = check_json(&dir, "ConfirmDialog.tsx", &["--max-results", "2"]);

    assert_eq!(report["matches"].as_array().unwrap().len(), 2);
}

#[test]
fn custom_taxonomy_file_is_honored() {
    let temp = tempdir().unwrap();
    let dir = components_dir(temp.path(), &["GizmoBox.tsx"]);
    let taxonomy = temp.path().join("custom.json");
    fs::write(&taxonomy, r#"{"widget": ["widget", "gizmo"]}"#).unwrap();

    let report = check_json(
        &dir,
        "WidgetPanel.tsx",
        &["--taxonomy", taxonomy.to_str().unwrap()],
    );

    let matches = report["matches"].as_array().expect("matches");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["groups"], serde_json::json!(["widget"]));
}

#[test]
fn invalid_taxonomy_file_fails_fast() {
    let temp = tempdir().unwrap();
    let dir = components_dir(temp.path(), &["Button.tsx"]);
    let taxonomy = temp.path().join("broken.json");
    fs::write(&taxonomy, r#"{"dialog": ["modal", ""]}"#).unwrap();

    cli()
        .arg("check")
        .arg("ConfirmModal.tsx")
        .arg("--components-dir")
        .arg(&dir)
        .arg("--taxonomy")
        .arg(&taxonomy)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty synonym token"));
}

#[test]
fn scan_lists_components_and_skips_noise() {
    let temp = tempdir().unwrap();
    let dir = components_dir(
        temp.path(),
        &["Button.tsx", "Button.test.tsx", "index.ts"],
    );

    let output = cli()
        .arg("scan")
        .arg("--components-dir")
        .arg(&dir)
        .arg("--json")
        .output()
        .expect("scan run");

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let components = report["components"].as_array().expect("components");
    assert_eq!(components.len(), 1);
    assert_eq!(components[0]["name"], "Button.tsx");
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write(root: &std::path::Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_convert_directory() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("opportunity");
    let output = dir.path().join("out");
    write(&input, "1-research/market.md", b"# Market\n\nGrowing **fast**.");
    write(&input, "1-research/README.md", b"# Readme");
    write(&input, "9-contract/msa.md", b"# Master Agreement");

    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.env("NO_COLOR", "1")
        .arg("convert")
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successful: 2"));

    assert!(output.join("1-research/market.txt").is_file());
    assert!(output.join("9-contract/msa.txt").is_file());
    assert!(!output.join("1-research/README.txt").exists());
    assert!(output.join("_metadata/conversion-log.json").is_file());
    assert!(output.join("_metadata/document-index.json").is_file());
    assert!(!output.join("_metadata/failed-conversions.json").exists());
}

#[test]
fn test_convert_failure_exits_nonzero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("opportunity");
    let output = dir.path().join("out");
    write(&input, "a.md", b"# A");
    write(&input, "b.md", &[0xff, 0xfe, 0x00]);

    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.arg("convert")
        .arg("--input-dir")
        .arg(&input)
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("1 conversion(s) failed"));
    assert!(output.join("a.html").is_file());
    assert!(output.join("_metadata/failed-conversions.json").is_file());
}

#[test]
fn test_convert_missing_phase() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.arg("convert")
        .arg("--input-dir")
        .arg(dir.path())
        .arg("--phase")
        .arg("9-contract");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_unknown_format() {
    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.arg("convert")
        .arg("--input-dir")
        .arg(dir.path())
        .arg("--format")
        .arg("docx");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format: docx"));
}

#[test]
fn test_sow_generation() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("template.md");
    let context = dir.path().join("context.json");
    let output = dir.path().join("out/acme.txt");
    fs::write(
        &template,
        "# {{ project_name }}\n\n## 1. Executive Summary\n\nFor {{ customer_name }}.",
    )
    .unwrap();
    fs::write(&context, r#"{"customer_name": "Acme", "project_name": "Landing Zone"}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.arg("sow")
        .arg("--template")
        .arg(&template)
        .arg("--context")
        .arg(&context)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("text");

    cmd.assert().success().stdout(predicate::str::contains("Saved to"));
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("For Acme."));
    assert!(text.contains("Signature: "));
}

#[test]
fn test_sow_strict_missing_variable() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("template.md");
    let context = dir.path().join("context.json");
    fs::write(&template, "Budget: {{ budget }}").unwrap();
    fs::write(&context, "{}").unwrap();

    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.current_dir(dir.path())
        .arg("sow")
        .arg("--template")
        .arg(&template)
        .arg("--context")
        .arg(&context);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing template variable: budget"));
}

#[test]
fn test_info_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plan.md");
    fs::write(&input, "---\ntitle: Delivery Plan\n---\n# Scope\n\n- one\n- two").unwrap();

    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.arg("info").arg(&input).arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["metadata"]["title"], "Delivery Plan");
    assert_eq!(value["statistics"]["list_item_count"], 2);
}

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("brandoc");
    cmd.arg("version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("brandoc"));
}

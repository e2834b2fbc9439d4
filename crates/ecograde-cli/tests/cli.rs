use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn ecograde_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ecograde-cli").expect("binary should be built");
    cmd.env_remove("ECOINDEX_VERBOSE")
        .env_remove("ECOINDEX_DISPLAY_HTML");
    cmd
}

#[test]
fn passing_metrics_exit_0() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_pass.json"))
        .assert()
        .code(0);
}

#[test]
fn warning_metrics_exit_1() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_warning.json"))
        .assert()
        .code(1);
}

#[test]
fn failing_metrics_exit_2() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_error.json"))
        .assert()
        .code(2);
}

#[test]
fn json_output_is_valid() {
    let output = ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_mixed.json"))
        .arg("--output")
        .arg("json")
        .output()
        .expect("command should run");

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    assert!(parsed.get("schema_version").is_some());
    assert!(parsed.get("tool").is_some());
    assert!(parsed.get("thresholds").is_some());
    assert_eq!(parsed["pages"].as_array().expect("pages").len(), 2);

    // Page scores 95 and 85 average to 90 under the published formula.
    assert_eq!(parsed["eco_index"], 90.0);
    assert_eq!(parsed["pages"][0]["statuses"]["eco_index"], "pass");
    assert_eq!(parsed["pages"][1]["statuses"]["eco_index"], "warning");
}

#[test]
fn mixed_metrics_gate_on_the_warning_page() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_mixed.json"))
        .assert()
        .code(1);
}

#[test]
fn table_output_lists_pages_and_grade() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_pass.json"))
        .assert()
        .stdout(predicate::str::contains("https://example.org/light"))
        .stdout(predicate::str::contains("95"));
}

#[test]
fn csv_output_has_header_and_rows() {
    let output = ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_mixed.json"))
        .arg("--output")
        .arg("csv")
        .output()
        .expect("command should run");

    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("url,eco_index,grade,"));
    assert!(lines[3].starts_with("global,90.0,A,"));
}

#[test]
fn sonar_output_requires_a_file_path() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_error.json"))
        .arg("--output")
        .arg("sonar")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "missing required configuration: sonar_file_path",
        ));
}

#[test]
fn sonar_output_lists_severity_tagged_issues() {
    let output = ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_error.json"))
        .arg("--output")
        .arg("sonar")
        .arg("--sonar-file-path")
        .arg("src/index.html")
        .output()
        .expect("command should run");

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    let issues = parsed["issues"].as_array().expect("issues");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["ruleId"], "eco-index");
    assert_eq!(issues[0]["severity"], "MAJOR");
    assert_eq!(issues[0]["primaryLocation"]["filePath"], "src/index.html");
}

#[test]
fn out_flag_writes_the_report_to_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.html");

    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_pass.json"))
        .arg("--output")
        .arg("html")
        .arg("--out")
        .arg(&path)
        .assert()
        .code(0);

    let html = std::fs::read_to_string(&path).expect("report file");
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn no_input_is_an_error() {
    ecograde_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no URLs to audit"));
}

#[test]
fn inverted_thresholds_are_rejected() {
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_pass.json"))
        .arg("--pass-threshold")
        .arg("20")
        .arg("--fail-threshold")
        .arg("80")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid thresholds"));
}

#[test]
fn threshold_overrides_change_the_exit_code() {
    // 72 warns by default but passes once the pass bound drops to 70.
    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_warning.json"))
        .arg("--pass-threshold")
        .arg("70")
        .arg("--fail-threshold")
        .arg("20")
        .assert()
        .code(0);
}

#[test]
fn config_outputs_are_written_after_the_audit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("audit.json");
    std::fs::write(
        &config_path,
        r#"{
            "outputs": [
                { "format": "json", "path": "report.json" },
                { "format": "html", "path": "report.html" }
            ]
        }"#,
    )
    .expect("write config");

    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_pass.json"))
        .arg("--config")
        .arg(&config_path)
        .arg("--output-path-dir")
        .arg(dir.path())
        .assert()
        .code(0);

    assert!(dir.path().join("report.json").exists());
    assert!(dir.path().join("report.html").exists());
}

#[test]
fn display_html_env_skips_the_html_sink() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("audit.json");
    std::fs::write(
        &config_path,
        r#"{
            "outputs": [
                { "format": "json", "path": "report.json" },
                { "format": "html", "path": "report.html" }
            ]
        }"#,
    )
    .expect("write config");

    ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_pass.json"))
        .arg("--config")
        .arg(&config_path)
        .arg("--output-path-dir")
        .arg(dir.path())
        .env("ECOINDEX_DISPLAY_HTML", "false")
        .assert()
        .code(0);

    assert!(dir.path().join("report.json").exists());
    assert!(!dir.path().join("report.html").exists());
}

#[test]
fn french_language_from_config_reaches_the_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("audit.json");
    std::fs::write(&config_path, r#"{ "language": "fr" }"#).expect("write config");

    let output = ecograde_cmd()
        .arg("--metrics-json")
        .arg(fixtures_dir().join("metrics_warning.json"))
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg("json")
        .output()
        .expect("command should run");

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let recommendation = parsed["pages"][0]["recommendations"][0]
        .as_str()
        .expect("recommendation");
    assert!(recommendation.contains("empreinte"));
}

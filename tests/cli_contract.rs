use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

fn write_brief(path: &Path, yaml: &str) {
    fs::write(path, yaml).expect("brief should write");
}

fn run_reelplan(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_reelplan"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("reelplan command should run")
}

const SAMPLE_BRIEF: &str = r#"
topic: How AI Works
story: |
  AI learns from data. It predicts outcomes.
aspect_ratio: "9:16"
mood: energetic
keywords: "ai, data"
language: en
"#;

#[test]
fn build_json_output_is_stable_across_runs() {
    let dir = tempdir().expect("tempdir should create");
    write_brief(&dir.path().join("brief.yaml"), SAMPLE_BRIEF);

    let first = run_reelplan(dir.path(), &["build", "brief.yaml"]);
    assert!(first.status.success(), "build should succeed");

    let second = run_reelplan(dir.path(), &["build", "brief.yaml"]);
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout, "json output should be stable");

    let parsed: Value = serde_json::from_slice(&first.stdout).expect("json should parse");
    let scenes = parsed["scenes"].as_array().expect("scenes should be a list");
    assert_eq!(scenes.len(), 2);
    assert_eq!(parsed["mood"], "energetic");
    assert_eq!(parsed["aspect_ratio"], "9:16");
    assert_eq!(scenes[0]["label"], "Opening Hook");
}

#[test]
fn build_writes_yaml_to_the_output_path() {
    let dir = tempdir().expect("tempdir should create");
    write_brief(&dir.path().join("brief.yaml"), SAMPLE_BRIEF);

    let output = run_reelplan(
        dir.path(),
        &["build", "brief.yaml", "--format", "yaml", "-o", "plan.yaml"],
    );
    assert!(output.status.success(), "build -o should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote plan.yaml"));

    let written = fs::read_to_string(dir.path().join("plan.yaml")).expect("plan should exist");
    assert!(written.contains("title:"));
    assert!(written.contains("Opening Hook"));
}

#[test]
fn check_prints_a_summary_line() {
    let dir = tempdir().expect("tempdir should create");
    write_brief(&dir.path().join("brief.yaml"), SAMPLE_BRIEF);

    let output = run_reelplan(dir.path(), &["check", "brief.yaml"]);
    assert!(output.status.success(), "check should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("OK: brief.yaml (2 scenes"));
    assert!(stdout.contains("mood energetic"));
    assert!(stdout.contains("Keywords: AI, data"));
}

#[test]
fn invalid_format_reports_a_coded_error_envelope() {
    let dir = tempdir().expect("tempdir should create");
    write_brief(&dir.path().join("brief.yaml"), SAMPLE_BRIEF);

    let output = run_reelplan(dir.path(), &["build", "brief.yaml", "--format", "toml"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let envelope: Value = serde_json::from_str(stderr.trim()).expect("stderr should be json");
    assert_eq!(envelope["ok"], false);
    assert_eq!(envelope["error"]["code"], "INVALID_OUTPUT_FORMAT");
    assert_eq!(envelope["error"]["details"]["provided"], "toml");
}

#[test]
fn missing_brief_file_fails_with_context() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_reelplan(dir.path(), &["check", "missing.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read brief"));
}

#[test]
fn share_encode_then_decode_round_trips_via_cli() {
    let dir = tempdir().expect("tempdir should create");
    write_brief(&dir.path().join("brief.yaml"), SAMPLE_BRIEF);

    let encoded = run_reelplan(dir.path(), &["share", "encode", "brief.yaml"]);
    assert!(encoded.status.success(), "encode should succeed");
    let query = String::from_utf8_lossy(&encoded.stdout).trim().to_owned();
    assert!(query.contains("topic=How+AI+Works"));

    let decoded = run_reelplan(dir.path(), &["share", "decode", &query, "--format", "json"]);
    assert!(decoded.status.success(), "decode should succeed");
    let brief: Value = serde_json::from_slice(&decoded.stdout).expect("decode should print json");
    assert_eq!(brief["topic"], "How AI Works");
    assert_eq!(brief["aspect_ratio"], "9:16");
    assert_eq!(brief["keywords"], "ai, data");
}

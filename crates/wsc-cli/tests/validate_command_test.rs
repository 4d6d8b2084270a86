use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn cargo_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wsc"))
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn testdata_path(path: &str) -> PathBuf {
    repo_root().join(path)
}

fn run_validate(model: &Path, extra: &[&str]) -> Output {
    Command::new(cargo_bin())
        .arg("validate")
        .arg(model)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .expect("wsc validate should execute")
}

fn assert_exit_code(output: &Output, expected: i32) {
    let actual = output.status.code().unwrap_or(-1);
    assert_eq!(
        actual,
        expected,
        "unexpected exit code; stdout: {}; stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn create_model_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temporary model should be created");
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn validate_returns_success_for_clean_model() {
    let output = run_validate(&testdata_path("testdata/models/calculator.json"), &[]);

    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PASSED: 0 error(s), 0 warning(s)"));
}

#[test]
fn validate_reports_duplicate_operation_names() {
    let output = run_validate(
        &testdata_path("testdata/models/calculator_duplicate.yaml"),
        &[],
    );

    assert_exit_code(&output, 1);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Calculator.java:14:3: error: Web methods must have unique operation names"));
    assert!(stdout.contains("FAILED: 1 error(s), 0 warning(s)"));
}

#[test]
fn validate_lenient_strictness_passes_with_errors() {
    let output = run_validate(
        &testdata_path("testdata/models/orders.yaml"),
        &["--strictness", "lenient"],
    );

    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PASSED: 3 error(s), 0 warning(s)"));
}

#[test]
fn validate_applies_config_file_limit() {
    let output = run_validate(
        &testdata_path("testdata/models/orders.yaml"),
        &["--config", testdata_path("testdata/config/lenient.json").to_string_lossy().as_ref()],
    );

    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Order.java:3:1: error:"));
    assert!(!stdout.contains("Sku.java"));
    assert!(stdout.contains("... 2 more diagnostics not shown"));
}

#[test]
fn validate_renders_json_report() {
    let model = create_model_file(
        r#"{
  "type_definitions": [
    {
      "declaration": {
        "name": "com.example.Sku",
        "position": { "file": "Sku.java", "line": 2, "column": 1 }
      },
      "kind": "simple",
      "name": "sku",
      "constructors": [{ "modifiers": ["public"] }]
    }
  ]
}"#,
    );

    let output = run_validate(model.path(), &["--format", "json"]);

    assert_exit_code(&output, 1);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["passed"], false);
    assert_eq!(report["error_count"], 1);
    assert_eq!(report["diagnostics"][0]["message"], "No base type specified.");
    assert_eq!(report["diagnostics"][0]["position"]["file"], "Sku.java");
}

#[test]
fn validate_returns_error_when_model_path_is_invalid() {
    let output = run_validate(&testdata_path("testdata/models/does-not-exist.json"), &[]);

    assert_exit_code(&output, 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load model"));
}

#[test]
fn validate_returns_error_for_malformed_model() {
    let model = create_model_file("{ \"endpoint_interfaces\": 42 }");

    let output = run_validate(model.path(), &[]);

    assert_exit_code(&output, 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid model format"));
}

//! End-to-end runs of the `movehist` binary against temp files.

use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::NamedTempFile;

const RECORDS: &str = r#"{"id":"r1","action":"UPDATE","eventName":"updateOrder","tableName":"orders","changedValues":{"orders_number":"ORD-1"},"actionTstampTx":"2022-10-18T14:05:00Z","sessionUserFirstName":"Leo","sessionUserLastName":"Spaceman"}
{"id":"r2","action":"UPDATE","eventName":"cancelMove","tableName":"moves","changedValues":{"status":"CANCELED"}}
{"id":"r3","action":"INSERT","eventName":"nothingKnown","tableName":"unknown_table"}
"#;

fn movehist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_movehist"))
        .args(args)
        .env_remove("MOVEHIST_LOG")
        .output()
        .expect("binary runs")
}

fn records_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write records");
    file
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn render_json_lines_file() {
    let file = records_file(RECORDS);
    let path = file.path().to_str().expect("utf-8 path");
    let page = stdout_json(&movehist(&["--format", "json", "render", path]));

    assert_eq!(page["total_count"], 3);
    let rows = page["rows"].as_array().expect("rows");
    assert_eq!(rows[0]["event_name"]["text"], "Updated orders");
    assert_eq!(rows[0]["date"], "18 Oct 22 14:05");
    assert_eq!(rows[0]["modified_by"], "Leo Spaceman");
    assert_eq!(rows[1]["modified_by"], "MilMove");
    assert_eq!(rows[2]["event_name"]["text"], "Undefined event type");
}

#[test]
fn render_paginates() {
    let file = records_file(RECORDS);
    let path = file.path().to_str().expect("utf-8 path");
    let page = stdout_json(&movehist(&[
        "--format", "json", "render", path, "--page", "2", "--per-page", "2",
    ]));

    assert_eq!(page["page"], 2);
    assert_eq!(page["total_count"], 3);
    let rows = page["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "r3");
}

#[test]
fn render_skips_invalid_rows_when_validating() {
    let file = records_file(
        "{\"action\":\"UPSERT\",\"eventName\":\"x\",\"tableName\":\"orders\"}\n\
         {\"action\":\"UPDATE\",\"eventName\":\"updateOrder\",\"tableName\":\"orders\"}\n",
    );
    let path = file.path().to_str().expect("utf-8 path");
    let output = movehist(&["--format", "json", "render", path, "--validate"]);
    let page = stdout_json(&output);

    assert_eq!(page["total_count"], 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("skipping audit record"));
}

#[test]
fn config_file_selects_table_output() {
    let file = records_file(RECORDS);
    let mut config = NamedTempFile::new().expect("temp config");
    writeln!(config, "[output]\nformat = \"table\"").expect("write config");

    let output = movehist(&[
        "--config",
        config.path().to_str().expect("utf-8 path"),
        "render",
        file.path().to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().next().is_some_and(|line| line.starts_with("date")));
    assert!(stdout.contains("page 1: 3 of 3 rows"));
}

#[test]
fn check_passes_for_standard_catalogue() {
    let report = stdout_json(&movehist(&["--format", "json", "check"]));
    assert_eq!(report["strategy"], "most_specific");
    assert_eq!(report["ambiguities"], Value::Array(Vec::new()));
}

#[test]
fn schema_exports_audit_record() {
    let schema = stdout_json(&movehist(&["schema", "audit_record"]));
    assert!(schema["properties"]["eventName"].is_object());
}

#[test]
fn missing_input_fails_with_context() {
    let output = movehist(&["render", "/nonexistent/history.jsonl"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("movehist error"));
    assert!(stderr.contains("/nonexistent/history.jsonl"));
}

#[test]
fn config_prints_effective_toml() {
    let mut config = NamedTempFile::new().expect("temp config");
    writeln!(config, "[output]\nper_page = 7").expect("write config");

    let output = movehist(&["--config", config.path().to_str().expect("utf-8 path"), "config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("per_page = 7"));
    assert!(stdout.contains("[matching]"));
}

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn bqtype(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_bqtype"))
        .args(args)
        .output()
        .unwrap();
    (
        output.status.code().unwrap(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

fn write_schema(dir: &Path, name: &str, json: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

const VALID: &str = r#"{
    "tables": [
        {
            "name": "proj.ds.events",
            "columns": [
                {"name": "id", "type": "INT64"},
                {"name": "payload", "type": "STRUCT<kind STRING, tags ARRAY<STRING>>"}
            ]
        }
    ]
}"#;

const INVALID: &str = r#"{
    "tables": [
        {"name": "ok", "columns": [{"name": "a", "type": "BOOL"}]},
        {"name": "bad", "columns": [{"name": "x", "type": "VARCHAR"}]}
    ]
}"#;

#[test]
fn parse_canonical() {
    let (code, stdout, _) = bqtype(&["parse", "-o", "canonical", "array< struct<a int64,b string> >"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "ARRAY<STRUCT<a INT64, b STRING>>\n");
}

#[test]
fn parse_tree() {
    let (code, stdout, _) = bqtype(&["parse", "STRUCT<id INT64, tags ARRAY<STRING>>"]);
    assert_eq!(code, 0);
    let expected = "\
type: STRUCT
fields:
    id: INT64
    tags:
        type: ARRAY
        item: STRING
";
    assert_eq!(stdout, expected);
}

#[test]
fn parse_reports_each_failure() {
    let (code, stdout, stderr) = bqtype(&["parse", "-o", "canonical", "INT64", "VARCHAR", "STRUCT<>"]);
    assert_eq!(code, 1);
    assert_eq!(stdout, "INT64\n");
    assert!(stderr.contains("error: VARCHAR: unknown type: VARCHAR"));
    assert!(stderr.contains("error: STRUCT<>: empty field in STRUCT"));
}

#[test]
fn parse_strict_rejects_nested_arrays() {
    let (code, _, _) = bqtype(&["parse", "ARRAY<ARRAY<INT64>>"]);
    assert_eq!(code, 0);

    let (code, _, stderr) = bqtype(&["parse", "--strict", "ARRAY<ARRAY<INT64>>"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("array of array types are not supported"));
}

#[test]
fn parse_max_depth() {
    let (code, _, stderr) = bqtype(&["parse", "--max-depth", "1", "ARRAY<ARRAY<INT64>>"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("maximum depth of 1"));
}

#[test]
fn check_valid_schema() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", VALID);

    let (code, stdout, _) = bqtype(&["check", "--schema", &path]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn check_text_output() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", INVALID);

    let (code, stdout, _) = bqtype(&["check", "--schema", &path]);
    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        format!("{path}: error: create table bad: column 'x': unknown type: VARCHAR\n")
    );
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", INVALID);

    let (code, stdout, _) = bqtype(&["check", "--schema", &path, "--format", "json"]);
    assert_eq!(code, 1);

    let diagnostics: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let diagnostics = diagnostics.as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["file"], path.as_str());
    assert_eq!(diagnostics[0]["level"], "error");
    assert_eq!(diagnostics[0]["line"], 0);
    assert_eq!(
        diagnostics[0]["message"],
        "create table bad: column 'x': unknown type: VARCHAR"
    );
}

#[test]
fn check_github_actions_output() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", INVALID);

    let (code, stdout, _) = bqtype(&["check", "--schema", &path, "--format", "github-actions"]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with(&format!("::error file={path},line=0,col=0::create table bad")));
}

#[test]
fn check_schema_dir() {
    let dir = TempDir::new().unwrap();
    write_schema(dir.path(), "a.json", VALID);
    write_schema(dir.path(), "b.json", INVALID);
    write_schema(dir.path(), "notes.txt", "not json");

    let (code, stdout, _) = bqtype(&["check", "--schema-dir", dir.path().to_str().unwrap()]);
    assert_eq!(code, 1);
    let b_json = dir.path().join("b.json");
    assert_eq!(
        stdout,
        format!(
            "{}: error: create table bad: column 'x': unknown type: VARCHAR\n",
            b_json.display()
        )
    );
}

#[test]
fn check_quiet_on_success() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", VALID);

    let (code, stdout, stderr) = bqtype(&["check", "--schema", &path]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "");
    assert_eq!(stderr, "");
}

#[test]
fn check_nested_arrays_flag() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        dir.path(),
        "schema.json",
        r#"{"tables":[{"name":"t","columns":[{"name":"m","type":"ARRAY<ARRAY<FLOAT64>>"}]}]}"#,
    );

    let (code, _, _) = bqtype(&["check", "--schema", &path]);
    assert_eq!(code, 1);

    let (code, _, _) = bqtype(&["check", "--schema", &path, "--allow-nested-arrays"]);
    assert_eq!(code, 0);
}

#[test]
fn check_without_schema_is_usage_error() {
    let (code, _, stderr) = bqtype(&["check"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("no schema given"));
}

#[test]
fn check_unreadable_schema_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", "{ not json");

    let (code, _, stderr) = bqtype(&["check", "--schema", &path]);
    assert_eq!(code, 2);
    assert!(stderr.contains("parsing schema file"));
}

#[test]
fn arrow_schema_lists_tables() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", VALID);

    let (code, stdout, _) = bqtype(&["arrow-schema", "--schema", &path]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "proj.ds.events:");
    assert_eq!(lines[1], "    id: Int64");
    assert!(lines[2].starts_with("    payload: Struct"));
}

#[test]
fn arrow_schema_unknown_table() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", VALID);

    let (code, _, stderr) = bqtype(&["arrow-schema", "--schema", &path, "--table", "nope"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("table not found: nope"));
}

#[test]
fn arrow_schema_table_ignores_other_tables() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", INVALID);

    let (code, stdout, _) = bqtype(&["arrow-schema", "--schema", &path, "--table", "ok"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "ok:\n    a: Boolean\n");
}

#[test]
fn arrow_schema_error_names_cause_once() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(dir.path(), "schema.json", INVALID);

    let (code, _, stderr) = bqtype(&["arrow-schema", "--schema", &path, "--table", "bad"]);
    assert_eq!(code, 2);
    assert_eq!(
        stderr,
        "Error: create table bad: column 'x': unknown type: VARCHAR\n"
    );
}

#[test]
fn arrow_schema_nested_arrays_flag() {
    let dir = TempDir::new().unwrap();
    let path = write_schema(
        dir.path(),
        "schema.json",
        r#"{"tables":[{"name":"t","columns":[{"name":"m","type":"ARRAY<ARRAY<FLOAT64>>"}]}]}"#,
    );

    let (code, _, stderr) = bqtype(&["arrow-schema", "--schema", &path]);
    assert_eq!(code, 2);
    assert!(stderr.contains("array of array types are not supported"));

    let (code, stdout, _) = bqtype(&["arrow-schema", "--schema", &path, "--allow-nested-arrays"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("t:\n    m: List"));
}

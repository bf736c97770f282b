//! Integration tests for multab CLI

use std::io::Write;
use std::process::{Command, Stdio};

const PROMPT: &str = "Enter the desired number of rows for the multiplication table: ";

fn run_multab(args: &[&str], stdin_data: Option<&str>) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "multab", "--"];
    cmd_args.extend(args);

    let mut child = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    if let Some(data) = stdin_data {
        child
            .stdin
            .as_mut()
            .expect("child stdin not captured")
            .write_all(data.as_bytes())
            .expect("Failed to write to child stdin");
    }
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

const TABLE_3: &str = concat!(
    "            1         2         3\n",
    "  1         1         2         3\n",
    "  2         2         4         6\n",
    "  3         3         6         9\n",
);

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_multab(&["--help"], None);

    assert!(success);
    assert!(stdout.contains("multab"));
    assert!(stdout.contains("multiplication table"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_multab(&["--version"], None);

    assert!(success);
    assert!(stdout.contains("multab"));
}

#[test]
fn test_rows_argument_prints_table() {
    let (stdout, _, success) = run_multab(&["3"], None);

    assert!(success);
    assert_eq!(stdout, TABLE_3);
}

#[test]
fn test_rows_zero_prints_blank_header() {
    let (stdout, _, success) = run_multab(&["0"], None);

    assert!(success);
    assert_eq!(stdout, "   \n");
}

#[test]
fn test_rows_negative_prints_blank_header() {
    let (stdout, _, success) = run_multab(&["-4"], None);

    assert!(success);
    assert_eq!(stdout, "   \n");
}

#[test]
fn test_non_integer_rows_argument_is_usage_error() {
    let (_, stderr, success) = run_multab(&["abc"], None);

    assert!(!success);
    assert!(stderr.contains("invalid value"));
}

#[test]
fn test_interactive_prompt() {
    let (stdout, _, success) = run_multab(&[], Some("3\n"));

    assert!(success);
    assert_eq!(stdout, format!("{PROMPT}{TABLE_3}"));
}

#[test]
fn test_interactive_retry_on_invalid_input() {
    let (stdout, _, success) = run_multab(&[], Some("abc\n2\n"));

    assert!(success);
    let expected = format!(
        "{PROMPT}Invalid number. Please try again.\n{PROMPT}{table}",
        table = concat!(
            "            1         2\n",
            "  1         1         2\n",
            "  2         2         4\n",
        )
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_interactive_end_of_input_fails() {
    let (stdout, stderr, success) = run_multab(&[], Some(""));

    assert!(!success);
    assert_eq!(stdout, PROMPT);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("input ended before a valid number was entered"));
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_multab(&["2", "--output", "json"], None);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["dimension"], 2);
    assert_eq!(parsed["header"], serde_json::json!([1, 2]));
    assert_eq!(parsed["rows"][1]["cells"], serde_json::json!([2, 4]));
}

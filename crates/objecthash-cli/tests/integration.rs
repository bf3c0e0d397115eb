//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const FOO_BAR: &str = "32ae896c413cfdc79eec68be9139c86ded8b279238467c216cf2bec4d5f1e4a2";

fn run_cli(args: &[&str], stdin: Option<&str>) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_objecthash"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_hash_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "input.json", "[\"foo\", \"bar\"]\n");

    let (success, stdout, _) = run_cli(&["hash", &path], None);
    assert!(success);
    assert_eq!(stdout.trim(), FOO_BAR);
}

#[test]
fn test_hash_stdin_b64() {
    let (success, stdout, _) = run_cli(&["hash", "--b64"], Some(r#"["foo","bar"]"#));
    assert!(success);
    assert_eq!(stdout.trim().len(), 43);
}

#[test]
fn test_hash_reports_parse_errors() {
    let (success, _, stderr) = run_cli(&["hash"], Some(r#"["foo", bar]"#));
    assert!(!success);
    assert!(stderr.starts_with("Error: JSON parse error"));
    assert!(stderr.contains("'b'"));
}

fn test_hash_rejects_oversized_max_depth() {
    let (success, _, stderr) = run_cli(&["--max-depth", "500", "hash"], Some("[1]"));
    assert!(!success);
    assert!(stderr.contains("max_depth (500) is out of bounds"));
}

#[test]
fn test_hash_deep_input_is_depth_error() {
    let deep = "[".repeat(300) + &"]".repeat(300);
    let (success, _, stderr) = run_cli(&["hash"], Some(&deep));
    assert!(!success);
    assert!(stderr.contains("nesting depth exceeds limit of 127"));
    assert!(!stderr.contains("parse error"));
}

#[test]
fn test_hash_respects_max_depth() {
    let (success, _, stderr) = run_cli(&["--max-depth", "1", "hash"], Some("[[1]]"));
    assert!(!success);
    assert!(stderr.contains("nesting depth exceeds limit of 1"));
}

#[test]
fn test_golden_ok_and_mismatch() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.test", &format!("# ok\n[\"foo\",\"bar\"]\n{}\n", FOO_BAR));
    let (success, stdout, _) = run_cli(&["golden", &good], None);
    assert!(success);
    assert_eq!(stdout.trim(), "ok 1 cases");

    let bad = write_file(&dir, "bad.test", "[]\n00\n");
    let (success, stdout, stderr) = run_cli(&["golden", &bad, "--json"], None);
    assert!(!success);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["failed"], 1);
    assert_eq!(report["failures"][0]["line"], 1);
    assert!(stderr.contains("1 of 1 golden cases failed"));
}

#[test]
fn test_number_encoding() {
    let (success, stdout, _) = run_cli(&["number", "-1.5"], None);
    assert!(success);
    assert_eq!(stdout.trim(), "-1:011");

    let (success, _, stderr) = run_cli(&["number", "NaN"], None);
    assert!(!success);
    assert!(stderr.contains("not a finite number"));
}

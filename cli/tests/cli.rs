use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hl7-to-json"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("stdin accepts input");
    child.wait_with_output().expect("binary exits")
}

fn stdout_lines(output: &Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .expect("output is UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is one JSON document"))
        .collect()
}

#[test]
fn converts_file_input_line_for_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_hl7-to-json"))
        .args(["--input", fixture_path("messages.hl7").as_str()])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["msh"]["message_type"]["trigger_event"], json!("R01"));
    assert_eq!(lines[0]["pid"]["patient_name"]["family_name"]["surname"], json!("DOE"));
    assert_eq!(lines[0]["obx"].as_array().map(Vec::len), Some(2));
    assert_eq!(lines[1], json!({}));
    assert_eq!(lines[2], json!({}));
    assert_eq!(
        lines[3]["obx"]["observation_identifier"]["text"],
        json!("Reason For Visit:")
    );
}

#[test]
fn reads_standard_input_with_short_names() {
    let output = run_with_stdin(&["--short-names"], b"PID|1||ID1||DOE^JANE\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![json!({
            "pid": {
                "pid_1": "1",
                "pid_3": { "cx_1": "ID1" },
                "pid_5": { "xpn_1": { "fn_1": "DOE" }, "xpn_2": "JANE" }
            }
        })]
    );
}

#[test]
fn strict_mode_exits_with_failure() {
    let output = run_with_stdin(&["--strict"], b"PID|1\nnot hl7\n");
    assert!(!output.status.success());
    assert_eq!(stdout_lines(&output).len(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "{stderr}");
}

#[test]
fn missing_input_file_is_an_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_hl7-to-json"))
        .args(["--input", fixture_path("does-not-exist.hl7").as_str()])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

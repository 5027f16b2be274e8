use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn workload(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn rr_model(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rr_model"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_file(contents: &str, quantum: &str) -> Output {
    let file = workload(contents);
    rr_model(&[file.path().to_str().unwrap(), quantum])
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn single_process() {
    let output = run_file("1\n1, 0, 5\n", "10");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Average waiting time: 0.00\nAverage response time: 0.00\n"
    );
}

#[test]
fn two_processes_share_the_cpu() {
    let output = run_file("2\n1, 0, 4\n2, 0, 4\n", "2");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Average waiting time: 3.00\nAverage response time: 1.00\n"
    );
}

#[test]
fn staggered_arrivals() {
    let output = run_file("4\n1, 0, 7\n2, 2, 4\n3, 4, 1\n4, 5, 4\n", "3");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Average waiting time: 7.00\nAverage response time: 2.75\n"
    );
}

#[test]
fn zero_quantum_is_invalid() {
    let output = run_file("1\n1, 0, 5\n", "0");
    assert_eq!(output.status.code(), Some(22));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn non_digit_quantum_is_invalid() {
    let output = run_file("1\n1, 0, 5\n", "3q");
    assert_eq!(output.status.code(), Some(22));
    assert!(output.stdout.is_empty());
}

#[test]
fn wrong_argument_count_is_invalid() {
    assert_eq!(rr_model(&[]).status.code(), Some(22));
    assert_eq!(rr_model(&["only-one"]).status.code(), Some(22));
    assert_eq!(rr_model(&["a", "1", "b"]).status.code(), Some(22));
}

#[test]
fn truncated_workload_is_invalid() {
    let output = run_file("3\n1, 0, 5\n2, 1\n", "2");
    assert_eq!(output.status.code(), Some(22));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("reached end of input"), "{stderr}");
}

#[test]
fn empty_workload_is_invalid() {
    let output = run_file("0\n", "2");
    assert_eq!(output.status.code(), Some(22));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_reports_os_error() {
    let output = rr_model(&["/nonexistent/rr_model/workload.txt", "2"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_file_wins_over_bad_quantum() {
    let output = rr_model(&["/nonexistent/rr_model/workload.txt", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn truncated_workload_wins_over_bad_quantum() {
    let output = run_file("2\n1, 0, 5\n", "x");
    assert_eq!(output.status.code(), Some(22));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("reached end of input"), "{stderr}");
}

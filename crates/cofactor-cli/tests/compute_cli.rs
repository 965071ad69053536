use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const REFERENCE_MATRIX: &str = "4\n1 2 3 4\n0 1 0 5\n2 0 1 0\n0 1 1 1\n";

fn write_matrix(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("matrix.txt");
    fs::write(&path, contents).expect("matrix fixture should be written");
    path
}

fn run_cofactor(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cofactor"))
        .args(args)
        .output()
        .expect("binary should run")
}

fn run_on_file(matrix_path: &Path, threads: &str, extra: &[&str]) -> Output {
    let path = matrix_path.to_str().expect("utf-8 temp path");
    let mut args = vec![path, threads];
    args.extend_from_slice(extra);
    run_cofactor(&args)
}

#[test]
fn prints_matrix_determinant_and_elapsed_time() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, REFERENCE_MATRIX);

    let output = run_on_file(&matrix_path, "2", &[]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 2 3 4"), "matrix echo missing: {stdout}");
    assert!(stdout.contains("Determinant: 8"), "determinant missing: {stdout}");
    assert!(stdout.contains("Elapsed: "), "elapsed line missing: {stdout}");
}

#[test]
fn result_is_identical_across_thread_counts() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, REFERENCE_MATRIX);

    for threads in ["1", "2", "8"] {
        let output = run_on_file(&matrix_path, threads, &["--quiet"]);
        assert!(output.status.success(), "{threads} threads should succeed");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("Determinant: 8"),
            "{threads} threads produced: {stdout}"
        );
    }
}

#[test]
fn quiet_flag_suppresses_the_matrix_echo() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, REFERENCE_MATRIX);

    let output = run_on_file(&matrix_path, "2", &["--quiet"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("1 2 3 4"), "matrix echoed despite --quiet");
    assert!(stdout.contains("Determinant: 8"));
}

#[test]
fn report_flag_writes_a_parseable_json_report() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, REFERENCE_MATRIX);
    let report_path = temp.path().join("reports/compute.json");
    let report_arg = report_path.to_str().expect("utf-8 temp path").to_string();

    let output = run_on_file(&matrix_path, "2", &["--report", &report_arg]);

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(
        &fs::read_to_string(&report_path).expect("report should be readable"),
    )
    .expect("report JSON should parse");
    assert_eq!(parsed["matrixSize"], Value::from(4));
    assert_eq!(parsed["threadCount"], Value::from(2));
    assert_eq!(parsed["determinant"], Value::from(8));
    assert!(parsed["elapsedSeconds"].is_number());
}

#[test]
fn missing_matrix_file_exits_with_status_one() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("missing.txt");

    let output = run_on_file(&missing, "2", &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot open matrix file"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn truncated_input_exits_with_status_one() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, "3\n1 2 3\n4 5\n");

    let output = run_on_file(&matrix_path, "2", &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("matrix input truncated"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn non_positive_size_exits_with_status_one() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, "0\n");

    let output = run_on_file(&matrix_path, "2", &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid matrix size"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn zero_thread_count_is_a_usage_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let matrix_path = write_matrix(&temp, REFERENCE_MATRIX);

    let output = run_on_file(&matrix_path, "0", &[]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_arguments_are_a_usage_error() {
    let output = run_cofactor(&[]);
    assert_eq!(output.status.code(), Some(2));
}

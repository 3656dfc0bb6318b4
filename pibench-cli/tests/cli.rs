//! End-to-end tests for the `pibench` binary: exit codes, usage text,
//! and report output.

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("pibench").unwrap()
}

#[test]
fn no_arguments_exits_one_with_usage() {
    cmd()
        .assert()
        .code(1)
        .stdout(contains("Usage: pibench <method> <precision>"));
}

#[test]
fn one_argument_exits_one_with_usage() {
    cmd()
        .arg("3")
        .assert()
        .code(1)
        .stdout(contains("Usage: pibench <method> <precision>"));
}

#[test]
fn extra_arguments_exit_one_with_usage() {
    cmd()
        .args(["3", "10", "surplus"])
        .assert()
        .code(1)
        .stdout(contains("Usage: pibench"));
}

#[test]
fn non_numeric_method_exits_one_with_usage() {
    cmd()
        .args(["fast", "5"])
        .assert()
        .code(1)
        .stdout(contains("Usage: pibench"));
}

#[test]
fn method_out_of_range_names_valid_methods() {
    cmd()
        .args(["4", "5"])
        .assert()
        .code(1)
        .stdout(contains("method must be 1, 2, or 3"))
        .stdout(contains("Usage: pibench"));
}

#[test]
fn precision_out_of_range_names_valid_range() {
    cmd()
        .args(["1", "16"])
        .assert()
        .code(1)
        .stdout(contains("precision must be between 1 and 15"));
}

#[test]
fn machin_run_reports_pi_to_requested_digits() {
    cmd()
        .args(["3", "10"])
        .assert()
        .success()
        .stdout(contains("Machin formula"))
        .stdout(contains("computed:    3.1415926536"))
        .stdout(contains("reference:   3.141592653589793"))
        .stdout(contains("MOPS"));
}

#[test]
fn leibniz_run_echoes_iteration_budget() {
    // precision 1 -> 10^7 terms; fast enough even unoptimized.
    cmd()
        .args(["1", "1"])
        .assert()
        .success()
        .stdout(contains("Leibniz series"))
        .stdout(contains("10000000"));
}

#[test]
fn seeded_sampling_run_succeeds() {
    cmd()
        .args(["2", "1", "--seed", "42"])
        .assert()
        .success()
        .stdout(contains("Monte Carlo sampling"));
}

#[test]
fn json_output_parses_and_carries_tier() {
    let assert = cmd().args(["3", "8", "--format", "json"]).assert().success();
    let output = &assert.get_output().stdout;

    let value: serde_json::Value = serde_json::from_slice(output).unwrap();
    assert_eq!(value["method"], "Machin formula");
    assert_eq!(value["precision"], 8);
    assert!(value["tier"].is_string());
    assert!(value["score_mops"].is_number());
    assert!(value["abs_error"].as_f64().unwrap() < 1e-10);
}

#[test]
fn unknown_format_is_rejected() {
    cmd()
        .args(["3", "5", "--format", "xml"])
        .assert()
        .code(1)
        .stderr(contains("Unknown output format"));
}

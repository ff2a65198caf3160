//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Build command for the vdivider-cli binary (finds it in target/debug when run via cargo test).
fn vdivider_cli() -> Command {
    cargo_bin_cmd!("vdivider-cli")
}

#[test]
fn test_cli_help() {
    let mut cmd = vdivider_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Voltage divider"));
}

#[test]
fn test_cli_version() {
    let mut cmd = vdivider_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_auto_human() {
    let mut cmd = vdivider_cli();

    cmd.args(["auto", "--vin", "5", "--vout", "3.3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Calculated Values"))
        .stdout(predicate::str::contains("R1: 5.15kΩ"))
        .stdout(predicate::str::contains("R2: 10.00kΩ"))
        .stdout(predicate::str::contains("Standard Resistor Combinations"))
        .stdout(predicate::str::contains("3.297V"))
        .stdout(predicate::str::contains("0.09%"))
        .stdout(predicate::str::contains("274 pairs within 5%"))
        .stdout(predicate::str::contains("Vout = Vin × (R2 / (R1 + R2))"));
}

#[test]
fn test_cli_auto_json() {
    let mut cmd = vdivider_cli();

    cmd.args(["auto", "--vin", "5", "--vout", "3.3", "--format", "json", "--max-results", "2"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    let candidates = json["suggestions"]["candidates"].as_array().unwrap();

    assert_eq!(json["ideal"]["r1"], 5152.0);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["r1"], 47.0);
    assert_eq!(candidates[0]["r2"], 91.0);
}

#[test]
fn test_cli_auto_nothing_within_threshold() {
    let mut cmd = vdivider_cli();

    cmd.args(["auto", "--vin", "5", "--vout", "0.0001", "--threshold", "0.01"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "No standard resistor combination within 0.01% of target",
        ));
}

#[test]
fn test_cli_auto_invalid_range() {
    let mut cmd = vdivider_cli();

    cmd.args(["auto", "--vin", "3", "--vout", "5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("greater than output voltage"));
}

#[test]
fn test_cli_manual_suggested_pair() {
    let mut cmd = vdivider_cli();

    cmd.args(["manual", "--vin", "5", "--vout", "3.3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Selected Resistors (suggested)"))
        .stdout(predicate::str::contains("R1: 47Ω"))
        .stdout(predicate::str::contains("R2: 91Ω"));
}

#[test]
fn test_cli_manual_selected_pair() {
    let mut cmd = vdivider_cli();

    cmd.args(["manual", "--vin", "5", "--vout", "2.5", "--r1", "10000", "--r2", "10000"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Selected Resistors (selected)"))
        .stdout(predicate::str::contains("Output Voltage: 2.500V"))
        .stdout(predicate::str::contains("Error from target: 0.00%"));
}

#[test]
fn test_cli_manual_zero_target_omits_error() {
    let mut cmd = vdivider_cli();

    cmd.args(["manual", "--vin", "5", "--vout", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Selected Resistors (default)"))
        .stdout(predicate::str::contains("Error from target").not());
}

#[test]
fn test_cli_manual_non_standard_value() {
    let mut cmd = vdivider_cli();

    cmd.args(["manual", "--vin", "5", "--vout", "3.3", "--r1", "4800"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a standard catalog value"));
}

#[test]
fn test_cli_manual_rejection_logged_when_verbose() {
    let mut cmd = vdivider_cli();

    cmd.args(["-v", "manual", "--vin", "5", "--vout", "3.3", "--r1", "4800"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Rejected manual R1 selection 4800"))
        .stderr(predicate::str::contains("Error: 4800 ohm is not a standard catalog value"));
}

#[test]
fn test_cli_invalid_range_reported_once() {
    let mut cmd = vdivider_cli();

    cmd.env_remove("RUST_LOG")
        .args(["auto", "--vin", "5", "--vout", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Output voltage must be positive"))
        .stderr(predicate::str::contains("WARN").not())
        .stderr(predicate::str::contains("must be positive").count(1));
}

#[test]
fn test_cli_manual_json() {
    let mut cmd = vdivider_cli();

    cmd.args(["manual", "--vin", "5", "--vout", "2.5", "--r1", "10000", "--r2", "10000", "-f", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"actual_vout\": 2.5"))
        .stdout(predicate::str::contains("\"error_pct\": 0.0"));
}

#[test]
fn test_cli_catalog() {
    let mut cmd = vdivider_cli();

    cmd.arg("catalog");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("97 values"))
        .stdout(predicate::str::contains("100.00kΩ"));
}

#[test]
fn test_cli_catalog_json() {
    let mut cmd = vdivider_cli();

    cmd.args(["catalog", "--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 97"));
}

#[test]
fn test_cli_missing_args() {
    let mut cmd = vdivider_cli();

    cmd.args(["auto", "--vin", "5"]);

    cmd.assert().failure();
}

//! CLI subprocess integration tests.
//!
//! These tests invoke the `twinc` binary as a subprocess and verify exit
//! codes, emitted manifest files, and JSON output stability.

use std::path::Path;
use std::process::Command;

fn twinc_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_twinc"))
}

const THERMOSTAT: &str = r#"{
    "@id": "dtmi:example:Thermostat;1",
    "@type": "Interface",
    "displayName": "Thermostat",
    "contents": [
        { "@type": "Property", "name": "setPoint", "schema": "double", "writeable": true }
    ]
}"#;

const BROKEN: &str = r#"{
    "@id": "dtmi:example:Broken;1",
    "contents": [ { "name": "no discriminator" } ]
}"#;

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn version_exits_zero() {
    let output = twinc_bin().arg("--version").output().unwrap();
    assert!(output.status.success(), "twinc --version must exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("twinc"), "version output: {stdout}");
}

#[test]
fn help_lists_subcommands() {
    let output = twinc_bin().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("compile"), "help must list 'compile'");
    assert!(stdout.contains("check"), "help must list 'check'");
}

#[test]
fn compile_writes_one_yaml_per_interface() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("manifests");
    write(input.path(), "thermostat.json", THERMOSTAT);
    write(input.path(), "notes.txt", "not an interface");

    let output = twinc_bin()
        .arg("compile")
        .arg(input.path())
        .arg(&out_dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let yaml = std::fs::read_to_string(out_dir.join("thermostat.yaml")).unwrap();
    assert!(yaml.contains("kind: TwinInterface"));
    assert!(yaml.contains("\n---\n"));
    assert!(yaml.contains("kind: TwinInstance"));
    assert!(yaml.contains("ktwin/dtmi:example:Thermostat;1:0.0.1"));
    // Only the .json input produced output.
    assert!(!out_dir.join("notes.yaml").exists());
}

#[test]
fn compile_skips_bad_documents_and_reports_aggregate_failure() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(input.path(), "good.json", THERMOSTAT);
    write(input.path(), "broken.json", BROKEN);

    let output = twinc_bin()
        .arg("compile")
        .arg(input.path())
        .arg(out.path())
        .output()
        .unwrap();

    // Batch continues past the bad document but exits non-zero.
    assert_eq!(output.status.code(), Some(2));
    assert!(out.path().join("good.yaml").exists());
    assert!(!out.path().join("broken.yaml").exists());
}

#[test]
fn compile_json_output_reports_compiled_and_failed() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(input.path(), "good.json", THERMOSTAT);
    write(input.path(), "broken.json", BROKEN);

    let output = twinc_bin()
        .args(["--json", "compile"])
        .arg(input.path())
        .arg(out.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(payload["compiled"], serde_json::json!(["good.json"]));
    assert_eq!(payload["failed"][0]["file"], "broken.json");
}

#[test]
fn missing_input_directory_is_a_driver_error() {
    let out = tempfile::tempdir().unwrap();
    let output = twinc_bin()
        .arg("compile")
        .arg("/nonexistent/input")
        .arg(out.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn check_single_file_succeeds() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "thermostat.json", THERMOSTAT);

    let output = twinc_bin()
        .arg("check")
        .arg(input.path().join("thermostat.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn check_strict_rejects_unsanitizable_name() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "bad.json", r#"{ "@id": "room#1" }"#);

    let default_run = twinc_bin()
        .arg("check")
        .arg(input.path().join("bad.json"))
        .output()
        .unwrap();
    assert!(default_run.status.success(), "non-strict check must pass");

    let strict_run = twinc_bin()
        .args(["check", "--strict"])
        .arg(input.path().join("bad.json"))
        .output()
        .unwrap();
    assert_eq!(strict_run.status.code(), Some(2));
}

#[test]
fn compile_honors_custom_registry_and_tag() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(input.path(), "sensor.json", r#"{ "@id": "sensor-1" }"#);

    let output = twinc_bin()
        .args(["compile", "--registry-prefix", "twins", "--image-tag", "9.9.9"])
        .arg(input.path())
        .arg(out.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let yaml = std::fs::read_to_string(out.path().join("sensor.yaml")).unwrap();
    assert!(yaml.contains("twins/sensor-1:9.9.9"));
}

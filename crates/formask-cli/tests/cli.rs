use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn run_cmd(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("formask")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("formask")
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn apply_formats_a_growing_phone_value() {
    let stdout = run_cmd(&["apply", "phone", "1234567"]);
    assert_eq!(stdout, "(123) 456-7\n");
}

#[test]
fn apply_keeps_a_shrinking_phone_value_as_typed() {
    let stdout = run_cmd(&["apply", "phone", "(123", "--previous", "(123)"]);
    assert_eq!(stdout, "(123\n");

    let value = run_cmd_json(&["apply", "phone", "(123", "--previous", "(123)"]);
    assert_eq!(value["changed"], false);
    assert_eq!(value["display"], "(123");
}

#[test]
fn apply_handles_name_masks() {
    assert_eq!(run_cmd(&["apply", "uppercase", "ada l0velace"]), "ADALVELACE\n");
    assert_eq!(run_cmd(&["apply", "capitalize", "lovelace"]), "Lovelace\n");
}

#[test]
fn apply_rejects_unknown_masks() {
    let output = cargo_bin_cmd!("formask")
        .args(["apply", "zip", "123"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn trace_replays_each_keystroke() {
    let value = run_cmd_json(&["trace", "1234567890"]);
    let steps = value.as_array().expect("array");
    assert_eq!(steps.len(), 10);
    assert_eq!(steps[2]["display"], "(123)");
    assert_eq!(steps[5]["display"], "(123) 456");
    assert_eq!(steps[9]["display"], "(123) 456-7890");
}

#[test]
fn fields_lists_the_configured_form() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("form.toml");
    fs::write(
        &config,
        "[[fields]]\nlabel = \"Mobile\"\nmask = \"phone\"\n[[fields]]\nlabel = \"Initials\"\nmask = \"uppercase\"\n",
    )
    .expect("write config");
    let config_arg = config.to_str().expect("config path");

    let stdout = run_cmd(&["--config", config_arg, "fields"]);
    assert_eq!(stdout, "Mobile\tphone\nInitials\tuppercase\n");

    let value = run_cmd_json(&["--config", config_arg, "fields"]);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["label"], "Mobile");
    assert_eq!(items[0]["mask"], "phone");
}

#[test]
fn fields_falls_back_to_the_default_form() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("formask")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--json", "fields"])
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["mask"], "phone");
}

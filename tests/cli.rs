//! Binary-level checks of the environment contract and exit codes
use std::process::{Command, Output};

use submit_application::config::REQUIRED_ENV_VARS;
use submit_application::signing::verify_signature;

const SECRET: &str = "s3cr3t-value-for-tests";

fn full_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SIGNING_SECRET", SECRET),
        ("NAME", "Ada Lovelace"),
        ("EMAIL", "ada@example.com"),
        ("RESUME_LINK", "https://example.com/cv.pdf"),
        ("REPOSITORY_LINK", "https://github.com/ada/apply"),
        ("ACTION_RUN_LINK", "https://github.com/ada/apply/actions/runs/7"),
    ]
}

fn run_with(env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_submit-application"))
        .env_clear()
        .envs(env.iter().copied())
        .output()
        .expect("failed to run binary")
}

fn listed_vars(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("  - "))
        .map(str::to_string)
        .collect()
}

/// Extract `<prefix><value>` from stdout
fn stdout_value(output: &Output, prefix: &str) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .find_map(|line| line.strip_prefix(prefix))
        .unwrap_or_else(|| panic!("no line starting with {:?}", prefix))
        .to_string()
}

#[test]
fn test_all_missing_lists_every_variable() {
    let output = run_with(&[]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("The following environment variables are required:\n"));
    assert_eq!(listed_vars(&output), REQUIRED_ENV_VARS.to_vec());
    assert!(!stdout.contains("Payload JSON:"));
}

#[test]
fn test_single_missing_lists_only_that_variable() {
    let env: Vec<_> = full_env().into_iter().filter(|(k, _)| *k != "EMAIL").collect();
    let output = run_with(&env);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(listed_vars(&output), vec!["EMAIL".to_string()]);
}

#[test]
fn test_empty_value_counts_as_missing() {
    let mut env = full_env();
    env.retain(|(k, _)| *k != "NAME");
    env.push(("NAME", ""));
    let output = run_with(&env);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(listed_vars(&output), vec!["NAME".to_string()]);
}

#[test]
fn test_all_present_prints_payload_and_signature() {
    let output = run_with(&full_env());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let payload = stdout_value(&output, "Payload JSON: ");
    let signature = stdout_value(&output, "Signature: ");

    // Compact JSON with sorted keys
    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(serde_json::to_string(&parsed).unwrap(), payload);
    assert!(payload.starts_with(r#"{"action_run_link":"#));
    assert!(payload.contains(r#""name":"Ada Lovelace""#));
    assert!(parsed["timestamp"].as_str().unwrap().ends_with('Z'));

    assert_eq!(signature.len(), 64);
    assert!(signature.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert!(verify_signature(payload.as_bytes(), SECRET, &signature));

    // The secret is never echoed
    assert!(!String::from_utf8_lossy(&output.stdout).contains(SECRET));
    assert!(!String::from_utf8_lossy(&output.stderr).contains(SECRET));
}

#[test]
fn test_submission_disabled_by_default() {
    let output = run_with(&full_env());
    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Application submitted"));
}

#[test]
fn test_non_ascii_values_are_escaped() {
    let mut env = full_env();
    env.retain(|(k, _)| *k != "NAME");
    env.push(("NAME", "José Núñez"));
    let output = run_with(&env);
    assert_eq!(output.status.code(), Some(0));

    let payload = stdout_value(&output, "Payload JSON: ");
    assert!(payload.is_ascii());
    assert!(payload.contains(r#""name":"Jos\u00e9 N\u00fa\u00f1ez""#));

    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed["name"], "José Núñez");
    assert!(verify_signature(payload.as_bytes(), SECRET, &stdout_value(&output, "Signature: ")));
}

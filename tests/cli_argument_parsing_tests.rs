//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are parsed and layered over
//! the configuration file and defaults.

use clap::Parser;
use grocery_checkout_simulator::types::config::{
    CliArgs, ConfigError, ConfigValidationError, SimulationConfig,
};
use std::io::Write;

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(args).unwrap()
}

/// Test default values when no flags are given
#[test]
fn test_no_arguments() {
    let cli_args = parse(&["test"]);

    assert!(cli_args.input.is_none());
    assert!(cli_args.config.is_none());
    assert!(cli_args.trace_output.is_none());
    assert!(!cli_args.log_json);
    assert!(!cli_args.verbose);
    assert!(!cli_args.debug);
    assert!(!cli_args.dry_run);
    assert!(!cli_args.print_config);

    // Parsing succeeds, validation catches the missing input
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.validate(), Err(ConfigValidationError::MissingInput));
}

/// Test all flags together
#[test]
fn test_all_options() {
    let cli_args = parse(&[
        "test",
        "--input",
        "store.txt",
        "--trace-output",
        "trace.jsonl",
        "--log-json",
        "--log-dir",
        "logs",
        "--verbose",
        "--debug",
        "--dry-run",
    ]);

    assert_eq!(cli_args.input.as_deref(), Some("store.txt"));
    assert_eq!(cli_args.trace_output.as_deref(), Some("trace.jsonl"));
    assert!(cli_args.log_json);
    assert_eq!(cli_args.log_dir.as_deref(), Some("logs"));
    assert!(cli_args.verbose);
    assert!(cli_args.debug);
    assert!(cli_args.dry_run);

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(
        config,
        SimulationConfig {
            input: Some("store.txt".to_string()),
            trace_output: Some("trace.jsonl".to_string()),
            log_json: true,
            log_dir: Some("logs".to_string()),
        }
    );
    config.validate().unwrap();
}

/// Test short flags
#[test]
fn test_short_flags() {
    let cli_args = parse(&["test", "-i", "store.txt", "-v", "-d"]);
    assert_eq!(cli_args.input.as_deref(), Some("store.txt"));
    assert!(cli_args.verbose);
    assert!(cli_args.debug);
}

/// Test rejection of unknown and malformed arguments
#[test]
fn test_invalid_arguments() {
    assert!(CliArgs::try_parse_from(["test", "--registers", "3"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--input"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "store.txt"]).is_err());
}

/// Test that CLI arguments override the configuration file
#[test]
fn test_cli_overrides_config_file() {
    let mut config_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    config_file
        .write_all(br#"{ "input": "file.txt", "trace_output": "file.jsonl", "log_json": true }"#)
        .unwrap();
    let config_path = config_file.path().display().to_string();

    // File values apply where the CLI is silent
    let config = SimulationConfig::from_cli_args(parse(&["test", "-c", &config_path])).unwrap();
    assert_eq!(config.input.as_deref(), Some("file.txt"));
    assert_eq!(config.trace_output.as_deref(), Some("file.jsonl"));
    assert!(config.log_json);

    let config = SimulationConfig::from_cli_args(parse(&[
        "test",
        "--config",
        &config_path,
        "--input",
        "cli.txt",
    ]))
    .unwrap();
    assert_eq!(config.input.as_deref(), Some("cli.txt"));
    assert_eq!(config.trace_output.as_deref(), Some("file.jsonl"));
}

/// Test errors from a missing or malformed configuration file
#[test]
fn test_config_file_errors() {
    let result = SimulationConfig::from_cli_args(parse(&["test", "-c", "missing.json"]));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let mut broken = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    broken.write_all(b"{ not json").unwrap();
    let path = broken.path().display().to_string();
    let result = SimulationConfig::from_cli_args(parse(&["test", "-c", &path]));
    assert!(matches!(result, Err(ConfigError::JsonError(_))));
}

/// Test that the trace may not replace the workload file
#[test]
fn test_trace_must_differ_from_input() {
    let cli_args = parse(&["test", "-i", "store.txt", "--trace-output", "store.txt"]);
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();

    assert!(matches!(config.validate(), Err(ConfigValidationError::TraceOverwritesInput(_))));
}

/// Test the template printed by --print-config
#[test]
fn test_print_config_template() {
    let json = SimulationConfig::default().print_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("input").is_some());
    assert!(value.get("trace_output").is_some());
    assert_eq!(value["log_json"], serde_json::Value::Bool(false));
}

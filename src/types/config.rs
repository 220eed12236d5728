//! Configuration structures for the checkout simulator
//!
//! This module contains the command line interface, the optional JSON
//! configuration file and the resolved [`SimulationConfig`] with its validation.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "grocery-checkout-simulator",
    version = "0.1.0",
    about = "Grocery Checkout Simulator - Computes how long a store needs to check out all customers",
    long_about = "Simulates customers checking out at a multi-register grocery store in one-minute steps and reports the minute at which the last customer finished.

INPUT FORMAT:
    The first line holds the number of registers. Every following line describes
    one customer as `<type> <arrival minute> <item count>`, for example:

        2
        A 1 2
        A 2 1

    The highest-numbered register is staffed by a trainee and checks out half an
    item per minute; all other registers check out one item per minute.

EXAMPLES:
    # Run a simulation
    grocery-checkout-simulator -i input.txt

    # Write every routing decision and completion as JSON lines
    grocery-checkout-simulator -i input.txt --trace-output trace.jsonl

    # Use a configuration file
    grocery-checkout-simulator --config config.json

    # Validate the input without running
    grocery-checkout-simulator -i input.txt --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Workload input file
    #[arg(
        short,
        long,
        help = "Input file describing registers and customers",
        long_help = "Path to the workload file. The first line is the register count, every other non-blank line is `<A|B> <arrival> <items>`."
    )]
    pub input: Option<String>,

    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Output path for the routing and completion trace
    #[arg(long, help = "Write routing decisions and completions as JSON lines to this file")]
    pub trace_output: Option<String>,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Directory for daily rolling log files
    #[arg(long, help = "Also write logs to daily rolling files in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate the input without running the simulation
    #[arg(long, help = "Validate configuration and input without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Workload input file
    pub input: Option<String>,

    /// Output path for the routing and completion trace
    pub trace_output: Option<String>,

    /// Emit logs as JSON
    pub log_json: Option<bool>,

    /// Directory for daily rolling log files
    pub log_dir: Option<String>,
}

/// Resolved configuration for a simulation run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Workload input file
    pub input: Option<String>,

    /// Output path for the routing and completion trace
    pub trace_output: Option<String>,

    /// Emit logs as JSON
    pub log_json: bool,

    /// Directory for daily rolling log files
    pub log_dir: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
    /// No workload file was given
    #[error("No input file given (use --input or the `input` configuration key)")]
    MissingInput,

    /// A path setting is empty
    #[error("Path for {0} must not be empty")]
    EmptyPath(&'static str),

    /// The trace would overwrite the workload
    #[error("Trace output {0} would overwrite the input file")]
    TraceOverwritesInput(String),
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            input: config_file.input.or(defaults.input),
            trace_output: config_file.trace_output.or(defaults.trace_output),
            log_json: config_file.log_json.unwrap_or(defaults.log_json),
            log_dir: config_file.log_dir.or(defaults.log_dir),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.input {
            config.input = Some(value);
        }
        if let Some(value) = args.trace_output {
            config.trace_output = Some(value);
        }
        if args.log_json {
            config.log_json = true;
        }
        if let Some(value) = args.log_dir {
            config.log_dir = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let input = match self.input.as_deref() {
            None => return Err(ConfigValidationError::MissingInput),
            Some("") => return Err(ConfigValidationError::EmptyPath("input")),
            Some(input) => input,
        };

        if let Some(trace) = self.trace_output.as_deref() {
            if trace.is_empty() {
                return Err(ConfigValidationError::EmptyPath("trace_output"));
            }
            if Path::new(trace) == Path::new(input) {
                return Err(ConfigValidationError::TraceOverwritesInput(trace.to_string()));
            }
        }

        if self.log_dir.as_deref() == Some("") {
            return Err(ConfigValidationError::EmptyPath("log_dir"));
        }

        Ok(())
    }
}

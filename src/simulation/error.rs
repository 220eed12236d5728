//! Error types and handling
//!
//! The engine itself cannot fail; these errors come from the layers around it
//! (configuration, input and trace output).

use crate::input::InputError;
use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while setting up or reporting a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The workload could not be read
    #[error("Invalid input: {0}")]
    InputError(#[from] InputError),

    /// Writing the trace failed
    #[error("Trace output error: {0}")]
    TraceError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a trace output error
    pub fn trace_error(msg: impl Into<String>) -> Self {
        Self::TraceError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::InputError(_) => "Input",
            SimulationError::TraceError(_) => "Trace Output",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let config_error = SimulationError::configuration_error("Invalid config");
        assert!(matches!(config_error, SimulationError::ConfigurationError(_)));
        assert_eq!(config_error.to_string(), "Configuration error: Invalid config");

        let trace_error = SimulationError::trace_error("disk full");
        assert_eq!(trace_error.to_string(), "Trace output error: disk full");
    }

    #[test]
    fn test_error_from_input_error() {
        let error: SimulationError = InputError::MissingRegisterCount.into();
        assert!(matches!(error, SimulationError::InputError(_)));
        assert_eq!(error.category(), "Input");
        assert!(error.to_string().starts_with("Invalid input: Input is empty"));
    }

    #[test]
    fn test_error_from_validation_error() {
        let error: SimulationError = ConfigValidationError::MissingInput.into();
        assert!(matches!(error, SimulationError::ConfigurationError(_)));
        assert_eq!(error.category(), "Configuration");
    }

    #[test]
    fn test_error_from_config_error() {
        let error: SimulationError = ConfigError::FileNotFound("settings.json".to_string()).into();
        assert_eq!(error.category(), "Configuration");
        assert_eq!(
            error.to_string(),
            "Configuration error: Configuration file not found: settings.json"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sim_error: SimulationError = io_error.into();
        assert!(matches!(sim_error, SimulationError::IoError(_)));
        assert_eq!(sim_error.category(), "IO");
    }
}

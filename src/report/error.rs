//! Error types and handling
//!
//! The aggregation pass itself has no failure modes; these errors cover the
//! boundary around it: reading buildings, writing reports, configuration, and
//! after-the-fact consistency checks.

use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while producing a volume report
#[derive(Debug, Error)]
pub enum ReportError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or parsing error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Building input could not be used
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A report total disagrees with the totals beneath it
    #[error("Inconsistent totals for {node}: expected {expected}, got {actual}")]
    InconsistentTotals {
        /// Node whose total is wrong
        node: String,
        /// Sum of the children
        expected: f64,
        /// Total stored on the node
        actual: f64,
    },

    /// Traversal finished without visiting a building
    #[error("No report was produced: traversal did not start at a building")]
    NoReport,
}

impl From<ConfigError> for ReportError {
    fn from(error: ConfigError) -> Self {
        ReportError::Configuration(error.to_string())
    }
}

impl From<ConfigValidationError> for ReportError {
    fn from(error: ConfigValidationError) -> Self {
        ReportError::Configuration(error.to_string())
    }
}

impl ReportError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an inconsistent totals error
    pub fn inconsistent_totals(node: impl Into<String>, expected: f64, actual: f64) -> Self {
        Self::InconsistentTotals { node: node.into(), expected, actual }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ReportError::Io(_) => "IO",
            ReportError::Serialization(_) => "Serialization",
            ReportError::InvalidInput(_) => "Input",
            ReportError::Configuration(_) => "Configuration",
            ReportError::InconsistentTotals { .. } => "Consistency",
            ReportError::NoReport => "Traversal",
        }
    }
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = ReportError::invalid_input("missing file");
        assert!(matches!(error, ReportError::InvalidInput(_)));
        assert_eq!(error.to_string(), "Invalid input: missing file");

        let error = ReportError::inconsistent_totals("level L1", 80.0, 70.0);
        assert_eq!(error.to_string(), "Inconsistent totals for level L1: expected 80, got 70");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ReportError::NoReport.category(), "Traversal");
        assert_eq!(ReportError::configuration("bad").category(), "Configuration");
        assert_eq!(ReportError::inconsistent_totals("x", 1.0, 2.0).category(), "Consistency");

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ReportError::from(io_error).category(), "IO");
    }

    #[test]
    fn test_config_errors_convert() {
        let error: ReportError = ConfigValidationError::MissingInputSource.into();
        assert!(matches!(error, ReportError::Configuration(_)));

        let error: ReportError = ConfigError::FileNotFound("cfg.json".to_string()).into();
        assert!(error.to_string().contains("cfg.json"));
    }
}

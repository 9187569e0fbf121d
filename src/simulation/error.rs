//! Error types and handling
//!
//! This module contains the error type shared by the generator, the events,
//! and the orchestrator.

use thiserror::Error;

use crate::generator::WeightError;
use crate::sink::SinkError;
use crate::types::{ConfigValidationError, RecordId};

/// Errors that can occur while generating session bundles
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ConfigValidationError),

    /// A weighted table could not be built
    #[error("Invalid {category} weight table: {source}")]
    WeightTable {
        /// Category the table draws from
        category: &'static str,
        /// Underlying construction error
        #[source]
        source: WeightError,
    },

    /// Visit event count outside the allowed range
    #[error("Event count {count} is outside {min}..={max}")]
    InvalidEventCount {
        /// Requested event count
        count: u32,
        /// Smallest allowed count
        min: u32,
        /// Largest allowed count
        max: u32,
    },

    /// The record sink failed mid-run
    #[error("Record sink write failed ({}): {source}", describe_last_written(.last_written))]
    SinkWrite {
        /// Last record identifier whose metadata and payload were both written
        last_written: Option<RecordId>,
        /// Underlying sink error
        #[source]
        source: SinkError,
    },
}

fn describe_last_written(last_written: &Option<RecordId>) -> String {
    match last_written {
        Some(id) => format!("last complete record id {}", id),
        None => "no record was written".to_string(),
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a sink error tagged with the last complete record
    pub fn sink_write(last_written: Option<RecordId>, source: SinkError) -> Self {
        Self::SinkWrite { last_written, source }
    }

    /// Last complete record id, for sink failures
    pub fn last_written(&self) -> Option<RecordId> {
        match self {
            SimulationError::SinkWrite { last_written, .. } => *last_written,
            _ => None,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) | SimulationError::Validation(_) => {
                "Configuration"
            }
            SimulationError::WeightTable { .. } => "Weight Table",
            SimulationError::InvalidEventCount { .. } => "Event Generation",
            SimulationError::SinkWrite { .. } => "Record Sink",
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
        assert_eq!(config_error.category(), "Configuration");
        assert_eq!(config_error.to_string(), "Configuration validation failed: Invalid config");
    }

    #[test]
    fn test_sink_write_reports_last_record() {
        let source = SinkError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let err = SimulationError::sink_write(Some(RecordId(42)), source);

        assert_eq!(err.category(), "Record Sink");
        assert_eq!(err.last_written(), Some(RecordId(42)));
        assert!(err.to_string().contains("last complete record id 42"));
    }

    #[test]
    fn test_sink_write_without_records() {
        let source = SinkError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let err = SimulationError::sink_write(None, source);

        assert_eq!(err.last_written(), None);
        assert!(err.to_string().contains("no record was written"));
    }

    #[test]
    fn test_validation_conversion() {
        let err: SimulationError = ConfigValidationError::EmptyKnownUserPool.into();
        assert_eq!(err.category(), "Configuration");
    }

    #[test]
    fn test_event_count_message() {
        let err = SimulationError::InvalidEventCount { count: 0, min: 1, max: 100 };
        assert_eq!(err.to_string(), "Event count 0 is outside 1..=100");
        assert_eq!(err.category(), "Event Generation");
    }
}

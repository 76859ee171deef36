//! Error handling for the engagement analysis crates

use core::fmt;

/// Result type alias for all engagement analysis operations
pub type NeuroResult<T> = Result<T, NeuroError>;

/// Error type shared by the core, processing and simulation crates
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NeuroError {
    /// Recording data does not match its metadata or is otherwise unusable
    InvalidSignalData {
        /// Description of the data problem
        reason: String,
    },

    /// Sampling rate outside the supported range for scalp EEG
    InvalidSamplingRate {
        /// Provided sampling rate
        rate: f32,
        /// Valid range description
        valid_range: String,
    },

    /// Fewer samples than an operation requires
    InsufficientSamples {
        /// Samples provided
        provided: usize,
        /// Samples required
        required: usize,
    },

    /// Invalid analysis configuration
    ConfigurationError {
        /// Description of the configuration error
        message: String,
    },

    /// Numeric failure inside the analytics pipeline
    ComputationError {
        /// Description of the failure
        message: String,
    },

    /// Signal simulation failure
    SimulationError {
        /// Description of the failure
        message: String,
    },
}

impl fmt::Display for NeuroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeuroError::InvalidSignalData { reason } => {
                write!(f, "Invalid signal data: {}", reason)
            }
            NeuroError::InvalidSamplingRate { rate, valid_range } => {
                write!(
                    f,
                    "Invalid sampling rate: {}Hz, valid range: {}",
                    rate, valid_range
                )
            }
            NeuroError::InsufficientSamples { provided, required } => {
                write!(
                    f,
                    "Insufficient samples: {} provided, {} required",
                    provided, required
                )
            }
            NeuroError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            NeuroError::ComputationError { message } => {
                write!(f, "Computation error: {}", message)
            }
            NeuroError::SimulationError { message } => {
                write!(f, "Simulation error: {}", message)
            }
        }
    }
}

impl std::error::Error for NeuroError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = NeuroError::InsufficientSamples {
            provided: 512,
            required: 1024,
        };
        let display = format!("{}", error);
        assert!(display.contains("Insufficient samples"));
        assert!(display.contains("512"));
        assert!(display.contains("1024"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = NeuroError::InvalidSignalData {
            reason: "test".to_string(),
        };
        let error2 = NeuroError::InvalidSignalData {
            reason: "test".to_string(),
        };
        assert_eq!(error1, error2);
    }
}

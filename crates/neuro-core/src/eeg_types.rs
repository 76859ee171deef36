//! EEG-specific signal types and metadata

use crate::clock::epoch_millis;
use crate::error::{NeuroError, NeuroResult};
use serde::{Deserialize, Serialize};

/// Electrode placement on the scalp for single-channel wearables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SensorPlacement {
    Frontal,
    Temporal,
    Parietal,
    Occipital,
    Other(u8), // For extensibility
}

/// Metadata for a single-channel EEG capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EegMetadata {
    /// Electrode placement
    pub placement: SensorPlacement,
    /// Sampling rate in Hz
    pub sampling_rate: f32,
    /// Capture duration in seconds
    pub duration: f32,
    /// Noise level (0.0 = clean, 1.0 = very noisy)
    pub noise_level: f32,
    /// Creation timestamp
    pub timestamp: u64,
}

impl EegMetadata {
    /// Create new EEG metadata
    pub fn new(
        placement: SensorPlacement,
        sampling_rate: f32,
        duration: f32,
        noise_level: f32,
    ) -> NeuroResult<Self> {
        Self::validate_sampling_rate(sampling_rate)?;

        if duration <= 0.0 {
            return Err(NeuroError::InvalidSignalData {
                reason: "Duration must be positive".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&noise_level) {
            return Err(NeuroError::InvalidSignalData {
                reason: "Noise level must be between 0.0 and 1.0".to_string(),
            });
        }

        Ok(EegMetadata {
            placement,
            sampling_rate,
            duration,
            noise_level,
            timestamp: epoch_millis(),
        })
    }

    /// Validate sampling rate for scalp EEG capture
    pub fn validate_sampling_rate(rate: f32) -> NeuroResult<()> {
        const MIN_RATE: f32 = 128.0;
        const MAX_RATE: f32 = 2048.0;

        if rate < MIN_RATE || rate > MAX_RATE {
            Err(NeuroError::InvalidSamplingRate {
                rate,
                valid_range: format!("{}-{}Hz", MIN_RATE, MAX_RATE),
            })
        } else {
            Ok(())
        }
    }

    /// Get expected number of samples for this capture
    pub fn expected_samples(&self) -> usize {
        (self.sampling_rate * self.duration) as usize
    }
}

impl Default for EegMetadata {
    fn default() -> Self {
        EegMetadata {
            placement: SensorPlacement::Frontal,
            sampling_rate: 512.0,
            duration: 2.0,
            noise_level: 0.1,
            timestamp: 0,
        }
    }
}

impl std::fmt::Display for SensorPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorPlacement::Frontal => write!(f, "Frontal"),
            SensorPlacement::Temporal => write!(f, "Temporal"),
            SensorPlacement::Parietal => write!(f, "Parietal"),
            SensorPlacement::Occipital => write!(f, "Occipital"),
            SensorPlacement::Other(id) => write!(f, "Other({})", id),
        }
    }
}

//! Analysis configuration
//!
//! All thresholds and rates are fixed at process start; nothing here is
//! runtime-mutable once an analyzer has been constructed from it.

use neuro_core::{NeuroError, NeuroResult};
use serde::{Deserialize, Serialize};

/// Sampling rate of the wearable sensor in Hz
pub const SAMPLING_RATE: u32 = 512;
/// Nominal per-reading sample count used to derive the warning gate
pub const ONE_MINUTE_SAMPLES: u32 = SAMPLING_RATE * 2;
/// Beta power below this counts as a low-engagement reading
pub const LOW_BETA_THRESHOLD: f32 = 0.34;
/// Rolling window over which low readings are tracked, in seconds
pub const TRACKING_WINDOW_SECONDS: f64 = 300.0; // 5 minutes
/// Percentage of low readings at which the warning fires
pub const ALERT_THRESHOLD_PERCENT: f32 = 80.0;

/// Beta band lower edge in Hz
pub const BETA_BAND_LOW_HZ: f32 = 12.0;
/// Beta band upper edge in Hz
pub const BETA_BAND_HIGH_HZ: f32 = 30.0;

/// Beta power mapped to focus level 0 at this value
pub const MIN_BETA: f32 = 0.1;
/// Beta power mapped to focus level 100 at this value
pub const MAX_BETA: f32 = 1.0;

/// Configuration for the engagement analytics pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sensor sampling rate in Hz
    pub sampling_rate: u32,
    /// Per-reading sample count the warning gate is derived from
    pub one_minute_samples: u32,
    /// Band averaged into the beta power scalar (low, high) in Hz
    pub beta_band_hz: (f32, f32),
    /// Beta power below this counts as a low reading
    pub low_beta_threshold: f32,
    /// Rolling tracking window in seconds
    pub tracking_window_seconds: f64,
    /// Percent of low readings at which the warning fires
    pub alert_threshold_percent: f32,
    /// Lower clamp for focus normalization
    pub min_beta: f32,
    /// Upper clamp for focus normalization
    pub max_beta: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            sampling_rate: SAMPLING_RATE,
            one_minute_samples: ONE_MINUTE_SAMPLES,
            beta_band_hz: (BETA_BAND_LOW_HZ, BETA_BAND_HIGH_HZ),
            low_beta_threshold: LOW_BETA_THRESHOLD,
            tracking_window_seconds: TRACKING_WINDOW_SECONDS,
            alert_threshold_percent: ALERT_THRESHOLD_PERCENT,
            min_beta: MIN_BETA,
            max_beta: MAX_BETA,
        }
    }
}

impl AnalysisConfig {
    /// Minimum samples a call must carry: two seconds of capture
    pub fn min_input_samples(&self) -> usize {
        (self.sampling_rate * 2) as usize
    }

    /// Minimum window size gating the low-engagement warning.
    ///
    /// Derived from the configured constants, not hand-picked: with the
    /// defaults this is (512 * 60) / 1024 = 30 readings. Changing either
    /// constant silently moves the gate.
    pub fn min_window_samples(&self) -> usize {
        ((self.sampling_rate * 60) / self.one_minute_samples) as usize
    }

    /// Validate configuration
    pub fn validate(&self) -> NeuroResult<()> {
        if self.sampling_rate == 0 {
            return Err(NeuroError::ConfigurationError {
                message: "Sampling rate must be greater than 0".to_string(),
            });
        }

        if self.one_minute_samples == 0 {
            return Err(NeuroError::ConfigurationError {
                message: "Per-reading sample count must be greater than 0".to_string(),
            });
        }

        let (low, high) = self.beta_band_hz;
        if low < 0.0 || high <= low {
            return Err(NeuroError::ConfigurationError {
                message: format!("Invalid beta band [{}, {}]Hz", low, high),
            });
        }

        if high > self.sampling_rate as f32 / 2.0 {
            return Err(NeuroError::ConfigurationError {
                message: format!(
                    "Beta band edge {}Hz above Nyquist for {}Hz sampling",
                    high, self.sampling_rate
                ),
            });
        }

        if self.tracking_window_seconds <= 0.0 {
            return Err(NeuroError::ConfigurationError {
                message: "Tracking window must be positive".to_string(),
            });
        }

        if !(0.0..=100.0).contains(&self.alert_threshold_percent) {
            return Err(NeuroError::ConfigurationError {
                message: "Alert threshold must be a percentage".to_string(),
            });
        }

        if self.max_beta <= self.min_beta {
            return Err(NeuroError::ConfigurationError {
                message: format!(
                    "Focus clamp range [{}, {}] is empty",
                    self.min_beta, self.max_beta
                ),
            });
        }

        Ok(())
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> NeuroResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| NeuroError::ConfigurationError {
            message: format!("Failed to serialize configuration: {}", e),
        })
    }

    /// Import configuration from JSON
    pub fn from_json(json: &str) -> NeuroResult<Self> {
        serde_json::from_str(json).map_err(|e| NeuroError::ConfigurationError {
            message: format!("Failed to deserialize configuration: {}", e),
        })
    }
}

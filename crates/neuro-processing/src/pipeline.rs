//! Engagement analytics pipeline
//!
//! Validates a raw sample sequence, runs spectral estimation, beta band
//! extraction, persistence tracking and focus normalization in order, and
//! assembles the result record. Failures never escape: every call returns
//! either a success record or an error record.

use crate::band::{band_power, FrequencyBand};
use crate::config::AnalysisConfig;
use crate::focus::focus_level;
use crate::persistence::PersistenceTracker;
use crate::spectral::SpectralEstimator;
use neuro_core::{Clock, NeuroError, NeuroResult, SystemClock};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Success record for one processed call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageAnalysis {
    /// Subject the call was keyed by
    pub subject_id: String,
    /// Echo of the raw input samples
    pub raw_samples: Vec<f32>,
    /// Frequency bins of the spectral estimate
    pub frequencies: Vec<f32>,
    /// One-sided power spectrum
    pub power: Vec<f32>,
    /// Mean beta-band power
    pub beta_power: f32,
    /// Normalized focus level, 0.0-100.0 with one decimal
    pub focus_level: f32,
    /// Sustained-low-engagement warning state after this call
    pub low_beta_warning: bool,
    /// Processing timestamp, seconds since epoch
    pub processed_at: f64,
}

/// Error record for one processed call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingError {
    pub error: String,
}

/// Result of one processed call: exactly one of the two shapes, never partial
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessingOutcome {
    Success(Box<StageAnalysis>),
    Error(ProcessingError),
}

impl ProcessingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingOutcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProcessingOutcome::Error(_))
    }

    /// The success record, if any
    pub fn analysis(&self) -> Option<&StageAnalysis> {
        match self {
            ProcessingOutcome::Success(analysis) => Some(analysis),
            ProcessingOutcome::Error(_) => None,
        }
    }

    /// The error message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ProcessingOutcome::Success(_) => None,
            ProcessingOutcome::Error(e) => Some(&e.error),
        }
    }
}

/// Orchestrator for the engagement analytics pipeline
///
/// Shared across calls: the persistence tracker keys its rolling windows by
/// subject, so one analyzer instance serves the whole process. Calls for
/// different subjects are independent; calls for the same subject serialize
/// inside the tracker.
pub struct EngagementAnalyzer {
    config: AnalysisConfig,
    beta_band: FrequencyBand,
    estimator: Mutex<SpectralEstimator>,
    tracker: PersistenceTracker,
    clock: Arc<dyn Clock>,
}

impl EngagementAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> NeuroResult<Self> {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: AnalysisConfig) -> NeuroResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an analyzer with an injected time source
    pub fn with_clock(config: AnalysisConfig, clock: Arc<dyn Clock>) -> NeuroResult<Self> {
        config.validate()?;

        let (low_hz, high_hz) = config.beta_band_hz;
        let tracker = PersistenceTracker::with_clock(&config, clock.clone());

        Ok(EngagementAnalyzer {
            beta_band: FrequencyBand::new("Beta", low_hz, high_hz),
            estimator: Mutex::new(SpectralEstimator::new()),
            tracker,
            clock,
            config,
        })
    }

    /// Get the analyzer configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Drop all persistence history, e.g. between experiments
    pub fn reset(&self) {
        self.tracker.clear();
    }

    /// Drop one subject's persistence history
    pub fn reset_subject(&self, subject_id: &str) {
        self.tracker.clear_subject(subject_id);
    }

    /// Process one sample sequence for a subject.
    ///
    /// Always returns a result record. Input shorter than two seconds of
    /// capture yields an error record; so does any computation failure,
    /// wrapped with context. Nothing panics past this boundary.
    pub fn process(&self, subject_id: &str, samples: &[f32]) -> ProcessingOutcome {
        if samples.len() < self.config.min_input_samples() {
            return ProcessingOutcome::Error(ProcessingError {
                error: "Insufficient data for processing. Need at least 2 seconds of data."
                    .to_string(),
            });
        }

        match self.analyze(subject_id, samples) {
            Ok(analysis) => ProcessingOutcome::Success(Box::new(analysis)),
            Err(e) => ProcessingOutcome::Error(ProcessingError {
                error: format!("Error processing EEG data: {}", e),
            }),
        }
    }

    fn analyze(&self, subject_id: &str, samples: &[f32]) -> NeuroResult<StageAnalysis> {
        let estimate = {
            let mut estimator = self.estimator.lock().unwrap_or_else(|e| e.into_inner());
            estimator.estimate(samples, self.config.sampling_rate as f32)?
        };

        let beta_power = band_power(&estimate, &self.beta_band);
        if !beta_power.is_finite() {
            return Err(NeuroError::ComputationError {
                message: format!("non-finite beta power ({})", beta_power),
            });
        }

        let low_beta_warning = self.tracker.update(subject_id, beta_power);
        let focus = focus_level(beta_power, &self.config);

        if low_beta_warning {
            tracing::warn!(subject_id, beta_power, "sustained low engagement");
        }
        tracing::debug!(
            subject_id,
            beta_power,
            focus_level = focus,
            "processed sample sequence"
        );

        Ok(StageAnalysis {
            subject_id: subject_id.to_string(),
            raw_samples: samples.to_vec(),
            frequencies: estimate.frequencies,
            power: estimate.power,
            beta_power,
            focus_level: focus,
            low_beta_warning,
            processed_at: self.clock.now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuro_core::ManualClock;
    use std::f32::consts::PI;

    fn analyzer_with_clock() -> (EngagementAnalyzer, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(10_000.0));
        let analyzer =
            EngagementAnalyzer::with_clock(AnalysisConfig::default(), clock.clone()).unwrap();
        (analyzer, clock)
    }

    fn sinusoid(freq: f32, fs: f32, seconds: f32) -> Vec<f32> {
        let n = (fs * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / fs).sin())
            .collect()
    }

    #[test]
    fn test_insufficient_data() {
        let (analyzer, _clock) = analyzer_with_clock();

        let outcome = analyzer.process("subject-a", &vec![0.0; 1023]);
        assert!(outcome.is_error());
        assert_eq!(
            outcome.error_message().unwrap(),
            "Insufficient data for processing. Need at least 2 seconds of data."
        );

        let outcome = analyzer.process("subject-a", &[]);
        assert!(outcome.is_error());
    }

    #[test]
    fn test_flat_signal_scenario() {
        let (analyzer, clock) = analyzer_with_clock();
        let samples = vec![0.0_f32; 1024];

        let outcome = analyzer.process("subject-a", &samples);
        let analysis = outcome.analysis().expect("flat signal should process");

        assert_eq!(analysis.beta_power, 0.0);
        assert_eq!(analysis.focus_level, 0.0);
        assert!(!analysis.low_beta_warning);
        assert_eq!(analysis.raw_samples.len(), 1024);
        assert_eq!(analysis.frequencies.len(), 512);
        assert_eq!(analysis.power.len(), 512);
        assert_eq!(analysis.processed_at, 10_000.0);

        // Repeated calls reach the derived window gate of 30 and warn
        let mut warned_at = None;
        for call in 2..=40 {
            clock.advance(1.0);
            let outcome = analyzer.process("subject-a", &samples);
            if outcome.analysis().unwrap().low_beta_warning {
                warned_at = Some(call);
                break;
            }
        }
        assert_eq!(warned_at, Some(30));
    }

    #[test]
    fn test_beta_tone_scores_high() {
        let (analyzer, _clock) = analyzer_with_clock();
        let samples = sinusoid(20.0, 512.0, 2.0);

        let outcome = analyzer.process("subject-a", &samples);
        let analysis = outcome.analysis().expect("tone should process");

        assert!(analysis.beta_power > 1.0);
        assert_eq!(analysis.focus_level, 100.0);
        assert!(!analysis.low_beta_warning);
    }

    #[test]
    fn test_spectrum_length_for_padded_input() {
        let (analyzer, _clock) = analyzer_with_clock();

        // 1500 samples pads to a 2048-point FFT
        let outcome = analyzer.process("subject-a", &vec![0.1; 1500]);
        let analysis = outcome.analysis().unwrap();

        assert_eq!(analysis.frequencies.len(), 1024);
        assert_eq!(analysis.power.len(), 1024);
        assert_eq!(analysis.raw_samples.len(), 1500);
    }

    #[test]
    fn test_non_finite_input_soft_fails() {
        let (analyzer, _clock) = analyzer_with_clock();

        let mut samples = vec![0.0_f32; 1024];
        samples[100] = f32::NAN;

        let outcome = analyzer.process("subject-a", &samples);
        assert!(outcome.is_error());
        assert!(outcome
            .error_message()
            .unwrap()
            .starts_with("Error processing EEG data:"));
    }

    #[test]
    fn test_outcome_wire_shapes() {
        let (analyzer, _clock) = analyzer_with_clock();

        let error = analyzer.process("subject-a", &vec![0.0; 10]);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            "{\"error\":\"Insufficient data for processing. Need at least 2 seconds of data.\"}"
        );

        let success = analyzer.process("subject-a", &vec![0.0; 1024]);
        let json = serde_json::to_string(&success).unwrap();
        assert!(json.contains("\"subject_id\":\"subject-a\""));
        assert!(json.contains("\"beta_power\":0.0"));
        assert!(!json.contains("\"error\""));

        // Both shapes deserialize back into the tagged variant
        let restored: ProcessingOutcome = serde_json::from_str(&json).unwrap();
        assert!(restored.is_success());
        let restored: ProcessingOutcome =
            serde_json::from_str("{\"error\":\"boom\"}").unwrap();
        assert_eq!(restored.error_message(), Some("boom"));
    }

    #[test]
    fn test_reset_clears_history() {
        let (analyzer, clock) = analyzer_with_clock();
        let samples = vec![0.0_f32; 1024];

        for _ in 0..30 {
            analyzer.process("subject-a", &samples);
            clock.advance(1.0);
        }
        let outcome = analyzer.process("subject-a", &samples);
        assert!(outcome.analysis().unwrap().low_beta_warning);

        analyzer.reset();
        let outcome = analyzer.process("subject-a", &samples);
        assert!(!outcome.analysis().unwrap().low_beta_warning);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalysisConfig::default();
        config.beta_band_hz = (30.0, 12.0);
        assert!(EngagementAnalyzer::with_config(config).is_err());
    }
}

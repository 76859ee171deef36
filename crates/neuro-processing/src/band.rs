//! Band power extraction

use crate::config::{BETA_BAND_HIGH_HZ, BETA_BAND_LOW_HZ};
use crate::spectral::SpectralEstimate;
use serde::{Deserialize, Serialize};

/// Frequency band definition for spectral analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyBand {
    pub name: String,
    pub low_hz: f32,
    pub high_hz: f32,
}

impl FrequencyBand {
    pub fn new(name: &str, low_hz: f32, high_hz: f32) -> Self {
        FrequencyBand {
            name: name.to_string(),
            low_hz,
            high_hz,
        }
    }

    /// The beta band driving the focus metrics
    pub fn beta() -> Self {
        Self::new("Beta", BETA_BAND_LOW_HZ, BETA_BAND_HIGH_HZ)
    }

    /// Create the standard EEG frequency bands
    pub fn eeg_bands() -> Vec<FrequencyBand> {
        vec![
            Self::new("Delta", 0.5, 4.0),
            Self::new("Theta", 4.0, 8.0),
            Self::new("Alpha", 8.0, 12.0),
            Self::new("Beta", BETA_BAND_LOW_HZ, BETA_BAND_HIGH_HZ),
            Self::new("Gamma", 30.0, 100.0),
        ]
    }

    /// Check whether a frequency falls inside the band (inclusive both ends)
    pub fn contains(&self, frequency: f32) -> bool {
        frequency >= self.low_hz && frequency <= self.high_hz
    }
}

/// Mean power over the bins falling inside `band`.
///
/// Returns 0.0 when no bin falls in the band, e.g. when the FFT resolution
/// is too coarse. That case is a valid reading, not an error.
pub fn band_power(estimate: &SpectralEstimate, band: &FrequencyBand) -> f32 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for (frequency, power) in estimate.frequencies.iter().zip(&estimate.power) {
        if band.contains(*frequency) {
            sum += power;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::SpectralEstimator;
    use std::f32::consts::PI;

    fn sinusoid(freq: f32, fs: f32, seconds: f32) -> Vec<f32> {
        let n = (fs * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / fs).sin())
            .collect()
    }

    #[test]
    fn test_beta_tone_concentrates_in_beta_band() {
        let mut estimator = SpectralEstimator::new();
        let samples = sinusoid(20.0, 512.0, 2.0);
        let estimate = estimator.estimate(&samples, 512.0).unwrap();

        let beta = band_power(&estimate, &FrequencyBand::beta());
        let outside = band_power(&estimate, &FrequencyBand::new("High", 35.0, 60.0));

        assert!(beta > 0.0);
        assert!(beta > outside);
    }

    #[test]
    fn test_inclusive_band_edges() {
        // 0.5Hz resolution puts bins exactly on 12.0 and 30.0
        let frequencies: Vec<f32> = (0..512).map(|i| i as f32 * 0.5).collect();
        let power: Vec<f32> = frequencies
            .iter()
            .map(|&f| if f == 12.0 || f == 30.0 { 1.0 } else { 0.0 })
            .collect();
        let estimate = SpectralEstimate {
            frequencies,
            power,
        };

        let beta = band_power(&estimate, &FrequencyBand::beta());
        // Bins 24..=60 selected, two of them carry power 1.0
        assert!((beta - 2.0 / 37.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_band_is_zero() {
        let estimate = SpectralEstimate {
            frequencies: vec![0.0, 64.0, 128.0],
            power: vec![1.0, 1.0, 1.0],
        };

        // Resolution too coarse for any bin to land between 12 and 30Hz
        assert_eq!(band_power(&estimate, &FrequencyBand::beta()), 0.0);
    }

    #[test]
    fn test_zero_signal_zero_beta() {
        let mut estimator = SpectralEstimator::new();
        let estimate = estimator.estimate(&vec![0.0; 1024], 512.0).unwrap();

        assert_eq!(band_power(&estimate, &FrequencyBand::beta()), 0.0);
    }

    #[test]
    fn test_standard_bands() {
        let bands = FrequencyBand::eeg_bands();
        assert_eq!(bands.len(), 5);
        assert!(bands.iter().any(|b| b.name == "Beta" && b.low_hz == 12.0));
    }
}

//! Single-segment FFT periodogram
//!
//! One zero-padded segment, no window function, no overlap averaging. The
//! rest of the system is calibrated against these exact numbers, so this
//! must not be upgraded to a true multi-segment Welch estimate.

use neuro_core::{NeuroError, NeuroResult};
use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};

/// One-sided power spectrum with its frequency bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralEstimate {
    /// Frequency per bin in Hz: `i * fs / N`
    pub frequencies: Vec<f32>,
    /// Power per bin: `(re^2 + im^2) / N`
    pub power: Vec<f32>,
}

impl SpectralEstimate {
    /// Number of bins (`N/2` for FFT size `N`)
    pub fn len(&self) -> usize {
        self.power.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }

    /// Frequency resolution in Hz, i.e. the bin spacing
    pub fn resolution(&self) -> f32 {
        match self.frequencies.as_slice() {
            [_, second, ..] => *second,
            _ => 0.0,
        }
    }
}

/// Spectral estimator with a cached FFT planner
pub struct SpectralEstimator {
    planner: FftPlanner<f32>,
}

impl SpectralEstimator {
    pub fn new() -> Self {
        SpectralEstimator {
            planner: FftPlanner::new(),
        }
    }

    /// Estimate the one-sided power spectrum of `samples`.
    ///
    /// The FFT size is the smallest power of two covering the input; the
    /// input is zero-padded up to it. Deterministic: identical input yields
    /// bit-identical output.
    pub fn estimate(
        &mut self,
        samples: &[f32],
        sampling_rate: f32,
    ) -> NeuroResult<SpectralEstimate> {
        if samples.is_empty() {
            return Err(NeuroError::InvalidSignalData {
                reason: "Cannot estimate spectrum of empty input".to_string(),
            });
        }

        let fft_size = samples.len().next_power_of_two();
        let fft = self.planner.plan_fft_forward(fft_size);

        // Zero-padded complex input
        let mut buffer: Vec<Complex<f32>> = samples
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(fft_size, Complex::new(0.0, 0.0));

        fft.process(&mut buffer);

        let half = fft_size / 2;
        let scale = fft_size as f32;

        let power: Vec<f32> = buffer[0..half]
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im) / scale)
            .collect();

        let bin_hz = sampling_rate / fft_size as f32;
        let frequencies: Vec<f32> = (0..half).map(|i| i as f32 * bin_hz).collect();

        Ok(SpectralEstimate {
            frequencies,
            power,
        })
    }
}

impl Default for SpectralEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sinusoid(freq: f32, fs: f32, seconds: f32) -> Vec<f32> {
        let n = (fs * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / fs).sin())
            .collect()
    }

    #[test]
    fn test_one_sided_length() {
        let mut estimator = SpectralEstimator::new();

        // 1024 samples is already a power of two
        let estimate = estimator.estimate(&vec![0.5; 1024], 512.0).unwrap();
        assert_eq!(estimate.frequencies.len(), 512);
        assert_eq!(estimate.power.len(), 512);

        // 1500 samples pads to 2048
        let estimate = estimator.estimate(&vec![0.5; 1500], 512.0).unwrap();
        assert_eq!(estimate.len(), 1024);
        assert_eq!(estimate.resolution(), 512.0 / 2048.0);
    }

    #[test]
    fn test_frequency_bins() {
        let mut estimator = SpectralEstimator::new();
        let estimate = estimator.estimate(&vec![0.0; 1024], 512.0).unwrap();

        assert_eq!(estimate.frequencies[0], 0.0);
        assert_eq!(estimate.frequencies[1], 0.5);
        assert_eq!(estimate.frequencies[40], 20.0);
        assert_eq!(estimate.frequencies[511], 255.5);
    }

    #[test]
    fn test_zero_input_zero_power() {
        let mut estimator = SpectralEstimator::new();
        let estimate = estimator.estimate(&vec![0.0; 1024], 512.0).unwrap();

        assert!(estimate.power.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_sinusoid_peak_at_tone() {
        let mut estimator = SpectralEstimator::new();
        let samples = sinusoid(20.0, 512.0, 2.0);
        let estimate = estimator.estimate(&samples, 512.0).unwrap();

        let peak_idx = estimate
            .power
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(i, _)| i)
            .unwrap();

        // 20Hz lands exactly on bin 40 at 0.5Hz resolution
        assert_eq!(peak_idx, 40);
        assert!(estimate.power[peak_idx] > 0.0);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let mut estimator = SpectralEstimator::new();
        let samples = sinusoid(20.0, 512.0, 2.0);

        let first = estimator.estimate(&samples, 512.0).unwrap();
        let second = estimator.estimate(&samples, 512.0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut estimator = SpectralEstimator::new();
        assert!(estimator.estimate(&[], 512.0).is_err());
    }
}

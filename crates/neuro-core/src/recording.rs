//! EegRecording: Core container for single-channel EEG data

use crate::clock::epoch_millis;
use crate::eeg_types::EegMetadata;
use crate::error::{NeuroError, NeuroResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Container for one contiguous single-channel EEG capture
#[derive(Debug, Clone)]
pub struct EegRecording {
    /// Unique identifier for this recording
    pub id: Uuid,
    /// Amplitude samples in capture order
    pub data: Vec<f32>,
    /// Capture metadata
    pub metadata: EegMetadata,
    /// Creation timestamp (ms since epoch)
    pub created_at: u64,
}

impl EegRecording {
    /// Create new recording with data and metadata
    pub fn new(data: Vec<f32>, metadata: EegMetadata) -> NeuroResult<Self> {
        // Validate data length matches metadata expectations
        let expected_samples = metadata.expected_samples();
        if data.len() != expected_samples {
            return Err(NeuroError::InvalidSignalData {
                reason: format!(
                    "Data length {} doesn't match expected {} samples",
                    data.len(),
                    expected_samples
                ),
            });
        }

        Ok(EegRecording {
            id: Uuid::new_v4(),
            data,
            metadata,
            created_at: epoch_millis(),
        })
    }

    /// Get number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if recording is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get recording duration in seconds
    pub fn duration(&self) -> f32 {
        self.metadata.duration
    }

    /// Get sampling rate
    pub fn sampling_rate(&self) -> f32 {
        self.metadata.sampling_rate
    }

    /// Get time vector for plotting
    pub fn time_vector(&self) -> Vec<f32> {
        let dt = 1.0 / self.metadata.sampling_rate;

        (0..self.data.len()).map(|i| i as f32 * dt).collect()
    }

    /// Calculate basic statistics over the samples
    pub fn stats(&self) -> RecordingStats {
        RecordingStats::calculate(&self.data)
    }

    /// Slice the recording to a time range, e.g. one experiment stage
    pub fn slice_time(&self, start_time: f32, end_time: f32) -> NeuroResult<EegRecording> {
        if start_time < 0.0 || end_time > self.duration() || start_time >= end_time {
            return Err(NeuroError::InvalidSignalData {
                reason: format!(
                    "Invalid time range [{:.3}, {:.3}]s for recording duration {:.3}s",
                    start_time,
                    end_time,
                    self.duration()
                ),
            });
        }

        let start_sample = (start_time * self.metadata.sampling_rate) as usize;
        let end_sample = (end_time * self.metadata.sampling_rate) as usize;
        let sliced_data = self.data[start_sample..end_sample].to_vec();

        let mut new_metadata = self.metadata.clone();
        new_metadata.duration = end_time - start_time;

        EegRecording::new(sliced_data, new_metadata)
    }
}

/// Basic statistics for a recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingStats {
    pub mean: f32,
    pub rms: f32,
    pub std_dev: f32,
    pub min: f32,
    pub max: f32,
    pub peak_to_peak: f32,
}

impl RecordingStats {
    pub fn calculate(data: &[f32]) -> Self {
        if data.is_empty() {
            return Self {
                mean: 0.0,
                rms: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                peak_to_peak: 0.0,
            };
        }

        let sum: f32 = data.iter().sum();
        let mean = sum / data.len() as f32;

        let sum_sq: f32 = data.iter().map(|x| x * x).sum();
        let rms = (sum_sq / data.len() as f32).sqrt();

        let variance: f32 =
            data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / data.len() as f32;
        let std_dev = variance.sqrt();

        let min = data.iter().fold(f32::INFINITY, |a, &b| a.min(b));
        let max = data.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let peak_to_peak = max - min;

        Self {
            mean,
            rms,
            std_dev,
            min,
            max,
            peak_to_peak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eeg_types::SensorPlacement;

    #[test]
    fn test_recording_creation() {
        let metadata = EegMetadata::new(SensorPlacement::Frontal, 512.0, 2.0, 0.1).unwrap();

        let data = vec![0.0; 1024]; // 2 seconds of data
        let recording = EegRecording::new(data, metadata).unwrap();

        assert_eq!(recording.len(), 1024);
        assert_eq!(recording.sampling_rate(), 512.0);
        assert_eq!(recording.duration(), 2.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let metadata = EegMetadata::new(SensorPlacement::Frontal, 512.0, 2.0, 0.1).unwrap();

        let data = vec![0.0; 100];
        assert!(EegRecording::new(data, metadata).is_err());
    }

    #[test]
    fn test_slice_time() {
        let metadata = EegMetadata::new(SensorPlacement::Frontal, 512.0, 4.0, 0.1).unwrap();
        let data = (0..2048).map(|i| i as f32).collect();
        let recording = EegRecording::new(data, metadata).unwrap();

        let slice = recording.slice_time(1.0, 3.0).unwrap();
        assert_eq!(slice.len(), 1024);
        assert_eq!(slice.duration(), 2.0);
        assert_eq!(slice.data[0], 512.0);

        assert!(recording.slice_time(3.0, 1.0).is_err());
        assert!(recording.slice_time(0.0, 5.0).is_err());
    }

    #[test]
    fn test_recording_stats() {
        let metadata = EegMetadata::new(SensorPlacement::Frontal, 512.0, 2.0, 0.1).unwrap();
        let data: Vec<f32> = (0..1024)
            .map(|i| (2.0 * std::f32::consts::PI * i as f32 / 64.0).sin())
            .collect();
        let recording = EegRecording::new(data, metadata).unwrap();

        let stats = recording.stats();
        assert!(stats.mean.abs() < 0.01);
        assert!((stats.rms - 0.707).abs() < 0.01);
        assert!(stats.peak_to_peak > 1.9);
    }
}

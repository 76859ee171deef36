//! EEG signal simulator standing in for the wearable device link

use crate::signal_patterns::EegPattern;
use neuro_core::{EegMetadata, EegRecording, NeuroResult, SensorPlacement};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Configuration for EEG simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EegConfig {
    /// Electrode placement being simulated
    pub placement: SensorPlacement,
    /// Sampling rate in Hz
    pub sampling_rate: f32,
    /// Signal pattern to generate
    pub pattern: PatternConfig,
    /// Noise configuration
    pub noise: NoiseConfig,
    /// Power line interference (50/60Hz)
    pub powerline_freq: Option<f32>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

/// Pattern configuration wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub pattern_type: String,
    pub parameters: Vec<f32>,
}

impl PatternConfig {
    pub fn from_pattern(pattern: EegPattern) -> Self {
        match pattern {
            EegPattern::Flat { level } => PatternConfig {
                pattern_type: "flat".to_string(),
                parameters: vec![level],
            },
            EegPattern::Sinusoidal {
                frequency,
                amplitude,
                baseline,
            } => PatternConfig {
                pattern_type: "sinusoidal".to_string(),
                parameters: vec![frequency, amplitude, baseline],
            },
            EegPattern::Focused { amplitude } => PatternConfig {
                pattern_type: "focused".to_string(),
                parameters: vec![amplitude],
            },
            EegPattern::Relaxed { amplitude } => PatternConfig {
                pattern_type: "relaxed".to_string(),
                parameters: vec![amplitude],
            },
            EegPattern::Drowsy { amplitude } => PatternConfig {
                pattern_type: "drowsy".to_string(),
                parameters: vec![amplitude],
            },
            EegPattern::Blend { focus, amplitude } => PatternConfig {
                pattern_type: "blend".to_string(),
                parameters: vec![focus, amplitude],
            },
        }
    }

    pub fn to_pattern(&self) -> EegPattern {
        match self.pattern_type.as_str() {
            "flat" => EegPattern::Flat {
                level: self.parameters.first().copied().unwrap_or(0.0),
            },
            "sinusoidal" => EegPattern::Sinusoidal {
                frequency: self.parameters.first().copied().unwrap_or(10.0),
                amplitude: self.parameters.get(1).copied().unwrap_or(0.5),
                baseline: self.parameters.get(2).copied().unwrap_or(0.0),
            },
            "focused" => EegPattern::Focused {
                amplitude: self.parameters.first().copied().unwrap_or(0.6),
            },
            "relaxed" => EegPattern::Relaxed {
                amplitude: self.parameters.first().copied().unwrap_or(0.6),
            },
            "drowsy" => EegPattern::Drowsy {
                amplitude: self.parameters.first().copied().unwrap_or(0.6),
            },
            "blend" => EegPattern::Blend {
                focus: self.parameters.first().copied().unwrap_or(0.5),
                amplitude: self.parameters.get(1).copied().unwrap_or(0.6),
            },
            _ => EegPattern::Flat { level: 0.0 },
        }
    }
}

/// Noise configuration for realistic EEG simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Gaussian noise standard deviation (0.0 = no noise)
    pub gaussian_std: f32,
    /// Baseline wander amplitude
    pub baseline_wander: f32,
    /// Eye-blink artifact probability per sample (0.0 to 1.0)
    pub blink_artifact_prob: f32,
    /// Eye-blink artifact amplitude
    pub blink_artifact_amp: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            gaussian_std: 0.05,
            baseline_wander: 0.02,
            blink_artifact_prob: 0.001,
            blink_artifact_amp: 1.5,
        }
    }
}

impl Default for EegConfig {
    fn default() -> Self {
        Self {
            placement: SensorPlacement::Frontal,
            sampling_rate: 512.0,
            pattern: PatternConfig::from_pattern(EegPattern::Blend {
                focus: 0.7,
                amplitude: 0.6,
            }),
            noise: NoiseConfig::default(),
            powerline_freq: Some(50.0),
            seed: None,
        }
    }
}

/// EEG signal simulator
pub struct EegSimulator {
    config: EegConfig,
    rng: rand::rngs::StdRng,
    normal_dist: Normal<f32>,
    time_offset: f32,
}

impl EegSimulator {
    /// Create new simulator with configuration
    pub fn new(config: EegConfig) -> NeuroResult<Self> {
        EegMetadata::validate_sampling_rate(config.sampling_rate)?;

        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs()
        });

        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal_dist = Normal::new(0.0, config.noise.gaussian_std).map_err(|e| {
            neuro_core::NeuroError::SimulationError {
                message: format!("Failed to create normal distribution: {}", e),
            }
        })?;

        Ok(EegSimulator {
            config,
            rng,
            normal_dist,
            time_offset: 0.0,
        })
    }

    /// Generate a capture for the specified duration
    pub fn generate(&mut self, duration: f32) -> NeuroResult<EegRecording> {
        let sample_count = (duration * self.config.sampling_rate) as usize;
        let mut data = Vec::with_capacity(sample_count);

        let dt = 1.0 / self.config.sampling_rate;
        let pattern = self.config.pattern.to_pattern();

        for sample_idx in 0..sample_count {
            let time = self.time_offset + sample_idx as f32 * dt;

            let mut value = pattern.value_at_time(time);
            value += self.add_noise(time);

            if let Some(powerline_freq) = self.config.powerline_freq {
                value += self.add_powerline_interference(time, powerline_freq);
            }

            // Clamp to plausible scalp amplitude range
            value = value.max(-200.0).min(200.0);

            data.push(value);
        }

        // Update time offset for continuous generation
        self.time_offset += duration;

        let metadata = EegMetadata::new(
            self.config.placement,
            self.config.sampling_rate,
            duration,
            self.config.noise.gaussian_std,
        )?;

        EegRecording::new(data, metadata)
    }

    /// Generate continuous chunks for streaming
    pub fn generate_chunk(&mut self, chunk_duration: f32) -> NeuroResult<EegRecording> {
        self.generate(chunk_duration)
    }

    /// Add various noise components
    fn add_noise(&mut self, time: f32) -> f32 {
        let mut noise = 0.0;

        // Gaussian noise
        noise += self.normal_dist.sample(&mut self.rng);

        // Baseline wander (slow drift)
        noise +=
            self.config.noise.baseline_wander * (2.0 * std::f32::consts::PI * 0.1 * time).sin();

        // Eye-blink artifacts (random spikes)
        if self.rng.gen::<f32>() < self.config.noise.blink_artifact_prob {
            noise += self.config.noise.blink_artifact_amp * self.rng.gen_range(0.2..1.0);
        }

        noise
    }

    /// Add powerline interference
    fn add_powerline_interference(&mut self, time: f32, frequency: f32) -> f32 {
        let amplitude = 0.05; // Small interference
        amplitude * (2.0 * std::f32::consts::PI * frequency * time).sin()
    }

    /// Reset time offset (useful for restarting simulation)
    pub fn reset_time(&mut self) {
        self.time_offset = 0.0;
    }

    /// Get current configuration
    pub fn config(&self) -> &EegConfig {
        &self.config
    }

    /// Update configuration
    pub fn update_config(&mut self, config: EegConfig) -> NeuroResult<()> {
        EegMetadata::validate_sampling_rate(config.sampling_rate)?;

        self.normal_dist = Normal::new(0.0, config.noise.gaussian_std).map_err(|e| {
            neuro_core::NeuroError::SimulationError {
                message: format!("Failed to create normal distribution: {}", e),
            }
        })?;
        self.config = config;
        Ok(())
    }
}

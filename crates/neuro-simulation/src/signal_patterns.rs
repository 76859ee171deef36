//! Pre-defined EEG signal patterns for synthetic captures

use std::f32::consts::PI;

/// Predefined single-channel EEG patterns
#[derive(Debug, Clone, Copy)]
pub enum EegPattern {
    /// Constant amplitude (electrode test / flatline)
    Flat { level: f32 },
    /// Single tone at an arbitrary frequency
    Sinusoidal {
        frequency: f32,
        amplitude: f32,
        baseline: f32,
    },
    /// Task-engaged activity: beta tone at 20Hz
    Focused { amplitude: f32 },
    /// Eyes-closed rest: alpha tone at 10Hz
    Relaxed { amplitude: f32 },
    /// Drowsiness: theta tone at 5Hz
    Drowsy { amplitude: f32 },
    /// Crossfade between theta and beta by focus share (0.0 to 1.0)
    Blend { focus: f32, amplitude: f32 },
}

impl EegPattern {
    /// Instantaneous amplitude at the given time
    pub fn value_at_time(&self, time: f32) -> f32 {
        match self {
            EegPattern::Flat { level } => *level,

            EegPattern::Sinusoidal {
                frequency,
                amplitude,
                baseline,
            } => baseline + amplitude * (2.0 * PI * frequency * time).sin(),

            EegPattern::Focused { amplitude } => amplitude * (2.0 * PI * 20.0 * time).sin(),

            EegPattern::Relaxed { amplitude } => amplitude * (2.0 * PI * 10.0 * time).sin(),

            EegPattern::Drowsy { amplitude } => amplitude * (2.0 * PI * 5.0 * time).sin(),

            EegPattern::Blend { focus, amplitude } => {
                let focus = focus.clamp(0.0, 1.0);
                let beta = amplitude * focus * (2.0 * PI * 20.0 * time).sin();
                let theta = amplitude * (1.0 - focus) * (2.0 * PI * 5.0 * time).sin();
                beta + theta
            }
        }
    }

    /// Get pattern description
    pub fn description(&self) -> &'static str {
        match self {
            EegPattern::Flat { .. } => "Flat amplitude",
            EegPattern::Sinusoidal { .. } => "Single tone",
            EegPattern::Focused { .. } => "Focused (beta)",
            EegPattern::Relaxed { .. } => "Relaxed (alpha)",
            EegPattern::Drowsy { .. } => "Drowsy (theta)",
            EegPattern::Blend { .. } => "Theta/beta blend",
        }
    }

    /// Create common preset patterns
    pub fn presets() -> Vec<(&'static str, EegPattern)> {
        vec![
            ("Flatline", EegPattern::Flat { level: 0.0 }),
            ("Deep Focus", EegPattern::Focused { amplitude: 0.8 }),
            ("Light Focus", EegPattern::Focused { amplitude: 0.4 }),
            ("Rest", EegPattern::Relaxed { amplitude: 0.6 }),
            ("Drowsy", EegPattern::Drowsy { amplitude: 0.7 }),
            (
                "Distracted",
                EegPattern::Blend {
                    focus: 0.3,
                    amplitude: 0.6,
                },
            ),
            (
                "Engaged",
                EegPattern::Blend {
                    focus: 0.9,
                    amplitude: 0.6,
                },
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_pattern() {
        let pattern = EegPattern::Flat { level: 0.5 };
        assert_eq!(pattern.value_at_time(0.0), 0.5);
        assert_eq!(pattern.value_at_time(3.7), 0.5);
    }

    #[test]
    fn test_focused_pattern_period() {
        let pattern = EegPattern::Focused { amplitude: 1.0 };
        // 20Hz: zero crossings every 25ms
        assert!(pattern.value_at_time(0.0).abs() < 1e-5);
        assert!(pattern.value_at_time(0.05).abs() < 1e-4);
        assert!(pattern.value_at_time(0.0125) > 0.99);
    }

    #[test]
    fn test_blend_extremes() {
        let full_focus = EegPattern::Blend {
            focus: 1.0,
            amplitude: 1.0,
        };
        let focused = EegPattern::Focused { amplitude: 1.0 };
        assert!((full_focus.value_at_time(0.0125) - focused.value_at_time(0.0125)).abs() < 1e-6);

        let no_focus = EegPattern::Blend {
            focus: 0.0,
            amplitude: 1.0,
        };
        let drowsy = EegPattern::Drowsy { amplitude: 1.0 };
        assert!((no_focus.value_at_time(0.05) - drowsy.value_at_time(0.05)).abs() < 1e-6);
    }
}

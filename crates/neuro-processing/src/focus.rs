//! Focus level normalization

use crate::config::AnalysisConfig;

/// Map a beta power scalar to a 0-100 focus level with one decimal place.
///
/// Beta power is clamped to `[min_beta, max_beta]` and mapped linearly, so
/// the score is flat at 0 below the clamp range and flat at 100 above it.
/// Pure and stateless.
pub fn focus_level(beta_power: f32, config: &AnalysisConfig) -> f32 {
    let clamped = beta_power.max(config.min_beta).min(config.max_beta);
    let normalized = (clamped - config.min_beta) / (config.max_beta - config.min_beta);
    (normalized * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(beta_power: f32) -> f32 {
        focus_level(beta_power, &AnalysisConfig::default())
    }

    #[test]
    fn test_clamp_boundaries() {
        assert_eq!(level(0.05), 0.0);
        assert_eq!(level(0.1), 0.0);
        assert_eq!(level(1.0), 100.0);
        assert_eq!(level(2.0), 100.0);
        assert_eq!(level(0.0), 0.0);
    }

    #[test]
    fn test_linear_mapping() {
        assert_eq!(level(0.55), 50.0);
        assert_eq!(level(0.325), 25.0);
        assert_eq!(level(0.775), 75.0);
    }

    #[test]
    fn test_one_decimal_precision() {
        // (0.2 - 0.1) / 0.9 = 0.1111... -> 111.1... -> 11.1
        assert_eq!(level(0.2), 11.1);
        let scaled = level(0.47) * 10.0;
        assert_eq!(scaled, scaled.round());
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut previous = level(0.0);
        let mut beta = 0.0_f32;
        while beta <= 1.2 {
            let current = level(beta);
            assert!(
                current >= previous,
                "focus level decreased at beta {}",
                beta
            );
            previous = current;
            beta += 0.01;
        }
    }
}

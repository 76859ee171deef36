//! End-to-end session walkthrough
//!
//! Simulates the captures a wearable would deliver during a labelled
//! session, runs the engagement pipeline per stage, and prints the
//! per-stage readout an experiment operator sees.

use anyhow::Result;
use neuro_core::{StageLabel, StageRecording};
use neuro_processing::{
    band_power, summarize_session, EngagementAnalyzer, FrequencyBand, SpectralEstimator,
};
use neuro_simulation::{EegConfig, EegPattern, EegSimulator, PatternConfig};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== EEG Engagement Pipeline Demo ===\n");

    let analyzer = EngagementAnalyzer::new()?;

    // Example 1: process one simulated focus capture
    single_capture_example(&analyzer)?;

    // Example 2: band powers across the standard EEG bands
    band_breakdown_example()?;

    // Example 3: a full labelled session, stage by stage
    session_example(&analyzer)?;

    println!("=== Demo complete ===");
    Ok(())
}

fn simulate(pattern: EegPattern, seconds: f32, seed: u64) -> Result<Vec<f32>> {
    let mut config = EegConfig::default();
    config.pattern = PatternConfig::from_pattern(pattern);
    config.seed = Some(seed);

    let mut simulator = EegSimulator::new(config)?;
    Ok(simulator.generate(seconds)?.data)
}

/// Example 1: one capture through the full pipeline
fn single_capture_example(analyzer: &EngagementAnalyzer) -> Result<()> {
    println!("1. Single Capture");

    let samples = simulate(EegPattern::Focused { amplitude: 0.6 }, 2.0, 11)?;
    let outcome = analyzer.process("demo-subject", &samples);

    match outcome.analysis() {
        Some(analysis) => {
            println!("   Beta power:   {:.3}", analysis.beta_power);
            println!("   Focus level:  {:.1}", analysis.focus_level);
            println!("   Low beta:     {}", analysis.low_beta_warning);
        }
        None => println!("   Error: {}", outcome.error_message().unwrap_or("unknown")),
    }

    println!();
    Ok(())
}

/// Example 2: where the power sits across the standard bands
fn band_breakdown_example() -> Result<()> {
    println!("2. Band Breakdown (relaxed subject)");

    let samples = simulate(EegPattern::Relaxed { amplitude: 0.6 }, 2.0, 12)?;
    let mut estimator = SpectralEstimator::new();
    let estimate = estimator.estimate(&samples, 512.0)?;

    for band in FrequencyBand::eeg_bands() {
        println!(
            "   {:6} {:5.1}-{:5.1}Hz  power {:.4}",
            band.name,
            band.low_hz,
            band.high_hz,
            band_power(&estimate, &band)
        );
    }

    println!();
    Ok(())
}

/// Example 3: labelled stages, summarized in order
fn session_example(analyzer: &EngagementAnalyzer) -> Result<()> {
    println!("3. Labelled Session");

    let stages = vec![
        StageRecording {
            label: StageLabel::Focus,
            order: 1,
            started_at: 0.0,
            ended_at: 15.0,
            samples: simulate(EegPattern::Focused { amplitude: 0.6 }, 15.0, 21)?,
        },
        StageRecording {
            label: StageLabel::NonFocus,
            order: 2,
            started_at: 15.0,
            ended_at: 30.0,
            samples: simulate(EegPattern::Drowsy { amplitude: 0.6 }, 15.0, 22)?,
        },
    ];

    let report = summarize_session(analyzer, "demo-subject", &stages);

    for stage in &report.stages {
        match stage.outcome.analysis() {
            Some(analysis) => println!(
                "   Stage {} ({}): focus {:.1}, beta {:.3}, warning {}",
                stage.order,
                stage.label,
                analysis.focus_level,
                analysis.beta_power,
                analysis.low_beta_warning
            ),
            None => println!(
                "   Stage {} ({}): {}",
                stage.order,
                stage.label,
                stage.outcome.error_message().unwrap_or("unknown")
            ),
        }
    }

    println!("\n   Report JSON bytes: {}", report.to_json()?.len());
    println!();
    Ok(())
}

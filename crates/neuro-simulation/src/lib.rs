//! Neuro-Simulation: Synthetic EEG generation
//!
//! Stands in for the wearable device link during development and testing.

pub mod eeg_simulator;
pub mod real_time_stream;
pub mod signal_patterns;

pub use eeg_simulator::*;
pub use real_time_stream::*;
pub use signal_patterns::*;

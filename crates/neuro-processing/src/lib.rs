//! Neuro-Processing: Engagement analytics for single-channel EEG
//!
//! Spectral estimation, beta band power, sustained-low-engagement tracking
//! and focus scoring behind one soft-failing entry point.

pub mod band;
pub mod config;
pub mod focus;
pub mod persistence;
pub mod pipeline;
pub mod session;
pub mod spectral;

pub use band::{band_power, FrequencyBand};
pub use config::AnalysisConfig;
pub use focus::focus_level;
pub use persistence::{BetaPowerReading, PersistenceTracker};
pub use pipeline::{EngagementAnalyzer, ProcessingError, ProcessingOutcome, StageAnalysis};
pub use session::{summarize_session, SessionReport, StageSummary};
pub use spectral::{SpectralEstimate, SpectralEstimator};

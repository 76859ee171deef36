//! Neuro-Core: Foundation types for EEG engagement analysis
//!
//! Minimal core types for single-channel wearable EEG captures.

pub mod clock;
pub mod eeg_types;
pub mod error;
pub mod recording;
pub mod stage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use eeg_types::*;
pub use error::{NeuroError, NeuroResult};
pub use recording::*;
pub use stage::*;

//! Labelled experiment stages
//!
//! A session alternates between operator-labelled stages; each stage carries
//! the raw samples captured while it was active. The stage sequencing policy
//! itself lives outside this workspace.

use serde::{Deserialize, Serialize};

/// Operator-assigned label for an experiment stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageLabel {
    Focus,
    NonFocus,
}

impl std::fmt::Display for StageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageLabel::Focus => write!(f, "focus"),
            StageLabel::NonFocus => write!(f, "non-focus"),
        }
    }
}

/// One completed stage: label, position in the session, and its samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecording {
    /// Stage label
    pub label: StageLabel,
    /// 1-based position within the session
    pub order: u32,
    /// Stage start (seconds since epoch)
    pub started_at: f64,
    /// Stage end (seconds since epoch)
    pub ended_at: f64,
    /// Amplitude samples captured during the stage
    pub samples: Vec<f32>,
}

impl StageRecording {
    /// Stage duration in seconds
    pub fn duration(&self) -> f64 {
        self.ended_at - self.started_at
    }
}

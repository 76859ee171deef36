//! Per-stage session summaries
//!
//! End-of-session readout for experiment operators: each recorded stage is
//! pushed through the analyzer in stage order and the outcomes are collected
//! into a report the external storage layer can persist as JSON.

use crate::pipeline::{EngagementAnalyzer, ProcessingOutcome};
use neuro_core::{NeuroError, NeuroResult, StageLabel, StageRecording};
use serde::{Deserialize, Serialize};

/// Analysis outcome for one stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSummary {
    pub label: StageLabel,
    pub order: u32,
    pub outcome: ProcessingOutcome,
}

/// Full session readout for one subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub subject_id: String,
    pub stages: Vec<StageSummary>,
}

impl SessionReport {
    /// Serialize the report for the storage layer
    pub fn to_json(&self) -> NeuroResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| NeuroError::ComputationError {
            message: format!("Failed to serialize session report: {}", e),
        })
    }
}

/// Analyze every stage of a completed session in stage order.
///
/// Stages with too little data produce error outcomes in place; the report
/// always carries one summary per stage.
pub fn summarize_session(
    analyzer: &EngagementAnalyzer,
    subject_id: &str,
    stages: &[StageRecording],
) -> SessionReport {
    let stages = stages
        .iter()
        .map(|stage| StageSummary {
            label: stage.label,
            order: stage.order,
            outcome: analyzer.process(subject_id, &stage.samples),
        })
        .collect();

    SessionReport {
        subject_id: subject_id.to_string(),
        stages,
    }
}

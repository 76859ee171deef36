//! Sustained-low-engagement tracking
//!
//! Keeps a rolling five-minute history of beta power readings per subject
//! and decides whether the low-engagement warning holds. The store is owned
//! by the tracker; only the boolean decision crosses the boundary.

use crate::config::AnalysisConfig;
use neuro_core::{Clock, SystemClock};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// One beta power reading with its capture time
#[derive(Debug, Clone, Copy)]
pub struct BetaPowerReading {
    /// Seconds since epoch
    pub timestamp: f64,
    /// Mean beta-band power for one processed call
    pub beta_power: f32,
}

type SubjectWindow = Arc<Mutex<Vec<BetaPowerReading>>>;

/// Per-subject rolling window store with the warning decision
///
/// Updates for the same subject serialize on that subject's window lock;
/// different subjects never contend beyond the brief map access.
pub struct PersistenceTracker {
    windows: RwLock<HashMap<String, SubjectWindow>>,
    clock: Arc<dyn Clock>,
    window_seconds: f64,
    low_beta_threshold: f32,
    alert_threshold_percent: f32,
    min_window_samples: usize,
}

impl PersistenceTracker {
    /// Create a tracker over the wall clock
    pub fn new(config: &AnalysisConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a tracker with an injected time source
    pub fn with_clock(config: &AnalysisConfig, clock: Arc<dyn Clock>) -> Self {
        PersistenceTracker {
            windows: RwLock::new(HashMap::new()),
            clock,
            window_seconds: config.tracking_window_seconds,
            low_beta_threshold: config.low_beta_threshold,
            alert_threshold_percent: config.alert_threshold_percent,
            min_window_samples: config.min_window_samples(),
        }
    }

    /// Record a reading and return the current warning state.
    ///
    /// Every call mutates the window: the reading is appended and entries
    /// older than the tracking window are pruned, warning or not. The window
    /// never shrinks any other way; there is no reset inside `update`.
    pub fn update(&self, subject_id: &str, beta_power: f32) -> bool {
        let window = self.subject_window(subject_id);
        let mut readings = window.lock().unwrap_or_else(|e| e.into_inner());

        let now = self.clock.now();
        readings.push(BetaPowerReading {
            timestamp: now,
            beta_power,
        });
        readings.retain(|r| r.timestamp >= now - self.window_seconds);

        if readings.len() < self.min_window_samples {
            return false;
        }

        let low_count = readings
            .iter()
            .filter(|r| r.beta_power < self.low_beta_threshold)
            .count();
        let percent_low = (low_count as f32 / readings.len() as f32) * 100.0;

        percent_low >= self.alert_threshold_percent
    }

    /// Number of retained readings for a subject
    pub fn window_len(&self, subject_id: &str) -> usize {
        let windows = self.windows.read().unwrap_or_else(|e| e.into_inner());
        windows
            .get(subject_id)
            .map(|w| w.lock().unwrap_or_else(|e| e.into_inner()).len())
            .unwrap_or(0)
    }

    /// Number of subjects with a window
    pub fn subject_count(&self) -> usize {
        self.windows
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Drop one subject's history
    pub fn clear_subject(&self, subject_id: &str) {
        self.windows
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(subject_id);
    }

    /// Drop all history
    pub fn clear(&self) {
        self.windows
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    fn subject_window(&self, subject_id: &str) -> SubjectWindow {
        {
            let windows = self.windows.read().unwrap_or_else(|e| e.into_inner());
            if let Some(window) = windows.get(subject_id) {
                return Arc::clone(window);
            }
        }

        let mut windows = self.windows.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(
            windows
                .entry(subject_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Vec::new()))),
        )
    }
}

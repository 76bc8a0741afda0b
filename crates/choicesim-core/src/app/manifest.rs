//! Run manifest: what was run, when, and with which seed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::SimulationConfig;
use super::simulation::RunStats;
use crate::domain::RunId;
use crate::ports::{Clock, IdGenerator};

/// Written next to the result tables so a run can be reproduced from its seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// Effective seed, also when the config left it unset.
    pub seed: u64,
    pub config: SimulationConfig,

    #[serde(default)]
    pub trials: usize,
    #[serde(default)]
    pub episodic_rows: usize,
    #[serde(default)]
    pub feature_rows: usize,
}

impl RunManifest {
    pub fn start(
        ids: &impl IdGenerator,
        clock: &impl Clock,
        seed: u64,
        config: SimulationConfig,
    ) -> Self {
        Self {
            run_id: ids.generate_run_id(),
            started_at: clock.now(),
            finished_at: None,
            seed,
            config,
            trials: 0,
            episodic_rows: 0,
            feature_rows: 0,
        }
    }

    pub fn finish(&mut self, clock: &impl Clock, stats: RunStats) {
        self.finished_at = Some(clock.now());
        self.trials = stats.trials;
        self.episodic_rows = stats.episodic_rows;
        self.feature_rows = stats.feature_rows;
    }
}

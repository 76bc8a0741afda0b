//! Simulation configuration.
//!
//! Every field has a default, so a JSON file only needs the values it changes:
//!
//! ```json
//! { "n_trials": 200, "seed": 7, "episodic": { "p_stop": 0.05 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::SimError;
use crate::model::{EpisodicParams, FeatureParams};
use crate::stimulus::ValueSetPolicy;
use crate::stimulus::catalog::GAMES_PER_CONFIGURATION;
use crate::stimulus::values::VALUE_SET_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trials (one sampled game each).
    pub n_trials: usize,

    /// Games per generated table; the trial's game is drawn from `1..=n_games`.
    pub n_games: usize,

    /// RNG seed. `None` draws one from entropy at startup.
    pub seed: Option<u64>,

    pub episodic: EpisodicParams,
    pub feature: FeatureParams,
    pub values: ValueSetPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_trials: 1000,
            n_games: GAMES_PER_CONFIGURATION,
            seed: None,
            episodic: EpisodicParams::default(),
            feature: FeatureParams::default(),
            values: ValueSetPolicy::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(s: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| SimError::InvalidConfig(format!("config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.n_games == 0 || self.n_games > GAMES_PER_CONFIGURATION {
            return Err(SimError::InvalidConfig(format!(
                "n_games must be within 1..={GAMES_PER_CONFIGURATION}, got {}",
                self.n_games
            )));
        }
        if self.values.size != VALUE_SET_SIZE {
            return Err(SimError::InvalidConfig(format!(
                "values.size must be {VALUE_SET_SIZE}, got {}",
                self.values.size
            )));
        }
        if self.values.max_attempts == Some(0) {
            return Err(SimError::InvalidConfig(
                "values.max_attempts must be at least 1 when set".to_string(),
            ));
        }
        self.episodic.validate()?;
        self.feature.validate()?;
        Ok(())
    }
}

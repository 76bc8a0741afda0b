//! Result rows produced by the trial orchestrator.

use serde::{Deserialize, Serialize};

/// Which decision model produced a row.
///
/// Serialized in lower case (`episodic` / `feature`), matching the model
/// column downstream analysis scripts group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Episodic,
    Feature,
}

/// One (model, feature, trial) decision.
///
/// Immutable once produced. `n_memories` is only present for episodic rows.
/// Feature rows carry the episodic model's `recalled_value` for the same
/// feature and trial so both tables can be joined on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub model: ModelKind,
    pub feature: String,
    pub choice: u8,
    pub rt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_memories: Option<u32>,
    pub true_value: i32,
    pub recalled_value: f64,
    pub game_number: u32,
}

//! choicesim-core
//!
//! Simulates two decision models on a multi-attribute choice task: an
//! episodic model that samples individual memories, and a feature-based
//! model that keeps running value sums per feature. Both see the same
//! generated games, and every decision becomes a result row.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（episode, game, record, ids, errors）
//! - **stimulus**: 刺激生成（catalog, values, assembler）
//! - **model**: 意思決定モデル（episodic, feature_based）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, RowSink）
//! - **app**: 試行ループと設定（builder, config, simulation, manifest）

pub mod app;
pub mod domain;
pub mod model;
pub mod ports;
pub mod stimulus;

pub use app::{
    RunManifest, RunStats, Simulation, SimulationBuilder, SimulationConfig, SimulationOutput,
};
pub use domain::{ModelKind, ResultRow, SimError};

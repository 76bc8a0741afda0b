//! App - アプリケーション層
//!
//! domain / stimulus / model を組み合わせて試行を回します。
//!
//! # 主要コンポーネント
//! - **SimulationBuilder**: 設定の検証と RNG の初期化
//! - **Simulation**: 試行ループ（生成 → 真値計算 → encode → decide → 行の書き出し）
//! - **RunManifest**: 実行のメタデータ（run id, 時刻, seed, 行数）

pub mod builder;
pub mod config;
pub mod manifest;
pub mod simulation;

pub use self::builder::SimulationBuilder;
pub use self::config::SimulationConfig;
pub use self::manifest::RunManifest;
pub use self::simulation::{
    RunStats, Simulation, SimulationOutput, TrialReport, compute_true_values, game_episodes,
};

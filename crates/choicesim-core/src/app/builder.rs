//! SimulationBuilder - シミュレーションの構築
//!
//! 設定の検証を build() 時にまとめて行います（Fail-fast）。
//! 不正な設定のまま試行を回し始めることはありません。

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::SimulationConfig;
use super::simulation::Simulation;
use crate::domain::SimError;

/// SimulationBuilder は Simulation を構築
///
/// # 使用例
/// ```ignore
/// let mut sim = SimulationBuilder::new()
///     .trials(200)
///     .seed(7)
///     .build()?;
/// let output = sim.run()?;
/// ```
///
/// `seed()` を呼ばず config にも seed がない場合は、
/// エントロピーから seed を引いて記録します（`Simulation::seed()` で取得可能）。
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// config 全体を差し替える（それまでの trials/seed 指定も上書き）
    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn trials(mut self, n_trials: usize) -> Self {
        self.config.n_trials = n_trials;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// 設定を検証して Simulation を生成
    pub fn build(self) -> Result<Simulation, SimError> {
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        Simulation::from_parts(self.config, seed, rng)
    }
}

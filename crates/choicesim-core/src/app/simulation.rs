//! Trial orchestration.
//!
//! One trial:
//! 1. build a fresh game table and draw one game from it
//! 2. compute the true value of every option of that game
//! 3. reset both models and encode the game's six items into them
//! 4. ask both models about every option, in option order, and emit one row
//!    per model and option
//!
//! All randomness (catalog pick, shuffles, value sets, game pick, recall order,
//! noise, choice draws) comes from the single `StdRng` owned here.

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;

use super::config::SimulationConfig;
use crate::domain::{FeaturePair, Game, ModelKind, Offer, ResultRow, SimError, split_item};
use crate::model::{EpisodicModel, FeatureBasedModel, MemoryModel};
use crate::ports::RowSink;
use crate::stimulus::initialize_games;

/// The game a trial was played on.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    pub game_number: u32,
    pub game: Game,
}

/// Row counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub trials: usize,
    pub episodic_rows: usize,
    pub feature_rows: usize,
}

/// Both result tables of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationOutput {
    pub episodic: Vec<ResultRow>,
    pub feature: Vec<ResultRow>,
}

/// Runs trials against one pair of models.
///
/// Built through [`SimulationBuilder`](super::builder::SimulationBuilder).
pub struct Simulation {
    config: SimulationConfig,
    seed: u64,
    rng: StdRng,
    episodic: EpisodicModel,
    feature: FeatureBasedModel,
}

impl Simulation {
    pub(crate) fn from_parts(
        config: SimulationConfig,
        seed: u64,
        rng: StdRng,
    ) -> Result<Self, SimError> {
        let episodic = EpisodicModel::new(config.episodic)?;
        let feature = FeatureBasedModel::new(config.feature)?;
        Ok(Self {
            config,
            seed,
            rng,
            episodic,
            feature,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed the RNG was built from (drawn from entropy when none was configured).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episodic_model(&self) -> &EpisodicModel {
        &self.episodic
    }

    pub fn feature_model(&self) -> &FeatureBasedModel {
        &self.feature
    }

    /// Run `config.n_trials` trials and collect both tables in memory.
    pub fn run(&mut self) -> Result<SimulationOutput, SimError> {
        let mut output = SimulationOutput::default();
        self.run_into(self.config.n_trials, &mut output.episodic, &mut output.feature)?;
        Ok(output)
    }

    /// Run `n_trials` trials, streaming rows into the two sinks.
    pub fn run_into<E: RowSink, F: RowSink>(
        &mut self,
        n_trials: usize,
        episodic_out: &mut E,
        feature_out: &mut F,
    ) -> Result<RunStats, SimError> {
        tracing::info!(n_trials, seed = self.seed, "simulation started");

        let mut stats = RunStats::default();
        for trial in 0..n_trials {
            let report = self.run_trial(episodic_out, feature_out)?;
            let rows = report.game.options.len();
            stats.trials += 1;
            stats.episodic_rows += rows;
            stats.feature_rows += rows;
            tracing::debug!(
                trial,
                game_number = report.game_number,
                multiplier = %report.game.multiplier,
                options = ?report.game.options,
                "trial finished"
            );
        }

        tracing::info!(
            trials = stats.trials,
            episodic_rows = stats.episodic_rows,
            feature_rows = stats.feature_rows,
            "simulation finished"
        );
        Ok(stats)
    }

    /// Play one trial and write its rows.
    pub fn run_trial<E: RowSink, F: RowSink>(
        &mut self,
        episodic_out: &mut E,
        feature_out: &mut F,
    ) -> Result<TrialReport, SimError> {
        let games = initialize_games(self.config.n_games, &self.config.values, &mut self.rng)?;
        let game_number = self.rng.gen_range(1..=self.config.n_games as u32);
        let game = games.get(game_number)?.clone();

        let episodes = game_episodes(&game)?;
        let true_values = compute_true_values(&game)?;

        for model in [
            &mut self.episodic as &mut dyn MemoryModel,
            &mut self.feature as &mut dyn MemoryModel,
        ] {
            model.reset();
            for (features, reward) in &episodes {
                model.encode(features, *reward);
            }
        }

        for feature in &game.options {
            let true_value = true_values.get(feature).copied().ok_or_else(|| {
                SimError::MissingTrueValue {
                    feature: feature.clone(),
                    game: game_number,
                }
            })?;
            let offer = Offer::single(feature);

            let recalled = self.episodic.decide(offer, &mut self.rng);
            episodic_out.write_row(ResultRow {
                model: ModelKind::Episodic,
                feature: feature.clone(),
                choice: recalled.choice,
                rt: recalled.rt,
                n_memories: Some(recalled.n_recalled),
                true_value,
                recalled_value: recalled.summed_value,
                game_number,
            })?;

            let valued = self.feature.decide(offer, &mut self.rng);
            feature_out.write_row(ResultRow {
                model: ModelKind::Feature,
                feature: feature.clone(),
                choice: valued.choice,
                rt: valued.rt,
                n_memories: None,
                true_value,
                recalled_value: recalled.summed_value,
                game_number,
            })?;
        }

        Ok(TrialReport { game_number, game })
    }
}

/// `(item words, reward)` for every item of a game, in item order.
pub fn game_episodes(game: &Game) -> Result<Vec<(FeaturePair, i32)>, SimError> {
    game.pairs
        .iter()
        .zip(&game.values)
        .map(|(item, reward)| Ok((split_item(item)?, *reward)))
        .collect()
}

/// Ground truth per option: the summed reward of every item whose type or
/// color is that option. Words that are not options are skipped.
pub fn compute_true_values(game: &Game) -> Result<HashMap<String, i32>, SimError> {
    let mut true_values = HashMap::new();
    for (item, reward) in game.pairs.iter().zip(&game.values) {
        let (kind, color) = split_item(item)?;
        for word in [kind, color] {
            if game.options.contains(&word) {
                *true_values.entry(word).or_insert(0) += *reward;
            }
        }
    }
    Ok(true_values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::builder::SimulationBuilder;
    use crate::domain::{Multiplier, MultiplierAxis, MultiplierTiming};

    fn seeded(seed: u64) -> Simulation {
        SimulationBuilder::new().seed(seed).build().unwrap()
    }

    fn recompute(game: &Game, feature: &str) -> i32 {
        game.pairs
            .iter()
            .zip(&game.values)
            .filter(|(item, _)| item.split('_').any(|w| w == feature))
            .map(|(_, v)| *v)
            .sum()
    }

    fn sample_game() -> Game {
        Game {
            pairs: [
                "Food_Blue",
                "Food_Green",
                "Food_Red",
                "Object_Blue",
                "Object_Green",
                "Scene_Blue",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            values: vec![2, -1, 1, -2, 1, -1],
            options: vec!["Object".to_string(), "Scene".to_string(), "Food".to_string()],
            multiplier: Multiplier {
                axis: MultiplierAxis::Category,
                timing: MultiplierTiming::Before,
            },
        }
    }

    #[test]
    fn true_values_sum_rewards_per_option() {
        let values = compute_true_values(&sample_game()).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values["Food"], 2);
        assert_eq!(values["Object"], -1);
        assert_eq!(values["Scene"], -1);
        assert!(!values.contains_key("Blue"));
    }

    #[test]
    fn episodes_follow_item_order() {
        let episodes = game_episodes(&sample_game()).unwrap();
        assert_eq!(episodes.len(), 6);
        assert_eq!(episodes[0], (("Food".to_string(), "Blue".to_string()), 2));
        assert_eq!(episodes[5], (("Scene".to_string(), "Blue".to_string()), -1));
    }

    #[test]
    fn single_trial_emits_one_row_per_option_and_model() {
        let mut sim = seeded(42);
        let mut episodic = Vec::new();
        let mut feature = Vec::new();

        let report = sim.run_trial(&mut episodic, &mut feature).unwrap();
        let options = &report.game.options;

        assert_eq!(options.len(), 3);
        assert_eq!(episodic.len(), options.len());
        assert_eq!(feature.len(), options.len());

        for ((e, f), option) in episodic.iter().zip(&feature).zip(options) {
            assert_eq!(&e.feature, option);
            assert_eq!(&f.feature, option);
            assert_eq!(e.model, ModelKind::Episodic);
            assert_eq!(f.model, ModelKind::Feature);

            let expected = recompute(&report.game, option);
            assert_eq!(e.true_value, expected);
            assert_eq!(f.true_value, expected);

            assert_eq!(e.game_number, report.game_number);
            assert!(e.n_memories.is_some());
            assert_eq!(f.n_memories, None);
            assert_eq!(f.rt, 2.0);
            assert_eq!(f.recalled_value, e.recalled_value);
        }
    }

    #[test]
    fn models_hold_only_the_current_game() {
        let mut sim = seeded(3);
        let (mut e, mut f) = (Vec::new(), Vec::new());

        for _ in 0..5 {
            let report = sim.run_trial(&mut e, &mut f).unwrap();
            assert_eq!(sim.episodic_model().episodes().len(), 6);
            for option in &report.game.options {
                let expected = f64::from(recompute(&report.game, option));
                assert_eq!(sim.feature_model().value(option), Some(expected));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let config = SimulationConfig {
            n_trials: 25,
            ..SimulationConfig::default()
        };
        let run = |config: SimulationConfig| {
            SimulationBuilder::new()
                .config(config)
                .seed(9)
                .build()
                .unwrap()
                .run()
                .unwrap()
        };
        assert_eq!(run(config.clone()), run(config));
    }

    #[test]
    fn run_counts_match_rows() {
        let mut sim = SimulationBuilder::new().trials(40).seed(1).build().unwrap();
        let (mut e, mut f) = (Vec::new(), Vec::new());
        let stats = sim.run_into(40, &mut e, &mut f).unwrap();

        assert_eq!(stats.trials, 40);
        assert_eq!(stats.episodic_rows, e.len());
        assert_eq!(stats.feature_rows, f.len());
        assert_eq!(e.len(), 40 * 3);
    }

    #[test]
    fn episodic_rows_respect_time_budget() {
        let mut sim = SimulationBuilder::new().trials(100).seed(17).build().unwrap();
        let output = sim.run().unwrap();
        for row in &output.episodic {
            assert!(row.rt >= 1.5 && row.rt <= 7.5);
            assert!(row.n_memories.unwrap() <= 6);
            assert!((1..=8).contains(&row.game_number));
            assert_eq!(row.choice, u8::from(row.recalled_value > 0.0));
        }
    }

    #[test]
    fn option_without_matching_item_has_no_true_value() {
        let mut game = sample_game();
        game.options.push("Animal".to_string());
        let values = compute_true_values(&game).unwrap();
        assert!(!values.contains_key("Animal"));
    }

    #[test]
    fn malformed_item_surfaces_as_error() {
        let mut game = sample_game();
        game.pairs[0] = "FoodBlue".to_string();
        assert!(matches!(
            compute_true_values(&game),
            Err(SimError::MalformedItem(_))
        ));
    }
}

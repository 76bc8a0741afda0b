//! Episodic model: decisions from randomly ordered recall of stored episodes.
//!
//! Each decision walks the episodes in a fresh random order. Before every
//! recall it may give up, with a probability that grows with each memory
//! already recalled (`p_stop * (n_recalled + 1)`), and it refuses a recall
//! that would push elapsed time past `max_decision_time`. Matching episodes
//! add their reward plus Gaussian recall noise to the running evidence.

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use super::MemoryModel;
use crate::domain::{Episode, FeaturePair, Offer, SimError};

/// Timing and noise parameters of the episodic model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodicParams {
    /// Latency before the first recall.
    pub non_decision_time: f64,

    /// Fixed time cost of one recall.
    pub recall_time: f64,

    /// Standard deviation of the noise added to a recalled reward.
    pub recall_noise: f64,

    /// Base stop probability; the n-th recall attempt stops with `p_stop * n`.
    pub p_stop: f64,

    /// Hard time budget. May be `f64::INFINITY`.
    pub max_decision_time: f64,
}

impl Default for EpisodicParams {
    fn default() -> Self {
        Self {
            non_decision_time: 1.5,
            recall_time: 0.5,
            recall_noise: 0.5,
            p_stop: 0.1,
            max_decision_time: 7.5,
        }
    }
}

impl EpisodicParams {
    pub fn validate(&self) -> Result<(), SimError> {
        let finite_non_negative = [
            ("non_decision_time", self.non_decision_time),
            ("recall_time", self.recall_time),
            ("recall_noise", self.recall_noise),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "episodic.{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.p_stop) {
            return Err(SimError::InvalidConfig(format!(
                "episodic.p_stop must be within [0, 1], got {}",
                self.p_stop
            )));
        }
        if self.max_decision_time.is_nan() || self.max_decision_time < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "episodic.max_decision_time must be >= 0, got {}",
                self.max_decision_time
            )));
        }
        Ok(())
    }
}

/// Outcome of one episodic decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodicDecision {
    /// 1 when the summed evidence is strictly positive.
    pub choice: u8,
    /// Simulated response time.
    pub rt: f64,
    pub n_recalled: u32,
    pub summed_value: f64,
}

/// Memory store of the current trial plus the recall process over it.
#[derive(Debug, Clone)]
pub struct EpisodicModel {
    params: EpisodicParams,
    noise: Normal<f64>,
    episodes: Vec<Episode>,
}

impl EpisodicModel {
    pub fn new(params: EpisodicParams) -> Result<Self, SimError> {
        params.validate()?;
        let noise = Normal::new(0.0, params.recall_noise)
            .map_err(|e| SimError::InvalidConfig(format!("episodic.recall_noise: {e}")))?;
        Ok(Self {
            params,
            noise,
            episodes: Vec::new(),
        })
    }

    pub fn params(&self) -> &EpisodicParams {
        &self.params
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Evaluate an offer by sampling memories.
    ///
    /// Per episode in recall order: stop check, then time check, then commit.
    /// A recall landing exactly on `max_decision_time` is allowed.
    pub fn decide<R: Rng + ?Sized>(&self, offer: Offer<'_>, rng: &mut R) -> EpisodicDecision {
        let p = &self.params;

        let mut order: Vec<usize> = (0..self.episodes.len()).collect();
        order.shuffle(rng);

        let mut elapsed = p.non_decision_time;
        let mut n_recalled: u32 = 0;
        let mut summed_value = 0.0;

        for idx in order {
            let u: f64 = Standard.sample(rng);
            if u < p.p_stop * f64::from(n_recalled + 1) {
                break;
            }
            if elapsed + p.recall_time > p.max_decision_time {
                break;
            }

            let episode = &self.episodes[idx];
            elapsed += p.recall_time;
            n_recalled += 1;

            if offer.matches(episode) {
                summed_value += f64::from(episode.reward) + self.noise.sample(rng);
            }
        }

        let decision = EpisodicDecision {
            choice: u8::from(summed_value > 0.0),
            rt: elapsed,
            n_recalled,
            summed_value,
        };
        tracing::trace!(offer = ?offer.slots(), ?decision, "episodic decision");
        decision
    }
}

impl MemoryModel for EpisodicModel {
    fn encode(&mut self, features: &FeaturePair, reward: i32) {
        self.episodes.push(Episode::new(features.clone(), reward));
    }

    fn reset(&mut self) {
        self.episodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use rstest::rstest;

    fn pair(kind: &str, color: &str) -> FeaturePair {
        (kind.to_string(), color.to_string())
    }

    fn exhaustive_params() -> EpisodicParams {
        EpisodicParams {
            non_decision_time: 1.5,
            recall_time: 0.5,
            recall_noise: 0.0,
            p_stop: 0.0,
            max_decision_time: f64::INFINITY,
        }
    }

    fn loaded(params: EpisodicParams) -> EpisodicModel {
        let mut model = EpisodicModel::new(params).unwrap();
        model.encode(&pair("Food", "Blue"), 2);
        model.encode(&pair("Food", "Green"), -1);
        model.encode(&pair("Food", "Red"), 1);
        model.encode(&pair("Object", "Blue"), -2);
        model.encode(&pair("Object", "Green"), 1);
        model.encode(&pair("Scene", "Blue"), -1);
        model
    }

    #[test]
    fn exhaustive_recall_sums_matching_rewards() {
        let model = loaded(exhaustive_params());
        let mut rng = StdRng::seed_from_u64(1);

        let d = model.decide(Offer::single("Food"), &mut rng);
        assert_eq!(d.n_recalled, 6);
        assert_eq!(d.summed_value, 2.0);
        assert_eq!(d.choice, 1);
        assert_eq!(d.rt, 1.5 + 6.0 * 0.5);

        let d = model.decide(Offer::single("Blue"), &mut rng);
        assert_eq!(d.summed_value, -1.0);
        assert_eq!(d.choice, 0);
    }

    #[test]
    fn empty_placeholder_adds_nothing() {
        let model = loaded(exhaustive_params());
        let mut rng = StdRng::seed_from_u64(2);

        let d = model.decide(Offer::new("", ""), &mut rng);
        assert_eq!(d.n_recalled, 6);
        assert_eq!(d.summed_value, 0.0);
        assert_eq!(d.choice, 0);
    }

    #[test]
    fn single_episode_round_trip() {
        let mut model = EpisodicModel::new(exhaustive_params()).unwrap();
        model.encode(&pair("Food", "Blue"), 2);

        let d = model.decide(Offer::single("Food"), &mut StdRng::seed_from_u64(0));
        assert_eq!((d.choice, d.n_recalled, d.summed_value), (1, 1, 2.0));
    }

    #[rstest]
    #[case::exactly_at_limit(3.5, 4, 3.5)]
    #[case::just_below_limit(3.4, 3, 3.0)]
    #[case::no_room_for_any(1.9, 0, 1.5)]
    fn time_budget_boundary(
        #[case] max_decision_time: f64,
        #[case] expected_recalls: u32,
        #[case] expected_rt: f64,
    ) {
        let model = loaded(EpisodicParams {
            max_decision_time,
            ..exhaustive_params()
        });
        let d = model.decide(Offer::single("Food"), &mut StdRng::seed_from_u64(3));
        assert_eq!(d.n_recalled, expected_recalls);
        assert_eq!(d.rt, expected_rt);
    }

    #[test]
    fn certain_stop_recalls_nothing() {
        let model = loaded(EpisodicParams {
            p_stop: 1.0,
            ..exhaustive_params()
        });
        let d = model.decide(Offer::single("Food"), &mut StdRng::seed_from_u64(4));
        assert_eq!(d.n_recalled, 0);
        assert_eq!(d.rt, 1.5);
        assert_eq!(d.choice, 0);
    }

    #[test]
    fn looser_constraints_never_recall_less() {
        let tight = loaded(EpisodicParams {
            recall_noise: 0.5,
            p_stop: 0.2,
            max_decision_time: 3.0,
            ..exhaustive_params()
        });
        let longer = loaded(EpisodicParams {
            max_decision_time: 7.5,
            ..*tight.params()
        });
        let patient = loaded(EpisodicParams {
            p_stop: 0.05,
            ..*tight.params()
        });

        for seed in 0..200 {
            let base = tight.decide(Offer::single("Blue"), &mut StdRng::seed_from_u64(seed));
            let more_time = longer.decide(Offer::single("Blue"), &mut StdRng::seed_from_u64(seed));
            let less_stop = patient.decide(Offer::single("Blue"), &mut StdRng::seed_from_u64(seed));
            assert!(more_time.n_recalled >= base.n_recalled, "seed {seed}");
            assert!(less_stop.n_recalled >= base.n_recalled, "seed {seed}");
        }
    }

    #[test]
    fn response_time_stays_within_budget() {
        let params = EpisodicParams::default();
        let model = loaded(params);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..1000 {
            let d = model.decide(Offer::single("Object"), &mut rng);
            assert!(d.rt >= params.non_decision_time);
            assert!(d.rt <= params.max_decision_time);
            assert_eq!(
                d.rt,
                params.non_decision_time + f64::from(d.n_recalled) * params.recall_time
            );
            assert_eq!(d.choice, u8::from(d.summed_value > 0.0));
        }
    }

    #[test]
    fn reset_forgets_every_episode() {
        let mut model = loaded(exhaustive_params());
        assert_eq!(model.episodes().len(), 6);

        model.reset();
        assert!(model.episodes().is_empty());

        let d = model.decide(Offer::single("Food"), &mut StdRng::seed_from_u64(6));
        assert_eq!((d.n_recalled, d.summed_value), (0, 0.0));
    }

    // The n-th attempt stops with p_stop * n, so p_stop = 1/k caps recalls at k - 1.
    #[rstest]
    #[case::half(0.5, 1)]
    #[case::quarter(0.25, 3)]
    fn stop_probability_grows_with_each_recall(#[case] p_stop: f64, #[case] max_recalls: u32) {
        let mut model = EpisodicModel::new(EpisodicParams {
            p_stop,
            ..exhaustive_params()
        })
        .unwrap();
        for color in ["Blue", "Green", "Red", "Yellow", "Blue", "Green"] {
            model.encode(&pair("Food", color), 1);
        }

        let mut reached_cap = false;
        for seed in 0..500 {
            let d = model.decide(Offer::single("Food"), &mut StdRng::seed_from_u64(seed));
            assert!(d.n_recalled <= max_recalls, "seed {seed}: {}", d.n_recalled);
            reached_cap |= d.n_recalled == max_recalls;
        }
        assert!(reached_cap);
    }

    #[test]
    fn stop_draw_happens_before_the_time_check() {
        // Out of time at the first episode vs. certain stop at the first
        // episode: both must consume the shuffle plus exactly one stop draw.
        let out_of_time = loaded(EpisodicParams {
            max_decision_time: 1.5,
            ..exhaustive_params()
        });
        let certain_stop = loaded(EpisodicParams {
            p_stop: 1.0,
            ..exhaustive_params()
        });

        for seed in 0..50 {
            let mut a = StdRng::seed_from_u64(seed);
            let mut b = StdRng::seed_from_u64(seed);
            let da = out_of_time.decide(Offer::single("Food"), &mut a);
            let db = certain_stop.decide(Offer::single("Food"), &mut b);
            assert_eq!((da.n_recalled, db.n_recalled), (0, 0));
            assert_eq!(a.next_u64(), b.next_u64(), "seed {seed}");
        }
    }

    #[rstest]
    #[case::negative_noise(EpisodicParams { recall_noise: -0.1, ..EpisodicParams::default() })]
    #[case::stop_above_one(EpisodicParams { p_stop: 1.5, ..EpisodicParams::default() })]
    #[case::nan_budget(EpisodicParams {
        max_decision_time: f64::NAN,
        ..EpisodicParams::default()
    })]
    #[case::infinite_recall_time(EpisodicParams {
        recall_time: f64::INFINITY,
        ..EpisodicParams::default()
    })]
    fn invalid_params_are_rejected(#[case] params: EpisodicParams) {
        assert!(matches!(
            EpisodicModel::new(params),
            Err(SimError::InvalidConfig(_))
        ));
    }
}

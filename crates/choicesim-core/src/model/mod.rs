//! Decision models.
//!
//! Both models are loaded the same way: reset, then one `encode` per item of
//! the sampled game. Their `decide` signatures differ (the episodic model
//! reports recall statistics) so only the loading side is a shared trait.

pub mod episodic;
pub mod feature_based;

pub use episodic::{EpisodicDecision, EpisodicModel, EpisodicParams};
pub use feature_based::{FEATURE_MODEL_RT, FeatureBasedModel, FeatureDecision, FeatureParams};

use crate::domain::FeaturePair;

/// State a decision model builds from the episodes of one trial.
pub trait MemoryModel {
    /// Store one (feature pair, reward) observation.
    fn encode(&mut self, features: &FeaturePair, reward: i32);

    /// Return to the empty state a freshly constructed model has.
    fn reset(&mut self);
}

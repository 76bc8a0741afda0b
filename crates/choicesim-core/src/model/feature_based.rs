//! Feature-based model: running reward sums per feature and a logistic choice rule.

use std::collections::HashMap;

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};

use super::MemoryModel;
use crate::domain::{FeaturePair, Offer, SimError};

/// Fixed response time reported by every feature-based decision.
pub const FEATURE_MODEL_RT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureParams {
    /// Inverse temperature. Higher values make choices more deterministic.
    pub beta: f64,
}

impl Default for FeatureParams {
    fn default() -> Self {
        Self { beta: 5.0 }
    }
}

impl FeatureParams {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.beta.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "feature.beta must be finite, got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDecision {
    pub choice: u8,
    pub rt: f64,
}

#[derive(Debug, Clone)]
pub struct FeatureBasedModel {
    beta: f64,
    feature_values: HashMap<String, f64>,
}

impl FeatureBasedModel {
    pub fn new(params: FeatureParams) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self {
            beta: params.beta,
            feature_values: HashMap::new(),
        })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Accumulated reward for `feature`, if any episode carried it.
    pub fn value(&self, feature: &str) -> Option<f64> {
        self.feature_values.get(feature).copied()
    }

    pub fn feature_values(&self) -> &HashMap<String, f64> {
        &self.feature_values
    }

    /// `1 / (1 + exp(-beta * value))`
    pub fn accept_probability(&self, value: f64) -> f64 {
        1.0 / (1.0 + (-self.beta * value).exp())
    }

    /// Decide on the first offer slot that names a known feature.
    ///
    /// Later slots are not looked at once one matches. No match at all
    /// rejects.
    pub fn decide<R: Rng + ?Sized>(&self, offer: Offer<'_>, rng: &mut R) -> FeatureDecision {
        for feature in offer.slots() {
            if let Some(value) = self.value(feature) {
                let p_accept = self.accept_probability(value);
                let u: f64 = Standard.sample(rng);
                let decision = FeatureDecision {
                    choice: u8::from(u < p_accept),
                    rt: FEATURE_MODEL_RT,
                };
                tracing::trace!(
                    feature,
                    value,
                    p_accept,
                    choice = decision.choice,
                    "feature decision"
                );
                return decision;
            }
        }

        FeatureDecision {
            choice: 0,
            rt: FEATURE_MODEL_RT,
        }
    }
}

impl Default for FeatureBasedModel {
    /// beta = 1.0
    fn default() -> Self {
        Self {
            beta: 1.0,
            feature_values: HashMap::new(),
        }
    }
}

impl MemoryModel for FeatureBasedModel {
    fn encode(&mut self, features: &FeaturePair, reward: i32) {
        for feature in [&features.0, &features.1] {
            *self.feature_values.entry(feature.clone()).or_insert(0.0) += f64::from(reward);
        }
    }

    fn reset(&mut self) {
        self.feature_values.clear();
    }
}

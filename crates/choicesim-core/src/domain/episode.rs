//! Episodes and decision queries.

use super::errors::SimError;

/// The two attribute words of an item: (type, color).
pub type FeaturePair = (String, String);

/// A stored (feature-pair, reward) memory trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub features: FeaturePair,
    pub reward: i32,
}

impl Episode {
    pub fn new(features: FeaturePair, reward: i32) -> Self {
        Self { features, reward }
    }

    /// Does either word of this episode equal `feature`?
    pub fn contains(&self, feature: &str) -> bool {
        self.features.0 == feature || self.features.1 == feature
    }
}

/// Split an item label `"<Type>_<Color>"` into its two words.
pub fn split_item(label: &str) -> Result<FeaturePair, SimError> {
    match label.split_once('_') {
        Some((kind, color)) if !kind.is_empty() && !color.is_empty() && !color.contains('_') => {
            Ok((kind.to_string(), color.to_string()))
        }
        _ => Err(SimError::MalformedItem(label.to_string())),
    }
}

/// A decision query: two slots, checked in order.
///
/// The orchestrator always fills the second slot with `""`. Item words are
/// never empty, so that slot can never match an episode or a stored feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer<'a>([&'a str; 2]);

impl<'a> Offer<'a> {
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self([first, second])
    }

    /// `(feature, "")`, the shape every trial query takes.
    pub fn single(feature: &'a str) -> Self {
        Self([feature, ""])
    }

    pub fn slots(&self) -> [&'a str; 2] {
        self.0
    }

    pub fn matches(&self, episode: &Episode) -> bool {
        self.0.iter().any(|slot| episode.contains(slot))
    }
}

//! Games and the per-trial game table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::SimError;

/// Attribute dimension highlighted for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiplierAxis {
    Category,
    Color,
}

impl MultiplierAxis {
    /// The words of the opposing axis, which are filtered out of a game's options.
    pub fn excluded_words(self) -> &'static [&'static str; 4] {
        match self {
            MultiplierAxis::Category => &COLOR_WORDS,
            MultiplierAxis::Color => &CATEGORY_WORDS,
        }
    }
}

/// Whether the multiplier is displayed before or after the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiplierTiming {
    Before,
    After,
}

pub const CATEGORY_WORDS: [&str; 4] = ["Food", "Animal", "Object", "Scene"];
pub const COLOR_WORDS: [&str; 4] = ["Red", "Yellow", "Blue", "Green"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplier {
    pub axis: MultiplierAxis,
    pub timing: MultiplierTiming,
}

/// One game: six labeled items with hidden rewards and the features to decide on.
///
/// `values[i]` is the reward of `pairs[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    pub pairs: Vec<String>,
    pub values: Vec<i32>,
    pub options: Vec<String>,
    pub multiplier: Multiplier,
}

/// Games of one trial, keyed by the stringified game number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameTable {
    games: BTreeMap<String, Game>,
}

impl GameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, number: u32) -> Result<&Game, SimError> {
        let key = number.to_string();
        self.games.get(&key).ok_or(SimError::UnknownGame(key))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Game)> {
        self.games.iter()
    }
}

impl FromIterator<(String, Game)> for GameTable {
    fn from_iter<I: IntoIterator<Item = (String, Game)>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Game)> for GameTable {
    fn extend<I: IntoIterator<Item = (String, Game)>>(&mut self, iter: I) {
        self.games.extend(iter);
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.axis, self.timing)
    }
}

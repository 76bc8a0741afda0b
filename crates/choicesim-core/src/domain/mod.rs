//! Domain model (episodes, games, result rows, ids, errors).

pub mod episode;
pub mod errors;
pub mod game;
pub mod ids;
pub mod record;

pub use self::episode::{Episode, FeaturePair, Offer, split_item};
pub use self::errors::SimError;
pub use self::game::{
    CATEGORY_WORDS, COLOR_WORDS, Game, GameTable, Multiplier, MultiplierAxis, MultiplierTiming,
};
pub use self::ids::{Id, IdMarker, RunId};
pub use self::record::{ModelKind, ResultRow};

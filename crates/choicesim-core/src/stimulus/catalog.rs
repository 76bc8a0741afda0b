//! Stimulus catalog: the fixed item and decision sets.
//!
//! Five configurations of eight games each. A game has six items
//! (`"<Type>_<Color>"`) and six decision words (three types, three colors).
//! Every decision word appears in at least one item of its game.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{Multiplier, MultiplierAxis, MultiplierTiming};

pub const GAMES_PER_CONFIGURATION: usize = 8;
pub const ITEMS_PER_GAME: usize = 6;

pub type WordSet = [&'static str; ITEMS_PER_GAME];

/// One predefined set of eight games.
#[derive(Debug)]
pub struct StimulusConfiguration {
    pub items: [WordSet; GAMES_PER_CONFIGURATION],
    pub decisions: [WordSet; GAMES_PER_CONFIGURATION],
}

/// Pick one of the configurations uniformly. Item and decision order is kept as is.
pub fn select_configuration<R: Rng + ?Sized>(rng: &mut R) -> &'static StimulusConfiguration {
    &CONFIGURATIONS[rng.gen_range(0..CONFIGURATIONS.len())]
}

const AXES: [MultiplierAxis; GAMES_PER_CONFIGURATION] = [
    MultiplierAxis::Category,
    MultiplierAxis::Category,
    MultiplierAxis::Color,
    MultiplierAxis::Color,
    MultiplierAxis::Category,
    MultiplierAxis::Category,
    MultiplierAxis::Color,
    MultiplierAxis::Color,
];

const TIMINGS: [[MultiplierTiming; GAMES_PER_CONFIGURATION]; 2] = {
    use MultiplierTiming::{After, Before};
    [
        [Before, After, Before, After, Before, After, Before, After],
        [After, Before, After, Before, After, Before, After, Before],
    ]
};

/// Multiplier for games 1..=8, in game order.
///
/// The axis list (four of each) is shuffled, one of the two alternating timing
/// sequences is chosen, and the two are zipped by position.
pub fn draw_multipliers<R: Rng + ?Sized>(rng: &mut R) -> [Multiplier; GAMES_PER_CONFIGURATION] {
    let mut axes = AXES;
    axes.shuffle(rng);
    let timings = &TIMINGS[rng.gen_range(0..TIMINGS.len())];

    std::array::from_fn(|i| Multiplier {
        axis: axes[i],
        timing: timings[i],
    })
}

/// The five fixed stimulus configurations, one row per game.
#[rustfmt::skip]
pub static CONFIGURATIONS: [StimulusConfiguration; 5] = [
    // 1
    StimulusConfiguration {
        items: [
            ["Food_Blue", "Food_Green", "Food_Red", "Object_Blue", "Object_Green", "Scene_Blue"],
            ["Scene_Yellow", "Scene_Green", "Scene_Blue", "Food_Yellow", "Food_Green", "Animal_Yellow"],
            ["Object_Red", "Object_Green", "Object_Yellow", "Animal_Red", "Animal_Green", "Scene_Red"],
            ["Object_Blue", "Object_Yellow", "Object_Red", "Animal_Blue", "Animal_Yellow", "Food_Blue"],
            ["Scene_Green", "Scene_Blue", "Scene_Yellow", "Animal_Green", "Animal_Blue", "Object_Green"],
            ["Food_Red", "Food_Yellow", "Food_Blue", "Animal_Red", "Animal_Yellow", "Scene_Red"],
            ["Scene_Yellow", "Scene_Green", "Scene_Red", "Food_Yellow", "Food_Green", "Object_Yellow"],
            ["Animal_Red", "Animal_Blue", "Animal_Green", "Object_Red", "Object_Blue", "Food_Red"],
        ],
        decisions: [
            ["Object", "Green", "Red", "Scene", "Blue", "Food"],
            ["Scene", "Food", "Animal", "Yellow", "Blue", "Green"],
            ["Red", "Green", "Object", "Yellow", "Animal", "Scene"],
            ["Food", "Yellow", "Animal", "Red", "Blue", "Object"],
            ["Animal", "Blue", "Scene", "Green", "Yellow", "Object"],
            ["Yellow", "Animal", "Food", "Scene", "Blue", "Red"],
            ["Food", "Green", "Yellow", "Scene", "Object", "Red"],
            ["Red", "Object", "Green", "Blue", "Animal", "Food"],
        ],
    },
    // 2
    StimulusConfiguration {
        items: [
            ["Object_Blue", "Object_Green", "Object_Yellow", "Animal_Blue", "Animal_Green", "Food_Blue"],
            ["Scene_Red", "Scene_Blue", "Scene_Green", "Object_Red", "Object_Blue", "Food_Red"],
            ["Food_Yellow", "Food_Red", "Food_Green", "Animal_Yellow", "Animal_Red", "Scene_Yellow"],
            ["Animal_Yellow", "Animal_Blue", "Animal_Red", "Scene_Yellow", "Scene_Blue", "Object_Yellow"],
            ["Food_Green", "Food_Yellow", "Food_Blue", "Animal_Green", "Animal_Yellow", "Scene_Green"],
            ["Food_Green", "Food_Red", "Food_Yellow", "Scene_Green", "Scene_Red", "Object_Green"],
            ["Scene_Red", "Scene_Yellow", "Scene_Blue", "Object_Red", "Object_Yellow", "Animal_Red"],
            ["Object_Blue", "Object_Green", "Object_Red", "Animal_Blue", "Animal_Green", "Food_Blue"],
        ],
        decisions: [
            ["Object", "Blue", "Yellow", "Animal", "Food", "Green"],
            ["Food", "Red", "Green", "Blue", "Object", "Scene"],
            ["Scene", "Food", "Red", "Green", "Yellow", "Animal"],
            ["Object", "Animal", "Scene", "Yellow", "Red", "Blue"],
            ["Scene", "Animal", "Green", "Blue", "Food", "Yellow"],
            ["Green", "Scene", "Yellow", "Red", "Food", "Object"],
            ["Scene", "Yellow", "Red", "Object", "Blue", "Animal"],
            ["Food", "Object", "Blue", "Green", "Red", "Animal"],
        ],
    },
    // 3
    StimulusConfiguration {
        items: [
            ["Animal_Yellow", "Animal_Blue", "Animal_Green", "Scene_Yellow", "Scene_Blue", "Food_Yellow"],
            ["Food_Green", "Food_Blue", "Food_Red", "Object_Green", "Object_Blue", "Scene_Green"],
            ["Scene_Red", "Scene_Yellow", "Scene_Blue", "Animal_Red", "Animal_Yellow", "Object_Red"],
            ["Food_Red", "Food_Yellow", "Food_Green", "Object_Red", "Object_Yellow", "Animal_Red"],
            ["Animal_Green", "Animal_Red", "Animal_Blue", "Scene_Green", "Scene_Red", "Object_Green"],
            ["Food_Green", "Food_Red", "Food_Yellow", "Scene_Green", "Scene_Red", "Animal_Green"],
            ["Object_Blue", "Object_Yellow", "Object_Green", "Scene_Blue", "Scene_Yellow", "Food_Blue"],
            ["Object_Blue", "Object_Yellow", "Object_Red", "Animal_Blue", "Animal_Yellow", "Food_Blue"],
        ],
        decisions: [
            ["Animal", "Blue", "Yellow", "Scene", "Green", "Food"],
            ["Food", "Scene", "Blue", "Red", "Green", "Object"],
            ["Object", "Blue", "Yellow", "Animal", "Red", "Scene"],
            ["Animal", "Red", "Object", "Yellow", "Green", "Food"],
            ["Red", "Object", "Green", "Scene", "Blue", "Animal"],
            ["Green", "Food", "Red", "Yellow", "Scene", "Animal"],
            ["Scene", "Yellow", "Food", "Blue", "Green", "Object"],
            ["Blue", "Object", "Yellow", "Animal", "Food", "Red"],
        ],
    },
    // 4
    StimulusConfiguration {
        items: [
            ["Object_Yellow", "Object_Red", "Object_Green", "Animal_Yellow", "Animal_Red", "Food_Yellow"],
            ["Scene_Blue", "Scene_Yellow", "Scene_Green", "Food_Blue", "Food_Yellow", "Object_Blue"],
            ["Food_Green", "Food_Red", "Food_Blue", "Scene_Green", "Scene_Red", "Animal_Green"],
            ["Animal_Yellow", "Animal_Blue", "Animal_Red", "Scene_Yellow", "Scene_Blue", "Object_Yellow"],
            ["Object_Green", "Object_Blue", "Object_Yellow", "Animal_Green", "Animal_Blue", "Food_Green"],
            ["Scene_Red", "Scene_Blue", "Scene_Yellow", "Food_Red", "Food_Blue", "Object_Red"],
            ["Object_Green", "Object_Blue", "Object_Red", "Animal_Green", "Animal_Blue", "Scene_Green"],
            ["Food_Red", "Food_Yellow", "Food_Green", "Animal_Red", "Animal_Yellow", "Scene_Red"],
        ],
        decisions: [
            ["Animal", "Green", "Yellow", "Object", "Red", "Food"],
            ["Blue", "Yellow", "Green", "Object", "Food", "Scene"],
            ["Red", "Animal", "Scene", "Food", "Blue", "Green"],
            ["Object", "Red", "Yellow", "Scene", "Animal", "Blue"],
            ["Green", "Object", "Food", "Animal", "Blue", "Yellow"],
            ["Food", "Object", "Yellow", "Blue", "Red", "Scene"],
            ["Object", "Red", "Scene", "Green", "Blue", "Animal"],
            ["Green", "Animal", "Scene", "Food", "Yellow", "Red"],
        ],
    },
    // 5
    StimulusConfiguration {
        items: [
            ["Scene_Blue", "Scene_Yellow", "Scene_Red", "Animal_Blue", "Animal_Yellow", "Food_Blue"],
            ["Food_Yellow", "Food_Green", "Food_Red", "Scene_Yellow", "Scene_Green", "Object_Yellow"],
            ["Animal_Yellow", "Animal_Blue", "Animal_Green", "Object_Yellow", "Object_Blue", "Food_Yellow"],
            ["Object_Red", "Object_Green", "Object_Blue", "Animal_Red", "Animal_Green", "Scene_Red"],
            ["Object_Green", "Object_Red", "Object_Yellow", "Scene_Green", "Scene_Red", "Animal_Green"],
            ["Food_Blue", "Food_Red", "Food_Green", "Animal_Blue", "Animal_Red", "Scene_Blue"],
            ["Scene_Green", "Scene_Blue", "Scene_Yellow", "Object_Green", "Object_Blue", "Food_Green"],
            ["Food_Red", "Food_Yellow", "Food_Blue", "Animal_Red", "Animal_Yellow", "Object_Red"],
        ],
        decisions: [
            ["Scene", "Red", "Food", "Blue", "Animal", "Yellow"],
            ["Red", "Scene", "Food", "Yellow", "Object", "Green"],
            ["Blue", "Green", "Animal", "Yellow", "Food", "Object"],
            ["Animal", "Object", "Blue", "Scene", "Green", "Red"],
            ["Green", "Red", "Yellow", "Animal", "Object", "Scene"],
            ["Animal", "Red", "Food", "Scene", "Green", "Blue"],
            ["Food", "Blue", "Green", "Object", "Scene", "Yellow"],
            ["Animal", "Food", "Blue", "Object", "Red", "Yellow"],
        ],
    },
];

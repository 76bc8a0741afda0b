//! Stimulus generation: catalog selection, value sets, and game assembly.

pub mod assembler;
pub mod catalog;
pub mod values;

pub use assembler::{create_game, filter_options, initialize_games};
pub use catalog::{StimulusConfiguration, draw_multipliers, select_configuration};
pub use values::{ValueSetPolicy, generate_values_set, is_valid_values_set};

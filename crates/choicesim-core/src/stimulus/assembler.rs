//! Game assembly: item set + value set + options + multiplier → game table.

use rand::Rng;

use super::catalog::{GAMES_PER_CONFIGURATION, WordSet, draw_multipliers, select_configuration};
use super::values::{ValueSetPolicy, generate_values_set};
use crate::domain::{Game, GameTable, Multiplier, SimError};

/// Package one game as a single `(game number, game)` entry.
pub fn create_game(
    game_number: u32,
    items: &WordSet,
    values: Vec<i32>,
    options: Vec<String>,
    multiplier: Multiplier,
) -> (String, Game) {
    let game = Game {
        pairs: items.iter().map(|s| s.to_string()).collect(),
        values,
        options,
        multiplier,
    };
    (game_number.to_string(), game)
}

/// Decision words that survive the multiplier axis filter, in catalog order.
pub fn filter_options(decisions: &WordSet, multiplier: Multiplier) -> Vec<String> {
    let excluded = multiplier.axis.excluded_words();
    decisions
        .iter()
        .filter(|word| !excluded.contains(word))
        .map(|word| word.to_string())
        .collect()
}

/// Build a fresh table of games `1..=n_games`.
///
/// One configuration is drawn for the whole table, multipliers are shuffled
/// once, and each game gets its own value set.
pub fn initialize_games<R: Rng + ?Sized>(
    n_games: usize,
    policy: &ValueSetPolicy,
    rng: &mut R,
) -> Result<GameTable, SimError> {
    if n_games == 0 || n_games > GAMES_PER_CONFIGURATION {
        return Err(SimError::InvalidConfig(format!(
            "n_games must be within 1..={GAMES_PER_CONFIGURATION}, got {n_games}"
        )));
    }

    let configuration = select_configuration(rng);
    let multipliers = draw_multipliers(rng);

    let mut table = GameTable::new();
    for i in 0..n_games {
        let multiplier = multipliers[i];
        let options = filter_options(&configuration.decisions[i], multiplier);
        let values = generate_values_set(policy, rng)?;

        table.extend([create_game(
            (i + 1) as u32,
            &configuration.items[i],
            values,
            options,
            multiplier,
        )]);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CATEGORY_WORDS, COLOR_WORDS, MultiplierAxis, MultiplierTiming};
    use crate::stimulus::values::is_valid_values_set;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    const DECISIONS: WordSet = ["Object", "Green", "Red", "Scene", "Blue", "Food"];

    #[rstest]
    #[case::category(MultiplierAxis::Category, vec!["Object", "Scene", "Food"])]
    #[case::color(MultiplierAxis::Color, vec!["Green", "Red", "Blue"])]
    fn options_keep_catalog_order(#[case] axis: MultiplierAxis, #[case] expected: Vec<&str>) {
        let multiplier = Multiplier {
            axis,
            timing: MultiplierTiming::After,
        };
        assert_eq!(filter_options(&DECISIONS, multiplier), expected);
    }

    #[test]
    fn create_game_keys_by_stringified_number() {
        let items = [
            "Food_Blue",
            "Food_Green",
            "Food_Red",
            "Object_Blue",
            "Object_Green",
            "Scene_Blue",
        ];
        let multiplier = Multiplier {
            axis: MultiplierAxis::Color,
            timing: MultiplierTiming::Before,
        };
        let (key, game) = create_game(
            5,
            &items,
            vec![2, 1, -1, -1, -2, 1],
            vec!["Blue".to_string()],
            multiplier,
        );

        assert_eq!(key, "5");
        assert_eq!(game.pairs[0], "Food_Blue");
        assert_eq!(game.values.len(), 6);
        assert_eq!(game.multiplier, multiplier);
    }

    #[test]
    fn generated_tables_respect_axis_filter() {
        let mut rng = StdRng::seed_from_u64(2024);
        let policy = ValueSetPolicy::default();

        for _ in 0..100 {
            let table = initialize_games(8, &policy, &mut rng).unwrap();
            assert_eq!(table.len(), 8);

            for (_, game) in table.iter() {
                assert_eq!(game.pairs.len(), 6);
                assert!(is_valid_values_set(&game.values));
                assert_eq!(game.options.len(), 3);

                let forbidden: &[&str] = match game.multiplier.axis {
                    MultiplierAxis::Category => &COLOR_WORDS,
                    MultiplierAxis::Color => &CATEGORY_WORDS,
                };
                assert!(game.options.iter().all(|o| !forbidden.contains(&o.as_str())));
            }
        }
    }

    #[test]
    fn table_has_four_games_per_axis() {
        let mut rng = StdRng::seed_from_u64(5);
        let table = initialize_games(8, &ValueSetPolicy::default(), &mut rng).unwrap();
        let color_games = table
            .iter()
            .filter(|(_, g)| g.multiplier.axis == MultiplierAxis::Color)
            .count();
        assert_eq!(color_games, 4);
    }

    #[test]
    fn fewer_games_are_numbered_from_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = initialize_games(3, &ValueSetPolicy::default(), &mut rng).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.get(1).is_ok());
        assert!(table.get(3).is_ok());
        assert!(table.get(4).is_err());
    }

    #[rstest]
    #[case::zero(0)]
    #[case::too_many(9)]
    fn game_count_outside_catalog_is_rejected(#[case] n_games: usize) {
        let mut rng = StdRng::seed_from_u64(1);
        let result = initialize_games(n_games, &ValueSetPolicy::default(), &mut rng);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }
}

//! Value set generation: constrained random rewards for the six items of a game.
//!
//! Candidates are drawn uniformly from {-2, -1, 1, 2} and rejected until they
//! satisfy every constraint in [`is_valid_values_set`].
//!
//! Termination: any candidate with a 3/3 sign split and no zero partial sum
//! already has both a negative and a positive partial sum (items 2 and 5 are
//! partial sums on their own, and the three negatives cannot all be absorbed
//! by the pairs without zeroing one). Sets like `[2, 1, -1, -1, -2, 1]` are
//! valid, so each draw succeeds with fixed positive probability and the loop
//! ends with probability one. A retry ceiling is available for callers that
//! want a hard bound; running out is an error, never a partial result.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::SimError;

/// Number of items (and values) in a game.
pub const VALUE_SET_SIZE: usize = 6;

/// Rewards an item can carry.
pub const REWARD_LEVELS: [i32; 4] = [-2, -1, 1, 2];

/// How value sets are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueSetPolicy {
    /// Values per set. Only 6 has a constraint set defined.
    pub size: usize,

    /// Retry ceiling for rejection sampling. `None` retries until success.
    pub max_attempts: Option<u64>,
}

impl Default for ValueSetPolicy {
    fn default() -> Self {
        Self {
            size: VALUE_SET_SIZE,
            max_attempts: None,
        }
    }
}

/// Draw value sets until one satisfies the constraints.
pub fn generate_values_set<R: Rng + ?Sized>(
    policy: &ValueSetPolicy,
    rng: &mut R,
) -> Result<Vec<i32>, SimError> {
    if policy.size != VALUE_SET_SIZE {
        return Err(SimError::InvalidConfig(format!(
            "value set size must be {VALUE_SET_SIZE}, got {}",
            policy.size
        )));
    }

    let mut attempts: u64 = 0;
    loop {
        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                tracing::warn!(attempts, "value set retry ceiling reached");
                return Err(SimError::ValueSetExhausted { attempts });
            }
        }
        attempts += 1;

        let candidate = draw_candidate(policy.size, rng);
        if is_valid_values_set(&candidate) {
            tracing::trace!(attempts, values = ?candidate, "value set accepted");
            return Ok(candidate);
        }
    }
}

fn draw_candidate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i32> {
    (0..size)
        .map(|_| REWARD_LEVELS[rng.gen_range(0..REWARD_LEVELS.len())])
        .collect()
}

/// The six partial sums the constraints are checked against.
///
/// Items 0-2, items 3-4, item 5, items {0, 3, 5}, items {1, 4}, item 2.
pub fn partial_sums(values: &[i32; VALUE_SET_SIZE]) -> [i32; 6] {
    let v = values;
    [
        v[0] + v[1] + v[2],
        v[3] + v[4],
        v[5],
        v[0] + v[3] + v[5],
        v[1] + v[4],
        v[2],
    ]
}

/// Check a candidate value set.
///
/// - at least half positive and at least half negative (exactly 3/3 for six)
/// - some partial sum is negative
/// - some partial sum is positive
/// - no partial sum is zero
///
/// Sets of any other length are rejected.
pub fn is_valid_values_set(values: &[i32]) -> bool {
    let Ok(values) = <&[i32; VALUE_SET_SIZE]>::try_from(values) else {
        return false;
    };

    let positive = values.iter().filter(|v| **v > 0).count();
    let negative = values.iter().filter(|v| **v < 0).count();
    if positive * 2 < VALUE_SET_SIZE || negative * 2 < VALUE_SET_SIZE {
        return false;
    }

    let sums = partial_sums(values);
    let any_negative = sums.iter().any(|s| *s < 0);
    let any_positive = sums.iter().any(|s| *s > 0);
    let none_zero = sums.iter().all(|s| *s != 0);

    any_negative && any_positive && none_zero
}

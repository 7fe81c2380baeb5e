use std::ops::RangeInclusive;

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::container::OrderedContainer;

/// Range the interactive "add random key" action draws from.
pub const DEFAULT_KEY_RANGE: RangeInclusive<i64> = 1..=1000;

/// Upper bound on draws before [`KeyFuzzer::absent_key`] gives up.
const MAX_ATTEMPTS: usize = 10_000;

/// Seeded random key source.
///
/// Uses the xoshiro256** PRNG so that a run can be replayed from its seed.
///
/// ```
/// use balanced_forest::fuzzer::KeyFuzzer;
///
/// let mut fuzzer = KeyFuzzer::new(Some([7; 32]));
/// let k = fuzzer.random_key(1, 10);
/// assert!((1..=10).contains(&k));
/// ```
pub struct KeyFuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl KeyFuzzer {
    /// Without a seed, one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_key(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// `count` random keys in `[min, max]`, repeats possible.
    pub fn keys(&mut self, count: usize, min: i64, max: i64) -> Vec<i64> {
        (0..count).map(|_| self.random_key(min, max)).collect()
    }

    /// A key in `[min, max]` not yet in `container`.
    ///
    /// Returns `None` once every key in the range is taken or the attempt
    /// limit runs out.
    pub fn absent_key<C>(&mut self, container: &mut C, min: i64, max: i64) -> Option<i64>
    where
        C: OrderedContainer<i64>,
    {
        let span = usize::try_from(max.checked_sub(min)?).ok()?.checked_add(1)?;
        if container.len() >= span {
            return None;
        }
        (0..MAX_ATTEMPTS)
            .map(|_| self.random_key(min, max))
            .find(|k| !container.contains(k))
    }
}

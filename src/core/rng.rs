//! Deterministic dealing of draws and boards.
//!
//! ```
//! use bingo_engine::core::{BingoConfig, BingoRng};
//!
//! let config = BingoConfig::default();
//! let mut rng = BingoRng::new(42);
//!
//! let draws = rng.shuffled_draws(99);
//! assert_eq!(draws.len(), 100);
//!
//! let grid = rng.deal_grid(&config, 99);
//! assert_eq!(grid.len(), 5);
//!
//! // Same seed, same deal
//! let mut again = BingoRng::new(42);
//! assert_eq!(again.shuffled_draws(99), draws);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::BingoConfig;
use crate::cards::Number;

/// Seeded RNG for building reproducible games.
///
/// Uses ChaCha8 so the same seed yields the same draws and boards on
/// every platform.
#[derive(Clone, Debug)]
pub struct BingoRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BingoRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Every number in `0..=max` exactly once, in random order.
    pub fn shuffled_draws(&mut self, max: Number) -> Vec<Number> {
        let mut draws: Vec<Number> = (0..=max).collect();
        draws.shuffle(&mut self.inner);
        draws
    }

    /// Deal one board of distinct numbers drawn from `0..=max`.
    ///
    /// Panics if the range is too small to fill the board.
    pub fn deal_grid(&mut self, config: &BingoConfig, max: Number) -> Vec<Vec<Number>> {
        let size = config.board_size;
        assert!(size > 0, "Board size must be at least 1");
        assert!(
            (max as usize) + 1 >= config.cell_count(),
            "Range 0..={} cannot fill a {}x{} board",
            max,
            size,
            size
        );

        let mut pool: Vec<Number> = (0..=max).collect();
        let (picked, _) = pool.partial_shuffle(&mut self.inner, config.cell_count());
        picked.chunks(size).map(<[Number]>::to_vec).collect()
    }

    /// Deal `count` boards.
    pub fn deal_grids(
        &mut self,
        config: &BingoConfig,
        count: usize,
        max: Number,
    ) -> Vec<Vec<Vec<Number>>> {
        (0..count).map(|_| self.deal_grid(config, max)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_determinism() {
        let config = BingoConfig::default();
        let mut rng1 = BingoRng::new(7);
        let mut rng2 = BingoRng::new(7);

        assert_eq!(rng1.shuffled_draws(50), rng2.shuffled_draws(50));
        assert_eq!(rng1.deal_grid(&config, 50), rng2.deal_grid(&config, 50));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = BingoRng::new(1);
        let mut rng2 = BingoRng::new(2);
        assert_ne!(rng1.shuffled_draws(99), rng2.shuffled_draws(99));
    }

    #[test]
    fn test_shuffled_draws_is_permutation() {
        let mut rng = BingoRng::new(3);
        let mut draws = rng.shuffled_draws(30);
        draws.sort_unstable();
        assert_eq!(draws, (0..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_deal_grid_shape_and_distinct() {
        let config = BingoConfig::new().with_board_size(4);
        let mut rng = BingoRng::new(9);
        let grid = rng.deal_grid(&config, 20);

        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|row| row.len() == 4));

        let values: FxHashSet<Number> = grid.iter().flatten().copied().collect();
        assert_eq!(values.len(), 16);
        assert!(values.iter().all(|&v| v <= 20));
    }

    #[test]
    #[should_panic(expected = "cannot fill")]
    fn test_deal_grid_range_too_small() {
        let mut rng = BingoRng::new(0);
        let _ = rng.deal_grid(&BingoConfig::default(), 10);
    }

    #[test]
    fn test_seed() {
        assert_eq!(BingoRng::new(11).seed(), 11);
    }
}

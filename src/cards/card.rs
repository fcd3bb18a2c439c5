//! Bingo cards - a grid plus win tracking.
//!
//! A `Card` owns one `Grid` and caches whether it has won. The cache only
//! moves from `false` to `true`: cells are never unmarked, so once a line
//! is complete it stays complete.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Grid, Line, Number};
use crate::core::{BingoConfig, Result};

/// A card score: unmarked sum times the winning draw.
///
/// Wider than the sum so the product of any `u32` draw and any unmarked
/// sum fits.
pub type Score = u128;

/// Identifier for a card within one game.
///
/// Cards are numbered in load order, which is also the order they are
/// visited on every draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card #{}", self.0)
    }
}

/// A bingo card.
///
/// ## Example
///
/// ```
/// use bingo_engine::cards::{Card, CardId};
///
/// let mut card = Card::new(CardId::new(0), vec![
///     vec![1, 2, 3, 4, 5],
///     vec![6, 7, 8, 9, 10],
///     vec![11, 12, 13, 14, 15],
///     vec![16, 17, 18, 19, 20],
///     vec![21, 22, 23, 24, 25],
/// ]).unwrap();
///
/// for n in [3, 8, 13, 18] {
///     assert!(!card.mark(n));
/// }
/// assert!(card.mark(23));
/// assert_eq!(card.score(23), (325 - 65) * 23);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    grid: Grid,
    won: bool,
}

impl Card {
    /// Create a 5×5 card.
    pub fn new(id: CardId, rows: Vec<Vec<Number>>) -> Result<Self> {
        Self::with_config(id, rows, &BingoConfig::default())
    }

    /// Create a card, validating the grid shape against `config`.
    pub fn with_config(id: CardId, rows: Vec<Vec<Number>>, config: &BingoConfig) -> Result<Self> {
        Ok(Self::from_grid(id, Grid::from_rows(rows, config)?))
    }

    /// Wrap an existing grid. Win status is taken from the grid's marks.
    #[must_use]
    pub fn from_grid(id: CardId, grid: Grid) -> Self {
        let won = grid.is_complete();
        Self { id, grid, won }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Mark `value` and report whether the card is now a winner.
    ///
    /// A card that has already won ignores further marks and keeps
    /// returning `true`.
    pub fn mark(&mut self, value: Number) -> bool {
        if self.won {
            return true;
        }
        if self.grid.mark(value) {
            self.won = self.grid.is_complete();
        }
        self.won
    }

    #[must_use]
    pub fn unmarked_sum(&self) -> u64 {
        self.grid.unmarked_sum()
    }

    /// Score for a card that won on `winning_draw`.
    ///
    /// Panics if the card has not won.
    #[must_use]
    pub fn score(&self, winning_draw: Number) -> Score {
        assert!(self.won, "{} has no score before it wins", self.id);
        self.score_unchecked(winning_draw)
    }

    /// Like `score`, but `None` for a card that has not won.
    #[must_use]
    pub fn try_score(&self, winning_draw: Number) -> Option<Score> {
        self.won.then(|| self.score_unchecked(winning_draw))
    }

    fn score_unchecked(&self, winning_draw: Number) -> Score {
        Score::from(self.unmarked_sum()) * Score::from(winning_draw)
    }

    /// Lines that are fully marked.
    #[must_use]
    pub fn winning_lines(&self) -> SmallVec<[Line; 2]> {
        self.grid.completed_lines()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.id)?;
        write!(f, "{}", self.grid)
    }
}

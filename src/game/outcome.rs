//! Results of a finished (or stopped) game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Number, Score};
use crate::core::{BingoError, Result};

/// A card completing a line.
///
/// Holds a snapshot of the card as it was at the moment it won, so the
/// unmarked cells (and therefore the score) are frozen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvent {
    /// The winning card.
    pub card: Card,
    /// The draw value that completed the line.
    pub draw: Number,
    /// Position of that draw in the draw sequence.
    pub draw_index: usize,
}

impl WinEvent {
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id()
    }

    /// Unmarked sum times the winning draw.
    #[must_use]
    pub fn score(&self) -> Score {
        self.card.score(self.draw)
    }

    #[must_use]
    pub fn summary(&self) -> WinnerSummary {
        WinnerSummary {
            card: self.card_id(),
            draw: self.draw,
            draw_index: self.draw_index,
            unmarked_sum: self.card.unmarked_sum(),
            score: self.score(),
        }
    }
}

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Every card won; the last one to do so is the last winner.
    AllCardsWon,
    /// The draw sequence ran out with cards still active.
    DrawsExhausted { remaining: usize },
    /// The game was built with no cards.
    NoCards,
    /// Not stopped yet: draws and active cards remain.
    Running {
        remaining: usize,
        remaining_draws: usize,
    },
}

/// Everything a game produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Earliest card to win, if any did.
    pub first_winner: Option<WinEvent>,
    /// Card that emptied the active set. `None` unless every card won.
    pub last_winner: Option<WinEvent>,
    /// All win events in arrival order.
    pub winners: Vector<WinEvent>,
    pub termination: Termination,
    /// Draws actually applied before the game stopped.
    pub draws_used: usize,
    /// Length of the draw sequence.
    pub draws_total: usize,
}

impl GameOutcome {
    /// Did every card win?
    #[must_use]
    pub fn is_conclusive(&self) -> bool {
        self.termination == Termination::AllCardsWon
    }

    #[must_use]
    pub fn first_score(&self) -> Option<Score> {
        self.first_winner.as_ref().map(WinEvent::score)
    }

    #[must_use]
    pub fn last_score(&self) -> Option<Score> {
        self.last_winner.as_ref().map(WinEvent::score)
    }

    /// The last winner, or why there is none.
    pub fn require_last_winner(&self) -> Result<&WinEvent> {
        match (&self.last_winner, self.termination) {
            (Some(event), _) => Ok(event),
            (None, Termination::DrawsExhausted { remaining }) => {
                Err(BingoError::DrawsExhausted { remaining })
            }
            (None, Termination::Running { remaining_draws, .. }) => {
                Err(BingoError::GameInProgress { remaining_draws })
            }
            (None, _) => Err(BingoError::DrawsExhausted { remaining: 0 }),
        }
    }

    /// Whether the last winner needed the very last draw of the sequence.
    #[must_use]
    pub fn last_draw_was_final(&self) -> bool {
        self.last_winner
            .as_ref()
            .is_some_and(|event| event.draw_index + 1 == self.draws_total)
    }

    /// Flatten into a serializable report.
    #[must_use]
    pub fn report(&self, all_cards_covered: bool) -> GameReport {
        GameReport {
            all_cards_covered,
            first_winner: self.first_winner.as_ref().map(WinEvent::summary),
            last_winner: self.last_winner.as_ref().map(WinEvent::summary),
            last_draw_was_final: self.last_draw_was_final(),
            winner_count: self.winners.len(),
            termination: self.termination,
        }
    }
}

/// Compact description of one winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerSummary {
    pub card: CardId,
    pub draw: Number,
    pub draw_index: usize,
    pub unmarked_sum: u64,
    pub score: Score,
}

/// What the command line tool prints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Every card value appears somewhere in the draws.
    pub all_cards_covered: bool,
    pub first_winner: Option<WinnerSummary>,
    pub last_winner: Option<WinnerSummary>,
    pub last_draw_was_final: bool,
    pub winner_count: usize,
    pub termination: Termination,
}

impl std::fmt::Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Every board will win: {}", self.all_cards_covered)?;
        match &self.first_winner {
            Some(w) => writeln!(f, "First winner: {} on draw {}, score {}", w.card, w.draw, w.score)?,
            None => writeln!(f, "First winner: none")?,
        }
        match (&self.last_winner, self.termination) {
            (Some(w), _) => {
                writeln!(f, "Last winner: {} on draw {}, score {}", w.card, w.draw, w.score)?;
                writeln!(f, "Last winning draw was the final draw: {}", self.last_draw_was_final)
            }
            (None, Termination::DrawsExhausted { remaining }) => {
                writeln!(f, "Last winner: none, draws exhausted with {} cards active", remaining)
            }
            (None, Termination::Running { remaining, .. }) => {
                writeln!(f, "Last winner: none yet, {} cards still active", remaining)
            }
            (None, _) => writeln!(f, "Last winner: none, no cards"),
        }
    }
}

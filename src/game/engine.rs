//! The game loop.
//!
//! ## States
//!
//! - `Running`: draws remain and at least one card is still active
//! - `Done`: every card has won, or the draws ran out
//!
//! Each draw is offered to every active card in load order. Cards that
//! win are removed from the active set and recorded as win events. The
//! draw that empties the active set produces the last winner and stops
//! the game; later draws are never looked at.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::outcome::{GameOutcome, Termination, WinEvent};
use crate::cards::{Card, CardId, Number};
use crate::core::{BingoConfig, BingoError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Done,
}

/// One bingo game: a draw sequence applied to a set of cards.
///
/// ## Example
///
/// ```
/// use bingo_engine::game::Game;
/// use bingo_engine::core::BingoConfig;
///
/// let config = BingoConfig::new().with_board_size(2);
/// let game = Game::from_grids(
///     vec![1, 4, 2, 3],
///     vec![
///         vec![vec![1, 2], vec![3, 4]],
///         vec![vec![4, 5], vec![6, 7]],
///     ],
///     &config,
/// ).unwrap();
///
/// let outcome = game.run();
/// assert_eq!(outcome.first_winner.unwrap().draw, 2);
/// assert!(outcome.last_winner.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    draws: Vec<Number>,
    next_draw: usize,
    /// Cards that have not won, in load order.
    active: Vec<Card>,
    /// Win events in arrival order.
    winners: Vector<WinEvent>,
    card_count: usize,
    status: GameStatus,
}

impl Game {
    /// Create a game from a draw sequence and cards.
    ///
    /// Card order is kept and decides who goes first within a draw.
    #[must_use]
    pub fn new(draws: Vec<Number>, cards: Vec<Card>) -> Self {
        let status = if cards.is_empty() || draws.is_empty() {
            GameStatus::Done
        } else {
            GameStatus::Running
        };
        let card_count = cards.len();

        debug!(cards = card_count, draws = draws.len(), "Game created");

        Self {
            draws,
            next_draw: 0,
            active: cards,
            winners: Vector::new(),
            card_count,
            status,
        }
    }

    /// Create a game from raw grids, numbering cards in load order.
    ///
    /// Fails on the first grid that is not `board_size` × `board_size`.
    pub fn from_grids(
        draws: Vec<Number>,
        grids: Vec<Vec<Vec<Number>>>,
        config: &BingoConfig,
    ) -> Result<Self> {
        let count = grids.len();
        let cards = grids
            .into_iter()
            .enumerate()
            .map(|(i, rows)| Card::with_config(card_id(i, count)?, rows, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(draws, cards))
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == GameStatus::Done
    }

    #[must_use]
    pub fn draws(&self) -> &[Number] {
        &self.draws
    }

    /// Number of draws applied so far.
    #[must_use]
    pub fn draws_processed(&self) -> usize {
        self.next_draw
    }

    /// Cards still in play.
    #[must_use]
    pub fn active_cards(&self) -> &[Card] {
        &self.active
    }

    /// Number of cards the game started with.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    #[must_use]
    pub fn winners(&self) -> &Vector<WinEvent> {
        &self.winners
    }

    #[must_use]
    pub fn first_winner(&self) -> Option<&WinEvent> {
        self.winners.front()
    }

    /// Set only once every card has won.
    #[must_use]
    pub fn last_winner(&self) -> Option<&WinEvent> {
        if self.card_count > 0 && self.active.is_empty() {
            self.winners.back()
        } else {
            None
        }
    }

    /// Why the game stopped, or `Termination::Running` while it has not.
    #[must_use]
    pub fn termination(&self) -> Termination {
        match self.status {
            GameStatus::Running => Termination::Running {
                remaining: self.active.len(),
                remaining_draws: self.draws.len() - self.next_draw,
            },
            GameStatus::Done if self.card_count == 0 => Termination::NoCards,
            GameStatus::Done if self.active.is_empty() => Termination::AllCardsWon,
            GameStatus::Done => Termination::DrawsExhausted {
                remaining: self.active.len(),
            },
        }
    }

    /// Whether every value on every card appears somewhere in the draws.
    ///
    /// If so, every card is guaranteed to win eventually.
    #[must_use]
    pub fn draws_cover_cards(&self) -> bool {
        let cards = self
            .active
            .iter()
            .chain(self.winners.iter().map(|event| &event.card));
        draws_cover_cards(&self.draws, cards)
    }

    /// Apply the next draw.
    ///
    /// Returns the cards that won on this draw, in load order, or `None`
    /// if the game was already done.
    pub fn step(&mut self) -> Option<Vec<WinEvent>> {
        if self.is_done() {
            return None;
        }

        let draw_index = self.next_draw;
        let draw = self.draws[draw_index];
        self.next_draw += 1;

        trace!(draw, draw_index, active = self.active.len(), "Applying draw");

        let mut events = Vec::new();
        let mut i = 0;
        while i < self.active.len() {
            if !self.active[i].mark(draw) {
                i += 1;
                continue;
            }

            let card = self.active.remove(i);
            let event = WinEvent {
                card,
                draw,
                draw_index,
            };
            debug!(
                card = %event.card_id(),
                draw,
                draw_index,
                score = %event.score(),
                first = self.winners.is_empty(),
                "Card won"
            );
            self.winners.push_back(event.clone());
            events.push(event);
        }

        if self.active.is_empty() {
            self.status = GameStatus::Done;
            debug!(draw, draws_used = self.next_draw, "All cards won");
        } else if self.next_draw == self.draws.len() {
            self.status = GameStatus::Done;
            warn!(
                remaining = self.active.len(),
                draws = self.draws.len(),
                "Draws exhausted before every card won"
            );
        }

        Some(events)
    }

    /// Play until done.
    #[must_use]
    pub fn run(mut self) -> GameOutcome {
        while self.step().is_some() {}
        self.outcome()
    }

    /// Snapshot of results so far.
    ///
    /// On a running game the termination is `Termination::Running`.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            first_winner: self.first_winner().cloned(),
            last_winner: self.last_winner().cloned(),
            winners: self.winners.clone(),
            termination: self.termination(),
            draws_used: self.next_draw,
            draws_total: self.draws.len(),
        }
    }
}

/// Id for the card at `index` in load order.
fn card_id(index: usize, count: usize) -> Result<CardId> {
    u32::try_from(index)
        .map(CardId::new)
        .map_err(|_| BingoError::TooManyCards { count })
}

/// Whether the draw values are a superset of every value on `cards`.
pub fn draws_cover_cards<'a>(draws: &[Number], cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let drawn: FxHashSet<Number> = draws.iter().copied().collect();
    cards
        .into_iter()
        .flat_map(|card| card.grid().values())
        .all(|value| drawn.contains(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BingoConfig {
        BingoConfig::new().with_board_size(2)
    }

    fn small_game(draws: Vec<Number>, grids: Vec<Vec<Vec<Number>>>) -> Game {
        Game::from_grids(draws, grids, &small_config()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = small_game(vec![1, 2], vec![vec![vec![1, 2], vec![3, 4]]]);
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.draws_processed(), 0);
        assert_eq!(game.card_count(), 1);
        assert!(game.first_winner().is_none());
        assert_eq!(
            game.termination(),
            Termination::Running { remaining: 1, remaining_draws: 2 }
        );
    }

    #[test]
    fn test_no_cards() {
        let game = Game::new(vec![1, 2, 3], Vec::new());
        assert!(game.is_done());
        let outcome = game.run();
        assert_eq!(outcome.termination, Termination::NoCards);
        assert!(outcome.first_winner.is_none());
        assert!(outcome.last_winner.is_none());
        assert_eq!(outcome.draws_used, 0);
    }

    #[test]
    fn test_no_draws() {
        let game = small_game(vec![], vec![vec![vec![1, 2], vec![3, 4]]]);
        assert!(game.is_done());
        let outcome = game.run();
        assert_eq!(outcome.termination, Termination::DrawsExhausted { remaining: 1 });
    }

    #[test]
    fn test_malformed_grid_rejected() {
        let err = Game::from_grids(
            vec![1],
            vec![vec![vec![1, 2], vec![3, 4]], vec![vec![1, 2, 3]]],
            &small_config(),
        )
        .unwrap_err();
        assert_eq!(err, BingoError::MalformedGrid { expected: 2, rows: 1 });
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_card_ids_never_wrap() {
        assert_eq!(card_id(7, 8).unwrap(), CardId::new(7));
        assert_eq!(card_id(u32::MAX as usize, 1).unwrap(), CardId::new(u32::MAX));

        let past = u32::MAX as usize + 1;
        assert_eq!(
            card_id(past, past + 1).unwrap_err(),
            BingoError::TooManyCards { count: past + 1 }
        );
    }

    #[test]
    fn test_step_reports_winners() {
        let mut game = small_game(
            vec![1, 2, 3],
            vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5, 3], vec![6, 1]]],
        );

        assert_eq!(game.step().unwrap().len(), 0);
        let won = game.step().unwrap();
        assert_eq!(won.len(), 1);
        assert_eq!(won[0].card_id(), CardId::new(0));
        assert_eq!(won[0].draw, 2);
        assert_eq!(won[0].draw_index, 1);
        assert_eq!(game.active_cards().len(), 1);
        assert!(game.last_winner().is_none());

        let won = game.step().unwrap();
        assert_eq!(won[0].card_id(), CardId::new(1));
        assert!(game.is_done());
        assert_eq!(game.last_winner().unwrap().card_id(), CardId::new(1));
        assert!(game.step().is_none());
    }

    #[test]
    fn test_stops_when_all_won() {
        let game = small_game(vec![1, 2, 3, 4, 9, 9], vec![vec![vec![1, 2], vec![3, 4]]]);
        let outcome = game.run();
        assert_eq!(outcome.draws_used, 2);
        assert_eq!(outcome.draws_total, 6);
        assert!(!outcome.last_draw_was_final());
    }

    #[test]
    fn test_single_card_is_first_and_last() {
        let outcome = small_game(vec![3, 1], vec![vec![vec![1, 2], vec![3, 4]]]).run();
        let first = outcome.first_winner.clone().unwrap();
        let last = outcome.last_winner.clone().unwrap();
        assert_eq!(first, last);
        assert_eq!(first.score(), 6);
        assert!(outcome.last_draw_was_final());
    }

    #[test]
    fn test_simultaneous_final_winners_use_load_order() {
        // Both remaining cards complete on draw 9; the later-loaded one is last.
        let outcome = small_game(
            vec![1, 2, 5, 9],
            vec![
                vec![vec![1, 2], vec![3, 4]],
                vec![vec![5, 9], vec![6, 7]],
                vec![vec![8, 9], vec![0, 5]],
            ],
        )
        .run();

        let order: Vec<CardId> = outcome.winners.iter().map(WinEvent::card_id).collect();
        assert_eq!(order, vec![CardId::new(0), CardId::new(1), CardId::new(2)]);
        assert_eq!(outcome.last_winner.unwrap().card_id(), CardId::new(2));
    }

    #[test]
    fn test_repeated_draw_mid_game() {
        // 2 is drawn twice before anyone wins; the repeat must not count as
        // a second mark or end the game early.
        let mut game = small_game(
            vec![2, 2, 1, 5, 6, 2, 7],
            vec![
                vec![vec![1, 2], vec![3, 4]],
                vec![vec![2, 5], vec![8, 9]],
                vec![vec![6, 7], vec![0, 2]],
            ],
        );

        assert!(game.step().unwrap().is_empty());
        assert!(game.step().unwrap().is_empty());
        assert_eq!(game.active_cards().len(), 3);
        assert!(game.active_cards().iter().all(|c| c.grid().marked_count() == 1));

        let won = game.step().unwrap();
        assert_eq!(won.len(), 1);
        assert_eq!(won[0].card_id(), CardId::new(0));
        assert_eq!(won[0].draw_index, 2);

        let won = game.step().unwrap();
        assert_eq!(won[0].card_id(), CardId::new(1));
        assert_eq!(won[0].score(), (8 + 9) * 5);

        // 6 then the repeated 2 leave only the diagonal of the last card.
        assert!(game.step().unwrap().is_empty());
        assert!(game.step().unwrap().is_empty());
        assert_eq!(game.active_cards()[0].grid().marked_count(), 2);

        let outcome = game.run();
        let last = outcome.last_winner.clone().unwrap();
        assert_eq!(last.card_id(), CardId::new(2));
        assert_eq!(last.draw, 7);
        assert_eq!(last.draw_index, 6);
        assert_eq!(outcome.draws_used, 7);
        assert_eq!(outcome.winners.len(), 3);
    }

    #[test]
    fn test_outcome_while_running() {
        let mut game = small_game(
            vec![1, 2, 3],
            vec![vec![vec![1, 2], vec![3, 4]], vec![vec![7, 8], vec![9, 10]]],
        );
        game.step();
        game.step();
        let outcome = game.outcome();
        assert_eq!(outcome.first_winner.clone().unwrap().card_id(), CardId::new(0));
        assert_eq!(
            outcome.termination,
            Termination::Running { remaining: 1, remaining_draws: 1 }
        );
        assert!(!outcome.is_conclusive());
        assert_eq!(outcome.draws_used, 2);
        assert_eq!(
            outcome.require_last_winner().unwrap_err(),
            BingoError::GameInProgress { remaining_draws: 1 }
        );

        game.step();
        assert_eq!(game.outcome().termination, Termination::DrawsExhausted { remaining: 1 });
    }

    #[test]
    fn test_draws_cover_cards() {
        let game = small_game(vec![1, 2, 3, 4], vec![vec![vec![1, 2], vec![3, 4]]]);
        assert!(game.draws_cover_cards());

        let game = small_game(vec![1, 2, 3], vec![vec![vec![1, 2], vec![3, 4]]]);
        assert!(!game.draws_cover_cards());
    }

    #[test]
    fn test_coverage_survives_play() {
        let mut game = small_game(vec![1, 2, 3, 4], vec![vec![vec![1, 2], vec![3, 4]]]);
        while game.step().is_some() {}
        assert!(game.active_cards().is_empty());
        assert!(game.draws_cover_cards());
    }
}

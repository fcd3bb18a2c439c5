//! # bingo-engine
//!
//! A bingo simulation engine: one shared draw sequence is applied, in
//! order, to a set of cards. The engine reports the first card to complete
//! a row or column and the last one to do so, each with its score.
//!
//! ## Design Principles
//!
//! 1. **One arena per card**: Rows and columns are two traversal orders
//!    over the same cells, so marking is done once and seen both ways.
//!
//! 2. **No global state**: A `Game` is a value built from its inputs and
//!    consumed into a `GameOutcome`.
//!
//! 3. **Inconclusive is explicit**: Running out of draws is a normal end
//!    state, reported as `Termination::DrawsExhausted`, never as a
//!    fabricated winner.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, deterministic RNG
//! - `cards`: Grids and cards
//! - `game`: Game loop, win events, outcomes
//! - `input`: Puzzle text loading

pub mod core;
pub mod cards;
pub mod game;
pub mod input;

// Re-export commonly used types
pub use crate::core::{BingoConfig, BingoError, BingoRng, Result, DEFAULT_BOARD_SIZE};

pub use crate::cards::{Card, CardId, Cell, Grid, Line, Number, Score};

pub use crate::game::{
    draws_cover_cards, Game, GameOutcome, GameReport, GameStatus, Termination, WinEvent,
    WinnerSummary,
};

pub use crate::input::{parse_puzzle, Puzzle};

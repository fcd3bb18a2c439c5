//! Engine errors.
//!
//! Structural problems (a board of the wrong shape, an unreadable number)
//! are reported eagerly as `BingoError`. A game that runs out of draws is
//! not an error by itself; it ends with `Termination::DrawsExhausted` and
//! only becomes `BingoError::DrawsExhausted` when a caller insists on a
//! last winner.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Invalid board size: {size}")]
    InvalidBoardSize { size: usize },

    #[error("Malformed grid: expected {expected} rows, got {rows}")]
    MalformedGrid { expected: usize, rows: usize },

    #[error("Malformed grid: row {row} has {len} values, expected {expected}")]
    MalformedRow {
        expected: usize,
        row: usize,
        len: usize,
    },

    #[error("Invalid number: {token:?}")]
    InvalidNumber { token: String },

    #[error("Input has no draw sequence")]
    MissingDraws,

    #[error("Incomplete board: {lines} trailing lines do not form a full board")]
    IncompleteBoard { lines: usize },

    #[error("Too many cards: {count} cannot all be numbered")]
    TooManyCards { count: usize },

    #[error("Draws exhausted with {remaining} cards still active")]
    DrawsExhausted { remaining: usize },

    #[error("Game still running with {remaining_draws} draws left")]
    GameInProgress { remaining_draws: usize },
}

pub type Result<T> = std::result::Result<T, BingoError>;

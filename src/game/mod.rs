//! Game loop and results.
//!
//! `Game` drives one shared draw sequence across every card, removing
//! cards as they win. `GameOutcome` carries the first and last winners,
//! the full win history and the reason the game stopped.

mod engine;
mod outcome;

pub use engine::{draws_cover_cards, Game, GameStatus};
pub use outcome::{GameOutcome, GameReport, Termination, WinEvent, WinnerSummary};

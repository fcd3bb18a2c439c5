//! Core engine types: configuration, errors, deterministic RNG.
//!
//! These are shared by the card and game layers and know nothing about
//! how a game is played.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BingoConfig, DEFAULT_BOARD_SIZE};
pub use error::{BingoError, Result};
pub use rng::BingoRng;

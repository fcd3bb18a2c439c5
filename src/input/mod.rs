//! Puzzle text loading.
//!
//! The text format is a comma-separated draw line followed by boards, one
//! row per line with values separated by whitespace. Blank lines are
//! ignored, so boards may or may not be separated by empty lines.
//!
//! ```text
//! 7,4,9,5,11,17,23,2,0,14,21,24
//!
//! 22 13 17 11  0
//!  8  2 23  4 24
//! 21  9 14 16  7
//!  6 10  3 18  5
//!  1 12 20 15 19
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Number;
use crate::core::{BingoConfig, BingoError, Result};
use crate::game::Game;

/// Raw game input: draws plus one row list per board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub draws: Vec<Number>,
    pub grids: Vec<Vec<Vec<Number>>>,
}

impl Puzzle {
    /// Build a game, validating every grid against `config`.
    pub fn into_game(self, config: &BingoConfig) -> Result<Game> {
        Game::from_grids(self.draws, self.grids, config)
    }
}

fn parse_number(token: &str) -> Result<Number> {
    token.trim().parse().map_err(|_| BingoError::InvalidNumber {
        token: token.trim().to_string(),
    })
}

/// Parse puzzle text, grouping board lines `board_size` at a time.
///
/// Row lengths are checked later, when the grids become cards.
pub fn parse_puzzle(text: &str, config: &BingoConfig) -> Result<Puzzle> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let draws = lines
        .next()
        .ok_or(BingoError::MissingDraws)?
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<_>>>()?;

    let rows = lines
        .map(|line| line.split_whitespace().map(parse_number).collect())
        .collect::<Result<Vec<Vec<Number>>>>()?;

    config.validate()?;
    let size = config.board_size;
    if rows.len() % size != 0 {
        return Err(BingoError::IncompleteBoard {
            lines: rows.len() % size,
        });
    }

    let grids = rows.chunks(size).map(<[Vec<Number>]>::to_vec).collect();
    Ok(Puzzle { draws, grids })
}

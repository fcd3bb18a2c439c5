//! Board configuration.
//!
//! The engine plays square boards. Classic bingo uses 5×5, which is the
//! default; every constructor that accepts raw grids validates them against
//! a `BingoConfig` so the board shape is fixed before a game starts.

use serde::{Deserialize, Serialize};

use super::error::{BingoError, Result};

/// Side length of a classic bingo board.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BingoConfig {
    /// Number of rows (and columns) on every board.
    #[serde(default = "default_board_size")]
    pub board_size: usize,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl BingoConfig {
    /// Create the default 5×5 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        self.board_size = size;
        self
    }

    /// Check the configuration can describe a board.
    ///
    /// `with_board_size` already refuses 0, but a deserialized or
    /// hand-built config can still carry it.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(BingoError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        Ok(())
    }

    /// Total number of cells on one board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

//! Card system: grids and cards.
//!
//! ## Key Types
//!
//! - `Number`: A value on a card, also the type of a draw
//! - `Grid`: Square cell arena with row and column views
//! - `Card`: A grid plus its win status and score
//! - `CardId`: Load-order identifier for a card
//! - `Score`: Unmarked sum times the winning draw

pub mod card;
pub mod grid;

pub use card::{Card, CardId, Score};
pub use grid::{Cell, Grid, Line, Number};

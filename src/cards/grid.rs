//! Grid storage for a single card.
//!
//! ## Layout
//!
//! Cells live in one row-major arena of `size * size` entries. Rows are
//! contiguous slices of the arena; columns walk the same arena with a
//! stride of `size`. Both views borrow the same cells, so a mark made
//! through either is visible through the other.
//!
//! ```
//! use bingo_engine::cards::Grid;
//!
//! let mut grid = Grid::new(vec![
//!     vec![1, 2, 3, 4, 5],
//!     vec![6, 7, 8, 9, 10],
//!     vec![11, 12, 13, 14, 15],
//!     vec![16, 17, 18, 19, 20],
//!     vec![21, 22, 23, 24, 25],
//! ]).unwrap();
//!
//! grid.mark(8);
//! assert!(grid.row(1).any(|cell| cell.marked));
//! assert!(grid.column(2).any(|cell| cell.marked));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BingoConfig, BingoError, Result};

/// A value printed on a card and announced by a draw.
pub type Number = u32;

/// One square of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub value: Number,
    pub marked: bool,
}

impl Cell {
    #[must_use]
    pub const fn new(value: Number) -> Self {
        Self {
            value,
            marked: false,
        }
    }
}

/// A fully marked line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
        }
    }
}

/// Square matrix of markable cells. Shape is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized form of a `Grid`.
#[derive(Deserialize)]
struct GridData {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridData> for Grid {
    type Error = BingoError;

    fn try_from(data: GridData) -> Result<Self> {
        if data.size == 0 {
            return Err(BingoError::InvalidBoardSize { size: 0 });
        }
        if data.cells.len() != data.size * data.size {
            return Err(BingoError::MalformedGrid {
                expected: data.size,
                rows: data.cells.len() / data.size,
            });
        }
        Ok(Self {
            size: data.size,
            cells: data.cells,
        })
    }
}

impl Grid {
    /// Build a 5×5 grid.
    pub fn new(rows: Vec<Vec<Number>>) -> Result<Self> {
        Self::from_rows(rows, &BingoConfig::default())
    }

    /// Build a grid, checking it is `board_size` × `board_size`.
    ///
    /// Values are stored verbatim and all cells start unmarked.
    pub fn from_rows(rows: Vec<Vec<Number>>, config: &BingoConfig) -> Result<Self> {
        config.validate()?;
        let size = config.board_size;
        if rows.len() != size {
            return Err(BingoError::MalformedGrid {
                expected: size,
                rows: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(config.cell_count());
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(BingoError::MalformedRow {
                    expected: size,
                    row,
                    len: values.len(),
                });
            }
            cells.extend(values.into_iter().map(Cell::new));
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (`row`, `column`).
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        assert!(row < self.size && column < self.size, "Cell out of bounds");
        &self.cells[row * self.size + column]
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> std::slice::Iter<'_, Cell> {
        assert!(row < self.size, "Row out of bounds");
        let start = row * self.size;
        self.cells[start..start + self.size].iter()
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &Cell> + '_ {
        assert!(column < self.size, "Column out of bounds");
        self.cells[column..].iter().step_by(self.size)
    }

    /// All rows in order.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.size)
    }

    /// All columns in order.
    pub fn columns<'a>(&'a self) -> impl Iterator<Item = impl Iterator<Item = &'a Cell> + 'a> + 'a {
        (0..self.size).map(move |c| self.column(c))
    }

    /// All values, row-major.
    pub fn values(&self) -> impl Iterator<Item = Number> + '_ {
        self.cells.iter().map(|cell| cell.value)
    }

    /// Mark every cell holding `value`.
    ///
    /// Duplicate values on one grid are all marked. Returns whether the
    /// value appears on the grid at all.
    pub fn mark(&mut self, value: Number) -> bool {
        let mut found = false;
        for cell in self.cells.iter_mut().filter(|cell| cell.value == value) {
            cell.marked = true;
            found = true;
        }
        found
    }

    /// Whether any row or column is fully marked.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (0..self.size).any(|r| self.row(r).all(|cell| cell.marked))
            || (0..self.size).any(|c| self.column(c).all(|cell| cell.marked))
    }

    /// Every fully marked line, rows first.
    #[must_use]
    pub fn completed_lines(&self) -> SmallVec<[Line; 2]> {
        let rows = (0..self.size)
            .filter(|&r| self.row(r).all(|cell| cell.marked))
            .map(Line::Row);
        let columns = (0..self.size)
            .filter(|&c| self.column(c).all(|cell| cell.marked))
            .map(Line::Column);
        rows.chain(columns).collect()
    }

    /// Sum of every unmarked value.
    #[must_use]
    pub fn unmarked_sum(&self) -> u64 {
        self.cells
            .iter()
            .filter(|cell| !cell.marked)
            .map(|cell| u64::from(cell.value))
            .sum()
    }

    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.marked).count()
    }
}

/// Renders one row per line, marked values suffixed with `*`.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    if cell.marked {
                        format!("{:>3}*", cell.value)
                    } else {
                        format!("{:>3} ", cell.value)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

//! Board module - manages the 3x3 grid
//!
//! Uses a flat array for the cells, row-major order.
//! Coordinates: (row, col), both 0-indexed from the top-left.
//! Cells are written once per game; only the search engine's undo
//! (`clear`) and a full `reset` ever empty an occupied cell.

use std::fmt;

use crate::types::{Cell, Line, Mark, GRID_SIZE};

/// Total number of cells on the board
const BOARD_SIZE: usize = GRID_SIZE * GRID_SIZE;

/// Rejected placement: occupied cell or out-of-bounds coordinates.
///
/// Recovered by ignoring the input; never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    Occupied { row: usize, col: usize },
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::Occupied { row, col } => {
                write!(f, "cell ({row}, {col}) is already occupied")
            }
            InvalidMove::OutOfBounds { row, col } => {
                write!(f, "({row}, {col}) is outside the {GRID_SIZE}x{GRID_SIZE} board")
            }
        }
    }
}

impl std::error::Error for InvalidMove {}

/// The game board - 3x3 grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get cell at (row, col). In-bounds coordinates are a precondition.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * GRID_SIZE + col]
    }

    /// Check if a cell is unoccupied. In-bounds coordinates are a precondition.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// Write a mark into an empty cell.
    ///
    /// Fails (board untouched) if the cell is occupied or out of bounds.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), InvalidMove> {
        let idx = Self::index(row, col).ok_or(InvalidMove::OutOfBounds { row, col })?;
        if self.cells[idx].is_some() {
            return Err(InvalidMove::Occupied { row, col });
        }
        self.cells[idx] = Some(mark);
        Ok(())
    }

    /// Reset a single cell to empty.
    ///
    /// Only the search engine uses this, to undo a simulated move.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * GRID_SIZE + col] = None;
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Iterate all empty cells as (row, col), row-major scan order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| (idx / GRID_SIZE, idx % GRID_SIZE))
    }

    /// Find a completed line of `mark`, if any.
    ///
    /// Scan order fixes the tie-break when several lines complete at once:
    /// rows 0..N, then columns 0..N, then main diagonal, then anti-diagonal.
    /// The first match is returned, as endpoints suitable for drawing.
    pub fn winning_line(&self, mark: Mark) -> Option<Line> {
        let owned = |row: usize, col: usize| self.get(row, col) == Some(mark);

        for row in 0..GRID_SIZE {
            if (0..GRID_SIZE).all(|col| owned(row, col)) {
                return Some(Line::new((row, 0), (row, GRID_SIZE - 1)));
            }
        }
        for col in 0..GRID_SIZE {
            if (0..GRID_SIZE).all(|row| owned(row, col)) {
                return Some(Line::new((0, col), (GRID_SIZE - 1, col)));
            }
        }
        if (0..GRID_SIZE).all(|i| owned(i, i)) {
            return Some(Line::new((0, 0), (GRID_SIZE - 1, GRID_SIZE - 1)));
        }
        if (0..GRID_SIZE).all(|i| owned(GRID_SIZE - 1 - i, i)) {
            return Some(Line::new((GRID_SIZE - 1, 0), (0, GRID_SIZE - 1)));
        }
        None
    }

    /// Reinitialize all cells to empty
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from rows of cells for testing
    #[cfg(test)]
    pub fn from_rows(rows: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.cells[row * GRID_SIZE + col] = *cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

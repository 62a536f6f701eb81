//! Layout: terminal geometry for the board, status line, and buttons.
//!
//! Pure coordinate math, shared by the renderer (forward: cell to
//! terminal position) and the input mapper (inverse: click to cell or
//! button). Keeping both directions in one place keeps them in sync.

use crate::types::GRID_SIZE;

/// Width of one board cell in terminal columns
pub const CELL_W: u16 = 7;
/// Height of one board cell in terminal rows
pub const CELL_H: u16 = 3;

/// Grid dimensions including the 1-column/1-row separator lines
pub const GRID_W: u16 = GRID_SIZE as u16 * (CELL_W + 1) - 1;
pub const GRID_H: u16 = GRID_SIZE as u16 * (CELL_H + 1) - 1;

/// Rows below the grid: one blank, status, one blank, buttons
pub const TOTAL_W: u16 = GRID_W;
pub const TOTAL_H: u16 = GRID_H + 4;

pub const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";
pub const QUIT_LABEL: &str = "[ Quit ]";

/// An axis-aligned rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Fixed-size game layout anchored at a terminal position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    origin_x: u16,
    origin_y: u16,
}

impl Layout {
    pub fn new(origin_x: u16, origin_y: u16) -> Self {
        Self { origin_x, origin_y }
    }

    /// Center the layout in a viewport (clamped to the top-left when the
    /// terminal is smaller than the game).
    pub fn centered(viewport_w: u16, viewport_h: u16) -> Self {
        Self {
            origin_x: viewport_w.saturating_sub(TOTAL_W) / 2,
            origin_y: viewport_h.saturating_sub(TOTAL_H) / 2,
        }
    }

    /// Top-left terminal position of a board cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.origin_x + col as u16 * (CELL_W + 1),
            self.origin_y + row as u16 * (CELL_H + 1),
        )
    }

    /// Center terminal position of a board cell
    pub fn cell_center(&self, row: usize, col: usize) -> (u16, u16) {
        let (x, y) = self.cell_origin(row, col);
        (x + CELL_W / 2, y + CELL_H / 2)
    }

    /// Map a terminal position back to the board cell it falls in.
    ///
    /// Separator lines and anything outside the grid map to `None`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;
        if dx >= GRID_W || dy >= GRID_H {
            return None;
        }
        if dx % (CELL_W + 1) == CELL_W || dy % (CELL_H + 1) == CELL_H {
            return None;
        }
        let col = (dx / (CELL_W + 1)) as usize;
        let row = (dy / (CELL_H + 1)) as usize;
        Some((row, col))
    }

    /// Terminal row of the status message
    pub fn status_y(&self) -> u16 {
        self.origin_y + GRID_H + 1
    }

    /// Starting column that centers `len` characters under the grid
    pub fn centered_x(&self, len: u16) -> u16 {
        self.origin_x + TOTAL_W.saturating_sub(len) / 2
    }

    /// "Play Again" button, left-aligned under the status line
    pub fn play_again_rect(&self) -> Rect {
        Rect {
            x: self.origin_x,
            y: self.origin_y + GRID_H + 3,
            w: PLAY_AGAIN_LABEL.len() as u16,
            h: 1,
        }
    }

    /// "Quit" button, right-aligned on the same row
    pub fn quit_rect(&self) -> Rect {
        let w = QUIT_LABEL.len() as u16;
        Rect {
            x: self.origin_x + TOTAL_W - w,
            y: self.origin_y + GRID_H + 3,
            w,
            h: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_round_trips_cell_origin() {
        let layout = Layout::new(5, 2);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = layout.cell_origin(row, col);
                assert_eq!(layout.cell_at(x, y), Some((row, col)));
                let (cx, cy) = layout.cell_center(row, col);
                assert_eq!(layout.cell_at(cx, cy), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_cell_at_rejects_separators_and_outside() {
        let layout = Layout::new(0, 0);
        // First vertical separator column.
        assert_eq!(layout.cell_at(CELL_W, 0), None);
        // First horizontal separator row.
        assert_eq!(layout.cell_at(0, CELL_H), None);
        // Beyond the grid.
        assert_eq!(layout.cell_at(GRID_W, 0), None);
        assert_eq!(layout.cell_at(0, GRID_H), None);
    }

    #[test]
    fn test_cell_at_rejects_left_of_origin() {
        let layout = Layout::new(10, 10);
        assert_eq!(layout.cell_at(9, 10), None);
        assert_eq!(layout.cell_at(10, 9), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let layout = Layout::new(0, 0);
        let play = layout.play_again_rect();
        let quit = layout.quit_rect();
        assert_eq!(play.y, quit.y);
        assert!(play.x + play.w <= quit.x);
    }

    #[test]
    fn test_centered_clamps_small_viewports() {
        let layout = Layout::centered(1, 1);
        assert_eq!(layout, Layout::new(0, 0));
    }
}

//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board side length. Search cost grows super-exponentially with this;
/// 3 keeps the full minimax tree well under human-perceptible latency.
pub const GRID_SIZE: usize = 3;

/// Player marks. X is the human, O is the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

/// The human always plays X.
pub const HUMAN: Mark = Mark::X;

/// The AI always plays O.
pub const AI: Mark = Mark::O;

impl Mark {
    /// The other player's mark
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a mark)
pub type Cell = Option<Mark>;

/// A completed line of three equal marks, as endpoint cell coordinates
/// suitable for drawing a strike-through. Endpoints are (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl Line {
    pub const fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        Self { start, end }
    }

    /// Iterate the cells the line passes through, from start to end.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (r0, c0) = self.start;
        let (r1, c1) = self.end;
        let step = |a: usize, b: usize, i: usize| -> usize {
            if a < b {
                a + i
            } else if a > b {
                a - i
            } else {
                a
            }
        };
        (0..GRID_SIZE).map(move |i| (step(r0, r1, i), step(c0, c1, i)))
    }
}

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { mark: Mark, line: Line },
    Draw,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Status bar messages (the full fixed set the UI can show)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    XGoesFirst,
    OGoesFirst,
    YourTurn,
    XWins,
    OWins,
    Tie,
}

impl StatusLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLine::XGoesFirst => "X goes first!",
            StatusLine::OGoesFirst => "O goes first!",
            StatusLine::YourTurn => "Your turn!",
            StatusLine::XWins => "X wins!",
            StatusLine::OWins => "O (AI) wins!",
            StatusLine::Tie => "It's a tie!",
        }
    }
}

/// UI events produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on a grid cell, as (row, col)
    Select(usize, usize),
    /// "Play Again" button or restart key
    Restart,
    /// "Quit" button, quit key, or window close
    Quit,
}

//! Game state module - turn sequencing and game lifecycle
//!
//! Owns the board and drives one atomic transition per input event:
//! validate the human's move, apply it, resolve win/draw, let the AI
//! answer, resolve again. Rendering reads this state but never mutates
//! it; the module has no UI dependency.

use crate::core::{choose_move, Board, SimpleRng};
use crate::types::{Mark, Status, StatusLine, AI, HUMAN};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Mark to move; meaningless once `status` is terminal.
    turn: Mark,
    status: Status,
    status_line: StatusLine,
    rng: SimpleRng,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The starting mark is drawn uniformly at random. Call `start()` to
    /// let the AI open when O was drawn.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let (turn, status_line) = Self::draw_starting_mark(&mut rng);
        Self {
            board: Board::new(),
            turn,
            status: Status::InProgress,
            status_line,
            rng,
            started: false,
        }
    }

    fn draw_starting_mark(rng: &mut SimpleRng) -> (Mark, StatusLine) {
        if rng.next_range(2) == 0 {
            (HUMAN, StatusLine::XGoesFirst)
        } else {
            (AI, StatusLine::OGoesFirst)
        }
    }

    /// Start the game: when the AI's mark opens, it moves immediately,
    /// before any human input is accepted. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if self.turn == AI {
            self.ai_move();
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_line(&self) -> StatusLine {
        self.status_line
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply the human's move at (row, col) and let the AI answer.
    ///
    /// Invalid requests (game over, not the human's turn, occupied or
    /// out-of-bounds cell) are silently ignored and return false; the
    /// state is unchanged. A valid move runs the whole transition in one
    /// step: place X, resolve, AI reply, resolve again. Returns true when
    /// the move was applied.
    pub fn human_move(&mut self, row: usize, col: usize) -> bool {
        if self.is_over() || self.turn != HUMAN {
            return false;
        }
        if self.board.place(row, col, HUMAN).is_err() {
            return false;
        }

        if self.resolve(HUMAN) {
            return true;
        }

        self.turn = AI;
        self.ai_move();
        true
    }

    /// Let the AI place its move and resolve the result.
    ///
    /// Precondition: game in progress, board not full, AI to move.
    fn ai_move(&mut self) {
        debug_assert!(!self.is_over() && self.turn == AI && !self.board.is_full());

        let Some((row, col)) = choose_move(&mut self.board, &mut self.rng) else {
            // Only reachable on a full board, which `resolve` rules out.
            unreachable!("AI move requested on a full board");
        };
        // The chosen cell came from the empty-cell scan, so this cannot fail.
        self.board.place(row, col, AI).ok();

        if !self.resolve(AI) {
            self.turn = HUMAN;
            self.status_line = StatusLine::YourTurn;
        }
    }

    /// Check win/draw for the mark that just moved.
    ///
    /// Returns true when the game ended.
    fn resolve(&mut self, mark: Mark) -> bool {
        if let Some(line) = self.board.winning_line(mark) {
            self.status = Status::Won { mark, line };
            self.status_line = match mark {
                Mark::X => StatusLine::XWins,
                Mark::O => StatusLine::OWins,
            };
            return true;
        }
        if self.board.is_full() {
            self.status = Status::Draw;
            self.status_line = StatusLine::Tie;
            return true;
        }
        false
    }

    /// Begin a new round: clear the board, redraw the starting mark, and
    /// re-run the opening logic. Only accepted once the game is over.
    pub fn restart(&mut self) {
        if !self.is_over() {
            return;
        }
        self.board.reset();
        self.status = Status::InProgress;
        let (turn, status_line) = Self::draw_starting_mark(&mut self.rng);
        self.turn = turn;
        self.status_line = status_line;
        if self.turn == AI {
            self.ai_move();
        }
    }
}

//! Search module - exhaustive minimax over the game tree
//!
//! The AI (O) maximizes, the human (X) minimizes. Scores are from the
//! AI's point of view: +1 win, 0 draw, -1 loss. The board is mutated
//! during recursion and restored before returning; callers observe no
//! side effect. No pruning or caching: the full 3x3 tree is small
//! enough to search in well under the UI's latency budget.

use arrayvec::ArrayVec;

use crate::core::{Board, SimpleRng};
use crate::types::{AI, GRID_SIZE, HUMAN};

/// Score for a position the AI has won
pub const AI_WINS: i8 = 1;
/// Score for a drawn position
pub const DRAW: i8 = 0;
/// Score for a position the AI has lost
pub const AI_LOSES: i8 = -1;

/// Candidate moves sharing the best score, in row-major scan order
pub type Candidates = ArrayVec<(usize, usize), { GRID_SIZE * GRID_SIZE }>;

/// Minimax evaluation of a position.
///
/// `maximizing` selects whose move it is: the AI's (O) when true, the
/// human's (X) when false. Terminal positions are scored directly; all
/// others take the max (or min) over children in scan order.
pub fn evaluate(board: &mut Board, maximizing: bool) -> i8 {
    if board.winning_line(AI).is_some() {
        return AI_WINS;
    }
    if board.winning_line(HUMAN).is_some() {
        return AI_LOSES;
    }
    if board.is_full() {
        return DRAW;
    }

    let mark = if maximizing { AI } else { HUMAN };
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if !board.is_empty(row, col) {
                continue;
            }
            board.place(row, col, mark).ok();
            let score = evaluate(board, !maximizing);
            board.clear(row, col);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }
    best
}

/// Score every empty cell as an AI move and collect the best ones.
///
/// Returns the best achievable score and all cells reaching it, in scan
/// order. The candidate list is empty only when the board is full.
pub fn best_moves(board: &mut Board) -> (i8, Candidates) {
    let mut best_score = i8::MIN;
    let mut candidates = Candidates::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if !board.is_empty(row, col) {
                continue;
            }
            board.place(row, col, AI).ok();
            let score = evaluate(board, false);
            board.clear(row, col);

            if score > best_score {
                best_score = score;
                candidates.clear();
                candidates.push((row, col));
            } else if score == best_score {
                candidates.push((row, col));
            }
        }
    }
    (best_score, candidates)
}

/// Choose the AI's move: a uniform random draw among the optimal cells.
///
/// The randomized tie-break keeps the AI from being predictable without
/// ever giving up optimality. Returns `None` only on a full board, which
/// callers must rule out beforehand.
pub fn choose_move(board: &mut Board, rng: &mut SimpleRng) -> Option<(usize, usize)> {
    let (_, candidates) = best_moves(board);
    rng.pick(&candidates).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_evaluate_terminal_positions() {
        let mut won = Board::from_rows([[O, O, O], [X, X, E], [E, E, E]]);
        assert_eq!(evaluate(&mut won, false), AI_WINS);

        let mut lost = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(evaluate(&mut lost, true), AI_LOSES);

        let mut drawn = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(evaluate(&mut drawn, true), DRAW);
    }

    #[test]
    fn test_evaluate_restores_the_board() {
        let mut board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let before = board.clone();
        evaluate(&mut board, false);
        assert_eq!(board, before);
    }

    #[test]
    fn test_best_moves_takes_immediate_win() {
        // O completes the left column; everything else lets X back in.
        let mut board = Board::from_rows([[O, X, X], [O, X, E], [E, O, E]]);
        let (score, candidates) = best_moves(&mut board);
        assert_eq!(score, AI_WINS);
        assert_eq!(candidates.as_slice(), &[(2, 0)]);
    }

    #[test]
    fn test_choose_move_none_on_full_board() {
        let mut board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        let mut rng = SimpleRng::new(1);
        assert_eq!(choose_move(&mut board, &mut rng), None);
    }
}

//! Core module - pure game logic with no external dependencies
//!
//! Board model, minimax search engine, and the game state machine.
//! It has zero dependencies on UI, timing, or I/O, so all the hard
//! logic is testable headlessly.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod search;

// Re-export commonly used types
pub use board::{Board, InvalidMove};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use search::{best_moves, choose_move, evaluate, Candidates, AI_LOSES, AI_WINS, DRAW};

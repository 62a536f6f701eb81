//! Terminal tic-tac-toe against a perfect-play minimax AI.
//!
//! `core` holds the board model, search engine, and game state machine
//! (pure, no I/O). `term` renders into a framebuffer and flushes it via
//! crossterm; `input` maps terminal events back to game intents.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

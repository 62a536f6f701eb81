//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: `GameView` draws the game
//! into a plain framebuffer (pure, testable), `TerminalRenderer`
//! flushes frames to the real terminal, and `Layout` holds the shared
//! geometry so drawing and mouse hit-testing cannot drift apart.

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use layout::{Layout, Rect};
pub use renderer::{encode_full_into, TerminalRenderer};

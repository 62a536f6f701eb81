//! Input mapping module.

pub mod map;

pub use map::{handle_key_event, handle_mouse_event, should_quit};

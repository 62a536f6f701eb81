//! Event mapping from terminal input to UI events.
//!
//! Pure functions over crossterm events plus the shared `Layout`, so
//! hit-testing stays in lockstep with what the renderer drew.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::term::Layout;
use crate::types::UiEvent;

/// Map keyboard input to UI events.
///
/// `r` restarts, but only once the game is over, mirroring the on-screen
/// "Play Again" button.
pub fn handle_key_event(key: KeyEvent, game_over: bool) -> Option<UiEvent> {
    if should_quit(key) {
        return Some(UiEvent::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') if game_over => Some(UiEvent::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a mouse event to a UI event.
///
/// While the game runs, left clicks inside the grid select a cell.
/// Once it is over, the grid goes dead and only the two buttons react.
/// Everything else (separator lines, empty margin, other buttons of the
/// mouse) maps to nothing.
pub fn handle_mouse_event(ev: MouseEvent, layout: &Layout, game_over: bool) -> Option<UiEvent> {
    if ev.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if !game_over {
        return layout
            .cell_at(ev.column, ev.row)
            .map(|(row, col)| UiEvent::Select(row, col));
    }

    if layout.play_again_rect().contains(ev.column, ev.row) {
        Some(UiEvent::Restart)
    } else if layout.quit_rect().contains(ev.column, ev.row) {
        Some(UiEvent::Quit)
    } else {
        None
    }
}

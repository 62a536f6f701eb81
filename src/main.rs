//! Terminal tic-tac-toe runner (default binary).
//!
//! Event-driven and single-threaded: block on the next terminal event,
//! hand it to the game state machine, redraw. The AI search runs
//! synchronously inside a transition; at 3x3 it finishes far below
//! perceptible latency, so the loop never needs a worker thread.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};

use tui_tictactoe::core::{GameState, SimpleRng};
use tui_tictactoe::input::{handle_key_event, handle_mouse_event};
use tui_tictactoe::term::{FrameBuffer, GameView, Layout, TerminalRenderer, Viewport};
use tui_tictactoe::types::UiEvent;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SimpleRng::from_entropy().next_u32();
    let mut game_state = GameState::new(seed);
    game_state.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut hover: Option<(u16, u16)> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let layout = Layout::centered(w, h);
        view.render_into(&game_state, &layout, hover, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key_event(key, game_state.is_over()) {
                    Some(UiEvent::Quit) => return Ok(()),
                    Some(UiEvent::Restart) => game_state.restart(),
                    Some(UiEvent::Select(..)) | None => {}
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Moved {
                    hover = Some((mouse.column, mouse.row));
                }
                match handle_mouse_event(mouse, &layout, game_state.is_over()) {
                    Some(UiEvent::Select(row, col)) => {
                        game_state.human_move(row, col);
                    }
                    Some(UiEvent::Restart) => game_state.restart(),
                    Some(UiEvent::Quit) => return Ok(()),
                    None => {}
                }
            }
            Event::Resize(..) => {
                // Next iteration re-centers the layout and redraws.
            }
            _ => {}
        }
    }
}

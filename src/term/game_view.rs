//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::layout::{
    Layout, CELL_H, CELL_W, GRID_H, GRID_W, PLAY_AGAIN_LABEL, QUIT_LABEL,
};
use crate::types::{Line, Mark, Status, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const GRID_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(120, 120, 130),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

const CROSS_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(190, 190, 190),
    bg: Rgb::new(0, 0, 0),
    bold: true,
};

const CIRCLE_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(239, 231, 200),
    bg: Rgb::new(0, 0, 0),
    bold: true,
};

const WIN_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(255, 60, 60),
    bg: Rgb::new(0, 0, 0),
    bold: true,
};

const STATUS_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: true,
};

const BUTTON_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(20, 20, 20),
    bg: Rgb::new(180, 180, 180),
    bold: false,
};

const BUTTON_HOVER_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(0, 0, 0),
    bg: Rgb::new(220, 220, 220),
    bold: true,
};

/// A lightweight terminal renderer for the tic-tac-toe game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// `hover` is the last known mouse position, used for button
    /// highlighting. Callers can reuse a framebuffer across frames and
    /// only resize when the terminal size changes.
    pub fn render_into(
        &self,
        state: &GameState,
        layout: &Layout,
        hover: Option<(u16, u16)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        self.draw_grid(fb, layout);
        self.draw_marks(fb, layout, state);

        if let Status::Won { line, .. } = state.status() {
            self.draw_win_line(fb, layout, line);
        }

        let msg = state.status_line().as_str();
        fb.put_str(
            layout.centered_x(msg.len() as u16),
            layout.status_y(),
            msg,
            STATUS_STYLE,
        );

        if state.is_over() {
            self.draw_buttons(fb, layout, hover);
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x0, y0) = layout.cell_origin(0, 0);
        for i in 1..GRID_SIZE as u16 {
            let sep_x = x0 + i * (CELL_W + 1) - 1;
            for y in 0..GRID_H {
                fb.put_char(sep_x, y0 + y, '│', GRID_STYLE);
            }
            let sep_y = y0 + i * (CELL_H + 1) - 1;
            for x in 0..GRID_W {
                let ch = if (x + 1) % (CELL_W + 1) == 0 { '┼' } else { '─' };
                fb.put_char(x0 + x, sep_y, ch, GRID_STYLE);
            }
        }
    }

    fn draw_marks(&self, fb: &mut FrameBuffer, layout: &Layout, state: &GameState) {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match state.board().get(row, col) {
                    Some(Mark::X) => self.draw_cross(fb, layout, row, col),
                    Some(Mark::O) => self.draw_circle(fb, layout, row, col),
                    None => {}
                }
            }
        }
    }

    fn draw_cross(&self, fb: &mut FrameBuffer, layout: &Layout, row: usize, col: usize) {
        let (cx, cy) = layout.cell_center(row, col);
        fb.put_char(cx - 2, cy - 1, '╲', CROSS_STYLE);
        fb.put_char(cx + 2, cy - 1, '╱', CROSS_STYLE);
        fb.put_char(cx, cy, '╳', CROSS_STYLE);
        fb.put_char(cx - 2, cy + 1, '╱', CROSS_STYLE);
        fb.put_char(cx + 2, cy + 1, '╲', CROSS_STYLE);
    }

    fn draw_circle(&self, fb: &mut FrameBuffer, layout: &Layout, row: usize, col: usize) {
        let (cx, cy) = layout.cell_center(row, col);
        fb.put_char(cx - 1, cy - 1, '╭', CIRCLE_STYLE);
        fb.put_char(cx, cy - 1, '─', CIRCLE_STYLE);
        fb.put_char(cx + 1, cy - 1, '╮', CIRCLE_STYLE);
        fb.put_char(cx - 1, cy, '│', CIRCLE_STYLE);
        fb.put_char(cx + 1, cy, '│', CIRCLE_STYLE);
        fb.put_char(cx - 1, cy + 1, '╰', CIRCLE_STYLE);
        fb.put_char(cx, cy + 1, '─', CIRCLE_STYLE);
        fb.put_char(cx + 1, cy + 1, '╯', CIRCLE_STYLE);
    }

    /// Strike through the three winning cells, on top of the marks.
    fn draw_win_line(&self, fb: &mut FrameBuffer, layout: &Layout, line: Line) {
        let (r0, c0) = line.start;
        let (r1, c1) = line.end;

        if r0 == r1 {
            // Horizontal: one unbroken stroke across the grid.
            let (x0, _) = layout.cell_origin(r0, 0);
            let (_, cy) = layout.cell_center(r0, 0);
            for x in 0..GRID_W {
                fb.put_char(x0 + x, cy, '━', WIN_STYLE);
            }
        } else if c0 == c1 {
            let (_, y0) = layout.cell_origin(0, c0);
            let (cx, _) = layout.cell_center(0, c0);
            for y in 0..GRID_H {
                fb.put_char(cx, y0 + y, '┃', WIN_STYLE);
            }
        } else {
            // Diagonal: three strokes per cell along the slope.
            let falling = r0 < r1;
            let ch = if falling { '╲' } else { '╱' };
            let slope: i32 = if falling { 1 } else { -1 };
            for (row, col) in line.cells() {
                let (cx, cy) = layout.cell_center(row, col);
                fb.put_char(cx, cy, ch, WIN_STYLE);
                fb.put_char((cx as i32 - 2 * slope) as u16, cy - 1, ch, WIN_STYLE);
                fb.put_char((cx as i32 + 2 * slope) as u16, cy + 1, ch, WIN_STYLE);
            }
        }
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, layout: &Layout, hover: Option<(u16, u16)>) {
        let hovered = |rect: crate::term::layout::Rect| {
            hover.is_some_and(|(x, y)| rect.contains(x, y))
        };

        let play = layout.play_again_rect();
        let style = if hovered(play) { BUTTON_HOVER_STYLE } else { BUTTON_STYLE };
        fb.put_str(play.x, play.y, PLAY_AGAIN_LABEL, style);

        let quit = layout.quit_rect();
        let style = if hovered(quit) { BUTTON_HOVER_STYLE } else { BUTTON_STYLE };
        fb.put_str(quit.x, quit.y, QUIT_LABEL, style);
    }
}

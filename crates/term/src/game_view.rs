//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::feedback::{Feedback, GAME_OVER_MESSAGE, PAUSED_MESSAGE};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(24, 20, 38);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed in the framebuffer.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the game state into an existing framebuffer.
    ///
    /// Without feedback the status message is derived from the snapshot.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_feedback(snap, None, viewport, fb);
    }

    pub fn render_into_with_feedback(
        &self,
        snap: &GameSnapshot,
        feedback: Option<&Feedback>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame_at(viewport, feedback.map_or((0, 0), Feedback::shake_offset));

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        draw_border(fb, frame, border);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, frame, x, y, kind),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                self.draw_ghost(fb, frame, &active, ghost_y);
            }
            for (x, y) in active.cells_at(active.y) {
                self.draw_block(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        let message = match feedback {
            Some(feedback) => feedback.message(),
            None if snap.game_over => Some(GAME_OVER_MESSAGE),
            None if snap.paused => Some(PAUSED_MESSAGE),
            None => None,
        };
        let mid_y = frame.y.saturating_add(frame.h / 2);
        if let Some(text) = message {
            draw_centered(fb, frame, mid_y, text, CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold());
        }
        if let Some(text) = feedback.and_then(Feedback::combo) {
            let style = CellStyle::new(Rgb::new(255, 231, 127), PANEL_BG).bold();
            draw_centered(fb, frame, mid_y.saturating_sub(2), text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_feedback(
        &self,
        snap: &GameSnapshot,
        feedback: &Feedback,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_feedback(snap, Some(feedback), viewport, &mut fb);
        fb
    }

    /// Board frame size in terminal cells, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    fn frame_at(&self, viewport: Viewport, shake: (i16, i16)) -> Frame {
        let (w, h) = self.frame_size();
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: x.saturating_add_signed(shake.0),
            y: y.saturating_add_signed(shake.1),
            w,
            h,
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8) {
        let style = CellStyle::new(Rgb::new(70, 66, 90), BOARD_BG).dim();
        self.fill_cell(fb, frame, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(Rgb::from_hex(kind.color()), BOARD_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, frame: Frame, active: &ActiveSnapshot, ghost_y: i8) {
        let fg = Rgb::from_hex(active.kind.color()).mix(BOARD_BG, 160);
        let style = CellStyle::new(fg, BOARD_BG);
        for (x, y) in active.cells_at(ghost_y) {
            self.fill_cell(fb, frame, x, y, '░', style);
        }
    }

    /// Fill one board cell; cells outside the board (e.g. above row 0) are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + (x as u16) * self.cell_w;
        let py = frame.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let rows: [(&str, u32); 4] = [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
            ("SPEED", snap.drop_interval_ms),
        ];
        let mut y = frame.y;
        for (name, n) in rows {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            if name == "SPEED" {
                let digits = n.checked_ilog10().unwrap_or(0) as u16 + 1;
                fb.put_str(panel_x + digits, y, "ms", value.dim());
            }
            y = y.saturating_add(2);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Engine;

    #[test]
    fn frame_fits_default_cells() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }

    #[test]
    fn shake_moves_the_frame() {
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let still = view.frame_at(vp, (0, 0));
        let shaken = view.frame_at(vp, (-2, 1));
        assert_eq!(shaken.x + 2, still.x);
        assert_eq!(shaken.y, still.y + 1);
    }

    #[test]
    fn shake_saturates_at_origin() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let frame = view.frame_at(Viewport::new(22, 22), (-2, -1));
        assert_eq!((frame.x, frame.y), (0, 0));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let engine = Engine::with_seed(1);
        let fb = GameView::default().render(&engine.snapshot(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}

//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Board and score panel layout.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for a snapshot.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.width as u16 * self.cell_w + 2,
            snap.height as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot and the displayed score into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                match PieceKind::from_color_id(snap.cell(x, y)) {
                    Some(kind) => self.draw_piece_cell(fb, start_x, start_y, x, y, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        for (x, y, kind) in snap.active_cells() {
            self.draw_piece_cell(fb, start_x, start_y, x, y, kind);
        }

        self.draw_side_panel(fb, score, viewport, start_x + frame_w, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, score, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u8, y: u8) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u8,
        y: u8,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), PLAY_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u8,
        cell_y: u8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x as u16 * self.cell_w;
        let py = start_y + 1 + cell_y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        score: u32,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let hint = CellStyle::default().dim();

        fb.put_str(panel_x, start_y, "Score: ", label);
        fb.put_u32(panel_x + 7, start_y, score, label);

        let controls = [
            "←/→  move",
            "↓    drop",
            "↑/x  rotate",
            "q/z  rotate ccw",
            "Esc  quit",
        ];
        for (i, line) in controls.iter().enumerate() {
            let y = start_y.saturating_add(2 + i as u16);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
        }
    }
}

/// Display color of a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::from_hex(0xFF0D72),
        PieceKind::J => Rgb::from_hex(0x0DC2FF),
        PieceKind::L => Rgb::from_hex(0x0DFF72),
        PieceKind::O => Rgb::from_hex(0xF538FF),
        PieceKind::S => Rgb::from_hex(0xFF8E0D),
        PieceKind::T => Rgb::from_hex(0xFFE138),
        PieceKind::Z => Rgb::from_hex(0x3877FF),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_shape, ActiveSnapshot};

    fn empty_snapshot(width: u8, height: u8) -> GameSnapshot {
        GameSnapshot {
            width,
            height,
            board: vec![0; width as usize * height as usize],
            active: None,
            episode_id: 0,
            piece_id: 0,
        }
    }

    #[test]
    fn frame_is_two_columns_per_cell_plus_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(&empty_snapshot(12, 20)), (26, 22));
    }

    #[test]
    fn locked_and_active_cells_use_palette() {
        let mut snap = empty_snapshot(4, 4);
        snap.board[3 * 4] = PieceKind::Z.color_id();
        snap.active = Some(ActiveSnapshot {
            kind: PieceKind::O,
            shape: create_shape(PieceKind::O),
            x: 1,
            y: 0,
        });

        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, 0, Viewport::new(10, 6));

        // Board origin is (1, 1) inside the border.
        let locked = fb.get(1, 4).unwrap();
        assert_eq!(locked.ch, '█');
        assert_eq!(locked.style.fg, piece_color(PieceKind::Z));

        let active = fb.get(3, 1).unwrap();
        assert_eq!(active.style.fg, piece_color(PieceKind::O));
        assert_eq!(fb.get(4, 1).unwrap().style.fg, piece_color(PieceKind::O));

        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(9, 5).unwrap().ch, '┘');
    }

    #[test]
    fn side_panel_shows_pushed_score() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&empty_snapshot(4, 4), 120, Viewport::new(40, 8));
        assert!(fb.row_text(0).contains("Score: 120"));
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&empty_snapshot(4, 4), 7, Viewport::new(12, 6));
        assert!(!fb.row_text(0).contains("Score"));
    }
}

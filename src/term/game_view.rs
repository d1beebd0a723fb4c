//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::plugin::GameKind;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, CELL_BLOCK, CELL_ITEM, FIELD_HEIGHT, FIELD_WIDTH};

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

/// Renders snapshots for either game; only the title and block color
/// differ between them.
pub struct GameView {
    kind: GameKind,
    /// Field cell width in terminal columns (2x1 compensates for the
    /// typical glyph aspect ratio).
    cell_w: u16,
}

impl GameView {
    pub fn new(kind: GameKind) -> Self {
        Self { kind, cell_w: 2 }
    }

    fn block_style(&self) -> CellStyle {
        let fg = match self.kind {
            GameKind::Tetris => Rgb::new(80, 200, 220),
            GameKind::Snake => Rgb::new(100, 220, 120),
        };
        CellStyle {
            fg,
            bg: Rgb::new(25, 25, 35),
            bold: true,
        }
    }

    fn item_style(&self) -> CellStyle {
        CellStyle {
            fg: Rgb::new(230, 80, 80),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        }
    }

    /// Render one snapshot into a framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = (FIELD_WIDTH as u16) * self.cell_w;
        let field_h = FIELD_HEIGHT as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 16) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let empty = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };

        draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..FIELD_HEIGHT as u16 {
            for x in 0..FIELD_WIDTH as u16 {
                let (ch, style) = match snap.cell(x as usize, y as usize) {
                    CELL_BLOCK => ('█', self.block_style()),
                    CELL_ITEM => ('●', self.item_style()),
                    _ => ('·', empty),
                };
                let px = start_x + 1 + x * self.cell_w;
                let py = start_y + 1 + y;
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            GameStatus::Ready => {
                draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER")
            }
            GameStatus::Paused => draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            GameStatus::Lost => {
                draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            GameStatus::Won => draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "YOU WIN"),
            GameStatus::Running => {}
        }

        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 10 >= viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let title = match self.kind {
            GameKind::Tetris => "TETRIS",
            GameKind::Snake => "SNAKE",
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, title, label);
        y = y.saturating_add(2);

        for (name, val) in [
            ("SCORE", snap.score),
            ("HI-SCORE", snap.high_score),
            ("LEVEL", snap.level),
            ("SPEED", snap.speed_ms),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &val.to_string(), value);
            y = y.saturating_add(3);
        }

        if let Some(preview) = &snap.preview {
            fb.put_str(panel_x, y, "NEXT", label);
            y = y.saturating_add(1);
            for (py, row) in preview.iter().enumerate() {
                for (px, &code) in row.iter().enumerate() {
                    let (ch, style) = if code == CELL_BLOCK {
                        ('█', self.block_style())
                    } else {
                        (' ', value)
                    };
                    fb.fill_rect(
                        panel_x + (px as u16) * self.cell_w,
                        y + py as u16,
                        self.cell_w,
                        1,
                        ch,
                        style,
                    );
                }
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let mid_y = y.saturating_add(h / 2);
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bold: true,
        ..CellStyle::default()
    };
    fb.put_str(tx, mid_y, text, style);
}

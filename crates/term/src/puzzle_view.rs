//! PuzzleView: maps a [`PuzzleSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so every frame can be unit-tested.

use crate::core::PuzzleSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, PieceKind, WinRule};

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

/// Front-end state drawn alongside the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub title: &'a str,
    /// Board cell under the cursor.
    pub cursor: Option<Coord>,
    /// Cells the selected piece would cover at the cursor.
    pub preview: &'a [Coord],
    /// One-line status, e.g. why the last move was refused.
    pub message: Option<&'a str>,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const BLOCKED_BG: Rgb = Rgb::new(110, 40, 40);

const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HINT: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));

const HELP: &str = "1-9 pick  r rotate  space place  u/y undo/redo  n reset  q quit";

/// Terminal renderer for the placement puzzle.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl PuzzleView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        snap: &PuzzleSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame_w = snap.cols as u16 * self.cell_w + 2;
        let frame_h = snap.rows as u16 * self.cell_h + 2;
        let panel_w = 22;
        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        // One line above the board for the title, two below for status and help.
        let start_y = viewport.height.saturating_sub(frame_h + 3) / 2 + 1;

        if !overlay.title.is_empty() {
            fb.put_str_centered(start_x, frame_w, start_y - 1, overlay.title, LABEL);
        }

        fb.draw_box(start_x, start_y, frame_w, frame_h, VALUE);
        self.draw_board(fb, snap, overlay, start_x + 1, start_y + 1);
        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        let below = start_y + frame_h;
        if let Some(message) = overlay.message {
            fb.put_str(start_x, below, message, VALUE.dim());
        }
        fb.put_str(start_x, below + 1, HELP, HINT);

        if snap.won {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "SOLVED");
        } else if snap.stuck {
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "NO MOVES LEFT");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &PuzzleSnapshot, overlay: &Overlay<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    /// Terminal position of board cell `(row, col)` for a view whose board
    /// interior starts at `(origin_x, origin_y)`.
    fn cell_origin(&self, origin_x: u16, origin_y: u16, row: u8, col: u8) -> (u16, u16) {
        (
            origin_x + col as u16 * self.cell_w,
            origin_y + row as u16 * self.cell_h,
        )
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &PuzzleSnapshot,
        overlay: &Overlay<'_>,
        origin_x: u16,
        origin_y: u16,
    ) {
        let preview_kind = snap.selection.map(|s| s.kind);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let here = Coord::new(row as i8, col as i8);
                let (ch, mut style) = match snap.cell(row, col) {
                    Some(kind) => ('█', CellStyle::new(piece_color(kind), BOARD_BG).bold()),
                    None => match preview_kind {
                        Some(kind) if overlay.preview.contains(&here) => {
                            ('▒', CellStyle::new(piece_color(kind), BOARD_BG))
                        }
                        _ => ('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()),
                    },
                };

                if overlay.cursor == Some(here) {
                    // A selected piece that cannot go here gets a warning background.
                    let blocked = preview_kind.is_some() && overlay.preview.is_empty();
                    style = style.on(if blocked { BLOCKED_BG } else { CURSOR_BG });
                }

                let (x, y) = self.cell_origin(origin_x, origin_y, row, col);
                fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &PuzzleSnapshot, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }

        let mut y = top;
        fb.put_str(x, y, "PIECES", LABEL);
        y += 1;
        let selected = snap.selection.map(|s| s.kind);
        for (slot, &kind) in snap.catalog.iter().enumerate() {
            let count = snap.count(kind);
            let is_selected = selected == Some(kind);
            let style = match (is_selected, count) {
                (true, _) => CellStyle::new(piece_color(kind), Rgb::new(0, 0, 0)).bold(),
                (false, 0) => VALUE.dim(),
                (false, _) => VALUE,
            };
            fb.put_char(x, y, if is_selected { '>' } else { ' ' }, style);
            let cx = fb.put_u32(x + 1, y, slot as u32 + 1, style);
            let cx = fb.put_str(cx + 1, y, kind.label(), style);
            let cx = fb.put_str(cx + 1, y, "x", style);
            fb.put_u32(cx, y, count as u32, style);
            y += 1;
        }

        y += 1;
        fb.put_str(x, y, "ROTATION", LABEL);
        y += 1;
        match snap.selection {
            Some(sel) => {
                let cx = fb.put_u32(x, y, sel.degrees as u32, VALUE);
                fb.put_char(cx, y, '°', VALUE);
            }
            None => {
                fb.put_str(x, y, "-", VALUE);
            }
        }

        y += 2;
        fb.put_str(x, y, "HISTORY", LABEL);
        y += 1;
        let cx = fb.put_str(x, y, "move ", VALUE);
        let cx = fb.put_u32(cx, y, snap.history.cursor, VALUE);
        let cx = fb.put_str(cx, y, "/", VALUE);
        fb.put_u32(cx, y, snap.history.len.saturating_sub(1), VALUE);
        y += 1;
        let undo = if snap.history.can_undo { VALUE } else { VALUE.dim() };
        let redo = if snap.history.can_redo { VALUE } else { VALUE.dim() };
        let cx = fb.put_str(x, y, "undo", undo);
        fb.put_str(cx + 1, y, "redo", redo);

        y += 2;
        fb.put_str(x, y, "GOAL", LABEL);
        y += 1;
        let goal = match snap.win_rule {
            WinRule::InventoryExhausted => "use every piece",
            WinRule::BoardCovered => "cover the board",
        };
        fb.put_str(x, y, goal, VALUE);
        y += 1;
        let cx = fb.put_u32(x, y, snap.empty_cells as u32, VALUE.dim());
        fb.put_str(cx + 1, y, "cells empty", VALUE.dim());
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid = y + h / 2;
        let padded = text.chars().count() as u16 + 2;
        fb.fill_rect(x + w.saturating_sub(padded) / 2, mid, padded, 1, ' ', style);
        fb.put_str_centered(x, w, mid, text, style);
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::Square => Rgb::new(240, 220, 80),
    }
}

//! Key mapping from terminal events to puzzle commands.

use crate::engine::Intent;
use crate::types::{Coord, PieceKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for.
///
/// Cursor commands stay in the front end; everything else is an [`Intent`]
/// for the controller once [`Cursor::resolve`] has filled in the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Intent(Intent),
    MoveCursor(i8, i8),
    PlaceAtCursor,
}

/// Board cursor, clamped to the board on every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    row: u8,
    col: u8,
}

impl Cursor {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row as i8, self.col as i8)
    }

    pub fn move_by(&mut self, dr: i8, dc: i8, rows: u8, cols: u8) {
        self.row = step(self.row, dr, rows);
        self.col = step(self.col, dc, cols);
    }

    /// Turn a key action into a controller intent, moving the cursor if asked.
    pub fn resolve(&mut self, action: KeyAction, rows: u8, cols: u8) -> Option<Intent> {
        match action {
            KeyAction::Intent(intent) => Some(intent),
            KeyAction::PlaceAtCursor => Some(Intent::PlaceAt(self.coord())),
            KeyAction::MoveCursor(dr, dc) => {
                self.move_by(dr, dc, rows, cols);
                None
            }
        }
    }
}

fn step(pos: u8, delta: i8, len: u8) -> u8 {
    let max = len.saturating_sub(1) as i16;
    (pos as i16 + delta as i16).clamp(0, max) as u8
}

/// Map keyboard input to puzzle commands.
///
/// Number keys select from `catalog` in order (`1` is the first kind).
pub fn handle_key_event(key: KeyEvent, catalog: &[PieceKind]) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(KeyAction::Intent(Intent::Undo)),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(KeyAction::Intent(Intent::Redo)),
            _ => None,
        };
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(KeyAction::MoveCursor(0, -1)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(KeyAction::MoveCursor(0, 1)),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(KeyAction::MoveCursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(KeyAction::MoveCursor(1, 0)),

        // Selection
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            catalog
                .get(slot)
                .map(|&kind| KeyAction::Intent(Intent::SelectPiece(kind)))
        }
        KeyCode::Esc | KeyCode::Char('0') => Some(KeyAction::Intent(Intent::Deselect)),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(KeyAction::Intent(Intent::Rotate))
        }

        // Commit
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyAction::PlaceAtCursor),

        // History
        KeyCode::Char('u') | KeyCode::Char('U') => Some(KeyAction::Intent(Intent::Undo)),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(KeyAction::Intent(Intent::Redo)),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyAction::Intent(Intent::Reset)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

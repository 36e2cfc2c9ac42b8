use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{PieceKind, Rotation, WinRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub degrees: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HistorySnapshot {
    pub cursor: u32,
    pub len: u32,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Render-facing view of a running puzzle.
///
/// Reusable across frames: `snapshot_into` style fillers overwrite every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PuzzleSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cell codes: 0 = empty, 1 + kind index otherwise.
    pub board: Vec<u8>,
    /// Remaining count for every kind, in `PieceKind::ALL` order.
    pub counts: ArrayVec<(PieceKind, u16), { PieceKind::COUNT }>,
    /// Kinds the puzzle stocks at the start (shown even when used up).
    pub catalog: ArrayVec<PieceKind, { PieceKind::COUNT }>,
    pub empty_cells: u16,
    pub selection: Option<SelectionSnapshot>,
    pub history: HistorySnapshot,
    pub win_rule: WinRule,
    pub won: bool,
    pub stuck: bool,
}

impl PuzzleSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.board.clear();
        self.counts.clear();
        self.catalog.clear();
        self.empty_cells = 0;
        self.selection = None;
        self.history = HistorySnapshot {
            cursor: 0,
            len: 1,
            can_undo: false,
            can_redo: false,
        };
        self.win_rule = WinRule::default();
        self.won = false;
        self.stuck = false;
    }

    /// Piece kind at `(row, col)`, if covered.
    pub fn cell(&self, row: u8, col: u8) -> Option<PieceKind> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let code = self.board[row as usize * self.cols as usize + col as usize];
        piece_from_code(code)
    }

    pub fn count(&self, kind: PieceKind) -> u16 {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |&(_, n)| n)
    }

    pub fn playable(&self) -> bool {
        !self.won && !self.stuck
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        let mut s = Self {
            rows: 0,
            cols: 0,
            board: Vec::new(),
            counts: ArrayVec::new(),
            catalog: ArrayVec::new(),
            empty_cells: 0,
            selection: None,
            history: HistorySnapshot {
                cursor: 0,
                len: 1,
                can_undo: false,
                can_redo: false,
            },
            win_rule: WinRule::default(),
            won: false,
            stuck: false,
        };
        s.clear();
        s
    }
}

/// Decode a board cell code written by `Board::write_u8_grid`.
pub fn piece_from_code(code: u8) -> Option<PieceKind> {
    match code {
        0 => None,
        n => PieceKind::ALL.get(n as usize - 1).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_roundtrip() {
        assert_eq!(piece_from_code(0), None);
        for kind in PieceKind::ALL {
            assert_eq!(piece_from_code(kind.index() as u8 + 1), Some(kind));
        }
        assert_eq!(piece_from_code(200), None);
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let mut s = PuzzleSnapshot::default();
        s.rows = 1;
        s.cols = 2;
        s.board = vec![0, 5];
        assert_eq!(s.cell(0, 0), None);
        assert_eq!(s.cell(0, 1), Some(PieceKind::Square));
        assert_eq!(s.cell(1, 0), None);
    }
}

//! Linear undo/redo log of game states.
//!
//! Snapshots live in a `Vec` addressed by a cursor. Undo and redo only move
//! the cursor; pushing after an undo truncates everything past the cursor
//! first, so there is never more than one redo branch.

use crate::error::PuzzleError;
use crate::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    states: Vec<GameState>,
    /// Always a valid index into `states`.
    cursor: usize,
}

impl History {
    /// History holding only `initial`.
    pub fn new(initial: GameState) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
        }
    }

    /// The state at the cursor.
    pub fn current(&self) -> &GameState {
        &self.states[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Never true: a history always holds at least the initial state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Append `state` after the cursor, dropping any redo branch.
    pub fn push(&mut self, state: GameState) {
        let dropped = self.states.len() - (self.cursor + 1);
        self.states.truncate(self.cursor + 1);
        self.states.push(state);
        self.cursor = self.states.len() - 1;
        tracing::trace!(cursor = self.cursor, dropped, "history push");
    }

    pub fn undo(&mut self) -> Result<&GameState, PuzzleError> {
        if !self.can_undo() {
            return Err(PuzzleError::AtOldestState);
        }
        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, "history undo");
        Ok(&self.states[self.cursor])
    }

    pub fn redo(&mut self) -> Result<&GameState, PuzzleError> {
        if !self.can_redo() {
            return Err(PuzzleError::AtNewestState);
        }
        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, "history redo");
        Ok(&self.states[self.cursor])
    }

    /// Drop everything and start over from `initial`.
    pub fn reset(&mut self, initial: GameState) {
        self.states.clear();
        self.states.push(initial);
        self.cursor = 0;
    }

    /// Stored snapshots, oldest first.
    pub fn states(&self) -> &[GameState] {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::types::{Coord, PieceKind, Rotation};

    fn start() -> GameState {
        GameState::new(4, 5, Inventory::new().with(PieceKind::T, 3)).unwrap()
    }

    fn place(state: &GameState, row: i8, col: i8) -> GameState {
        state
            .apply_placement(PieceKind::T, Coord::new(row, col), Rotation::North)
            .unwrap()
    }

    #[test]
    fn new_history_cannot_move() {
        let mut h = History::new(start());
        assert_eq!(h.len(), 1);
        assert_eq!(h.undo(), Err(PuzzleError::AtOldestState));
        assert_eq!(h.redo(), Err(PuzzleError::AtNewestState));
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn undo_then_redo_restores() {
        let s0 = start();
        let s1 = place(&s0, 0, 1);
        let mut h = History::new(s0.clone());
        h.push(s1.clone());

        assert_eq!(h.undo().unwrap(), &s0);
        assert!(h.can_redo());
        assert_eq!(h.redo().unwrap(), &s1);
        assert_eq!(h.current(), &s1);
    }

    #[test]
    fn push_after_undo_truncates_redo_branch() {
        let s0 = start();
        let s1 = place(&s0, 0, 1);
        let s2 = place(&s1, 2, 1);
        let mut h = History::new(s0.clone());
        h.push(s1.clone());
        h.push(s2);

        h.undo().unwrap();
        h.undo().unwrap();
        let alt = place(&s0, 2, 3);
        h.push(alt.clone());

        assert_eq!(h.len(), 2);
        assert_eq!(h.cursor(), 1);
        assert_eq!(h.current(), &alt);
        assert_eq!(h.redo(), Err(PuzzleError::AtNewestState));
    }

    #[test]
    fn reset_keeps_one_entry() {
        let s0 = start();
        let mut h = History::new(s0.clone());
        h.push(place(&s0, 0, 1));
        h.push(place(h.current(), 2, 1));
        h.reset(s0.clone());
        assert_eq!(h.len(), 1);
        assert_eq!(h.cursor(), 0);
        assert_eq!(h.current(), &s0);
    }
}

use arrayvec::ArrayVec;

use crate::core::{
    preview_cells, GameState, History, HistorySnapshot, Puzzle, PuzzleError, PuzzleSnapshot,
    Selection, SelectionSnapshot,
};
use crate::intent::Intent;
use crate::types::{Coord, PieceKind, PIECE_CELLS};

/// Puzzle controller: owns the history and the transient selection.
///
/// The current game state is always the history entry at the cursor, so
/// there is a single source of truth for what is on the board.
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    history: History,
    selection: Selection,
}

impl Game {
    /// Start `puzzle` from its initial state.
    pub fn new(puzzle: Puzzle) -> Self {
        let history = History::new(puzzle.initial_state().clone());
        tracing::debug!(puzzle = puzzle.name(), "game started");
        Self {
            puzzle,
            history,
            selection: Selection::Idle,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn state(&self) -> &GameState {
        self.history.current()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Select `kind`; selecting the current kind again deselects it.
    pub fn select_piece(&mut self, kind: PieceKind) -> Result<Selection, PuzzleError> {
        let inventory = *self.history.current().inventory();
        self.selection.select(kind, &inventory)?;
        Ok(self.selection)
    }

    pub fn deselect(&mut self) -> Selection {
        self.selection.deselect();
        self.selection
    }

    /// Rotate the selected piece 90° clockwise.
    ///
    /// Returns false when nothing is selected or the piece has one orientation.
    pub fn rotate(&mut self) -> bool {
        self.selection.rotate()
    }

    /// Cells the selected piece would cover at `anchor`, empty if it does not fit.
    pub fn preview_cells(&self, anchor: Coord) -> ArrayVec<Coord, PIECE_CELLS> {
        preview_cells(self.state(), &self.selection, anchor)
    }

    /// Commit the selected piece at `anchor`.
    ///
    /// On success the new state is pushed to history and the selection is
    /// cleared. On failure nothing changes and the selection is kept.
    pub fn attempt_place(&mut self, anchor: Coord) -> Result<&GameState, PuzzleError> {
        let Selection::Selected { kind, rotation } = self.selection else {
            return Err(PuzzleError::NoSelection);
        };

        let next = self
            .history
            .current()
            .apply_placement(kind, anchor, rotation)?;
        self.history.push(next);
        self.selection = Selection::Idle;

        if self.is_won() {
            tracing::info!(
                puzzle = self.puzzle.name(),
                moves = self.history.cursor(),
                "puzzle solved"
            );
        }
        Ok(self.history.current())
    }

    pub fn undo(&mut self) -> Result<&GameState, PuzzleError> {
        self.history.undo()?;
        self.selection = Selection::Idle;
        tracing::debug!(cursor = self.history.cursor(), "undo");
        Ok(self.history.current())
    }

    pub fn redo(&mut self) -> Result<&GameState, PuzzleError> {
        self.history.redo()?;
        self.selection = Selection::Idle;
        tracing::debug!(cursor = self.history.cursor(), "redo");
        Ok(self.history.current())
    }

    /// Back to the puzzle's initial state with a one-entry history.
    pub fn reset(&mut self) {
        self.history.reset(self.puzzle.initial_state().clone());
        self.selection = Selection::Idle;
        tracing::debug!(puzzle = self.puzzle.name(), "reset");
    }

    pub fn is_won(&self) -> bool {
        self.state().is_won(self.puzzle.win_rule())
    }

    /// No stocked piece fits anywhere and the puzzle is not solved.
    pub fn is_stuck(&self) -> bool {
        !self.is_won() && self.state().is_stuck()
    }

    /// Apply an intent.
    ///
    /// Returns whether the state or the selection changed. Refused intents
    /// (illegal placement, empty history, out-of-stock selection) return false.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match self.try_apply(intent) {
            Ok(changed) => changed,
            Err(err) => {
                tracing::trace!(intent = intent.as_str(), code = err.code(), "intent refused");
                false
            }
        }
    }

    /// Like [`Game::apply`], but reports why an intent was refused.
    ///
    /// `Ok(false)` means the intent was accepted but had nothing to do
    /// (rotating a square, deselecting with nothing selected).
    pub fn try_apply(&mut self, intent: Intent) -> Result<bool, PuzzleError> {
        match intent {
            Intent::SelectPiece(kind) => self.select_piece(kind).map(|_| true),
            Intent::Deselect => {
                let was_idle = self.selection.is_idle();
                self.deselect();
                Ok(!was_idle)
            }
            Intent::Rotate => Ok(self.rotate()),
            Intent::PlaceAt(anchor) => self.attempt_place(anchor).map(|_| true),
            Intent::Undo => self.undo().map(|_| true),
            Intent::Redo => self.redo().map(|_| true),
            Intent::Reset => {
                self.reset();
                Ok(true)
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        self.state().snapshot_into(out);

        out.catalog.clear();
        out.catalog.extend(self.puzzle.catalog().iter().copied());
        out.selection = match self.selection {
            Selection::Idle => None,
            Selection::Selected { kind, rotation } => Some(SelectionSnapshot {
                kind,
                rotation,
                degrees: rotation.degrees(),
            }),
        };
        out.history = HistorySnapshot {
            cursor: self.history.cursor() as u32,
            len: self.history.len() as u32,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        };
        out.win_rule = self.puzzle.win_rule();
        out.won = self.is_won();
        out.stuck = self.is_stuck();
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut s = PuzzleSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlacementFault;
    use crate::types::Rotation;

    fn classic() -> Game {
        Game::new(Puzzle::classic())
    }

    #[test]
    fn test_place_without_selection_is_noop() {
        let mut game = classic();
        let before = game.state().clone();
        assert_eq!(
            game.attempt_place(Coord::new(0, 1)).unwrap_err(),
            PuzzleError::NoSelection
        );
        assert_eq!(game.state(), &before);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_failed_place_keeps_selection() {
        let mut game = classic();
        game.select_piece(PieceKind::Square).unwrap();
        let err = game.attempt_place(Coord::new(7, 7)).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::IllegalPlacement(PlacementFault::OutOfBounds(Coord::new(7, 8)))
        );
        assert_eq!(game.selection().kind(), Some(PieceKind::Square));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_successful_place_clears_selection() {
        let mut game = classic();
        game.select_piece(PieceKind::T).unwrap();
        assert!(game.rotate());
        game.attempt_place(Coord::new(1, 1)).unwrap();
        assert!(game.selection().is_idle());
        assert_eq!(game.selection().rotation(), Rotation::North);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_undo_redo_clear_selection() {
        let mut game = classic();
        game.select_piece(PieceKind::T).unwrap();
        game.attempt_place(Coord::new(0, 1)).unwrap();

        game.select_piece(PieceKind::T).unwrap();
        game.undo().unwrap();
        assert!(game.selection().is_idle());
        assert_eq!(game.state().count(PieceKind::T), 15);

        game.select_piece(PieceKind::Square).unwrap();
        game.redo().unwrap();
        assert!(game.selection().is_idle());
        assert_eq!(game.state().count(PieceKind::T), 14);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut game = classic();
        assert!(!game.apply(Intent::Rotate));
        assert!(!game.apply(Intent::Deselect));
        assert!(!game.apply(Intent::Undo));
        assert!(game.apply(Intent::SelectPiece(PieceKind::T)));
        assert!(game.apply(Intent::Rotate));
        assert!(!game.apply(Intent::PlaceAt(Coord::new(0, 0))));
        assert!(game.apply(Intent::PlaceAt(Coord::new(1, 1))));
        assert!(game.apply(Intent::Undo));
        assert!(game.apply(Intent::Redo));
        assert!(!game.apply(Intent::Redo));
        assert!(game.apply(Intent::Reset));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_try_apply_explains_refusals() {
        let mut game = classic();
        assert_eq!(
            game.try_apply(Intent::PlaceAt(Coord::new(0, 0))),
            Err(PuzzleError::NoSelection)
        );
        assert_eq!(game.try_apply(Intent::Redo), Err(PuzzleError::AtNewestState));
        game.select_piece(PieceKind::Square).unwrap();
        assert_eq!(game.try_apply(Intent::Rotate), Ok(false));
        game.attempt_place(Coord::new(0, 0)).unwrap();
        assert_eq!(
            game.try_apply(Intent::SelectPiece(PieceKind::Square)),
            Err(PuzzleError::PieceUnavailable(PieceKind::Square))
        );
    }

    #[test]
    fn test_snapshot_reflects_controller() {
        let mut game = classic();
        game.select_piece(PieceKind::T).unwrap();
        game.rotate();
        let snap = game.snapshot();
        assert_eq!((snap.rows, snap.cols), (8, 8));
        assert_eq!(snap.board.len(), 64);
        assert_eq!(snap.catalog.as_slice(), &[PieceKind::T, PieceKind::Square]);
        assert_eq!(snap.count(PieceKind::T), 15);
        assert_eq!(snap.selection.map(|s| s.degrees), Some(90));
        assert!(!snap.history.can_undo);
        assert!(!snap.won);
        assert!(!snap.stuck);
        assert_eq!(snap.empty_cells, 64);
    }
}

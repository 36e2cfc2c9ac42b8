//! Game state module - the (board, inventory) value and its transitions
//!
//! Every transition takes a `&GameState` and returns a fresh `GameState`; the
//! input is never modified. History keeps snapshots by value, so this is what
//! keeps earlier snapshots intact.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::Board;
use crate::error::{ConfigError, PlacementFault, PuzzleError};
use crate::inventory::Inventory;
use crate::pieces::{get_shape, PieceShape};
use crate::selection::Selection;
use crate::snapshot::PuzzleSnapshot;
use crate::types::{Coord, PieceKind, Rotation, WinRule, PIECE_CELLS};

/// A piece at an anchor with a rotation (not yet committed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub anchor: Coord,
}

impl Placement {
    pub fn new(kind: PieceKind, anchor: Coord, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            anchor,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute cells covered by this placement.
    pub fn cells(&self) -> [Coord; PIECE_CELLS] {
        self.shape().map(|(dr, dc)| self.anchor.offset(dr, dc))
    }

    /// Find the first cell that is off the board or covered.
    pub fn check(&self, board: &Board) -> Result<[Coord; PIECE_CELLS], PlacementFault> {
        let cells = self.cells();
        for &c in &cells {
            if board.is_out_of_bounds(c) {
                return Err(PlacementFault::OutOfBounds(c));
            }
            if board.is_occupied(c) {
                return Err(PlacementFault::Occupied(c));
            }
        }
        Ok(cells)
    }

    /// Check if all minos are at valid positions on the board
    #[inline]
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells().iter().all(|&c| board.is_valid(c))
    }
}

/// Whether `kind` at `anchor` with `rotation` fits on `board`.
///
/// Checks exactly four cells and never modifies the board.
#[inline]
pub fn can_place(board: &Board, kind: PieceKind, anchor: Coord, rotation: Rotation) -> bool {
    Placement::new(kind, anchor, rotation).is_valid(board)
}

/// Like [`can_place`], but reports which cell failed.
pub fn check_placement(
    board: &Board,
    kind: PieceKind,
    anchor: Coord,
    rotation: Rotation,
) -> Result<[Coord; PIECE_CELLS], PlacementFault> {
    Placement::new(kind, anchor, rotation).check(board)
}

/// The board and remaining inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    board: Board,
    inventory: Inventory,
}

impl GameState {
    /// Create a new game: empty `rows` x `cols` board and the given counts.
    pub fn new(rows: u8, cols: u8, inventory: Inventory) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            inventory,
        })
    }

    /// Assemble a state from parts, for fixtures and tests.
    pub fn from_parts(board: Board, inventory: Inventory) -> Self {
        Self { board, inventory }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn count(&self, kind: PieceKind) -> u16 {
        self.inventory.count(kind)
    }

    pub fn can_place(&self, kind: PieceKind, anchor: Coord, rotation: Rotation) -> bool {
        can_place(&self.board, kind, anchor, rotation)
    }

    /// Commit a placement, returning the resulting state.
    ///
    /// Re-validates instead of trusting an earlier [`can_place`] result. On
    /// failure nothing changes; on success exactly four cells are covered and
    /// the kind's count drops by one.
    pub fn apply_placement(
        &self,
        kind: PieceKind,
        anchor: Coord,
        rotation: Rotation,
    ) -> Result<GameState, PuzzleError> {
        if !self.inventory.has(kind) {
            tracing::debug!(kind = kind.as_str(), "placement refused: out of stock");
            return Err(PlacementFault::OutOfStock(kind).into());
        }

        let cells = check_placement(&self.board, kind, anchor, rotation).map_err(|fault| {
            tracing::debug!(
                kind = kind.as_str(),
                row = anchor.row,
                col = anchor.col,
                rotation = rotation.degrees(),
                %fault,
                "placement refused"
            );
            PuzzleError::IllegalPlacement(fault)
        })?;

        let mut next = self.clone();
        // Both checks passed above, so neither of these can fail.
        let locked = next.board.lock_piece(&cells, kind);
        let taken = next.inventory.take(kind);
        debug_assert!(locked && taken);

        tracing::debug!(
            kind = kind.as_str(),
            row = anchor.row,
            col = anchor.col,
            rotation = rotation.degrees(),
            remaining = next.inventory.count(kind),
            "piece placed"
        );
        Ok(next)
    }

    /// Whether the puzzle is solved under `rule`.
    pub fn is_won(&self, rule: WinRule) -> bool {
        match rule {
            WinRule::InventoryExhausted => self.inventory.is_exhausted(),
            WinRule::BoardCovered => self.inventory.is_exhausted() && self.board.is_full(),
        }
    }

    /// True when no stocked kind fits anywhere in any rotation.
    pub fn is_stuck(&self) -> bool {
        !self.inventory.available().any(|kind| {
            crate::pieces::distinct_rotations(kind).iter().any(|&rot| {
                (0..self.board.rows() as i8).any(|row| {
                    (0..self.board.cols() as i8)
                        .any(|col| self.can_place(kind, Coord::new(row, col), rot))
                })
            })
        })
    }

    /// Fill the board/inventory part of a snapshot.
    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        self.board.write_u8_grid(&mut out.board);
        out.counts.clear();
        out.counts.extend(
            PieceKind::ALL
                .into_iter()
                .map(|kind| (kind, self.inventory.count(kind))),
        );
        out.empty_cells = self.board.empty_count() as u16;
    }
}

/// Start a game on an empty `rows` x `cols` board.
pub fn new_game(rows: u8, cols: u8, inventory: Inventory) -> Result<GameState, ConfigError> {
    GameState::new(rows, cols, inventory)
}

/// Cells to highlight for `selection` at `anchor`.
///
/// Same cells [`can_place`] validates; empty when nothing is selected or the
/// piece does not fit.
pub fn preview_cells(
    state: &GameState,
    selection: &Selection,
    anchor: Coord,
) -> ArrayVec<Coord, PIECE_CELLS> {
    let mut out = ArrayVec::new();
    if let Selection::Selected { kind, rotation } = *selection {
        if let Ok(cells) = check_placement(&state.board, kind, anchor, rotation) {
            out.extend(cells);
        }
    }
    out
}

/// Commit the selected piece at `anchor`.
pub fn attempt_place(
    state: &GameState,
    selection: &Selection,
    anchor: Coord,
) -> Result<GameState, PuzzleError> {
    match *selection {
        Selection::Idle => Err(PuzzleError::NoSelection),
        Selection::Selected { kind, rotation } => state.apply_placement(kind, anchor, rotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> GameState {
        GameState::new(
            8,
            8,
            Inventory::from_counts(&[(PieceKind::T, 15), (PieceKind::Square, 1)]),
        )
        .unwrap()
    }

    #[test]
    fn test_placement_cells() {
        let p = Placement::new(PieceKind::T, Coord::new(0, 1), Rotation::North);
        assert_eq!(
            p.cells(),
            [
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_check_reports_first_fault() {
        let state = classic();
        assert_eq!(
            check_placement(state.board(), PieceKind::Square, Coord::new(7, 7), Rotation::North),
            Err(PlacementFault::OutOfBounds(Coord::new(7, 8)))
        );

        let next = state
            .apply_placement(PieceKind::Square, Coord::new(0, 0), Rotation::North)
            .unwrap();
        assert_eq!(
            check_placement(next.board(), PieceKind::T, Coord::new(1, 2), Rotation::North),
            Err(PlacementFault::Occupied(Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let state = classic();
        let before = state.clone();
        let next = state
            .apply_placement(PieceKind::T, Coord::new(0, 1), Rotation::North)
            .unwrap();
        assert_eq!(state, before);
        assert_ne!(next, before);
        assert_eq!(next.count(PieceKind::T), 14);
        assert_eq!(next.board().empty_count(), 60);
    }

    #[test]
    fn test_apply_out_of_stock() {
        let state = classic();
        let once = state
            .apply_placement(PieceKind::Square, Coord::new(6, 6), Rotation::North)
            .unwrap();
        assert_eq!(
            once.apply_placement(PieceKind::Square, Coord::new(0, 0), Rotation::North),
            Err(PuzzleError::IllegalPlacement(PlacementFault::OutOfStock(
                PieceKind::Square
            )))
        );
        assert_eq!(
            state.apply_placement(PieceKind::L, Coord::new(2, 2), Rotation::North),
            Err(PuzzleError::IllegalPlacement(PlacementFault::OutOfStock(
                PieceKind::L
            )))
        );
    }

    #[test]
    fn test_preview_matches_can_place() {
        let state = classic();
        let sel = Selection::Selected {
            kind: PieceKind::T,
            rotation: Rotation::North,
        };
        assert_eq!(preview_cells(&state, &sel, Coord::new(0, 1)).len(), 4);
        // Needs column -1.
        assert!(preview_cells(&state, &sel, Coord::new(0, 0)).is_empty());
        assert!(preview_cells(&state, &Selection::Idle, Coord::new(3, 3)).is_empty());
    }

    #[test]
    fn test_attempt_place_without_selection() {
        let state = classic();
        assert_eq!(
            attempt_place(&state, &Selection::Idle, Coord::new(0, 1)),
            Err(PuzzleError::NoSelection)
        );
    }

    #[test]
    fn test_win_rules() {
        let rows = vec![vec![Some(PieceKind::T); 2]; 2];
        let full = Board::from_rows(&rows).unwrap();
        let done = GameState::from_parts(full.clone(), Inventory::new());
        assert!(done.is_won(WinRule::InventoryExhausted));
        assert!(done.is_won(WinRule::BoardCovered));

        let leftover = GameState::from_parts(full, Inventory::new().with(PieceKind::T, 1));
        assert!(!leftover.is_won(WinRule::InventoryExhausted));
        assert!(!leftover.is_won(WinRule::BoardCovered));

        let gaps = GameState::from_parts(Board::new(2, 2).unwrap(), Inventory::new());
        assert!(gaps.is_won(WinRule::InventoryExhausted));
        assert!(!gaps.is_won(WinRule::BoardCovered));
    }

    #[test]
    fn test_is_stuck() {
        let state = GameState::new(1, 3, Inventory::new().with(PieceKind::Square, 1)).unwrap();
        assert!(state.is_stuck());
        let state = GameState::new(1, 4, Inventory::new().with(PieceKind::I, 1)).unwrap();
        assert!(!state.is_stuck());
    }
}

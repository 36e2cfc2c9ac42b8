//! Property tests for the shape table, validator and history.
//!
//! Invariants covered:
//! - Every (kind, rotation) shape has four distinct, edge-connected offsets.
//! - `can_place` is pure and agrees with the bounds/occupancy definition.
//! - `apply_placement` is all-or-nothing.
//! - Undo followed by redo restores the exact state.

use proptest::prelude::*;
use tetromino_puzzle::core::pieces::is_connected;
use tetromino_puzzle::core::{can_place, get_shape, GameState, History, Inventory, Placement};
use tetromino_puzzle::types::{Coord, PieceKind, Rotation};

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn rotation() -> impl Strategy<Value = Rotation> {
    prop::sample::select(vec![
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ])
}

fn full_inventory() -> Inventory {
    PieceKind::ALL
        .into_iter()
        .fold(Inventory::new(), |inv, k| inv.with(k, 64))
}

/// Play a generated move list, skipping illegal moves.
fn play(
    rows: u8,
    cols: u8,
    moves: &[(PieceKind, Rotation, i8, i8)],
) -> (GameState, Vec<GameState>) {
    let mut state = GameState::new(rows, cols, full_inventory()).unwrap();
    let mut seen = vec![state.clone()];
    for &(k, r, row, col) in moves {
        if let Ok(next) = state.apply_placement(k, Coord::new(row, col), r) {
            state = next;
            seen.push(state.clone());
        }
    }
    (state, seen)
}

#[test]
fn every_shape_is_a_tetromino() {
    for k in PieceKind::ALL {
        for r in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            let shape = get_shape(k, r);
            let mut sorted = shape.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 4, "{k:?} {r:?} has duplicate offsets");
            assert!(is_connected(&shape), "{k:?} {r:?} is not connected");
        }
    }
}

proptest! {
    #[test]
    fn can_place_matches_definition_and_is_pure(
        moves in prop::collection::vec((kind(), rotation(), 0i8..8, 0i8..8), 0..20),
        k in kind(),
        r in rotation(),
        row in -2i8..10,
        col in -2i8..10,
    ) {
        let (state, _) = play(8, 8, &moves);
        let board = state.board().clone();
        let anchor = Coord::new(row, col);

        let expected = Placement::new(k, anchor, r)
            .cells()
            .iter()
            .all(|&c| board.is_valid(c) && !board.is_occupied(c));

        let first = can_place(state.board(), k, anchor, r);
        let second = can_place(state.board(), k, anchor, r);
        prop_assert_eq!(first, expected);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state.board(), &board);
    }

    #[test]
    fn apply_placement_is_all_or_nothing(
        moves in prop::collection::vec((kind(), rotation(), 0i8..8, 0i8..8), 0..20),
        k in kind(),
        r in rotation(),
        row in -2i8..10,
        col in -2i8..10,
    ) {
        let (state, _) = play(8, 8, &moves);
        let before = state.clone();
        let anchor = Coord::new(row, col);

        match state.apply_placement(k, anchor, r) {
            Ok(next) => {
                prop_assert_eq!(next.count(k), before.count(k) - 1);
                prop_assert_eq!(next.board().empty_count(), before.board().empty_count() - 4);
                for c in Placement::new(k, anchor, r).cells() {
                    prop_assert!(!before.board().is_occupied(c));
                    prop_assert_eq!(next.board().get(c), Some(Some(k)));
                }
            }
            Err(_) => {
                prop_assert!(!before.can_place(k, anchor, r) || before.count(k) == 0);
            }
        }
        prop_assert_eq!(&state, &before);
    }

    #[test]
    fn undo_redo_round_trip(
        moves in prop::collection::vec((kind(), rotation(), 0i8..6, 0i8..6), 1..16),
        back in 0usize..16,
    ) {
        let (_, states) = play(6, 6, &moves);
        let mut history = History::new(states[0].clone());
        for s in &states[1..] {
            history.push(s.clone());
        }
        let top = history.current().clone();

        let steps = back.min(history.len() - 1);
        for _ in 0..steps {
            history.undo().unwrap();
        }
        prop_assert_eq!(history.current(), &states[states.len() - 1 - steps]);
        for _ in 0..steps {
            history.redo().unwrap();
        }
        prop_assert_eq!(history.current(), &top);
        prop_assert!(history.redo().is_err());
    }
}

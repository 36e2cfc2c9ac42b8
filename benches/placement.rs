use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetromino_puzzle::core::{can_place, preview_cells, GameState, Puzzle, Selection};
use tetromino_puzzle::engine::Game;
use tetromino_puzzle::types::{Coord, PieceKind, Rotation};

/// Classic board with a few pieces down so checks hit both outcomes.
fn midgame() -> GameState {
    let mut state = Puzzle::classic().initial_state().clone();
    for (row, col) in [(0, 1), (2, 1), (0, 5), (4, 3)] {
        state = state
            .apply_placement(PieceKind::T, Coord::new(row, col), Rotation::North)
            .unwrap();
    }
    state
}

fn bench_can_place(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("can_place_full_sweep", |b| {
        b.iter(|| {
            let mut fits = 0u32;
            for row in 0..8 {
                for col in 0..8 {
                    for rot in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
                        if can_place(state.board(), PieceKind::T, Coord::new(row, col), rot) {
                            fits += 1;
                        }
                    }
                }
            }
            black_box(fits)
        })
    });
}

fn bench_apply_placement(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("apply_placement", |b| {
        b.iter(|| {
            state
                .apply_placement(
                    black_box(PieceKind::T),
                    black_box(Coord::new(6, 6)),
                    Rotation::North,
                )
                .unwrap()
        })
    });
}

fn bench_preview_sweep(c: &mut Criterion) {
    let state = midgame();
    let selection = Selection::Selected {
        kind: PieceKind::T,
        rotation: Rotation::East,
    };

    c.bench_function("preview_cells_sweep", |b| {
        b.iter(|| {
            let mut lit = 0usize;
            for row in 0..8 {
                for col in 0..8 {
                    lit += preview_cells(&state, &selection, Coord::new(row, col)).len();
                }
            }
            black_box(lit)
        })
    });
}

fn bench_place_undo_cycle(c: &mut Criterion) {
    let mut game = Game::new(Puzzle::classic());

    c.bench_function("place_undo_cycle", |b| {
        b.iter(|| {
            game.select_piece(PieceKind::T).unwrap();
            game.attempt_place(black_box(Coord::new(3, 3))).unwrap();
            game.undo().unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_can_place,
    bench_apply_placement,
    bench_preview_sweep,
    bench_place_undo_cycle
);
criterion_main!(benches);

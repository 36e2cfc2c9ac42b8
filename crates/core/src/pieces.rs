//! Pieces module - tetromino shapes per kind and rotation
//!
//! Offsets are `(dr, dc)` relative to the anchor cell (the cell the player
//! points at). Symmetric kinds share offsets between equivalent rotations:
//! the table only stores the distinct orientations and lookups normalize the
//! rotation first, so every `(kind, rotation)` pair resolves to one shape.

use crate::error::PuzzleError;
use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the anchor, as `(dr, dc)`
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Shape table indexed by `[kind.index()][normalized rotation index]`.
///
/// Unused slots (past `kind.orientations()`) repeat the first orientation.
const SHAPES: [[PieceShape; 4]; PieceKind::COUNT] = [
    // I
    [
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
    ],
    // T
    [
        [(0, -1), (0, 0), (0, 1), (1, 0)],
        [(-1, 0), (0, 0), (1, 0), (0, -1)],
        [(-1, 0), (0, -1), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (1, 0), (0, 1)],
    ],
    // S
    [
        [(0, 0), (0, 1), (1, -1), (1, 0)],
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(0, 0), (0, 1), (1, -1), (1, 0)],
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
    ],
    // L
    [
        [(0, -1), (0, 0), (0, 1), (1, -1)],
        [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        [(-1, 1), (0, -1), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (1, 0), (1, 1)],
    ],
    // Square
    [
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.normalize_for(kind).index()]
}

/// Get the shape for a rotation given in degrees.
///
/// Fails with [`PuzzleError::InvalidRotation`] unless `degrees` is one of
/// 0, 90, 180 or 270.
pub fn get_shape_degrees(kind: PieceKind, degrees: u16) -> Result<PieceShape, PuzzleError> {
    let rotation =
        Rotation::from_degrees(degrees).ok_or(PuzzleError::InvalidRotation { degrees })?;
    Ok(get_shape(kind, rotation))
}

/// The rotations that produce distinct shapes for `kind`, in clockwise order.
pub fn distinct_rotations(kind: PieceKind) -> &'static [Rotation] {
    const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];
    &ALL[..kind.orientations() as usize]
}

/// Whether the offsets form one edge-connected group.
pub fn is_connected(shape: &PieceShape) -> bool {
    let mut reached = [false; 4];
    reached[0] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..4 {
            if reached[i] {
                continue;
            }
            let (r, c) = shape[i];
            let touches = (0..4).any(|j| {
                reached[j] && {
                    let (rj, cj) = shape[j];
                    (r - rj).abs() + (c - cj).abs() == 1
                }
            });
            if touches {
                reached[i] = true;
                changed = true;
            }
        }
    }
    reached.iter().all(|&r| r)
}

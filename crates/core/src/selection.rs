//! Transient piece selection (not part of the game state or its history).

use serde::Serialize;

use crate::error::PuzzleError;
use crate::inventory::Inventory;
use crate::types::{PieceKind, Rotation};

/// The currently chosen piece and its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Selection {
    #[default]
    Idle,
    Selected { kind: PieceKind, rotation: Rotation },
}

impl Selection {
    pub fn kind(&self) -> Option<PieceKind> {
        match *self {
            Selection::Idle => None,
            Selection::Selected { kind, .. } => Some(kind),
        }
    }

    /// Current rotation; North when idle.
    pub fn rotation(&self) -> Rotation {
        match *self {
            Selection::Idle => Rotation::North,
            Selection::Selected { rotation, .. } => rotation,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// Select `kind`, toggling back to idle if it is already selected.
    ///
    /// Picking a different kind replaces the selection and resets rotation.
    /// Fails with [`PuzzleError::PieceUnavailable`] when none are left, without
    /// changing the selection.
    pub fn select(&mut self, kind: PieceKind, inventory: &Inventory) -> Result<(), PuzzleError> {
        if self.kind() == Some(kind) {
            *self = Selection::Idle;
            return Ok(());
        }
        if !inventory.has(kind) {
            return Err(PuzzleError::PieceUnavailable(kind));
        }
        *self = Selection::Selected {
            kind,
            rotation: Rotation::North,
        };
        Ok(())
    }

    pub fn deselect(&mut self) {
        *self = Selection::Idle;
    }

    /// Advance the rotation by 90° clockwise.
    ///
    /// Returns false when idle or when the selected kind has a single
    /// orientation (Square), in which case the rotation stays at 0°.
    pub fn rotate(&mut self) -> bool {
        match self {
            Selection::Selected { kind, rotation } if kind.orientations() > 1 => {
                *rotation = rotation.rotate_cw();
                true
            }
            _ => false,
        }
    }
}

//! Error types for the placement engine and puzzle configuration.

use std::fmt;

use crate::types::{Coord, PieceKind, MAX_BOARD_DIM};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFault {
    /// A covered cell falls outside the board.
    OutOfBounds(Coord),
    /// A covered cell is already taken.
    Occupied(Coord),
    /// No pieces of this kind are left.
    OutOfStock(PieceKind),
}

impl fmt::Display for PlacementFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementFault::OutOfBounds(c) => {
                write!(f, "cell ({}, {}) is off the board", c.row, c.col)
            }
            PlacementFault::Occupied(c) => {
                write!(f, "cell ({}, {}) is already covered", c.row, c.col)
            }
            PlacementFault::OutOfStock(kind) => write!(f, "no {} pieces left", kind.label()),
        }
    }
}

/// Errors raised by the engine's state transitions.
///
/// Every variant leaves the state it was raised from unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// Rotation given in degrees is not one of 0, 90, 180, 270.
    InvalidRotation { degrees: u16 },
    IllegalPlacement(PlacementFault),
    /// Selecting a kind whose inventory count is zero.
    PieceUnavailable(PieceKind),
    /// Placement attempted with nothing selected.
    NoSelection,
    AtOldestState,
    AtNewestState,
}

impl PuzzleError {
    pub fn code(self) -> &'static str {
        match self {
            PuzzleError::InvalidRotation { .. } => "invalid_rotation",
            PuzzleError::IllegalPlacement(_) => "illegal_placement",
            PuzzleError::PieceUnavailable(_) => "piece_unavailable",
            PuzzleError::NoSelection => "no_selection",
            PuzzleError::AtOldestState => "at_oldest_state",
            PuzzleError::AtNewestState => "at_newest_state",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PuzzleError::InvalidRotation { .. } => "rotation must be 0, 90, 180 or 270 degrees",
            PuzzleError::IllegalPlacement(_) => "piece does not fit at the requested anchor",
            PuzzleError::PieceUnavailable(_) => "no pieces of that kind are left",
            PuzzleError::NoSelection => "no piece selected",
            PuzzleError::AtOldestState => "nothing to undo",
            PuzzleError::AtNewestState => "nothing to redo",
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidRotation { degrees } => {
                write!(f, "{} (got {})", self.message(), degrees)
            }
            PuzzleError::IllegalPlacement(fault) => write!(f, "{}: {}", self.message(), fault),
            PuzzleError::PieceUnavailable(kind) => {
                write!(f, "{}: {}", self.message(), kind.label())
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<PlacementFault> for PuzzleError {
    fn from(fault: PlacementFault) -> Self {
        PuzzleError::IllegalPlacement(fault)
    }
}

/// Errors raised while building a puzzle from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDimensions { rows: u8, cols: u8 },
    EmptyInventory,
    UnknownPiece(String),
    UnknownWinRule(String),
    UnknownPuzzle(String),
    /// The puzzle needs an unlock code and the one given was missing or wrong.
    Locked(String),
    Parse(String),
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { rows, cols } => write!(
                f,
                "board must be 1..={MAX_BOARD_DIM} on each side, got {rows}x{cols}"
            ),
            ConfigError::EmptyInventory => f.write_str("inventory has no pieces"),
            ConfigError::UnknownPiece(name) => write!(f, "unknown piece kind `{name}`"),
            ConfigError::UnknownWinRule(name) => write!(f, "unknown win rule `{name}`"),
            ConfigError::UnknownPuzzle(name) => write!(f, "unknown puzzle `{name}`"),
            ConfigError::Locked(name) => write!(f, "puzzle `{name}` is locked"),
            ConfigError::Parse(msg) => write!(f, "invalid puzzle config: {msg}"),
            ConfigError::Io(msg) => write!(f, "could not read puzzle config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

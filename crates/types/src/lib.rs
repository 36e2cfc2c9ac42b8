//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the puzzle.
//! All types are plain data with no behavior beyond parsing and small
//! conversions, so they can be used from the engine, the terminal view and
//! configuration loading alike.
//!
//! # Board Dimensions
//!
//! Boards are rectangular and sized per puzzle. The two built-in puzzles use:
//!
//! | Puzzle | Rows | Cols |
//! |--------|------|------|
//! | classic | 8 | 8 |
//! | compact | 4 | 5 |
//!
//! Any board up to [`MAX_BOARD_DIM`] on each side is accepted.
//!
//! # Examples
//!
//! ```
//! use tetromino_puzzle_types::{PieceKind, Rotation};
//!
//! let piece = PieceKind::from_str("square").unwrap();
//! assert_eq!(piece, PieceKind::Square);
//! assert_eq!(piece.orientations(), 1);
//!
//! let rotation = Rotation::from_degrees(90).unwrap();
//! assert_eq!(rotation, Rotation::East);
//! assert_eq!(rotation.rotate_cw().degrees(), 180);
//! ```

use serde::{Deserialize, Serialize};

/// Largest supported board side (rows or columns).
pub const MAX_BOARD_DIM: u8 = 16;

/// Cell capacity of the largest supported board.
pub const MAX_BOARD_CELLS: usize = (MAX_BOARD_DIM as usize) * (MAX_BOARD_DIM as usize);

/// Number of cells in every piece (tetromino).
pub const PIECE_CELLS: usize = 4;

/// Classic puzzle board (8x8, T + Square).
pub const CLASSIC_ROWS: u8 = 8;
pub const CLASSIC_COLS: u8 = 8;

/// Compact puzzle board (4x5, one of each kind).
pub const COMPACT_ROWS: u8 = 4;
pub const COMPACT_COLS: u8 = 5;

/// The piece kinds a puzzle can stock.
///
/// - **I**: straight bar, 2 orientations
/// - **T**: T-shaped, 4 orientations
/// - **S**: S-shaped, 2 orientations
/// - **L**: L-shaped, 4 orientations
/// - **Square**: 2x2 block, 1 orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    T,
    S,
    L,
    Square,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 5;

    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::L,
        PieceKind::Square,
    ];

    /// Dense index used by per-kind tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::T => 1,
            PieceKind::S => 2,
            PieceKind::L => 3,
            PieceKind::Square => 4,
        }
    }

    /// Number of geometrically distinct rotation states.
    pub fn orientations(self) -> u8 {
        match self {
            PieceKind::Square => 1,
            PieceKind::I | PieceKind::S => 2,
            PieceKind::T | PieceKind::L => 4,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// `"o"` is accepted as an alias for the square piece.
    ///
    /// ```
    /// use tetromino_puzzle_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("Square"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("z"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "l" => Some(PieceKind::L),
            "square" | "o" => Some(PieceKind::Square),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::L => "l",
            PieceKind::Square => "square",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::L => "L",
            PieceKind::Square => "Square",
        }
    }
}

/// Rotation states, clockwise from the spawn orientation.
///
/// - **North**: 0°
/// - **East**: 90°
/// - **South**: 180°
/// - **West**: 270°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetromino_puzzle_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Table index (0..4).
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn degrees(self) -> u16 {
        (self.index() as u16) * 90
    }

    /// Parse from a degree value. Only 0, 90, 180 and 270 are accepted.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::North),
            90 => Some(Rotation::East),
            180 => Some(Rotation::South),
            270 => Some(Rotation::West),
            _ => None,
        }
    }

    /// Collapse rotations that are geometrically identical for `kind`.
    ///
    /// ```
    /// use tetromino_puzzle_types::{PieceKind, Rotation};
    ///
    /// assert_eq!(Rotation::South.normalize_for(PieceKind::I), Rotation::North);
    /// assert_eq!(Rotation::West.normalize_for(PieceKind::S), Rotation::East);
    /// assert_eq!(Rotation::East.normalize_for(PieceKind::Square), Rotation::North);
    /// assert_eq!(Rotation::West.normalize_for(PieceKind::T), Rotation::West);
    /// ```
    pub fn normalize_for(self, kind: PieceKind) -> Self {
        match kind.orientations() {
            1 => Rotation::North,
            2 => match self {
                Rotation::North | Rotation::South => Rotation::North,
                Rotation::East | Rotation::West => Rotation::East,
            },
            _ => self,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "0" => Some(Rotation::North),
            "east" | "e" | "90" => Some(Rotation::East),
            "south" | "s" | "180" => Some(Rotation::South),
            "west" | "w" | "270" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// A board coordinate: `row` grows downward, `col` grows rightward.
///
/// Signed so that an anchor plus a shape offset can land off the board and be
/// rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Offset by `(dr, dc)`, saturating at the `i8` limits.
    #[inline(always)]
    pub fn offset(self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

/// Cell on the board (None = empty, Some = covered by a piece kind)
pub type Cell = Option<PieceKind>;

/// When a puzzle counts as solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRule {
    /// Every inventory count is zero.
    #[default]
    InventoryExhausted,
    /// Every inventory count is zero and no board cell is empty.
    BoardCovered,
}

impl WinRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inventory_exhausted" | "inventory" => Some(WinRule::InventoryExhausted),
            "board_covered" | "covered" => Some(WinRule::BoardCovered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WinRule::InventoryExhausted => "inventory_exhausted",
            WinRule::BoardCovered => "board_covered",
        }
    }
}

//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This crate is the placement engine. It has **no dependencies** on UI,
//! terminals or I/O beyond reading an optional puzzle file, which makes it:
//!
//! - **Deterministic**: the same inputs always produce the same states
//! - **Copy-on-write**: every transition returns a fresh [`GameState`]
//! - **Cheap to validate**: a placement check touches exactly four cells
//!
//! # Module Structure
//!
//! - [`pieces`]: shape table mapping (kind, rotation) to four anchor offsets
//! - [`board`]: R x C grid with bounds and occupancy checks
//! - [`inventory`]: remaining pieces per kind
//! - [`game_state`]: the (board, inventory) value, validator and commit
//! - [`selection`]: transient piece/rotation choice
//! - [`history`]: linear undo/redo log
//! - [`puzzle`]: built-in puzzles and TOML puzzle files
//! - [`snapshot`]: render-facing view
//!
//! # Example
//!
//! ```
//! use tetromino_puzzle_core::{Inventory, GameState};
//! use tetromino_puzzle_types::{Coord, PieceKind, Rotation};
//!
//! let start = GameState::new(8, 8, Inventory::new().with(PieceKind::T, 15)).unwrap();
//! assert!(start.can_place(PieceKind::T, Coord::new(0, 1), Rotation::North));
//!
//! let next = start
//!     .apply_placement(PieceKind::T, Coord::new(0, 1), Rotation::North)
//!     .unwrap();
//! assert_eq!(next.count(PieceKind::T), 14);
//! assert_eq!(start.count(PieceKind::T), 15);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod history;
pub mod inventory;
pub mod pieces;
pub mod puzzle;
pub mod selection;
pub mod snapshot;

pub use tetromino_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{ConfigError, PlacementFault, PuzzleError};
pub use game_state::{
    attempt_place, can_place, check_placement, new_game, preview_cells, GameState, Placement,
};
pub use history::History;
pub use inventory::Inventory;
pub use pieces::{distinct_rotations, get_shape, get_shape_degrees, PieceShape};
pub use puzzle::{Catalog, Puzzle, PuzzleConfig, COMPACT_UNLOCK_CODE};
pub use selection::Selection;
pub use snapshot::{HistorySnapshot, PuzzleSnapshot, SelectionSnapshot};

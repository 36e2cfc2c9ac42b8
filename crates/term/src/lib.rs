//! Terminal rendering for the placement puzzle.
//!
//! A small, game-oriented layer: views draw into a plain [`FrameBuffer`] and
//! the [`TerminalRenderer`] flushes it, writing only what changed since the
//! previous frame. Board cells are drawn two columns wide to keep them square.

pub mod fb;
pub mod puzzle_view;
pub mod renderer;

pub use tetromino_puzzle_core as core;
pub use tetromino_puzzle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use puzzle_view::{piece_color, Overlay, PuzzleView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

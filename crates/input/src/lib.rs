//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`KeyAction`] values and tracks the board
//! cursor that turns "place here" into a concrete [`engine::Intent`].

pub mod map;

pub use tetromino_puzzle_engine as engine;
pub use tetromino_puzzle_types as types;

pub use map::{handle_key_event, should_quit, Cursor, KeyAction};

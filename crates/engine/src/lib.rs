//! Puzzle controller (engine-facing).
//!
//! Wraps the pure state transitions from `core` with the player's transient
//! selection and the undo/redo history. Front ends drive it through
//! [`Game`] methods or by feeding [`Intent`] values to [`Game::apply`].

pub mod game;
pub mod intent;

pub use tetromino_puzzle_core as core;
pub use tetromino_puzzle_types as types;

pub use game::Game;
pub use intent::Intent;

//! Tetromino placement puzzle (workspace facade crate).
//!
//! Re-exports the crates under `crates/` so callers can depend on one package:
//! `tetromino_puzzle::{core, engine, input, term, types}`.

pub use tetromino_puzzle_core as core;
pub use tetromino_puzzle_engine as engine;
pub use tetromino_puzzle_input as input;
pub use tetromino_puzzle_term as term;
pub use tetromino_puzzle_types as types;

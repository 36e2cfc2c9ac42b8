//! Puzzle definitions: the built-in catalog and TOML-loaded custom puzzles.
//!
//! A puzzle file holds one or more `[[puzzle]]` tables:
//!
//! ```toml
//! [[puzzle]]
//! name = "strip"
//! rows = 2
//! cols = 4
//! win_rule = "board_covered"
//!
//! [puzzle.inventory]
//! square = 2
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use arrayvec::ArrayVec;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::game_state::GameState;
use crate::inventory::Inventory;
use crate::types::{
    PieceKind, WinRule, CLASSIC_COLS, CLASSIC_ROWS, COMPACT_COLS, COMPACT_ROWS, PIECE_CELLS,
};

/// Code that unlocks the compact puzzle.
pub const COMPACT_UNLOCK_CODE: &str = "1414";

/// Raw puzzle entry as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleConfig {
    pub name: String,
    pub rows: u8,
    pub cols: u8,
    /// Piece name (`"t"`, `"square"`, ...) to starting count.
    pub inventory: BTreeMap<String, u16>,
    #[serde(default)]
    pub win_rule: Option<String>,
    #[serde(default)]
    pub unlock_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PuzzleFile {
    #[serde(default)]
    puzzle: Vec<PuzzleConfig>,
}

/// A validated puzzle, ready to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    name: String,
    initial: GameState,
    catalog: ArrayVec<PieceKind, { PieceKind::COUNT }>,
    win_rule: WinRule,
    unlock_code: Option<String>,
}

impl Puzzle {
    pub fn new(
        name: impl Into<String>,
        rows: u8,
        cols: u8,
        inventory: Inventory,
        win_rule: WinRule,
    ) -> Result<Self, ConfigError> {
        if inventory.is_exhausted() {
            return Err(ConfigError::EmptyInventory);
        }
        let initial = GameState::new(rows, cols, inventory)?;
        Ok(Self {
            name: name.into(),
            catalog: inventory.available().collect(),
            initial,
            win_rule,
            unlock_code: None,
        })
    }

    /// Require `code` before the puzzle can be started.
    pub fn with_unlock_code(mut self, code: impl Into<String>) -> Self {
        self.unlock_code = Some(code.into());
        self
    }

    /// 8x8 board, fifteen T pieces and one square.
    pub fn classic() -> Self {
        Self::builtin(
            "classic",
            CLASSIC_ROWS,
            CLASSIC_COLS,
            Inventory::from_counts(&[(PieceKind::T, 15), (PieceKind::Square, 1)]),
            WinRule::InventoryExhausted,
        )
    }

    /// 4x5 board, one of each kind; locked behind [`COMPACT_UNLOCK_CODE`].
    pub fn compact() -> Self {
        Self::builtin(
            "compact",
            COMPACT_ROWS,
            COMPACT_COLS,
            Inventory::from_counts(&[
                (PieceKind::I, 1),
                (PieceKind::T, 1),
                (PieceKind::S, 1),
                (PieceKind::L, 1),
                (PieceKind::Square, 1),
            ]),
            WinRule::BoardCovered,
        )
        .with_unlock_code(COMPACT_UNLOCK_CODE)
    }

    fn builtin(name: &str, rows: u8, cols: u8, inventory: Inventory, win_rule: WinRule) -> Self {
        Self::new(name, rows, cols, inventory, win_rule).expect("built-in puzzle is valid")
    }

    /// Validate a raw config entry.
    pub fn from_config(config: &PuzzleConfig) -> Result<Self, ConfigError> {
        let mut inventory = Inventory::new();
        for (name, &count) in &config.inventory {
            let kind =
                PieceKind::from_str(name).ok_or_else(|| ConfigError::UnknownPiece(name.clone()))?;
            inventory = inventory.with(kind, count);
        }
        let win_rule = match &config.win_rule {
            None => WinRule::default(),
            Some(name) => {
                WinRule::from_str(name).ok_or_else(|| ConfigError::UnknownWinRule(name.clone()))?
            }
        };
        let puzzle = Self::new(&config.name, config.rows, config.cols, inventory, win_rule)?;

        let area = config.rows as u32 * config.cols as u32;
        let pieces_area = inventory.total() * PIECE_CELLS as u32;
        if win_rule == WinRule::BoardCovered && pieces_area != area {
            tracing::warn!(
                puzzle = %config.name,
                area,
                pieces_area,
                "board_covered puzzle can never be solved: piece area differs from board area"
            );
        }

        Ok(match &config.unlock_code {
            Some(code) => puzzle.with_unlock_code(code),
            None => puzzle,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    /// Kinds stocked at the start, in catalog order.
    pub fn catalog(&self) -> &[PieceKind] {
        &self.catalog
    }

    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    pub fn is_locked(&self) -> bool {
        self.unlock_code.is_some()
    }

    /// Check `code` against the puzzle's unlock code, if it has one.
    pub fn unlock(&self, code: Option<&str>) -> Result<(), ConfigError> {
        match (&self.unlock_code, code) {
            (None, _) => Ok(()),
            (Some(expected), Some(given)) if expected == given => Ok(()),
            _ => Err(ConfigError::Locked(self.name.clone())),
        }
    }
}

/// A named set of puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// The two built-in puzzles.
    pub fn builtin() -> Self {
        Self {
            puzzles: vec![Puzzle::classic(), Puzzle::compact()],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: PuzzleFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let puzzles = file
            .puzzle
            .iter()
            .map(Puzzle::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        if puzzles.is_empty() {
            return Err(ConfigError::Parse("no [[puzzle]] entries".to_string()));
        }
        Ok(Self { puzzles })
    }

    /// Load puzzles from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            count = catalog.puzzles.len(),
            "loaded puzzles"
        );
        Ok(catalog)
    }

    /// Puzzles from `other` first, then built-ins whose names it does not reuse.
    pub fn with_overrides(self, other: Catalog) -> Self {
        let mut puzzles = other.puzzles;
        for p in self.puzzles {
            if !puzzles.iter().any(|o| o.name.eq_ignore_ascii_case(&p.name)) {
                puzzles.push(p);
            }
        }
        Self { puzzles }
    }

    pub fn find(&self, name: &str) -> Result<&Puzzle, ConfigError> {
        self.puzzles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownPuzzle(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.puzzles.iter().map(|p| p.name.as_str())
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }
}

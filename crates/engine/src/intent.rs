//! Player intents: the commands a presentation layer sends to the controller.

use crate::types::{Coord, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Select a kind, or deselect it if already selected.
    SelectPiece(PieceKind),
    Deselect,
    Rotate,
    /// Commit the selected piece with its anchor at this cell.
    PlaceAt(Coord),
    Undo,
    Redo,
    Reset,
}

impl Intent {
    /// Parse a text command such as `"select t"`, `"place 6 6"` or `"undo"`.
    ///
    /// ```
    /// use tetromino_puzzle_engine::Intent;
    /// use tetromino_puzzle_types::{Coord, PieceKind};
    ///
    /// assert_eq!(Intent::parse("select square"), Some(Intent::SelectPiece(PieceKind::Square)));
    /// assert_eq!(Intent::parse("place 6 6"), Some(Intent::PlaceAt(Coord::new(6, 6))));
    /// assert_eq!(Intent::parse("Rotate"), Some(Intent::Rotate));
    /// assert_eq!(Intent::parse("jump"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut words = s.split_whitespace();
        let verb = words.next()?.to_lowercase();
        let intent = match verb.as_str() {
            "select" => Intent::SelectPiece(PieceKind::from_str(words.next()?)?),
            "deselect" => Intent::Deselect,
            "rotate" => Intent::Rotate,
            "place" => {
                let row = words.next()?.parse().ok()?;
                let col = words.next()?.parse().ok()?;
                Intent::PlaceAt(Coord::new(row, col))
            }
            "undo" => Intent::Undo,
            "redo" => Intent::Redo,
            "reset" => Intent::Reset,
            _ => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(intent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SelectPiece(_) => "select",
            Intent::Deselect => "deselect",
            Intent::Rotate => "rotate",
            Intent::PlaceAt(_) => "place",
            Intent::Undo => "undo",
            Intent::Redo => "redo",
            Intent::Reset => "reset",
        }
    }
}

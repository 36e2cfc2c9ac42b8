//! Per-kind piece counts.

use serde::Serialize;

use crate::types::PieceKind;

/// Remaining placements for each piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Inventory {
    counts: [u16; PieceKind::COUNT],
}

impl Inventory {
    /// Empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(kind, count)` pairs. Later entries for a kind overwrite earlier ones.
    pub fn from_counts(counts: &[(PieceKind, u16)]) -> Self {
        let mut inv = Self::new();
        for &(kind, n) in counts {
            inv.counts[kind.index()] = n;
        }
        inv
    }

    pub fn with(mut self, kind: PieceKind, count: u16) -> Self {
        self.counts[kind.index()] = count;
        self
    }

    pub fn count(&self, kind: PieceKind) -> u16 {
        self.counts[kind.index()]
    }

    pub fn has(&self, kind: PieceKind) -> bool {
        self.count(kind) > 0
    }

    /// Take one piece of `kind`. Returns false if none are left.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        let slot = &mut self.counts[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&n| n as u32).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Kinds with at least one piece left, in catalog order.
    pub fn available(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::ALL.into_iter().filter(|&k| self.has(k))
    }
}

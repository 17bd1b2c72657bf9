//! Row/column lookup for items placed in a grid.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// A cell position, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

/// Items keyed by `K`, each placed at one cell
#[derive(Debug, Clone)]
pub struct Grid<K> {
    cells: HashMap<K, GridPosition>,
}

impl<K: Eq + Hash> Grid<K> {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Place `key` at `row`/`column`, moving it if it was already placed.
    pub fn place(&mut self, key: K, row: usize, column: usize) {
        self.cells.insert(key, GridPosition { row, column });
    }

    /// Where `key` sits, if it is in the grid
    pub fn position_of(&self, key: &K) -> Option<GridPosition> {
        self.cells.get(key).copied()
    }
}

impl<K: Eq + Hash> Default for Grid<K> {
    fn default() -> Self {
        Self::new()
    }
}

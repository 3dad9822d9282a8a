use serde::Serialize;

use crate::grid::Cell;
use crate::types::DEFAULT_GRID_SIZE;

/// Pre-move state kept for undo. Only values are stored; annotations are
/// meaningless once the move they describe has been undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Side length of the grid the values belong to
    pub size: usize,
    pub score: u64,
    pub values: Vec<u32>,
}

/// Read-only view of a game handed to the renderer and the move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major cells, `size * size` long
    pub cells: Vec<Cell>,
    pub score: u64,
    pub game_over: bool,
    pub can_undo: bool,
    pub max_tile: u32,
    pub moves: u32,
    pub episode_id: u32,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_GRID_SIZE;
        self.cells.clear();
        self.cells
            .resize(DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE, Cell::EMPTY);
        self.score = 0;
        self.game_over = false;
        self.can_undo = false;
        self.max_tile = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.revision = 0;
    }

    /// Cell at (row, col), or None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Cell values as rows
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.value).collect())
            .collect()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: DEFAULT_GRID_SIZE,
            cells: Vec::new(),
            score: 0,
            game_over: false,
            can_undo: false,
            max_tile: 0,
            moves: 0,
            episode_id: 0,
            revision: 0,
        };
        s.clear();
        s
    }
}

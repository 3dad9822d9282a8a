//! Grid module - the N x N playfield
//!
//! The grid is a square of cells stored as a flat row-major vector.
//! Coordinates are (row, col) with (0, 0) in the top-left corner.
//! A value of 0 means empty; every other value is a power of two because the
//! only sources of value are spawns (2 or 4) and merges of two equal tiles.

use serde::Serialize;

use crate::line::{collapse_line, line_can_collapse, LineOutcome};
use crate::rng::SimpleRng;
use crate::types::{Direction, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// A single grid cell
///
/// `merged` and `is_new` are per-move annotations for the renderer. They are
/// cleared on the working copy at the start of every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub value: u32,
    pub merged: bool,
    pub is_new: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        value: 0,
        merged: false,
        is_new: false,
    };

    /// A settled tile with the given value and no annotations
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            merged: false,
            is_new: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// A tile placed by the spawn algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Clamp a requested side length into the supported range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// The playfield - `size` x `size` cells using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid. The size is clamped into the supported range.
    pub fn new(size: usize) -> Self {
        let size = clamp_size(size);
        Self {
            size,
            cells: vec![Cell::EMPTY; size * size],
        }
    }

    /// Build a grid from rows of plain values.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square between 2x2 and 8x8.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "grid size {} out of range",
            size
        );
        assert!(
            rows.iter().all(|row| row.len() == size),
            "grid rows must form a square"
        );

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| Cell::new(v)))
            .collect();
        Self { size, cells }
    }

    /// Rebuild a grid from a flat row-major value list (history restore).
    ///
    /// Returns None if `values` does not hold a supported square.
    pub fn from_values(size: usize, values: &[u32]) -> Option<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) || values.len() != size * size {
            return None;
        }
        Some(Self {
            size,
            cells: values.iter().map(|&v| Cell::new(v)).collect(),
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the value at (row, col), clearing its annotations.
    /// Returns false if out of bounds.
    pub fn set_value(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = Cell::new(value);
                true
            }
            None => false,
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell values in row-major order
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.value).collect()
    }

    /// Cell values as rows
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.value).collect())
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Largest tile on the grid (0 when empty)
    pub fn max_value(&self) -> u32 {
        self.cells.iter().map(|c| c.value).max().unwrap_or(0)
    }

    /// Reset every cell's `merged` and `is_new` annotation
    pub fn clear_flags(&mut self) {
        for cell in &mut self.cells {
            cell.merged = false;
            cell.is_new = false;
        }
    }

    /// Merge and compress every line toward `direction`.
    ///
    /// Annotations are not cleared here; `GameState` clears them on its working copy.
    pub fn slide(&mut self, direction: Direction) -> LineOutcome {
        let mut outcome = LineOutcome::default();
        for line in 0..self.size {
            outcome.absorb(collapse_line(&mut self.cells, self.size, direction, line));
        }
        outcome
    }

    /// Would a move toward `direction` change the grid?
    pub fn can_move(&self, direction: Direction) -> bool {
        (0..self.size).any(|line| line_can_collapse(&self.cells, self.size, direction, line))
    }

    /// True when the grid is full and no two axis-adjacent cells are equal
    pub fn is_game_over(&self) -> bool {
        if self.has_empty() {
            return false;
        }

        let n = self.size;
        // Vertical neighbours.
        for col in 0..n {
            for row in 1..n {
                if self.cells[row * n + col].value == self.cells[(row - 1) * n + col].value {
                    return false;
                }
            }
        }
        // Horizontal neighbours.
        for row in 0..n {
            for col in 1..n {
                if self.cells[row * n + col].value == self.cells[row * n + col - 1].value {
                    return false;
                }
            }
        }

        true
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// The choice is uniform over the current empty set. Returns None without
    /// touching the grid or the RNG when the grid is full.
    pub fn spawn_random(&mut self, rng: &mut SimpleRng) -> Option<Spawn> {
        let empty = self.empty_count();
        if empty == 0 {
            return None;
        }

        let pick = rng.next_range(empty as u32) as usize;
        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .nth(pick)?;

        let value = rng.spawn_value();
        self.cells[idx] = Cell {
            value,
            merged: false,
            is_new: true,
        };

        Some(Spawn {
            row: idx / self.size,
            col: idx % self.size,
            value,
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRID_SIZE)
    }
}

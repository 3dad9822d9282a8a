//! Line module - single-pass merge-then-compress over one row or column
//!
//! A move treats every row (Left/Right) or column (Up/Down) as an independent
//! line. Each line is walked once, starting at the edge the tiles slide toward.
//! A write cursor tracks the next free slot; the last placed value stays
//! "pending" until either an equal value merges into it or a different value
//! is placed after it. Merged cells are never pending, so a tile merges at most
//! once per move. Empty cells are skipped and never break adjacency.
//!
//! Lines are addressed by index arithmetic on the flat row-major cell slice,
//! so collapsing a line allocates nothing.

use crate::grid::Cell;
use crate::types::Direction;

/// Result of collapsing one line (or, summed, a whole grid)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOutcome {
    /// Sum of the values produced by merges
    pub score_delta: u64,
    /// Whether any tile moved or merged
    pub changed: bool,
}

impl LineOutcome {
    /// Fold another line's outcome into this one
    pub fn absorb(&mut self, other: LineOutcome) {
        self.score_delta += other.score_delta;
        self.changed |= other.changed;
    }
}

/// Flat index of the `step`-th cell of `line`, counted from the target edge.
///
/// Step 0 is the cell tiles slide toward; step `size - 1` is the far edge.
#[inline(always)]
pub fn line_index(size: usize, direction: Direction, line: usize, step: usize) -> usize {
    let far = size - 1 - step;
    match direction {
        Direction::Left => line * size + step,
        Direction::Right => line * size + far,
        Direction::Up => step * size + line,
        Direction::Down => far * size + line,
    }
}

/// Merge and compress one line in place.
///
/// `cells` is the full row-major grid of side `size`. Transient flags are
/// expected to be cleared by the caller; merged targets get `merged = true`.
pub fn collapse_line(
    cells: &mut [Cell],
    size: usize,
    direction: Direction,
    line: usize,
) -> LineOutcome {
    let mut outcome = LineOutcome::default();
    // Next free step.
    let mut cursor = 0usize;
    // Last placed value and its step, while it can still absorb a merge.
    let mut pending: Option<(u32, usize)> = None;

    for step in 0..size {
        let src = line_index(size, direction, line, step);
        let value = cells[src].value;
        if value == 0 {
            continue;
        }

        match pending {
            Some((pending_value, pending_step)) if pending_value == value => {
                let dst = line_index(size, direction, line, pending_step);
                let merged = value * 2;
                cells[dst].value = merged;
                cells[dst].merged = true;
                cells[src] = Cell::EMPTY;
                outcome.score_delta += merged as u64;
                outcome.changed = true;
                pending = None;
            }
            _ => {
                let dst = line_index(size, direction, line, cursor);
                if dst != src {
                    cells[dst] = cells[src];
                    cells[src] = Cell::EMPTY;
                    outcome.changed = true;
                }
                pending = Some((value, cursor));
                cursor += 1;
            }
        }
    }

    outcome
}

/// Would collapsing this line change anything?
///
/// True if a tile sits behind a gap or two tiles meet with equal values.
pub fn line_can_collapse(cells: &[Cell], size: usize, direction: Direction, line: usize) -> bool {
    let mut seen_gap = false;
    let mut last: Option<u32> = None;

    for step in 0..size {
        let value = cells[line_index(size, direction, line, step)].value;
        if value == 0 {
            seen_gap = true;
            continue;
        }
        if seen_gap || last == Some(value) {
            return true;
        }
        last = Some(value);
    }

    false
}

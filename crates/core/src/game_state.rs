//! Game state module - owns the grid, score and undo history
//!
//! This is the engine's state machine: `init` allocates an empty grid,
//! `start` places the opening tiles, `move_tiles` applies one swipe and spawns
//! a tile, and `undo` pops the last pre-move snapshot. Derived flags
//! (`has_empty`, `is_game_over`) are recomputed from the grid on demand.

use crate::grid::{clamp_size, Grid, Spawn};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, HistoryEntry};
use crate::types::{
    Direction, GameAction, DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, START_TILES,
};

/// What to do when a move leaves the grid unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoopMovePolicy {
    /// Always push history and spawn if an empty cell exists
    #[default]
    Record,
    /// Skip the history push and the spawn when nothing moved or merged
    Skip,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub noop_policy: NoopMovePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            noop_policy: NoopMovePolicy::Record,
        }
    }
}

/// Result of a single move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Sum of merge results added to the score
    pub score_delta: u64,
    /// Tile placed after the move, if any
    pub spawned: Option<Spawn>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u64,
    history: Vec<HistoryEntry>,
    rng: SimpleRng,
    config: GameConfig,
    /// Moves applied in the current game (undo does not rewind it).
    moves: u32,
    /// Monotonic game id (increments on every `init`).
    episode_id: u32,
    /// Bumped on every mutation so observers can detect staleness.
    revision: u64,
}

impl GameState {
    /// Create a new default-sized game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Create a new game with an explicit configuration
    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        let size = clamp_size(config.size);
        Self {
            grid: Grid::new(size),
            score: 0,
            history: Vec::new(),
            rng: SimpleRng::new(seed),
            config: GameConfig { size, ..config },
            moves: 0,
            episode_id: 0,
            revision: 0,
        }
    }

    /// Reset to an empty grid, optionally at a new size.
    ///
    /// `None` and `Some(0)` keep the current size; other sizes are clamped
    /// into `MIN_GRID_SIZE..=MAX_GRID_SIZE`. Score and history are cleared.
    /// No tiles are spawned.
    pub fn init(&mut self, size: Option<usize>) {
        if let Some(size) = size.filter(|&s| s != 0) {
            self.config.size = clamp_size(size);
        }
        self.score = 0;
        self.history.clear();
        self.grid = Grid::new(self.config.size);
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.bump();
    }

    /// Place the opening tiles.
    ///
    /// Spawns that find no empty cell are skipped, so on a fresh grid this
    /// always yields exactly two tiles.
    pub fn start(&mut self) {
        for _ in 0..START_TILES {
            self.grid.spawn_random(&mut self.rng);
        }
        self.bump();
    }

    /// Apply one swipe toward `direction`.
    ///
    /// Pushes the pre-move grid values and score onto the history, merges and
    /// compresses every line of a working copy, adds the merge sum to the score,
    /// spawns one tile if the result has an empty cell, then installs the result.
    /// With `NoopMovePolicy::Skip` a move that changes nothing leaves the state
    /// (history included) untouched.
    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        let mut next = self.grid.clone();
        next.clear_flags();
        let line = next.slide(direction);

        if !line.changed && self.config.noop_policy == NoopMovePolicy::Skip {
            return MoveOutcome::default();
        }

        self.history.push(HistoryEntry {
            size: self.grid.size(),
            score: self.score,
            values: self.grid.values(),
        });

        let spawned = if next.has_empty() {
            next.spawn_random(&mut self.rng)
        } else {
            None
        };

        self.grid = next;
        self.score += line.score_delta;
        self.moves = self.moves.saturating_add(1);
        self.bump();

        MoveOutcome {
            changed: line.changed,
            score_delta: line.score_delta,
            spawned,
        }
    }

    /// Restore the grid and score from before the most recent move.
    ///
    /// Returns false (and does nothing) when there is no history.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };

        let Some(grid) = Grid::from_values(entry.size, &entry.values) else {
            return false;
        };

        self.config.size = grid.size();
        self.grid = grid;
        self.score = entry.score;
        self.bump();
        true
    }

    /// Apply a game action. Returns whether visible state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => {
                let outcome = self.move_tiles(direction);
                outcome.changed || outcome.spawned.is_some()
            }
            GameAction::Undo => self.undo(),
            GameAction::NewGame => {
                self.init(None);
                self.start();
                true
            }
            GameAction::Grow => {
                if self.size() >= MAX_GRID_SIZE {
                    return false;
                }
                self.init(Some(self.size() + 1));
                self.start();
                true
            }
            GameAction::Shrink => {
                if self.size() <= MIN_GRID_SIZE {
                    return false;
                }
                self.init(Some(self.size() - 1));
                self.start();
                true
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn has_empty(&self) -> bool {
        self.grid.has_empty()
    }

    pub fn is_game_over(&self) -> bool {
        self.grid.is_game_over()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the grid wholesale (scenario setup and tests).
    ///
    /// History is kept; undo restores earlier entries at their own size.
    pub fn load_grid(&mut self, grid: Grid) {
        self.config.size = grid.size();
        self.grid = grid;
        self.bump();
    }

    /// Fill an existing snapshot without reallocating when the size is unchanged.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.size = self.grid.size();
        snap.cells.clear();
        snap.cells.extend_from_slice(self.grid.cells());
        snap.score = self.score;
        snap.game_over = self.is_game_over();
        snap.can_undo = self.can_undo();
        snap.max_tile = self.grid.max_value();
        snap.moves = self.moves;
        snap.episode_id = self.episode_id;
        snap.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Grid engine for 2048 - rules, state and history with no I/O
//!
//! Nothing in this crate reads a terminal, a clock or the environment. All
//! randomness comes from a seeded [`rng::SimpleRng`], so a seed plus a move
//! list replays a game exactly. Renderers and loggers read state through
//! getters or a [`snapshot::GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`grid`]: N x N playfield, spawning and terminal-state detection
//! - [`line`]: single-pass merge-then-compress of one row or column
//! - [`game_state`]: score, undo history and the init/start/move/undo lifecycle
//! - [`rng`]: seeded LCG used for spawn position and value
//! - [`snapshot`]: read-only views for rendering and logging
//!
//! # Game Rules
//!
//! - **Move**: every line slides toward the chosen edge; adjacent equal tiles
//!   (gaps ignored) merge once per move, and the merge result is added to the score
//! - **Spawn**: after each move a 2 (90%) or 4 (10%) appears in a uniformly
//!   chosen empty cell
//! - **Undo**: restores the grid and score from before the last move
//! - **Game over**: the grid is full and no two neighbouring tiles are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.init(Some(4));
//! game.start();
//!
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.move_tiles(Direction::Up);
//!
//! assert!(game.can_undo());
//! assert!(game.undo());
//! ```

pub mod game_state;
pub mod grid;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameConfig, GameState, MoveOutcome, NoopMovePolicy};
pub use grid::{Cell, Grid, Spawn};
pub use line::LineOutcome;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, HistoryEntry};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, move logging).
//!
//! # Grid Dimensions
//!
//! The playfield is always square:
//!
//! - **Default**: 4x4
//! - **Minimum**: 2x2
//! - **Maximum**: 8x8 (largest grid the terminal view offers)
//!
//! # Spawn Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_VALUE` | 2 | Common spawned tile |
//! | `SPAWN_ALT_VALUE` | 4 | Rare spawned tile |
//! | `SPAWN_FOUR_ONE_IN` | 10 | One spawn in ten is a 4 |
//! | `START_TILES` | 2 | Tiles placed by `start()` |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let parsed = Direction::from_str("Left").unwrap();
//! assert_eq!(parsed, Direction::Left);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Grid size used when nothing else is configured (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest grid the engine accepts (2x2)
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid the engine accepts (8x8)
pub const MAX_GRID_SIZE: usize = 8;

/// Value of a freshly spawned tile in the common case
pub const SPAWN_VALUE: u32 = 2;

/// Value of a freshly spawned tile in the rare case
pub const SPAWN_ALT_VALUE: u32 = 4;

/// One spawn in `SPAWN_FOUR_ONE_IN` produces `SPAWN_ALT_VALUE` (10% chance)
pub const SPAWN_FOUR_ONE_IN: u32 = 10;

/// Number of tiles placed when a game starts
pub const START_TILES: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_constants_match_classic_rules() {
        assert_eq!(SPAWN_VALUE, 2);
        assert_eq!(SPAWN_ALT_VALUE, 4);
        assert_eq!(SPAWN_FOUR_ONE_IN, 10);
        assert_eq!(START_TILES, 2);
    }

    #[test]
    fn grid_size_bounds_are_ordered() {
        assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE);
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn action_round_trips_through_str() {
        let actions = [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Down),
            GameAction::Move(Direction::Left),
            GameAction::Move(Direction::Right),
            GameAction::Undo,
            GameAction::NewGame,
            GameAction::Grow,
            GameAction::Shrink,
        ];
        for action in actions {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}

/// The four swipe directions
///
/// A direction names the edge tiles slide toward:
/// - **Up**: columns collapse toward row 0
/// - **Down**: columns collapse toward the last row
/// - **Left**: rows collapse toward column 0
/// - **Right**: rows collapse toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by the input layer and consumed by
/// `GameState::apply_action` in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge every line toward an edge
    Move(Direction),
    /// Restore the grid and score from before the last move
    Undo,
    /// Clear the grid and start over at the current size
    NewGame,
    /// Start a new game on a grid one larger
    Grow,
    /// Start a new game on a grid one smaller
    Shrink,
}

impl GameAction {
    /// Parse action from string (for move logs and scripted input)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "undo" => Some(GameAction::Undo),
            "newgame" => Some(GameAction::NewGame),
            "grow" => Some(GameAction::Grow),
            "shrink" => Some(GameAction::Shrink),
            _ => None,
        }
    }

    /// Convert to camelCase string for move logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::NewGame => "newGame",
            GameAction::Grow => "grow",
            GameAction::Shrink => "shrink",
        }
    }
}

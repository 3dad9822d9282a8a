//! Game session: one engine plus its move log.
//!
//! The terminal loop only talks to the session, so everything except drawing
//! and key reading can be tested without a terminal.

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState, MoveOutcome};
use crate::move_log::{LogRecord, MoveLog};
use crate::types::GameAction;

#[derive(Debug)]
pub struct Session {
    state: GameState,
    log: MoveLog,
    seed: u32,
    /// Episode for which a game-over record has been written.
    game_over_logged: Option<u32>,
}

impl Session {
    /// Build a session from configuration and start the first game.
    ///
    /// A missing seed is drawn from the thread RNG.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let log = MoveLog::from_path(config.log_path.as_deref())?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::with_log(seed, config, log))
    }

    pub fn with_log(seed: u32, config: &AppConfig, log: MoveLog) -> Self {
        let mut session = Self {
            state: GameState::with_config(seed, config.game_config()),
            log,
            seed,
            game_over_logged: None,
        };
        session.state.init(None);
        session.state.start();
        session.log_start();
        session
    }

    /// Apply an action and log it. Returns whether visible state changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let (changed, outcome) = match action {
            GameAction::Move(direction) => {
                let outcome = self.state.move_tiles(direction);
                (outcome.changed || outcome.spawned.is_some(), outcome)
            }
            GameAction::Undo => (self.state.undo(), MoveOutcome::default()),
            GameAction::NewGame | GameAction::Grow | GameAction::Shrink => {
                let started = self.state.apply_action(action);
                if started {
                    self.log_start();
                }
                return started;
            }
        };

        self.log.record(&LogRecord::Action {
            episode_id: self.state.episode_id(),
            moves: self.state.moves(),
            action: action.as_str(),
            changed,
            score: self.state.score(),
            score_delta: outcome.score_delta,
            spawned: outcome.spawned,
        });

        let episode_id = self.state.episode_id();
        if self.state.is_game_over() && self.game_over_logged != Some(episode_id) {
            self.game_over_logged = Some(episode_id);
            self.log.record(&LogRecord::GameOver {
                episode_id,
                score: self.state.score(),
                max_tile: self.state.grid().max_value(),
                moves: self.state.moves(),
            });
        }

        changed
    }

    fn log_start(&mut self) {
        self.log.record(&LogRecord::Start {
            episode_id: self.state.episode_id(),
            seed: self.seed,
            size: self.state.size(),
            grid: self.state.grid().rows(),
        });
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        self.state.snapshot_into(snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn read_events(path: &std::path::Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn new_session_starts_with_two_tiles() {
        let config = AppConfig {
            seed: Some(12),
            ..AppConfig::default()
        };
        let session = Session::new(&config).unwrap();
        assert_eq!(session.seed(), 12);
        let tiles = session
            .state()
            .grid()
            .values()
            .into_iter()
            .filter(|&v| v != 0)
            .count();
        assert_eq!(tiles, 2);
        assert_eq!(session.state().episode_id(), 1);
    }

    #[test]
    fn same_seed_same_session() {
        let config = AppConfig {
            seed: Some(99),
            ..AppConfig::default()
        };
        let mut a = Session::new(&config).unwrap();
        let mut b = Session::new(&config).unwrap();
        for dir in Direction::ALL {
            a.apply(GameAction::Move(dir));
            b.apply(GameAction::Move(dir));
        }
        assert_eq!(a.state().grid(), b.state().grid());
        assert_eq!(a.state().score(), b.state().score());
    }

    #[test]
    fn actions_are_logged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let config = AppConfig {
            seed: Some(3),
            log_path: Some(path.to_str().unwrap().to_string()),
            ..AppConfig::default()
        };

        {
            let mut session = Session::new(&config).unwrap();
            session.apply(GameAction::Move(Direction::Left));
            session.apply(GameAction::Undo);
            session.apply(GameAction::Grow);
        }

        let events = read_events(&path);
        let kinds: Vec<&str> = events
            .iter()
            .map(|e| e["event"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["start", "action", "action", "start"]);
        assert_eq!(events[0]["seed"], 3);
        assert_eq!(events[1]["action"], "moveLeft");
        assert_eq!(events[2]["action"], "undo");
        assert_eq!(events[2]["changed"], true);
        assert_eq!(events[3]["size"], 5);
        assert_eq!(events[3]["episode_id"], 2);
    }

    #[test]
    fn refused_resize_is_not_logged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let config = AppConfig {
            size: crate::types::MIN_GRID_SIZE,
            seed: Some(1),
            log_path: Some(path.to_str().unwrap().to_string()),
            ..AppConfig::default()
        };

        {
            let mut session = Session::new(&config).unwrap();
            assert!(!session.apply(GameAction::Shrink));
        }

        assert_eq!(read_events(&path).len(), 1);
    }

    #[test]
    fn undo_without_history_reports_no_change() {
        let mut session = Session::with_log(5, &AppConfig::default(), MoveLog::disabled());
        assert!(!session.apply(GameAction::Undo));
    }

    #[test]
    fn snapshot_tracks_state() {
        let mut session = Session::with_log(8, &AppConfig::default(), MoveLog::disabled());
        session.apply(GameAction::Move(Direction::Up));
        let mut snap = GameSnapshot::default();
        session.snapshot_into(&mut snap);
        assert_eq!(snap.score, session.state().score());
        assert_eq!(snap.moves, 1);
        assert!(snap.can_undo);
    }
}

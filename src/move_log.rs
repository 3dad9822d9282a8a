//! JSON-lines move log.
//!
//! When a log path is configured every game event is appended as one JSON
//! object per line. Write failures disable the log instead of interrupting
//! play.

use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::Spawn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord<'a> {
    Start {
        episode_id: u32,
        seed: u32,
        size: usize,
        grid: Vec<Vec<u32>>,
    },
    Action {
        episode_id: u32,
        moves: u32,
        action: &'a str,
        changed: bool,
        score: u64,
        score_delta: u64,
        spawned: Option<Spawn>,
    },
    GameOver {
        episode_id: u32,
        score: u64,
        max_tile: u32,
        moves: u32,
    },
}

#[derive(Debug, Default)]
pub struct MoveLog {
    out: Option<LineWriter<File>>,
    buf: Vec<u8>,
}

impl MoveLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open move log {}", path))?;
        Ok(Self {
            out: Some(LineWriter::new(file)),
            buf: Vec::with_capacity(512),
        })
    }

    /// Open the log if a path is given, otherwise return a disabled log.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Append one record. On any write error the log is switched off.
    pub fn record(&mut self, record: &LogRecord<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_log_accepts_records() {
        let mut log = MoveLog::disabled();
        assert!(!log.is_enabled());
        log.record(&LogRecord::GameOver {
            episode_id: 1,
            score: 0,
            max_tile: 0,
            moves: 0,
        });
    }

    #[test]
    fn records_are_tagged_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.jsonl");
        let path_str = path.to_str().unwrap();

        {
            let mut log = MoveLog::open(path_str).unwrap();
            assert!(log.is_enabled());
            log.record(&LogRecord::Action {
                episode_id: 1,
                moves: 1,
                action: "moveLeft",
                changed: true,
                score: 4,
                score_delta: 4,
                spawned: Some(Spawn {
                    row: 0,
                    col: 3,
                    value: 2,
                }),
            });
            log.record(&LogRecord::GameOver {
                episode_id: 1,
                score: 4,
                max_tile: 4,
                moves: 1,
            });
        }

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "action");
        assert_eq!(first["action"], "moveLeft");
        assert_eq!(first["spawned"]["col"], 3);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "game_over");
        assert_eq!(second["max_tile"], 4);
    }

    #[test]
    fn open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.jsonl");
        std::fs::write(&path, "{\"event\":\"old\"}\n").unwrap();

        let mut log = MoveLog::open(path.to_str().unwrap()).unwrap();
        log.record(&LogRecord::GameOver {
            episode_id: 2,
            score: 0,
            max_tile: 0,
            moves: 0,
        });
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("moves.jsonl");
        assert!(MoveLog::open(path.to_str().unwrap()).is_err());
    }
}

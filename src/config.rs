//! Runtime configuration for the terminal game.
//!
//! Settings come from environment variables first, then command-line flags
//! override them:
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `TUI_2048_SIZE` | `--size N` | 4 |
//! | `TUI_2048_SEED` | `--seed N` | random |
//! | `TUI_2048_LOG_PATH` | `--log PATH` | disabled |
//! | `TUI_2048_SKIP_NOOP_MOVES` | `--skip-noop-moves` | off |

use anyhow::{anyhow, Result};

use crate::core::{GameConfig, NoopMovePolicy};
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub size: usize,
    /// None means "pick one at startup".
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub skip_noop_moves: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
            log_path: None,
            skip_noop_moves: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables. Unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup("TUI_2048_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .filter(|s| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(s))
            .unwrap_or(DEFAULT_GRID_SIZE);

        let seed = lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let skip_noop_moves = lookup("TUI_2048_SKIP_NOOP_MOVES")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            size,
            seed,
            log_path,
            skip_noop_moves,
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--size" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --size"))?;
                    let size: usize = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
                        return Err(anyhow!(
                            "--size must be between {} and {}, got {}",
                            MIN_GRID_SIZE,
                            MAX_GRID_SIZE,
                            size
                        ));
                    }
                    self.size = size;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = Some(
                        v.parse()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                "--skip-noop-moves" => {
                    self.skip_noop_moves = true;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        Ok(())
    }

    /// Engine configuration derived from these settings
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            noop_policy: if self.skip_noop_moves {
                NoopMovePolicy::Skip
            } else {
                NoopMovePolicy::Record
            },
        }
    }
}

//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into
//! [`crate::types::GameAction`]s and recognises quit keys.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};

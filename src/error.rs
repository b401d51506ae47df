//! Error taxonomy for session construction and content management.
//!
//! Untracked players and late selection events are not errors; the game
//! simply ignores them for the tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unit '{unit_id}' has no words and cannot be played")]
    EmptyUnit { unit_id: String },
    #[error("unsupported player count {0} (expected 1 or 2)")]
    UnsupportedPlayerCount(usize),
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("unknown word '{word_id}' in unit '{unit_id}'")]
    UnknownWord { unit_id: String, word_id: String },
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

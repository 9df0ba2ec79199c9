use std::io;

use thiserror::Error;

use crate::BoardError;

/// Rejected game configuration, reported before any play happens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("target {0} must be a power of two of at least 4")]
    InvalidTarget(u64),
    #[error("target {target} exceeds {largest}, the largest tile on a {size}x{size} board")]
    UnreachableTarget { target: u64, size: usize, largest: u64 },
    #[error("board is {found}x{found} but the game is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("best score i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("best score file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

use crate::board::{MAX_BOARD_SIZE, MAX_TILE_EXPONENT, MIN_BOARD_SIZE};

/// Reasons a [`Board`](crate::Board) cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    SizeOutOfRange(usize),
    #[error("row {row} has {len} cells but the board is {size} wide")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("expected {expected} cells, got {len}")]
    CellCount { expected: usize, len: usize },
    #[error("{0} is not a power of two of at least 2")]
    InvalidTile(u64),
    #[error("exponent {0} exceeds the largest tile 2^{max}", max = MAX_TILE_EXPONENT)]
    ExponentOutOfRange(u8),
}

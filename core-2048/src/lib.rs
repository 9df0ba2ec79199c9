//! Board engine for the sliding-tile merging puzzle.
//!
//! Everything here is a pure function over [`Board`] values. Spawning, scoring
//! across turns and win/loss bookkeeping belong to the caller.

pub mod board;
pub mod direction;
pub mod error;
pub mod line;
pub mod moves;
pub mod status;

pub use board::{
    tile_value, Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_TILE_EXPONENT, MIN_BOARD_SIZE,
};
pub use direction::Direction;
pub use error::BoardError;
pub use line::{collapse_line, CollapsedLine};
pub use moves::{apply_move, move_down, move_left, move_right, move_up, MoveResult};
pub use status::{has_available_moves, has_reached_target};

/// Reverses every row.
pub fn mirror_board(board: &Board) -> Board {
    let size = board.size();

    let cells = (0..size)
        .flat_map(|i| board.row(i).iter().rev().copied())
        .collect();

    Board::from_cells(size, cells)
}

/// Swaps rows and columns.
pub fn transpose_board(board: &Board) -> Board {
    let size = board.size();

    let cells = (0..size)
        .flat_map(|col| (0..size).map(move |row| board.exponent(row, col)))
        .collect();

    Board::from_cells(size, cells)
}

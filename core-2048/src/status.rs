use crate::{board::{tile_value, Board}, transpose_board};

/// Whether any cell holds a value of at least `target`.
pub fn has_reached_target(board: &Board, target: u64) -> bool {
    board
        .exponents()
        .iter()
        .any(|&cell| tile_value(cell) >= target)
}

/// Whether some direction would change the board: an empty cell, or two equal
/// tiles side by side in a row or a column.
pub fn has_available_moves(board: &Board) -> bool {
    !board.is_full() || has_adjacent_pair(board) || has_adjacent_pair(&transpose_board(board))
}

fn has_adjacent_pair(board: &Board) -> bool {
    (0..board.size()).any(|i| {
        board
            .row(i)
            .windows(2)
            .any(|pair| pair[0] != 0 && pair[0] == pair[1])
    })
}

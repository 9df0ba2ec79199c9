use crate::{board::Board, direction::Direction, line::collapse_line, mirror_board, transpose_board};

/// Outcome of sliding a board in one direction, before any tile spawns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    /// Whether any cell differs from the input board.
    pub moved: bool,
    /// Sum of the tiles created by merges.
    pub gained_score: u64,
}

impl MoveResult {
    fn reoriented(self, transform: fn(&Board) -> Board) -> Self {
        Self {
            board: transform(&self.board),
            ..self
        }
    }
}

const MOVE_FUNCTIONS: [fn(&Board) -> MoveResult; 4] = [move_up, move_down, move_right, move_left];

pub fn apply_move(board: &Board, direction: Direction) -> MoveResult {
    MOVE_FUNCTIONS[direction as usize](board)
}

pub fn move_left(board: &Board) -> MoveResult {
    let size = board.size();

    let (cells, gained_score) = (0..size).map(|i| collapse_line(board.row(i))).fold(
        (Vec::with_capacity(size * size), 0),
        |(mut cells, score), line| {
            cells.extend_from_slice(&line.cells);
            (cells, score + line.score)
        },
    );

    let new_board = Board::from_cells(size, cells);
    let moved = new_board != *board;

    MoveResult {
        board: new_board,
        moved,
        gained_score,
    }
}

pub fn move_right(board: &Board) -> MoveResult {
    let board = mirror_board(board);

    move_left(&board).reoriented(mirror_board)
}

pub fn move_up(board: &Board) -> MoveResult {
    let board = transpose_board(board);

    move_left(&board).reoriented(transpose_board)
}

pub fn move_down(board: &Board) -> MoveResult {
    let board = transpose_board(board);

    move_right(&board).reoriented(transpose_board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u64]]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn left_merges_pair() {
        let result = move_left(&board(&[
            &[2, 2, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]));

        assert!(result.moved);
        assert_eq!(result.gained_score, 4);
        assert_eq!(result.board.rows()[0], [4, 0, 0, 0]);
        assert_eq!(result.board.tiles().count(), 1);
    }

    #[test]
    fn shift_without_merge_counts_as_moved() {
        let result = move_left(&board(&[&[0, 2, 0], &[0, 0, 0], &[0, 0, 4]]));

        assert!(result.moved);
        assert_eq!(result.gained_score, 0);
        assert_eq!(result.board, board(&[&[2, 0, 0], &[0, 0, 0], &[4, 0, 0]]));
    }

    #[test]
    fn each_direction_slides_the_right_way() {
        let start = board(&[&[2, 0, 2], &[0, 4, 0], &[2, 0, 8]]);

        assert_eq!(
            apply_move(&start, Direction::Left).board,
            board(&[&[4, 0, 0], &[4, 0, 0], &[2, 8, 0]])
        );
        assert_eq!(
            apply_move(&start, Direction::Right).board,
            board(&[&[0, 0, 4], &[0, 0, 4], &[0, 2, 8]])
        );
        assert_eq!(
            apply_move(&start, Direction::Up).board,
            board(&[&[4, 4, 2], &[0, 0, 8], &[0, 0, 0]])
        );
        assert_eq!(
            apply_move(&start, Direction::Down).board,
            board(&[&[0, 0, 0], &[0, 0, 2], &[4, 4, 8]])
        );
    }

    #[test]
    fn right_merges_from_the_far_edge() {
        let result = move_right(&board(&[&[2, 2, 2], &[0, 0, 0], &[0, 0, 0]]));

        assert_eq!(result.board.rows()[0], [0, 2, 4]);
        assert_eq!(result.gained_score, 4);
    }

    #[test]
    fn blocked_move_returns_input() {
        let start = board(&[&[2, 4], &[0, 0]]);
        let result = move_up(&start);

        assert!(!result.moved);
        assert_eq!(result.gained_score, 0);
        assert_eq!(result.board, start);
    }

    #[test]
    fn scores_add_across_rows() {
        let result = move_down(&board(&[&[4, 2], &[4, 2]]));

        assert_eq!(result.board, board(&[&[0, 0], &[8, 4]]));
        assert_eq!(result.gained_score, 12);
    }
}

use log::trace;
use rand::Rng;

use crate::{apply_move, Board, Direction, MoveResult};

/// Places a 2 (or, one time in ten, a 4) on a uniformly chosen empty cell.
///
/// A full board comes back unchanged.
pub fn spawn_tile(rng: &mut impl Rng, board: &Board) -> Board {
    let slot_count = board.empty_count();

    if slot_count > 0 {
        let rand = rng.gen_range(0..(slot_count * 10));

        let slot_idx = rand / 10;
        let exponent = if rand % 10 == 0 { 2 } else { 1 };

        board
            .empty_cells()
            .nth(slot_idx)
            .map_or_else(
                || board.clone(),
                |(row, col)| {
                    trace!("spawned {} at ({row}, {col})", 1 << exponent);
                    board.with_tile(row, col, exponent)
                },
            )
    } else {
        board.clone()
    }
}

/// `empty` with two tiles spawned on it, the opening position of a game.
pub fn new_game_board(rng: &mut impl Rng, empty: Board) -> Board {
    let board = spawn_tile(rng, &empty);

    spawn_tile(rng, &board)
}

/// The move in `direction`, or `None` when it would change nothing.
pub fn try_move(board: &Board, direction: Direction) -> Option<MoveResult> {
    let result = apply_move(board, direction);

    result.moved.then_some(result)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const TRIALS: usize = 20_000;

    fn board(rows: &[&[u64]]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn full_board_is_left_alone() {
        let full = board(&[&[2, 4], &[8, 16]]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(spawn_tile(&mut rng, &full), full);
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell() {
        let start = board(&[&[2, 0, 0], &[0, 8, 0], &[0, 0, 4]]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..200 {
            let spawned = spawn_tile(&mut rng, &start);

            let changed: Vec<_> = (0..3)
                .flat_map(|row| (0..3).map(move |col| (row, col)))
                .filter(|&(row, col)| spawned.get(row, col) != start.get(row, col))
                .collect();

            assert_eq!(changed.len(), 1);

            let (row, col) = changed[0];
            assert_eq!(start.get(row, col), 0);
            assert!(matches!(spawned.get(row, col), 2 | 4));
        }

        assert_eq!(start.empty_count(), 6);
    }

    #[test]
    fn about_one_spawn_in_ten_is_a_four() {
        let empty = Board::new(4).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let fours = (0..TRIALS)
            .filter(|_| spawn_tile(&mut rng, &empty).max_tile() == 4)
            .count();

        let share = fours as f64 / TRIALS as f64;
        assert!((0.08..0.12).contains(&share), "share of fours {share}");
    }

    #[test]
    fn spawn_position_is_uniform() {
        let start = board(&[&[0, 2], &[0, 0]]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut counts = [0usize; 3];

        for _ in 0..TRIALS {
            let spawned = spawn_tile(&mut rng, &start);
            let slot = start
                .empty_cells()
                .position(|(row, col)| spawned.get(row, col) != 0)
                .unwrap();

            counts[slot] += 1;
        }

        let expected = TRIALS as f64 / 3.0;

        for count in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "counts {counts:?}");
        }
    }

    #[test]
    fn opening_board_has_two_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let opening = new_game_board(&mut rng, Board::new(4).unwrap());

        assert_eq!(opening.tiles().count(), 2);
        assert!(opening.tiles().all(|value| value == 2 || value == 4));
    }

    #[test]
    fn try_move_rejects_blocked_directions() {
        let start = board(&[&[2, 0], &[4, 0]]);

        assert!(try_move(&start, Direction::Left).is_none());
        assert!(try_move(&start, Direction::Up).is_none());
        assert_eq!(
            try_move(&start, Direction::Right).map(|result| result.board),
            Some(board(&[&[0, 2], &[0, 4]]))
        );
    }
}

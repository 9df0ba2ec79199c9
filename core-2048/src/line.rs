use crate::board::{tile_value, MAX_TILE_EXPONENT};

/// One line after sliding toward index 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollapsedLine {
    pub cells: Vec<u8>,
    pub score: u64,
}

/// Slides and merges a line of exponents toward index 0.
///
/// Empty cells are dropped first, then equal neighbours are merged pairwise
/// from the front. The scan steps past both halves of a merge, so a tile built
/// by a merge never merges again in the same pass. The result is padded with
/// empty cells back to the input length.
///
/// Every cell must be `0` or an exponent of at most [`MAX_TILE_EXPONENT`], as
/// the cells of a [`Board`](crate::Board) are.
pub fn collapse_line(line: &[u8]) -> CollapsedLine {
    debug_assert!(
        line.iter().all(|&cell| cell <= MAX_TILE_EXPONENT),
        "line {line:?} holds an exponent above {MAX_TILE_EXPONENT}"
    );

    let mut cells = Vec::with_capacity(line.len());
    let mut score = 0;

    let mut tiles = line.iter().copied().filter(|&cell| cell != 0).peekable();

    while let Some(cell) = tiles.next() {
        if tiles.next_if_eq(&cell).is_some() {
            let merged = cell + 1;

            score += tile_value(merged);
            cells.push(merged);
        } else {
            cells.push(cell);
        }
    }

    cells.resize(line.len(), 0);

    CollapsedLine { cells, score }
}

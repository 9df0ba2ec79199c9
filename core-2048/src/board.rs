use std::fmt;

use crate::error::BoardError;

pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 7;
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest exponent a cell may hold. A full board of side `MAX_BOARD_SIZE` can
/// build at most `2^(size² + 1)`, so every tile and score fits in a `u64`.
pub const MAX_TILE_EXPONENT: u8 = (MAX_BOARD_SIZE * MAX_BOARD_SIZE + 1) as u8;

/// A square grid of tiles.
///
/// Cells are stored row-major as base-2 exponents: `0` is an empty cell and
/// `k` is the tile `2^k`. Boards are values; every transform returns a new
/// board and leaves its input alone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    /// An empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;

        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Builds a board from tile values, `0` meaning empty.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();

            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }

            for &value in values {
                cells.push(exponent_of(value)?);
            }
        }

        Ok(Self { size, cells })
    }

    /// Builds a board from row-major exponents.
    pub fn from_exponents(size: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        check_size(size)?;

        if cells.len() != size * size {
            return Err(BoardError::CellCount {
                expected: size * size,
                len: cells.len(),
            });
        }

        if let Some(&exponent) = cells.iter().find(|&&e| e > MAX_TILE_EXPONENT) {
            return Err(BoardError::ExponentOutOfRange(exponent));
        }

        Ok(Self { size, cells })
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), size * size);

        Self { size, cells }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn exponent(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    /// Tile value at `(row, col)`, `0` when the cell is empty.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        tile_value(self.exponent(row, col))
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn exponents(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> Vec<Vec<u64>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().copied().map(tile_value).collect())
            .collect()
    }

    /// Values of the non-empty cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = u64> + '_ {
        self.cells
            .iter()
            .filter(|&&cell| cell != 0)
            .map(|&cell| tile_value(cell))
    }

    /// Positions of the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;

        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 0)
            .map(move |(i, _)| (i / size, i % size))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&0)
    }

    /// An empty board of the same size.
    pub fn cleared(&self) -> Self {
        Self::from_cells(self.size, vec![0; self.cells.len()])
    }

    /// A copy of this board with `(row, col)` set to `exponent`, which must be
    /// at most [`MAX_TILE_EXPONENT`].
    pub fn with_tile(&self, row: usize, col: usize, exponent: u8) -> Self {
        debug_assert!(
            exponent <= MAX_TILE_EXPONENT,
            "exponent {exponent} exceeds {MAX_TILE_EXPONENT}"
        );

        let mut cells = self.cells.clone();
        cells[row * self.size + col] = exponent;

        Self::from_cells(self.size, cells)
    }

    pub fn max_tile(&self) -> u64 {
        self.cells.iter().copied().max().map_or(0, tile_value)
    }

    pub fn tile_sum(&self) -> u64 {
        self.tiles().sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();

        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i != 0 {
                writeln!(f)?;
            }

            for (j, &cell) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(" ")?;
                }

                if cell == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", tile_value(cell))?;
                }
            }
        }

        Ok(())
    }
}

/// Value of the tile stored as `exponent`, `0` for an empty cell.
pub const fn tile_value(exponent: u8) -> u64 {
    if exponent == 0 {
        0
    } else {
        1 << exponent
    }
}

fn exponent_of(value: u64) -> Result<u8, BoardError> {
    match value {
        0 => Ok(0),
        v if v >= 2 && v.is_power_of_two() => {
            let exponent = v.trailing_zeros() as u8;

            if exponent > MAX_TILE_EXPONENT {
                Err(BoardError::ExponentOutOfRange(exponent))
            } else {
                Ok(exponent)
            }
        }
        v => Err(BoardError::InvalidTile(v)),
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::SizeOutOfRange(size))
    }
}

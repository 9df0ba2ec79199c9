use std::io::{self, Write};

use lib_2048::{tile_value, Board, GameConfig, GameState, ScoreStore, Session};
use rand::Rng;

const SQUARE_HEIGHT: usize = 3;
const MIN_SQUARE_WIDTH: usize = 7;
const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

pub struct Renderer {
    size: usize,
    square_width: usize,
    top_row: String,
    separator_row: String,
    bottom_row: String,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        let size = config.size;

        // Wide enough for the largest tile this board can ever hold.
        let largest = tile_value((size * size + 1) as u8);
        let square_width = MIN_SQUARE_WIDTH.max(largest.to_string().len() + 2);

        let rule = |left: char, mid: char, right: char| {
            let bar = "━".repeat(square_width);
            let mut row = String::new();

            row.push(left);

            for i in 0..size {
                if i != 0 {
                    row.push(mid);
                }

                row.push_str(&bar);
            }

            row.push(right);
            row.push('\n');

            row
        };

        Self {
            size,
            square_width,
            top_row: rule('┏', '┳', '┓'),
            separator_row: rule('┣', '╋', '┫'),
            bottom_row: rule('┗', '┻', '┛'),
        }
    }

    /// Clears the screen and draws the whole game.
    pub fn draw<R, S>(&self, out: &mut impl Write, session: &Session<R, S>) -> io::Result<()>
    where
        R: Rng,
        S: ScoreStore,
    {
        out.write_all(b"\x1b[H\x1b[2J")?;

        writeln!(out, "Score: {}    Best: {}", session.score(), session.best())?;

        out.write_all(self.top_row.as_bytes())?;

        for row in 0..self.size {
            if row != 0 {
                out.write_all(self.separator_row.as_bytes())?;
            }

            self.draw_board_row(out, session.board(), row)?;
        }

        out.write_all(self.bottom_row.as_bytes())?;

        match session.state() {
            GameState::Playing => {
                out.write_all(b"arrows or wasd to move, [r]estart, [q]uit\n")?
            }
            GameState::Won => writeln!(
                out,
                "You reached {}! [c]ontinue, [r]estart, [q]uit",
                session.config().target
            )?,
            GameState::Lost => {
                out.write_all(b"Game over, no moves left. [c]ontinue, [r]estart, [q]uit\n")?
            }
        }

        out.flush()
    }

    fn draw_board_row(&self, out: &mut impl Write, board: &Board, row: usize) -> io::Result<()> {
        let width = self.square_width;

        for line in 0..SQUARE_HEIGHT {
            for col in 0..self.size {
                let exponent = board.exponent(row, col);

                let maybe_colour: Option<u8> = exponent
                    .checked_sub(1)
                    .map(|i| COLOUR_TABLE[i as usize % COLOUR_TABLE.len()]);

                match maybe_colour {
                    Some(colour) if line == SQUARE_HEIGHT / 2 => {
                        let num = tile_value(exponent);

                        write!(out, "┃\x1b[7m\x1b[{colour}m{num:^width$}\x1b[m")?;
                    }
                    Some(colour) => {
                        write!(out, "┃\x1b[{}m{:width$}\x1b[m", colour + 10, "")?;
                    }
                    None => write!(out, "┃{:width$}", "")?,
                }
            }

            out.write_all("┃\n".as_bytes())?;
        }

        Ok(())
    }
}

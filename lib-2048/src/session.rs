//! One player's game: board, score, best score and the win/loss banner.
//!
//! [`Session`] is the state a front end holds between key presses. It drives
//! the pure engine, spawns tiles through the injected generator and writes the
//! best score through the injected [`ScoreStore`].

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    error::ConfigError, has_available_moves, has_reached_target, logic, store::ScoreStore,
    tile_value, Board, BoardError, Direction, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

pub const DEFAULT_TARGET: u64 = 2048;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub target: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            target: DEFAULT_TARGET,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize, target: u64) -> Result<Self, ConfigError> {
        let config = Self { size, target };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Self { size, target } = *self;

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::SizeOutOfRange(size).into());
        }

        if target < 4 || !target.is_power_of_two() {
            return Err(ConfigError::InvalidTarget(target));
        }

        // Every cell doubled up from a 4 spawn, all merged into one tile.
        let largest = tile_value((size * size + 1) as u8);

        if target > largest {
            return Err(ConfigError::UnreachableTarget {
                target,
                size,
                largest,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// What a call to [`Session::perform`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// A win or loss banner is up; the move was not attempted.
    Ignored,
    /// Nothing could slide that way.
    NoChange,
    Moved { gained_score: u64, state: GameState },
}

pub struct Session<R, S> {
    config: GameConfig,
    rng: R,
    store: S,
    board: Board,
    score: u64,
    best: u64,
    state: GameState,
}

impl<R, S> Session<R, S>
where
    R: Rng,
    S: ScoreStore,
{
    /// Starts a game on an empty board with two spawned tiles.
    pub fn new(config: GameConfig, mut rng: R, store: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = logic::new_game_board(&mut rng, Board::new(config.size)?);

        Self::from_board(config, rng, store, board)
    }

    /// Starts a game from `board` with a score of zero.
    pub fn from_board(
        config: GameConfig,
        rng: R,
        mut store: S,
        board: Board,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if board.size() != config.size {
            return Err(ConfigError::SizeMismatch {
                expected: config.size,
                found: board.size(),
            });
        }

        let best = match store.load() {
            Ok(best) => best.unwrap_or(0),
            Err(err) => {
                warn!("could not read best score, starting from 0: {err}");
                0
            }
        };

        info!(
            "new {size}x{size} game, target {target}, best {best}",
            size = config.size,
            target = config.target
        );

        Ok(Self {
            config,
            rng,
            store,
            board,
            score: 0,
            best,
            state: GameState::Playing,
        })
    }

    /// Slides the board, spawning a tile and updating the score if anything
    /// moved.
    ///
    /// The win check runs after every accepted move, so the banner comes back
    /// while the target tile is still on the board. A win hides a loss.
    pub fn perform(&mut self, direction: Direction) -> Turn {
        if self.state != GameState::Playing {
            debug!("ignoring {direction} while {:?}", self.state);
            return Turn::Ignored;
        }

        let Some(result) = logic::try_move(&self.board, direction) else {
            debug!("{direction} changes nothing");
            return Turn::NoChange;
        };

        self.board = logic::spawn_tile(&mut self.rng, &result.board);
        self.score = self.score.saturating_add(result.gained_score);

        debug!(
            "moved {direction} for {}, score {}\n{}",
            result.gained_score, self.score, self.board
        );

        self.record_best();

        if has_reached_target(&self.board, self.config.target) {
            self.state = GameState::Won;
            info!("reached {} with score {}", self.config.target, self.score);
        } else if !has_available_moves(&self.board) {
            self.state = GameState::Lost;
            info!("no moves left, final score {}", self.score);
        }

        Turn::Moved {
            gained_score: result.gained_score,
            state: self.state,
        }
    }

    /// Clears a win or loss banner, keeping the board and score.
    pub fn dismiss(&mut self) {
        if self.state != GameState::Playing {
            debug!("dismissed {:?}", self.state);
            self.state = GameState::Playing;
        }
    }

    /// Throws the current game away and deals a fresh board.
    pub fn restart(&mut self) {
        self.board = logic::new_game_board(&mut self.rng, self.board.cleared());
        self.score = 0;
        self.state = GameState::Playing;

        info!("restarted, best {}", self.best);
    }

    fn record_best(&mut self) {
        if self.score > self.best {
            self.best = self.score;

            if let Err(err) = self.store.save(self.best) {
                warn!("could not save best score {}: {err}", self.best);
            }
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

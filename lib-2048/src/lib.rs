pub use core_2048::*;

pub mod error;
pub mod logic;
pub mod rng_seeds;
pub mod session;
pub mod store;

pub use error::{ConfigError, StoreError};
pub use session::{GameConfig, GameState, Session, Turn, DEFAULT_TARGET};
pub use store::{FileStore, MemoryStore, ScoreStore};

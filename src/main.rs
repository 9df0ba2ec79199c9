use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use lib_2048::{
    rng_seeds, FileStore, GameConfig, MemoryStore, ScoreStore, Session, Turn,
    DEFAULT_BOARD_SIZE, DEFAULT_TARGET,
};
use log::debug;
use rand::Rng;

mod input;
mod logging;
mod render;
mod terminal;

use input::{Key, Keyboard};
use render::Renderer;

/// Slide and merge tiles in the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width and height
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Tile value that wins the game
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: u64,

    /// Seed for tile spawns, to replay a game
    #[arg(long)]
    seed: Option<u64>,

    /// File that keeps the best score
    #[arg(long, default_value = ".merge-2048-best.json")]
    best_file: PathBuf,

    /// Keep the best score for this run only
    #[arg(long)]
    no_save: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn play_interactive<R, S>(
    out: &mut impl Write,
    keyboard: &mut Keyboard<impl Read>,
    session: &mut Session<R, S>,
    renderer: &Renderer,
) -> io::Result<()>
where
    R: Rng,
    S: ScoreStore,
{
    renderer.draw(out, session)?;

    while let Some(keys) = keyboard.read_keys()? {
        let mut changed = false;

        for key in keys {
            match key {
                Key::Move(direction) => {
                    changed |= matches!(session.perform(direction), Turn::Moved { .. });
                }
                Key::Restart => {
                    session.restart();
                    changed = true;
                }
                Key::Dismiss => {
                    session.dismiss();
                    changed = true;
                }
                Key::Quit => return Ok(()),
            }
        }

        if changed {
            renderer.draw(out, session)?;
        }
    }

    debug!("input closed");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.verbose, args.log_file.as_deref())
        .context("could not open the log file")?;

    let config = GameConfig::new(args.size, args.target).context("invalid game settings")?;

    let store: Box<dyn ScoreStore> = if args.no_save {
        Box::new(MemoryStore::new())
    } else {
        let store = FileStore::new(args.best_file);
        debug!("best score file {}", store.path().display());

        Box::new(store)
    };

    let mut session = Session::new(config, rng_seeds::seeded_rng(args.seed), store)?;
    let renderer = Renderer::new(&config);

    let mut stdout = io::stdout().lock();
    let stdin = io::stdin().lock();

    let raw_mode =
        terminal::RawMode::enable(&stdin).context("could not put the terminal in raw mode")?;
    let mut keyboard = Keyboard::new(stdin).context("could not build the key bindings")?;

    let result = play_interactive(&mut stdout, &mut keyboard, &mut session, &renderer);

    drop(raw_mode);
    result?;

    writeln!(
        stdout,
        "Final score {}, best {}",
        session.score(),
        session.best()
    )?;

    Ok(())
}

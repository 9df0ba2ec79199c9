use std::{fs::File, io, path::Path};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// The board owns the terminal, so by default only warnings are printed.
/// `verbose` lowers the level to debug, and `log_file` sends everything to a
/// file instead of stderr. `RUST_LOG` overrides both levels.
pub fn init(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();

    Ok(())
}

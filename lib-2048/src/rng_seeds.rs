use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator used for tile spawns. A fixed seed replays the same game for
/// the same inputs; `None` seeds from the OS.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            debug!("seeding spawns with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

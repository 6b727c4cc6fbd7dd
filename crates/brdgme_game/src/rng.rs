//! Injected randomness.
//!
//! Games never reach for a thread-local RNG. The host seeds a [`GameRng`]
//! and passes it in, so a game can be replayed from its seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random number generator handed to games.
pub type GameRng = ChaCha8Rng;

/// Creates a generator from a seed.
#[must_use]
pub fn game_rng(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

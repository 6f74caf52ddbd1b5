//! Deterministic simulation RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness.
//! All simulation systems should use `ResMut<SimRng>` instead of
//! `rand::thread_rng()` so that identical seeds produce identical
//! worlds.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource for all simulation randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();
    }
}

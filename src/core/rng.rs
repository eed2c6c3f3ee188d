//! Seedable random source shared by the simulation.
//!
//! All gameplay randomness (spawn placement, loot rolls, the Elder's shot
//! angles) draws from this one resource so a fixed seed reproduces a run.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The game's injected random number generator.
///
/// Re-seeded at the start of every session from `SessionConfig::rng_seed`,
/// or from entropy when no seed is configured.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_seed(None)
    }
}

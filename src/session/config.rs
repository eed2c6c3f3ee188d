//! Session configuration consumed once at run start.
//!
//! In the full product this record comes from the profile/menu layer
//! (hero selection, loadout, difficulty). That layer is out of scope
//! here, so a compiled-in default profile stands in; the simulation only
//! ever reads this resource.

use bevy::prelude::*;

use crate::player::HeroStats;

/// Everything the simulation needs to know to run one session.
#[derive(Resource, Clone, Debug)]
pub struct SessionConfig {
    /// Hero stats from the selected character
    pub hero: HeroStats,
    /// Weapon registry identifier for the equipped weapon
    pub weapon_id: String,
    /// Session length in seconds; surviving it is a victory
    pub time_limit_secs: f32,
    /// Fixed RNG seed for reproducible runs; None seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hero: HeroStats {
                max_health: 100,
                speed_factor: 1.0,
            },
            weapon_id: "revolver".to_string(),
            time_limit_secs: 300.0,
            rng_seed: None,
        }
    }
}

//! Global events used for cross-system communication.
//!
//! Events are the core's outbound surface: the collision systems report
//! kills, the session reports the end-of-run summary, and out-of-scope
//! collaborators (HUD, persistence) consume them without the simulation
//! knowing who listens.

use bevy::prelude::*;

use crate::enemies::EnemyKind;
use crate::items::ItemKind;

/// Sent once for every enemy killed by the player.
///
/// The session counts these for the final score; the item module listens
/// to drop loot at the corpse position.
#[derive(Event, Debug, Clone, Copy)]
pub struct KillEvent {
    /// Which archetype died
    pub kind: EnemyKind,
    /// World position of the corpse
    pub position: Vec2,
}

/// Sent exactly once when the run ends, with the final summary.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    /// True when the player survived the full time limit
    pub victory: bool,
    /// Enemies killed during the run
    pub kills: u32,
    /// Seconds survived
    pub survival_secs: f32,
    /// Final score: whole seconds survived times kill count
    pub score: u64,
}

/// Sent when the player picks up an item.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemPickupEvent {
    pub kind: ItemKind,
}

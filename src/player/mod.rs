//! Player module - movement, aiming, buffs, and the follow camera.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{nearest_position, spawn_player, GameCamera};
pub use plugin::PlayerPlugin;

//! Items module - transient pickups dropped by dead enemies.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::ItemPlugin;
pub use systems::spawn_item;

//! UI module - HUD and menu screens.

mod hud;
mod plugin;

pub use plugin::UiPlugin;

//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! the combat simulation only advances in the InGame state, while menu
//! systems only run in the MainMenu state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to load data definitions
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when a run starts
/// - `Paused` freezes the simulation but keeps the world visible
/// - `GameOver` when the run ends (time limit reached or player died)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading enemy and weapon definitions
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// The run has ended
    GameOver,
}

//! Developer cheat keys, kept apart from the core simulation systems.
//!
//! Active only during gameplay:
//! - F5: skip the clock forward one minute
//! - F6: refill health (only when below half)
//! - F7: force the boss to spawn now
//! - F8: toggle infinite ammo

use bevy::prelude::*;

use super::plugin::SessionClock;
use crate::combat::{Health, Weapon};
use crate::core::{GameRng, GameState};
use crate::enemies::{spawn_enemy, EnemyRegistry, SpawnDirector};
use crate::player::Player;

/// Seconds added by one time-skip press.
const TIME_SKIP_SECS: f32 = 60.0;

/// Register the cheat systems.
pub fn setup_debug_systems(app: &mut App) {
    app.add_systems(
        Update,
        (skip_time, refill_health, force_boss, toggle_infinite_ammo)
            .run_if(in_state(GameState::InGame)),
    );
}

fn skip_time(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SessionClock>,
    mut director: ResMut<SpawnDirector>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        clock.elapsed += TIME_SKIP_SECS;
        director.skip(TIME_SKIP_SECS);
        info!("Cheat: skipped {TIME_SKIP_SECS}s forward");
    }
}

/// Refill is gated: it only works while health is below half, so it
/// cannot be held down for permanent invulnerability.
fn refill_health(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F6) {
        return;
    }
    let Ok(mut health) = player_query.get_single_mut() else {
        return;
    };
    if health.fraction() < 0.5 && !health.is_dead() {
        let maximum = health.maximum;
        health.heal(maximum);
        info!("Cheat: health refilled");
    }
}

fn force_boss(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut director: ResMut<SpawnDirector>,
    mut rng: ResMut<GameRng>,
    registry: Res<EnemyRegistry>,
    player_query: Query<&Transform, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F7) {
        return;
    }
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    if let Some(order) = director.force_boss(player_pos, &mut rng.0) {
        spawn_enemy(&mut commands, &registry, order);
        info!("Cheat: boss spawn forced");
    }
}

fn toggle_infinite_ammo(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut weapon_query: Query<&mut Weapon, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F8) {
        return;
    }
    for mut weapon in weapon_query.iter_mut() {
        weapon.infinite_ammo = !weapon.infinite_ammo;
        info!(
            "Cheat: infinite ammo {}",
            if weapon.infinite_ammo { "ON" } else { "OFF" }
        );
    }
}

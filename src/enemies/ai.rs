//! Enemy behavior systems, one per archetype.
//!
//! Trees have no behavior and appear in no system here; they are plain
//! static bodies the collision systems still see.

use bevy::prelude::*;
use rand::Rng;

use super::components::*;
use crate::combat::spawn_bullet;
use crate::combat::Faction;
use crate::core::GameRng;
use crate::player::Player;
use crate::session::SessionClock;

/// Speed of bullets fired by enemies.
const ENEMY_BULLET_SPEED: f32 = 320.0;
const ENEMY_BULLET_RADIUS: f32 = 4.0;

/// Tentacles seek the player at constant speed.
pub fn tentacle_seek(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&mut Transform, &EnemyKind, &EnemyStats), With<Enemy>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (mut transform, kind, stats) in enemy_query.iter_mut() {
        if *kind != EnemyKind::Tentacle {
            continue;
        }
        let pos = transform.translation.truncate();
        let Some(direction) = (player_pos - pos).try_normalize() else {
            continue;
        };
        let step = direction * stats.move_speed * time.delta_secs();
        transform.translation += step.extend(0.0);
    }
}

/// Eyebats close in only while outside their keep-away distance, and fire
/// one aimed bullet on a fixed cadence regardless of range.
pub fn eyebat_ai(
    mut commands: Commands,
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (&mut Transform, &EnemyKind, &EnemyStats, &mut ShotClock),
        With<Enemy>,
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (mut transform, kind, stats, mut shot_clock) in enemy_query.iter_mut() {
        if *kind != EnemyKind::Eyebat {
            continue;
        }
        let pos = transform.translation.truncate();
        let displacement = player_pos - pos;

        if displacement.length_squared() > EYEBAT_KEEP_DISTANCE * EYEBAT_KEEP_DISTANCE {
            if let Some(direction) = displacement.try_normalize() {
                let step = direction * stats.move_speed * dt;
                transform.translation += step.extend(0.0);
            }
        }

        if shot_clock.tick(dt, EYEBAT_SHOT_PERIOD) {
            let aim = displacement.try_normalize().unwrap_or(Vec2::X);
            spawn_bullet(
                &mut commands,
                pos,
                aim * ENEMY_BULLET_SPEED,
                stats.contact_damage,
                ENEMY_BULLET_RADIUS,
                Faction::Enemy,
            );
        }
    }
}

/// The Elder: seek-and-dash movement, continuous random radial fire, and
/// a shield that shrinks with session time.
pub fn elder_ai(
    mut commands: Commands,
    time: Res<Time>,
    clock: Res<SessionClock>,
    mut rng: ResMut<GameRng>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&mut Transform, &EnemyStats, &mut ElderState), With<Enemy>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (mut transform, stats, mut elder) in enemy_query.iter_mut() {
        let pos = transform.translation.truncate();
        let dir_to_player = (player_pos - pos).try_normalize().unwrap_or(Vec2::X);

        let velocity = elder.advance_movement(dt, dir_to_player, stats.move_speed);
        transform.translation += (velocity * dt).extend(0.0);

        elder.shield_radius = ElderState::shield_radius_at(clock.elapsed, clock.time_limit);

        for _ in 0..elder.shots_due(dt) {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            spawn_bullet(
                &mut commands,
                pos,
                Vec2::from_angle(angle) * ENEMY_BULLET_SPEED,
                stats.contact_damage,
                ENEMY_BULLET_RADIUS,
                Faction::Enemy,
            );
        }
    }
}

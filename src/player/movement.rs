//! Top-down player movement, aiming, and the follow camera.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::*;
use crate::combat::{Health, Weapon, WeaponRegistry};
use crate::core::geometry::clamp_to_world;
use crate::core::GameState;
use crate::enemies::Enemy;
use crate::session::{SessionConfig, SessionScoped};

/// Marker component for the gameplay camera.
#[derive(Component)]
pub struct GameCamera;

/// Set up player movement and aiming systems.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<AimTarget>().add_systems(
        Update,
        (
            player_movement,
            tick_buffs,
            toggle_auto_aim,
            update_aim,
            camera_follow,
        )
            .run_if(in_state(GameState::InGame)),
    );
}

/// Handle 8-directional keyboard movement.
///
/// Arrow keys and WASD both work; diagonals are normalized so they are no
/// faster than the cardinals.
fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<(&mut Transform, &HeroStats, &ActiveBuffs), With<Player>>,
) {
    let Ok((mut transform, hero, buffs)) = query.get_single_mut() else {
        return;
    };

    let mut direction = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }

    if direction == Vec2::ZERO {
        return;
    }
    direction = direction.normalize();

    let speed = PLAYER_BASE_SPEED * hero.speed_factor * buffs.speed_multiplier();
    let next = transform.translation.truncate() + direction * speed * time.delta_secs();
    transform.translation = clamp_to_world(next).extend(transform.translation.z);
}

/// Advance the player's timed buffs.
fn tick_buffs(time: Res<Time>, mut query: Query<&mut ActiveBuffs>) {
    for mut buffs in query.iter_mut() {
        buffs.tick(time.delta_secs());
    }
}

/// Toggle auto-aim with Tab.
fn toggle_auto_aim(keyboard: Res<ButtonInput<KeyCode>>, mut aim: ResMut<AimTarget>) {
    if keyboard.just_pressed(KeyCode::Tab) {
        aim.auto_aim = !aim.auto_aim;
        info!("Auto-aim: {}", if aim.auto_aim { "ON" } else { "OFF" });
    }
}

/// Pick the position closest to `from`.
pub fn nearest_position(from: Vec2, candidates: &[Vec2]) -> Option<Vec2> {
    candidates
        .iter()
        .copied()
        .min_by(|a, b| {
            from.distance_squared(*a)
                .total_cmp(&from.distance_squared(*b))
        })
}

/// Refresh the aim target from the cursor, or from the nearest living
/// enemy when auto-aim is on.
fn update_aim(
    mut aim: ResMut<AimTarget>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<GameCamera>>,
    player_query: Query<&Transform, With<Player>>,
    enemy_query: Query<&Transform, (With<Enemy>, Without<Player>)>,
) {
    if aim.auto_aim {
        if let Ok(player_transform) = player_query.get_single() {
            let from = player_transform.translation.truncate();
            let positions: Vec<Vec2> = enemy_query
                .iter()
                .map(|t| t.translation.truncate())
                .collect();
            if let Some(target) = nearest_position(from, &positions) {
                aim.point = target;
                return;
            }
        }
        // No enemy alive; fall through to the cursor
    }

    let Ok(window) = window_query.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        if let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) {
            aim.point = world;
        }
    }
}

/// Keep the camera centered on the player.
fn camera_follow(
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<GameCamera>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    for mut camera_transform in camera_query.iter_mut() {
        camera_transform.translation.x = player_transform.translation.x;
        camera_transform.translation.y = player_transform.translation.y;
    }
}

/// Spawn the player entity and the follow camera.
pub fn spawn_player(
    commands: &mut Commands,
    config: &SessionConfig,
    weapons: &WeaponRegistry,
) -> Entity {
    let hero = config.hero.clone();
    let spec = weapons.get(&config.weapon_id);

    let player = commands
        .spawn((
            Player,
            Health::new(hero.max_health),
            Weapon::new(spec),
            ActiveBuffs::default(),
            hero,
            Sprite {
                color: Color::srgb(0.85, 0.85, 0.9),
                custom_size: Some(PLAYER_HALF_EXTENT * 2.0),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
            SessionScoped,
        ))
        .id();

    commands.spawn((Camera2d, GameCamera, SessionScoped));

    player
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_position_selects_the_closer_enemy() {
        let from = Vec2::ZERO;
        let far = Vec2::new(500.0, 0.0);
        let near = Vec2::new(0.0, 120.0);
        assert_eq!(nearest_position(from, &[far, near]), Some(near));
        assert_eq!(nearest_position(from, &[near, far]), Some(near));
    }

    #[test]
    fn nearest_position_with_no_candidates_is_none() {
        assert_eq!(nearest_position(Vec2::ZERO, &[]), None);
    }
}

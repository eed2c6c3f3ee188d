//! In-game HUD - health bar, ammo, clock, and kill counter.

use bevy::prelude::*;

use crate::combat::{Health, Weapon};
use crate::core::GameState;
use crate::player::Player;
use crate::session::{SessionClock, SessionStats};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for the ammo readout.
#[derive(Component)]
pub struct AmmoText;

/// Marker for the remaining-time readout.
#[derive(Component)]
pub struct ClockText;

/// Marker for the kill counter.
#[derive(Component)]
pub struct KillText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_health_bar, update_ammo_text, update_clock_text, update_kill_text)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::FlexEnd,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Clock, top-center feel: kept simple in the corner stack
            parent.spawn((
                Text::new("05:00"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                ClockText,
            ));

            parent.spawn((
                Text::new("Kills: 0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
                KillText,
            ));

            parent.spawn((
                Text::new("Ammo: -/-"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.75, 0.5)),
                AmmoText,
            ));

            // Health bar background
            parent
                .spawn((
                    Node {
                        width: Val::Px(260.0),
                        height: Val::Px(18.0),
                        margin: UiRect::top(Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.15, 0.05, 0.05)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.7, 0.15, 0.15)),
                        HealthBar,
                    ));
                });
        });
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Scale the health bar fill with the player's health fraction.
fn update_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    for mut node in bar_query.iter_mut() {
        node.width = Val::Percent(health.fraction().max(0.0) * 100.0);
    }
}

/// Show the magazine, or the reload in progress.
fn update_ammo_text(
    player_query: Query<&Weapon, With<Player>>,
    mut text_query: Query<&mut Text, With<AmmoText>>,
) {
    let Ok(weapon) = player_query.get_single() else {
        return;
    };
    for mut text in text_query.iter_mut() {
        **text = if weapon.reloading {
            "Ammo: reloading...".to_string()
        } else {
            format!("Ammo: {}/{}", weapon.ammo, weapon.spec.max_ammo)
        };
    }
}

/// Count down the time remaining in the session.
fn update_clock_text(clock: Res<SessionClock>, mut text_query: Query<&mut Text, With<ClockText>>) {
    let remaining = (clock.time_limit - clock.elapsed).max(0.0) as u32;
    for mut text in text_query.iter_mut() {
        **text = format!("{:02}:{:02}", remaining / 60, remaining % 60);
    }
}

fn update_kill_text(stats: Res<SessionStats>, mut text_query: Query<&mut Text, With<KillText>>) {
    for mut text in text_query.iter_mut() {
        **text = format!("Kills: {}", stats.kills);
    }
}

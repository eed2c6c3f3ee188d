//! Session lifecycle - setup, clock, score, and the game-over transition.

use bevy::prelude::*;

use super::config::SessionConfig;
use crate::combat::{Health, WeaponRegistry};
use crate::core::{GameOverEvent, GameRng, GameState, KillEvent};
use crate::enemies::{spawn_enemy, EnemyKind, EnemyRegistry, SpawnDirector};
use crate::player::{spawn_player, AimTarget, Player};

/// Marker for every entity belonging to the current session; all of them
/// are despawned together when the session is torn down.
#[derive(Component)]
pub struct SessionScoped;

/// The session's clock, advanced every simulated frame.
#[derive(Resource, Debug)]
pub struct SessionClock {
    pub elapsed: f32,
    pub time_limit: f32,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            time_limit: 300.0,
        }
    }
}

/// Counters accumulated over the run.
#[derive(Resource, Debug, Default)]
pub struct SessionStats {
    pub kills: u32,
    pub experience: u32,
}

/// The last run's summary, kept for the game-over screen.
#[derive(Resource, Debug, Default)]
pub struct LastSessionReport(pub Option<GameOverEvent>);

/// Final score: whole seconds survived times kills, computed once at game
/// over rather than accumulated per kill.
pub fn final_score(kills: u32, survival_secs: f32) -> u64 {
    survival_secs.floor() as u64 * kills as u64
}

/// Session plugin - run setup/teardown, clock, and end-of-run reporting.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionConfig>()
            .init_resource::<SessionClock>()
            .init_resource::<SessionStats>()
            .init_resource::<LastSessionReport>()
            .add_systems(OnEnter(GameState::Loading), finish_loading)
            // Resuming from pause re-enters InGame; only a fresh session
            // (no player alive) gets set up
            .add_systems(
                OnEnter(GameState::InGame),
                setup_session.run_if(no_player_exists),
            )
            .add_systems(OnExit(GameState::GameOver), cleanup_session)
            .add_systems(OnEnter(GameState::MainMenu), cleanup_session)
            .add_systems(
                Update,
                (count_kills, resolve_session_end)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );

        super::debug::setup_debug_systems(app);
    }
}

fn no_player_exists(player_query: Query<(), With<Player>>) -> bool {
    player_query.is_empty()
}

/// Definitions are loaded synchronously in OnEnter(Loading), so the menu
/// is ready immediately afterwards.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Build a fresh session from the config: seed the RNG, reset clock and
/// stats, spawn the player and camera, scatter the initial trees, and arm
/// the spawn director.
pub fn setup_session(
    mut commands: Commands,
    config: Res<SessionConfig>,
    weapons: Res<WeaponRegistry>,
    enemies: Res<EnemyRegistry>,
) {
    let mut rng = GameRng::from_seed(config.rng_seed);

    spawn_player(&mut commands, &config, &weapons);
    for order in SpawnDirector::seed_world(&mut rng.0) {
        spawn_enemy(&mut commands, &enemies, order);
    }

    commands.insert_resource(SpawnDirector::new(config.time_limit_secs));
    commands.insert_resource(SessionClock {
        elapsed: 0.0,
        time_limit: config.time_limit_secs,
    });
    commands.insert_resource(SessionStats::default());
    commands.insert_resource(AimTarget::default());
    commands.insert_resource(rng);

    info!(
        "Session started: {}s time limit, weapon '{}'",
        config.time_limit_secs, config.weapon_id
    );
}

/// Tear the session down once it is over.
fn cleanup_session(mut commands: Commands, scoped: Query<Entity, With<SessionScoped>>) {
    for entity in scoped.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Count outbound kill events into the session stats.
fn count_kills(mut kills: EventReader<KillEvent>, mut stats: ResMut<SessionStats>) {
    for kill in kills.read() {
        stats.kills += 1;
        if kill.kind == EnemyKind::Elder {
            info!("The Elder has fallen");
        }
    }
}

/// How this frame ends the run, if at all. Surviving to the time limit is
/// a victory even when the player dies on that same frame.
fn session_outcome(elapsed: f32, time_limit: f32, player_dead: bool) -> Option<bool> {
    if elapsed >= time_limit {
        Some(true)
    } else if player_dead {
        Some(false)
    } else {
        None
    }
}

/// Advance the clock and end the run on victory or defeat. A single
/// decision point, so the game-over event fires exactly once per session.
fn resolve_session_end(
    time: Res<Time>,
    mut clock: ResMut<SessionClock>,
    player_query: Query<&Health, With<Player>>,
    stats: Res<SessionStats>,
    mut game_over: EventWriter<GameOverEvent>,
    mut report: ResMut<LastSessionReport>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    clock.elapsed += time.delta_secs();
    let player_dead = player_query
        .get_single()
        .map(|health| health.is_dead())
        .unwrap_or(false);

    if let Some(victory) = session_outcome(clock.elapsed, clock.time_limit, player_dead) {
        finish_session(
            victory,
            &clock,
            &stats,
            &mut game_over,
            &mut report,
            &mut next_state,
        );
    }
}

fn finish_session(
    victory: bool,
    clock: &SessionClock,
    stats: &SessionStats,
    game_over: &mut EventWriter<GameOverEvent>,
    report: &mut LastSessionReport,
    next_state: &mut NextState<GameState>,
) {
    let survival_secs = clock.elapsed.min(clock.time_limit);
    let summary = GameOverEvent {
        victory,
        kills: stats.kills,
        survival_secs,
        score: final_score(stats.kills, survival_secs),
    };
    info!(
        "Session over ({}): {} kills, {:.0}s, score {}",
        if victory { "victory" } else { "defeat" },
        summary.kills,
        summary.survival_secs,
        summary.score
    );
    game_over.send(summary);
    report.0 = Some(summary);
    next_state.set(GameState::GameOver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_survival_seconds_times_kills() {
        assert_eq!(final_score(5, 120.0), 600);
    }

    #[test]
    fn score_uses_whole_seconds() {
        assert_eq!(final_score(3, 99.9), 297);
        assert_eq!(final_score(0, 250.0), 0);
    }

    #[test]
    fn run_continues_while_alive_and_under_the_limit() {
        assert_eq!(session_outcome(10.0, 300.0, false), None);
        assert_eq!(session_outcome(10.0, 300.0, true), Some(false));
        assert_eq!(session_outcome(300.0, 300.0, false), Some(true));
    }

    #[test]
    fn reaching_the_limit_while_dying_is_one_victory() {
        // Clock crossing and death on the same frame resolve to a single
        // outcome, with survival taking precedence
        assert_eq!(session_outcome(300.0, 300.0, true), Some(true));
    }
}

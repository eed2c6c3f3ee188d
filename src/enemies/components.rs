//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Seconds between the Eyebat's aimed shots.
pub const EYEBAT_SHOT_PERIOD: f32 = 3.0;

/// The Eyebat stops approaching once within this distance of the player.
pub const EYEBAT_KEEP_DISTANCE: f32 = 200.0;

/// Seconds between the Elder's dashes, and how long one dash lasts.
pub const ELDER_DASH_PERIOD: f32 = 5.0;
pub const ELDER_DASH_DURATION: f32 = 1.0;

/// Dash speed, far above the Elder's base walk speed.
pub const ELDER_DASH_SPEED: f32 = 300.0;

/// Random-angle bullets the Elder emits per second.
pub const ELDER_SHOTS_PER_SEC: f32 = 3.0;

/// Shield radius at the start of a session; decays linearly to zero over
/// the session time limit.
pub const ELDER_SHIELD_INITIAL: f32 = 400.0;

/// The closed set of enemy archetypes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    /// Stationary obstacle seeded across the world at session start
    Tree,
    /// Melee chaser
    Tentacle,
    /// Ranged harasser that keeps its distance
    Eyebat,
    /// The boss: dashes, radial fire, decaying shield
    Elder,
}

impl EnemyKind {
    /// Parse the identifier used by data file names.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "tree" => Some(Self::Tree),
            "tentacle" => Some(Self::Tentacle),
            "eyebat" => Some(Self::Eyebat),
            "elder" => Some(Self::Elder),
            _ => None,
        }
    }

    /// Collision half-extents of the body box.
    pub fn half_extent(self) -> Vec2 {
        match self {
            Self::Tree => Vec2::splat(24.0),
            Self::Tentacle => Vec2::splat(18.0),
            Self::Eyebat => Vec2::splat(14.0),
            Self::Elder => Vec2::splat(48.0),
        }
    }
}

/// Per-archetype stats, loaded once from data files.
#[derive(Component, Clone, Debug)]
pub struct EnemyStats {
    pub max_health: i32,
    pub contact_damage: i32,
    pub move_speed: f32,
    pub can_shoot: bool,
}

/// Countdown between an enemy's shots.
#[derive(Component, Debug)]
pub struct ShotClock {
    pub remaining: f32,
}

impl ShotClock {
    pub fn new(period: f32) -> Self {
        Self { remaining: period }
    }

    /// Tick the clock; true when a shot is due (and the clock restarts).
    pub fn tick(&mut self, dt: f32, period: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining += period;
            true
        } else {
            false
        }
    }
}

/// Boss-only state: dash cycle, radial fire cadence, and shield.
#[derive(Component, Debug)]
pub struct ElderState {
    dash_clock: f32,
    dash_remaining: f32,
    dash_direction: Vec2,
    shot_accumulator: f32,
    /// Updated every frame from the session clock; collision reads it.
    pub shield_radius: f32,
}

impl Default for ElderState {
    fn default() -> Self {
        Self {
            dash_clock: 0.0,
            dash_remaining: 0.0,
            dash_direction: Vec2::X,
            shot_accumulator: 0.0,
            shield_radius: ELDER_SHIELD_INITIAL,
        }
    }
}

impl ElderState {
    /// Advance the dash cycle and return this frame's velocity.
    ///
    /// Every `ELDER_DASH_PERIOD` seconds the Elder locks onto the player's
    /// position at that moment and dashes toward it for
    /// `ELDER_DASH_DURATION` seconds at dash speed; otherwise it walks
    /// toward the player at `base_speed`.
    pub fn advance_movement(&mut self, dt: f32, dir_to_player: Vec2, base_speed: f32) -> Vec2 {
        if self.dash_remaining > 0.0 {
            self.dash_remaining -= dt;
            return self.dash_direction * ELDER_DASH_SPEED;
        }
        self.dash_clock += dt;
        if self.dash_clock >= ELDER_DASH_PERIOD {
            self.dash_clock -= ELDER_DASH_PERIOD;
            self.dash_remaining = ELDER_DASH_DURATION;
            self.dash_direction = dir_to_player;
            return self.dash_direction * ELDER_DASH_SPEED;
        }
        dir_to_player * base_speed
    }

    /// How many radial shots are due this frame, at a steady
    /// `ELDER_SHOTS_PER_SEC` rate independent of frame timing.
    pub fn shots_due(&mut self, dt: f32) -> u32 {
        self.shot_accumulator += dt * ELDER_SHOTS_PER_SEC;
        let due = self.shot_accumulator.floor();
        self.shot_accumulator -= due;
        due as u32
    }

    /// Shield radius as a deterministic function of session time: linear
    /// decay from the initial radius to zero at the time limit.
    pub fn shield_radius_at(elapsed: f32, time_limit: f32) -> f32 {
        (ELDER_SHIELD_INITIAL * (1.0 - elapsed / time_limit)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elder_walks_then_dashes_on_schedule() {
        let mut elder = ElderState::default();
        let dir = Vec2::X;
        // Walk for just under the dash period
        let mut t = 0.0;
        while t < ELDER_DASH_PERIOD - 0.2 {
            let v = elder.advance_movement(0.1, dir, 40.0);
            assert!(v.abs_diff_eq(dir * 40.0, 1e-4));
            t += 0.1;
        }
        // Crossing the period starts a dash at dash speed
        let v = elder.advance_movement(0.3, dir, 40.0);
        assert!(v.abs_diff_eq(dir * ELDER_DASH_SPEED, 1e-4));
    }

    #[test]
    fn elder_dash_keeps_its_initial_direction() {
        let mut elder = ElderState::default();
        // Trigger a dash toward +X
        elder.advance_movement(ELDER_DASH_PERIOD, Vec2::X, 40.0);
        // Player moved; dash direction must not retarget
        let v = elder.advance_movement(0.5, Vec2::Y, 40.0);
        assert!(v.abs_diff_eq(Vec2::X * ELDER_DASH_SPEED, 1e-4));
        // Dash over, walking resumes toward the new direction
        elder.advance_movement(0.6, Vec2::Y, 40.0);
        let v = elder.advance_movement(0.1, Vec2::Y, 40.0);
        assert!(v.abs_diff_eq(Vec2::Y * 40.0, 1e-4));
    }

    #[test]
    fn elder_fires_three_shots_per_second() {
        let mut elder = ElderState::default();
        let mut shots = 0;
        for _ in 0..4 {
            shots += elder.shots_due(0.25);
        }
        assert_eq!(shots, 3);
    }

    #[test]
    fn shield_decays_linearly_to_zero() {
        let limit = 300.0;
        assert_eq!(ElderState::shield_radius_at(0.0, limit), ELDER_SHIELD_INITIAL);
        let half = ElderState::shield_radius_at(limit / 2.0, limit);
        assert!((half - ELDER_SHIELD_INITIAL / 2.0).abs() < 1e-3);
        assert_eq!(ElderState::shield_radius_at(limit, limit), 0.0);
        // Never negative past the limit
        assert_eq!(ElderState::shield_radius_at(limit * 2.0, limit), 0.0);
    }

    #[test]
    fn shot_clock_restarts_after_firing() {
        let mut clock = ShotClock::new(EYEBAT_SHOT_PERIOD);
        assert!(!clock.tick(1.0, EYEBAT_SHOT_PERIOD));
        assert!(!clock.tick(1.0, EYEBAT_SHOT_PERIOD));
        assert!(clock.tick(1.0, EYEBAT_SHOT_PERIOD));
        assert!(!clock.tick(1.0, EYEBAT_SHOT_PERIOD));
    }
}

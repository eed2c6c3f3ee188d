//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Collision half-extents of the player's body box.
pub const PLAYER_HALF_EXTENT: Vec2 = Vec2::splat(16.0);

/// Base movement speed in units per second, scaled by the hero's speed
/// factor and any active speed buff.
pub const PLAYER_BASE_SPEED: f32 = 200.0;

/// Hero stats consumed once from the session configuration.
#[derive(Component, Clone, Debug)]
pub struct HeroStats {
    pub max_health: i32,
    pub speed_factor: f32,
}

/// Where the weapon is aimed this frame, in world coordinates.
///
/// Normally the cursor position; with auto-aim on, the nearest living
/// enemy's position (cursor again when no enemy lives).
#[derive(Resource, Default, Debug)]
pub struct AimTarget {
    pub point: Vec2,
    pub auto_aim: bool,
}

/// Timed pickup effects on the player.
#[derive(Component, Debug, Default)]
pub struct ActiveBuffs {
    speed_remaining: f32,
    damage_remaining: f32,
}

/// How long one buff pickup lasts.
pub const BUFF_DURATION: f32 = 10.0;

const SPEED_BUFF_FACTOR: f32 = 1.5;
const DAMAGE_BUFF_FACTOR: i32 = 2;

impl ActiveBuffs {
    pub fn apply_speed(&mut self) {
        self.speed_remaining = BUFF_DURATION;
    }

    pub fn apply_damage(&mut self) {
        self.damage_remaining = BUFF_DURATION;
    }

    pub fn tick(&mut self, dt: f32) {
        self.speed_remaining = (self.speed_remaining - dt).max(0.0);
        self.damage_remaining = (self.damage_remaining - dt).max(0.0);
    }

    pub fn speed_multiplier(&self) -> f32 {
        if self.speed_remaining > 0.0 {
            SPEED_BUFF_FACTOR
        } else {
            1.0
        }
    }

    pub fn damage_multiplier(&self) -> i32 {
        if self.damage_remaining > 0.0 {
            DAMAGE_BUFF_FACTOR
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffs_expire_after_their_duration() {
        let mut buffs = ActiveBuffs::default();
        buffs.apply_speed();
        buffs.apply_damage();
        assert_eq!(buffs.speed_multiplier(), 1.5);
        assert_eq!(buffs.damage_multiplier(), 2);

        buffs.tick(BUFF_DURATION - 0.1);
        assert_eq!(buffs.speed_multiplier(), 1.5);

        buffs.tick(0.1);
        assert_eq!(buffs.speed_multiplier(), 1.0);
        assert_eq!(buffs.damage_multiplier(), 1);
    }

    #[test]
    fn fresh_aim_target_is_cursor_mode_at_origin() {
        // Session setup inserts this default so a new run never inherits
        // the previous run's target or auto-aim toggle
        let aim = AimTarget::default();
        assert!(!aim.auto_aim);
        assert_eq!(aim.point, Vec2::ZERO);
    }

    #[test]
    fn reapplying_a_buff_refreshes_the_timer() {
        let mut buffs = ActiveBuffs::default();
        buffs.apply_speed();
        buffs.tick(BUFF_DURATION * 0.9);
        buffs.apply_speed();
        buffs.tick(BUFF_DURATION * 0.9);
        assert_eq!(buffs.speed_multiplier(), 1.5);
    }
}

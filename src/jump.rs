//! Charge-to-impulse resolution.
//!
//! Pure functions mapping accumulated hold time to a launch velocity. The
//! force ramp is linear in hold time and clamped on both ends, so no
//! configuration can push a NaN or unbounded value into the physics body.

use bevy::prelude::*;

use crate::config::WallJumpConfig;
use crate::state::WallSide;

/// Classification of a release by its hold duration.
///
/// Currently observational: the force output is fully determined by the ramp
/// and does not branch on the tap kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    /// Held for less than the short tap threshold.
    Short,
    /// Held for at least the short tap threshold.
    Long,
}

/// The result of resolving one jump release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpOutcome {
    /// Velocity to assign to the body (replacing, not adding to, the current
    /// velocity).
    pub velocity: Vec2,
    /// Force magnitude the ramp produced.
    pub applied_force: f32,
    /// The wall side after the jump (always the opposite of the side jumped
    /// from).
    pub new_side: WallSide,
    /// Short/long classification of the release.
    pub tap: TapKind,
}

/// Map a hold duration to the applied jump force.
///
/// Linear ramp from `min_force` at zero hold to `max_force` at
/// `max_hold_time`, clamped beyond both ends. A non-positive `max_hold_time`
/// saturates the ramp so every release charges fully.
pub fn applied_force(hold_time: f32, config: &WallJumpConfig) -> f32 {
    let (min, max) = config.force_bounds();
    let ramp = if config.max_hold_time > 0.0 {
        hold_time / config.max_hold_time * config.max_force
    } else {
        config.max_force
    };
    ramp.clamp(min, max)
}

/// Classify a release as a short or long tap.
pub fn classify_tap(hold_time: f32, config: &WallJumpConfig) -> TapKind {
    if hold_time < config.short_tap_threshold {
        TapKind::Short
    } else {
        TapKind::Long
    }
}

/// Resolve a jump released after `hold_time` seconds while attached to
/// `side`.
///
/// The launch direction is decided by the pre-jump side: up-and-right off the
/// left wall, up-and-left off the right wall. The returned side is toggled.
pub fn resolve(hold_time: f32, side: WallSide, config: &WallJumpConfig) -> JumpOutcome {
    let force = applied_force(hold_time, config);
    JumpOutcome {
        velocity: side.launch_direction() * force,
        applied_force: force,
        new_side: side.opposite(),
        tap: classify_tap(hold_time, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WallJumpConfig {
        WallJumpConfig::default()
            .with_force_range(6.0, 12.0)
            .with_max_hold_time(0.2)
    }

    #[test]
    fn zero_hold_hits_the_floor() {
        assert_eq!(applied_force(0.0, &config()), 6.0);
    }

    #[test]
    fn full_hold_hits_the_ceiling() {
        assert_eq!(applied_force(0.2, &config()), 12.0);
    }

    #[test]
    fn overcharge_is_capped() {
        assert_eq!(applied_force(0.5, &config()), 12.0);
    }

    #[test]
    fn half_hold_still_floors() {
        // 0.1 / 0.2 * 12 = 6, which exactly meets the minimum
        assert_eq!(applied_force(0.1, &config()), 6.0);
    }

    #[test]
    fn ramp_is_bounded_and_monotonic() {
        let config = config();
        let mut previous = 0.0;
        for i in 0..=40 {
            let hold = i as f32 * 0.01;
            let force = applied_force(hold, &config);
            assert!(force >= config.min_force && force <= config.max_force);
            assert!(force >= previous, "ramp decreased at hold={hold}");
            previous = force;
        }
    }

    #[test]
    fn degenerate_hold_window_saturates() {
        let config = WallJumpConfig::default().with_max_hold_time(0.0);

        let force = applied_force(0.0, &config);
        assert!(force.is_finite());
        assert_eq!(force, config.max_force);
        assert_eq!(applied_force(1.0, &config), config.max_force);
    }

    #[test]
    fn inverted_force_range_does_not_panic() {
        let config = WallJumpConfig::default().with_force_range(20.0, 10.0);

        let force = applied_force(0.0, &config);
        assert!(force.is_finite());
        assert!(force <= 10.0);
    }

    #[test]
    fn tap_classification() {
        let config = config();
        assert_eq!(classify_tap(0.05, &config), TapKind::Short);
        assert_eq!(classify_tap(0.1, &config), TapKind::Long);
        assert_eq!(classify_tap(0.3, &config), TapKind::Long);
    }

    #[test]
    fn left_wall_launches_up_and_right() {
        let outcome = resolve(0.2, WallSide::Left, &config());

        assert_eq!(outcome.velocity, Vec2::new(12.0, 12.0));
        assert_eq!(outcome.new_side, WallSide::Right);
    }

    #[test]
    fn right_wall_launches_up_and_left() {
        let outcome = resolve(0.0, WallSide::Right, &config());

        assert_eq!(outcome.velocity, Vec2::new(-6.0, 6.0));
        assert_eq!(outcome.new_side, WallSide::Left);
    }

    #[test]
    fn direction_depends_only_on_pre_jump_side() {
        let config = config();
        for hold in [0.0, 0.1, 0.2, 1.0] {
            assert!(resolve(hold, WallSide::Left, &config).velocity.x > 0.0);
            assert!(resolve(hold, WallSide::Right, &config).velocity.x < 0.0);
        }
    }

    #[test]
    fn every_jump_toggles_exactly_once() {
        let outcome = resolve(0.1, WallSide::Left, &config());
        assert_eq!(outcome.new_side, WallSide::Right);

        let back = resolve(0.1, outcome.new_side, &config());
        assert_eq!(back.new_side, WallSide::Left);
    }
}

//! Controller configuration component.
//!
//! [`WallJumpConfig`] holds the immutable tuning parameters for a wall jumping
//! character: the charge-to-force ramp, probe length, slide speed, and the
//! duration of the turn animation after a wall switch.

use bevy::prelude::*;

/// Configuration parameters for the wall jump controller.
///
/// The jump force is a linear ramp over the held charge:
/// `clamp(hold_time / max_hold_time * max_force, min_force, max_force)`.
/// `min_force` is the floor even for a zero-length tap.
///
/// Invariant: `min_force <= max_force`. A config that violates this produces
/// a force capped at `max_force` rather than a panic.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct WallJumpConfig {
    /// Baseline jump force a neutral tap is tuned around. `min_force`
    /// defaults to this value.
    pub base_force: f32,

    /// Minimum force applied on release, regardless of how short the hold was.
    pub min_force: f32,

    /// Maximum force the charge ramp can reach.
    pub max_force: f32,

    /// Seconds of held charge needed to reach `max_force`. Values <= 0 make
    /// every release a full-force jump.
    pub max_hold_time: f32,

    /// Holds shorter than this classify as a short tap (observational only;
    /// the force output does not branch on it).
    pub short_tap_threshold: f32,

    /// Length of the wall proximity probe, cast from the body center toward
    /// the current wall side.
    pub probe_distance: f32,

    /// Vertical velocity assigned every fixed step while sliding. Negative is
    /// downward.
    pub slide_speed: f32,

    /// Seconds the turn animation takes after a wall switch.
    pub turn_duration: f32,
}

impl Default for WallJumpConfig {
    fn default() -> Self {
        Self {
            base_force: 6.0,
            min_force: 6.0,
            max_force: 12.0,
            max_hold_time: 0.2,
            short_tap_threshold: 0.1,
            probe_distance: 0.5,
            slide_speed: -2.0,
            turn_duration: 0.3,
        }
    }
}

impl WallJumpConfig {
    /// Create a config with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the force range applied on release.
    pub fn with_force_range(mut self, min_force: f32, max_force: f32) -> Self {
        self.min_force = min_force;
        self.max_force = max_force;
        self
    }

    /// Set the hold time needed to charge to `max_force`.
    pub fn with_max_hold_time(mut self, max_hold_time: f32) -> Self {
        self.max_hold_time = max_hold_time;
        self
    }

    /// Set the wall probe length.
    pub fn with_probe_distance(mut self, probe_distance: f32) -> Self {
        self.probe_distance = probe_distance;
        self
    }

    /// Set the slide velocity (negative = downward).
    pub fn with_slide_speed(mut self, slide_speed: f32) -> Self {
        self.slide_speed = slide_speed;
        self
    }

    /// Set the turn animation duration.
    pub fn with_turn_duration(mut self, turn_duration: f32) -> Self {
        self.turn_duration = turn_duration;
        self
    }

    /// Force bounds with the `min_force <= max_force` invariant enforced.
    /// Used by the resolver so clamping can never panic.
    pub(crate) fn force_bounds(&self) -> (f32, f32) {
        (self.min_force.min(self.max_force), self.max_force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning() {
        let config = WallJumpConfig::default();

        assert_eq!(config.min_force, 6.0);
        assert_eq!(config.max_force, 12.0);
        assert_eq!(config.max_hold_time, 0.2);
        assert_eq!(config.short_tap_threshold, 0.1);
        assert_eq!(config.probe_distance, 0.5);
        assert_eq!(config.slide_speed, -2.0);
        assert_eq!(config.turn_duration, 0.3);
        assert!(config.min_force <= config.max_force);
    }

    #[test]
    fn builder_methods() {
        let config = WallJumpConfig::new()
            .with_force_range(4.0, 20.0)
            .with_max_hold_time(0.5)
            .with_probe_distance(1.5)
            .with_slide_speed(-8.0)
            .with_turn_duration(0.1);

        assert_eq!(config.min_force, 4.0);
        assert_eq!(config.max_force, 20.0);
        assert_eq!(config.max_hold_time, 0.5);
        assert_eq!(config.probe_distance, 1.5);
        assert_eq!(config.slide_speed, -8.0);
        assert_eq!(config.turn_duration, 0.1);
    }

    #[test]
    fn force_bounds_tolerate_inverted_range() {
        let config = WallJumpConfig::new().with_force_range(15.0, 10.0);
        let (lo, hi) = config.force_bounds();

        assert!(lo <= hi);
        assert_eq!(hi, 10.0);
    }
}

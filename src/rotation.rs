//! Turn animation task.
//!
//! [`RotationTask`] is a bounded, per-frame-resumable interpolation that
//! reorients the character after a wall switch. It is a plain component
//! polled once per frame by the animation system; there is no blocking wait.
//! Inserting a new task on an entity replaces any task still in flight, so a
//! jump taken mid-turn cancels the old turn rather than racing it.

use bevy::prelude::*;

/// Shortest-arc angle interpolation in degrees.
///
/// Moves from `from` toward `to` along the arc of at most 180 degrees, at
/// fraction `t` (clamped to `[0, 1]`).
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    from + delta * t.clamp(0.0, 1.0)
}

/// An in-flight turn toward a wall-facing orientation.
///
/// Angles are in degrees. The sampled angle interpolates from `start_angle`
/// to `target_angle` over `duration` seconds; the *displayed* angle is the
/// negated sample (the rendering convention flips sign). On completion the
/// displayed angle is pinned to exactly `-target_angle` so no interpolation
/// error survives the animation.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
pub struct RotationTask {
    /// Angle captured from the body when the turn started.
    pub start_angle: f32,
    /// Angle the turn converges to.
    pub target_angle: f32,
    /// Seconds elapsed since the turn started. Monotonically increasing.
    pub elapsed: f32,
    /// Total turn duration in seconds. Non-positive durations finish
    /// immediately.
    pub duration: f32,
}

impl RotationTask {
    /// Start a turn from `start_angle` toward `target_angle` over `duration`
    /// seconds.
    pub fn new(start_angle: f32, target_angle: f32, duration: f32) -> Self {
        Self {
            start_angle,
            target_angle,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance the task by one frame's delta time.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Whether the turn has run its full duration.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Completion fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// The interpolated angle at the current progress. Exactly
    /// `target_angle` once finished.
    pub fn sample(&self) -> f32 {
        if self.finished() {
            self.target_angle
        } else {
            lerp_angle(self.start_angle, self.target_angle, self.progress())
        }
    }

    /// The angle to hand the renderer this frame: the negated sample, pinned
    /// to exactly `-target_angle` on completion.
    pub fn display_angle(&self) -> f32 {
        -self.sample()
    }
}

//! Character state components.
//!
//! The [`WallJumpState`] component is the single owner of the controller's
//! contact and charge state. Marker components are synced from it every frame
//! so downstream systems can use them in query filters.

use bevy::prelude::*;

/// Which of the two canonical walls the character is currently attached to
/// (or was last attached to, while airborne).
///
/// Every resolved jump toggles the side exactly once.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    /// Attached to the left wall, launching rightward.
    #[default]
    Left,
    /// Attached to the right wall, launching leftward.
    Right,
}

impl WallSide {
    /// The side jumped to from this one.
    pub fn opposite(self) -> Self {
        match self {
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
        }
    }

    /// Direction the wall probe is cast in while on this side.
    pub fn probe_direction(self) -> Vec2 {
        match self {
            WallSide::Left => Vec2::NEG_X,
            WallSide::Right => Vec2::X,
        }
    }

    /// Launch direction for a jump taken from this side (unit-per-axis, scaled
    /// by the applied force; the character always leaves up and away).
    pub fn launch_direction(self) -> Vec2 {
        match self {
            WallSide::Left => Vec2::new(1.0, 1.0),
            WallSide::Right => Vec2::new(-1.0, 1.0),
        }
    }

    /// Target angle (degrees) the character turns toward after landing on this
    /// side. The right-wall orientation is a 180-degree flip expressed as a
    /// rotation rather than a scale mirror.
    pub fn facing_angle(self) -> f32 {
        match self {
            WallSide::Left => 0.0,
            WallSide::Right => -180.0,
        }
    }
}

/// Core wall jump state component.
///
/// Created once when the character spawns and owned by it for its lifetime.
/// Two detection paths write here: the continuous probe (authoritative for
/// initial stick-on and position snap) and the discrete contact events
/// (authoritative for exit). See the systems module for the merge rule.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct WallJumpState {
    /// Side the character is currently (or was last) attached to.
    pub wall_side: WallSide,
    /// Whether the character is in contact with a wall.
    pub touching_wall: bool,
    /// Whether the character is sliding down the wall. Implies contact;
    /// cleared on jump and on contact end.
    pub sliding: bool,
    /// Seconds the jump input has been continuously held since the last reset.
    pub hold_time: f32,
}

impl Default for WallJumpState {
    fn default() -> Self {
        Self {
            wall_side: WallSide::Left,
            touching_wall: false,
            sliding: false,
            hold_time: 0.0,
        }
    }
}

impl WallJumpState {
    /// Create the initial state (airborne, facing the left wall).
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the character as stuck to the wall and sliding.
    pub(crate) fn attach(&mut self) {
        self.touching_wall = true;
        self.sliding = true;
    }

    /// Clear contact state after a discrete separation notification.
    pub(crate) fn detach(&mut self) {
        self.touching_wall = false;
        self.sliding = false;
    }
}

/// Marker component indicating the character is sliding down a wall.
///
/// Synced automatically from [`WallJumpState::sliding`].
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct Sliding;

/// Marker component indicating the character has no wall contact.
///
/// Synced automatically from [`WallJumpState::touching_wall`].
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct Airborne;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_left_wall() {
        let state = WallJumpState::new();
        assert_eq!(state.wall_side, WallSide::Left);
        assert!(!state.touching_wall);
        assert!(!state.sliding);
        assert_eq!(state.hold_time, 0.0);
    }

    #[test]
    fn side_toggles_both_ways() {
        assert_eq!(WallSide::Left.opposite(), WallSide::Right);
        assert_eq!(WallSide::Right.opposite(), WallSide::Left);
    }

    #[test]
    fn probe_points_at_current_side() {
        assert_eq!(WallSide::Left.probe_direction(), Vec2::NEG_X);
        assert_eq!(WallSide::Right.probe_direction(), Vec2::X);
    }

    #[test]
    fn launch_is_up_and_away() {
        assert_eq!(WallSide::Left.launch_direction(), Vec2::new(1.0, 1.0));
        assert_eq!(WallSide::Right.launch_direction(), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn facing_angles() {
        assert_eq!(WallSide::Left.facing_angle(), 0.0);
        assert_eq!(WallSide::Right.facing_angle(), -180.0);
    }

    #[test]
    fn attach_and_detach() {
        let mut state = WallJumpState::new();

        state.attach();
        assert!(state.touching_wall);
        assert!(state.sliding);

        state.detach();
        assert!(!state.touching_wall);
        assert!(!state.sliding);
    }
}

//! Jump input intent component.
//!
//! The controller is input-source agnostic: your code polls the keyboard,
//! gamepad, touch, AI, or network and hands the controller a boolean held
//! state every frame. The controller detects the release edge itself.

use bevy::prelude::*;

/// Jump input state for one character.
///
/// Set the held state once per frame, before the controller systems run:
///
/// ```rust,ignore
/// // From the mouse:
/// intent.set_held(buttons.pressed(MouseButton::Left));
/// // From a gamepad:
/// intent.set_held(gamepad.pressed(GamepadButton::South));
/// ```
///
/// While the character touches a wall and `held` is true, charge accumulates.
/// The frame `held` goes from true to false, the controller resolves the jump
/// (or just resets the charge if there is no wall contact).
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct JumpIntent {
    /// Whether the jump input is currently held.
    pub held: bool,
    /// Previous frame's held state, for edge detection. Managed internally.
    pub(crate) held_prev: bool,
    /// Whether the input was released this frame. Computed internally from
    /// the held state transition.
    pub(crate) released: bool,
}

impl JumpIntent {
    /// Create a new idle intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current held state. Call once per frame from your input code.
    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    /// Whether the jump input is currently held.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Whether the input was released this frame (valid after the controller's
    /// charge system has run).
    pub fn was_released(&self) -> bool {
        self.released
    }

    /// Recompute the release edge from the held transition. Called once per
    /// frame by the charge tracking system.
    pub(crate) fn refresh_edge(&mut self) {
        self.released = self.held_prev && !self.held;
        self.held_prev = self.held;
    }
}

//! Wall probe component and surface tagging.
//!
//! The backend's sensor system fills [`WallProbe`] once per frame; the core
//! systems consume the result. The probe fields are public so external debug
//! rendering (gizmo lines, overlays) can visualize the cast without any
//! dependency from the core on a renderer.

use bevy::prelude::*;

use crate::collision::ProbeHit;

/// Tag component for colliders the controller treats as walls.
///
/// Both the proximity probe and the discrete contact events filter on this
/// tag; geometry without it is ignored entirely.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct WallSurface;

/// Per-character wall probe.
///
/// A single ray cast from the body center toward the current wall side, with
/// length taken from the config. Refreshed every frame by the backend's
/// sensor system.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct WallProbe {
    /// Probe origin in world space (the body center this frame).
    pub origin: Vec2,
    /// Probe direction (unit vector toward the current wall side).
    pub direction: Vec2,
    /// Maximum probe length.
    pub length: f32,
    /// This frame's probe result. `None` is a normal miss, not an error.
    #[reflect(ignore)]
    pub result: Option<ProbeHit>,
}

impl WallProbe {
    /// World-space end point of the probe at full length.
    pub fn end(&self) -> Vec2 {
        self.origin + self.direction * self.length
    }

    /// Start and end points of the probe, for debug line rendering.
    pub fn line(&self) -> (Vec2, Vec2) {
        (self.origin, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_end_point() {
        let probe = WallProbe {
            origin: Vec2::new(2.0, 3.0),
            direction: Vec2::NEG_X,
            length: 0.5,
            result: None,
        };

        assert_eq!(probe.end(), Vec2::new(1.5, 3.0));
    }

    #[test]
    fn probe_line_spans_origin_to_end() {
        let probe = WallProbe {
            origin: Vec2::ZERO,
            direction: Vec2::X,
            length: 2.0,
            result: None,
        };

        let (start, end) = probe.line();
        assert_eq!(start, Vec2::ZERO);
        assert_eq!(end, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn default_probe_misses() {
        let probe = WallProbe::default();
        assert!(probe.result.is_none());
    }
}

//! Probe query result structures.
//!
//! These structures hold the results of physics queries (raycasts) used
//! for wall proximity detection.

use bevy::prelude::*;

/// Information about a wall probe raycast hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProbeHit {
    /// Distance from the probe origin to the hit point.
    pub distance: f32,
    /// Normal of the surface at the hit point.
    pub normal: Vec2,
    /// World position of the hit point.
    pub point: Vec2,
    /// Entity that was hit (if known).
    pub entity: Option<Entity>,
}

impl ProbeHit {
    /// Create a hit result.
    pub fn new(distance: f32, normal: Vec2, point: Vec2, entity: Option<Entity>) -> Self {
        Self {
            distance,
            normal,
            point,
            entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_hit_fields() {
        let hit = ProbeHit::new(0.4, Vec2::X, Vec2::new(-3.0, 7.0), None);

        assert_eq!(hit.distance, 0.4);
        assert_eq!(hit.normal, Vec2::X);
        assert_eq!(hit.point, Vec2::new(-3.0, 7.0));
    }

    #[test]
    fn probe_hit_with_entity() {
        let entity = Entity::from_raw(42);
        let hit = ProbeHit::new(0.1, Vec2::NEG_X, Vec2::ZERO, Some(entity));

        assert_eq!(hit.entity, Some(entity));
    }
}

//! Physics backend abstraction.
//!
//! This module defines the trait that physics backends must implement to work
//! with the wall jump controller. The controller never integrates motion
//! itself; it reads and assigns kinematic state through this trait and lets
//! the engine do the simulation.
//!
//! A backend has two halves:
//! - the trait methods below, giving the core systems direct access to the
//!   body's velocity, position, and rotation;
//! - a plugin (returned by [`CharacterPhysicsBackend::plugin`]) that registers
//!   the engine-specific sensor systems: filling each character's
//!   [`WallProbe`] and translating the engine's contact notifications into
//!   [`WallContactEvent`]s. Sensor systems belong in
//!   [`WallJumpSet::Sensors`].
//!
//! [`WallProbe`]: crate::detection::WallProbe
//! [`WallContactEvent`]: crate::events::WallContactEvent
//! [`WallJumpSet::Sensors`]: crate::WallJumpSet

use bevy::prelude::*;

/// Trait for physics backend implementations.
///
/// Implement this trait to integrate a physics engine with the wall jump
/// controller. For an example implementation, see the `rapier` module's
/// `Rapier2dBackend` (enabled with the `rapier2d` feature).
pub trait CharacterPhysicsBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend's sensor systems.
    fn plugin() -> impl Plugin;

    /// Get the current linear velocity of an entity.
    fn get_velocity(world: &World, entity: Entity) -> Vec2;

    /// Assign the linear velocity of an entity, replacing the current value.
    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec2);

    /// Get the current position of an entity.
    fn get_position(world: &World, entity: Entity) -> Vec2;

    /// Teleport an entity, bypassing normal integration.
    fn set_position(world: &mut World, entity: Entity, position: Vec2);

    /// Get the current rotation angle of an entity (radians).
    fn get_rotation(world: &World, entity: Entity) -> f32;

    /// Set the rotation angle of an entity (radians).
    fn set_rotation(world: &mut World, entity: Entity, angle: f32);
}

/// Empty plugin for backends that don't need additional setup.
pub struct NoOpBackendPlugin;

impl Plugin for NoOpBackendPlugin {
    fn build(&self, _app: &mut App) {}
}

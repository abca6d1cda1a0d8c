//! Rapier2D physics backend implementation.
//!
//! This module provides the physics backend for Bevy Rapier2D.
//! Enable with the `rapier2d` feature.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::backend::CharacterPhysicsBackend;
use crate::collision::ProbeHit;
use crate::config::WallJumpConfig;
use crate::detection::{WallProbe, WallSurface};
use crate::events::{ContactPhase, WallContactEvent};
use crate::state::WallJumpState;
use crate::WallJumpSet;

/// Rapier2D physics backend for the wall jump controller.
///
/// Kinematic access goes through `bevy_rapier2d`'s `Velocity` component and
/// the entity `Transform`. Probe raycasts and contact event translation are
/// handled by dedicated sensor systems registered by [`Rapier2dBackendPlugin`],
/// which receive `RapierContext` as a system parameter.
pub struct Rapier2dBackend;

impl CharacterPhysicsBackend for Rapier2dBackend {
    fn plugin() -> impl Plugin {
        Rapier2dBackendPlugin
    }

    fn get_velocity(world: &World, entity: Entity) -> Vec2 {
        world
            .get::<Velocity>(entity)
            .map(|v| v.linvel)
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(world: &mut World, entity: Entity, velocity: Vec2) {
        if let Some(mut vel) = world.get_mut::<Velocity>(entity) {
            vel.linvel = velocity;
        }
    }

    fn get_position(world: &World, entity: Entity) -> Vec2 {
        world
            .get::<Transform>(entity)
            .map(|t| t.translation.xy())
            .or_else(|| {
                world
                    .get::<GlobalTransform>(entity)
                    .map(|t| t.translation().xy())
            })
            .unwrap_or(Vec2::ZERO)
    }

    fn set_position(world: &mut World, entity: Entity, position: Vec2) {
        if let Some(mut transform) = world.get_mut::<Transform>(entity) {
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }
    }

    fn get_rotation(world: &World, entity: Entity) -> f32 {
        world
            .get::<Transform>(entity)
            .map(|t| {
                let (_, _, z) = t.rotation.to_euler(EulerRot::XYZ);
                z
            })
            .unwrap_or(0.0)
    }

    fn set_rotation(world: &mut World, entity: Entity, angle: f32) {
        if let Some(mut transform) = world.get_mut::<Transform>(entity) {
            transform.rotation = Quat::from_rotation_z(angle);
        }
    }
}

/// Plugin that sets up Rapier2D-specific sensor systems for the controller.
pub struct Rapier2dBackendPlugin;

impl Plugin for Rapier2dBackendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (rapier_wall_probe, rapier_contact_events).in_set(WallJumpSet::Sensors),
        );
    }
}

/// Bundle of Rapier components a wall jumping character needs.
///
/// Rotation is locked because the controller scripts the body's orientation
/// directly through the `Transform`. `ActiveEvents::COLLISION_EVENTS` is
/// required for the discrete contact path to fire at all.
#[derive(Bundle)]
pub struct RapierWallJumpBundle {
    /// Dynamic rigid body driven by assigned velocities.
    pub rigid_body: RigidBody,
    /// Linear/angular velocity state.
    pub velocity: Velocity,
    /// Locks physics-driven rotation.
    pub locked_axes: LockedAxes,
    /// Enables collision event generation for this body.
    pub active_events: ActiveEvents,
}

impl Default for RapierWallJumpBundle {
    fn default() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            velocity: Velocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            active_events: ActiveEvents::COLLISION_EVENTS,
        }
    }
}

impl RapierWallJumpBundle {
    /// Create the default bundle.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cast each character's wall probe against `WallSurface` colliders.
fn rapier_wall_probe(
    rapier: ReadRapierContext,
    walls: Query<(), With<WallSurface>>,
    mut characters: Query<(
        Entity,
        &Transform,
        &WallJumpState,
        &WallJumpConfig,
        &mut WallProbe,
    )>,
) {
    let context = rapier.single();

    for (entity, transform, state, config, mut probe) in &mut characters {
        probe.origin = transform.translation.xy();
        probe.direction = state.wall_side.probe_direction();
        probe.length = config.probe_distance;

        let predicate = |candidate: Entity| walls.contains(candidate);
        let filter = QueryFilter::new()
            .exclude_collider(entity)
            .predicate(&predicate);

        probe.result = context
            .cast_ray_and_get_normal(probe.origin, probe.direction, probe.length, true, filter)
            .map(|(hit_entity, intersection)| {
                ProbeHit::new(
                    intersection.time_of_impact,
                    intersection.normal,
                    intersection.point,
                    Some(hit_entity),
                )
            });
    }
}

/// Translate Rapier collision events on `WallSurface` colliders into
/// `WallContactEvent`s for the controller.
fn rapier_contact_events(
    mut collisions: EventReader<CollisionEvent>,
    walls: Query<(), With<WallSurface>>,
    characters: Query<(), With<WallJumpState>>,
    mut contacts: EventWriter<WallContactEvent>,
) {
    for collision in collisions.read() {
        let (first, second, phase) = match *collision {
            CollisionEvent::Started(a, b, _) => (a, b, ContactPhase::Started),
            CollisionEvent::Stopped(a, b, _) => (a, b, ContactPhase::Stopped),
        };

        let character = if characters.contains(first) && walls.contains(second) {
            first
        } else if characters.contains(second) && walls.contains(first) {
            second
        } else {
            continue;
        };

        contacts.send(WallContactEvent { character, phase });
    }
}

//! Core controller systems.
//!
//! These systems implement the wall jump behavior. The ones that touch the
//! physics body are generic over the backend and written as exclusive world
//! systems in a collect-then-apply style, so backends are free to store
//! kinematic state in whatever components they use.
//!
//! Two detection paths write contact state and the merge rule is explicit:
//! the discrete contact events are authoritative for *exit* (only
//! [`ingest_wall_contacts`] ever clears the flags outside a jump), while the
//! continuous probe is authoritative for *entry* and the position snap
//! ([`stick_to_wall`] only acts when the character is not yet touching).

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use crate::backend::CharacterPhysicsBackend;
use crate::config::WallJumpConfig;
use crate::detection::WallProbe;
use crate::events::{AudioCue, ChargeReadout, ContactPhase, CueKind, WallContactEvent};
use crate::intent::JumpIntent;
use crate::jump;
use crate::rotation::RotationTask;
use crate::state::{Airborne, Sliding, WallJumpState};

/// Apply discrete contact notifications from the physics engine.
///
/// Contact begin sticks the character to the wall, zeroes its velocity, and
/// fires the collide cue. Contact end is the only non-jump path that clears
/// the contact flags.
pub fn ingest_wall_contacts<B: CharacterPhysicsBackend>(
    world: &mut World,
    mut cursor: Local<EventCursor<WallContactEvent>>,
) {
    let pending: Vec<WallContactEvent> = {
        let events = world.resource::<Events<WallContactEvent>>();
        cursor.read(events).copied().collect()
    };

    for event in pending {
        let Some(mut state) = world.get_mut::<WallJumpState>(event.character) else {
            continue;
        };

        match event.phase {
            ContactPhase::Started => {
                state.attach();
                B::set_velocity(world, event.character, Vec2::ZERO);
                world.send_event(AudioCue {
                    character: event.character,
                    kind: CueKind::Collide,
                });
            }
            ContactPhase::Stopped => {
                state.detach();
            }
        }
    }
}

/// Consume this frame's probe results and stick newly detected characters to
/// the wall.
///
/// On a hit while not yet touching, the body's horizontal coordinate snaps to
/// the hit point (preventing interpenetration drift) and the velocity is
/// zeroed. A miss is a normal negative result; already-touching characters
/// are left alone so the discrete exit event stays authoritative.
pub fn stick_to_wall<B: CharacterPhysicsBackend>(world: &mut World) {
    let hits: Vec<(Entity, Vec2)> = world
        .query::<(Entity, &WallJumpState, &WallProbe)>()
        .iter(world)
        .filter(|(_, state, _)| !state.touching_wall)
        .filter_map(|(entity, _, probe)| probe.result.map(|hit| (entity, hit.point)))
        .collect();

    for (entity, hit_point) in hits {
        if let Some(mut state) = world.get_mut::<WallJumpState>(entity) {
            state.attach();
        }

        let position = B::get_position(world, entity);
        B::set_position(world, entity, Vec2::new(hit_point.x, position.y));
        B::set_velocity(world, entity, Vec2::ZERO);
    }
}

/// Accumulate jump charge while the input is held against a wall, and feed
/// the hold time to the display sink every frame.
pub fn track_jump_charge(
    time: Res<Time>,
    mut characters: Query<(Entity, &mut JumpIntent, &mut WallJumpState)>,
    mut readout: EventWriter<ChargeReadout>,
) {
    for (entity, mut intent, mut state) in &mut characters {
        intent.refresh_edge();

        if state.touching_wall && intent.is_held() {
            state.hold_time += time.delta_secs();
        }

        readout.send(ChargeReadout {
            character: entity,
            hold_time: state.hold_time,
        });
    }
}

/// Resolve jump releases.
///
/// A release while touching a wall assigns the launch velocity, toggles the
/// wall side, clears sliding, resets the charge, fires the jump cue, and
/// starts the turn animation from the body's current displayed angle.
/// Inserting the new [`RotationTask`] replaces any turn still in flight, so
/// rapid jumps cancel the previous animation instead of racing it.
///
/// A release without wall contact resolves nothing; the charge still resets.
pub fn resolve_wall_jump<B: CharacterPhysicsBackend>(world: &mut World) {
    let released: Vec<(Entity, WallJumpConfig, bool, f32, crate::state::WallSide)> = world
        .query::<(Entity, &JumpIntent, &WallJumpConfig, &WallJumpState)>()
        .iter(world)
        .filter(|(_, intent, _, _)| intent.was_released())
        .map(|(entity, _, config, state)| {
            (
                entity,
                *config,
                state.touching_wall,
                state.hold_time,
                state.wall_side,
            )
        })
        .collect();

    for (entity, config, touching, hold_time, side) in released {
        if !touching {
            if let Some(mut state) = world.get_mut::<WallJumpState>(entity) {
                state.hold_time = 0.0;
            }
            continue;
        }

        world.send_event(AudioCue {
            character: entity,
            kind: CueKind::Jump,
        });

        let outcome = jump::resolve(hold_time, side, &config);
        B::set_velocity(world, entity, outcome.velocity);

        if let Some(mut state) = world.get_mut::<WallJumpState>(entity) {
            state.wall_side = outcome.new_side;
            state.sliding = false;
            state.hold_time = 0.0;
        }

        let start_angle = B::get_rotation(world, entity).to_degrees();
        world.entity_mut(entity).insert(RotationTask::new(
            start_angle,
            outcome.new_side.facing_angle(),
            config.turn_duration,
        ));
    }
}

/// Advance active turn animations by one frame.
///
/// Each frame the displayed angle is set to the task's interpolated value; on
/// completion it is pinned to the exact terminal angle and the task is
/// removed.
pub fn advance_turn_animation<B: CharacterPhysicsBackend>(world: &mut World) {
    let dt = world.resource::<Time>().delta_secs();

    let turning: Vec<Entity> = world
        .query_filtered::<Entity, With<RotationTask>>()
        .iter(world)
        .collect();

    for entity in turning {
        let Some(mut task) = world.get_mut::<RotationTask>(entity) else {
            continue;
        };

        task.tick(dt);
        let angle = task.display_angle();
        let done = task.finished();

        B::set_rotation(world, entity, angle.to_radians());

        if done {
            world.entity_mut(entity).remove::<RotationTask>();
        }
    }
}

/// Sync marker components from the contact flags.
pub fn sync_state_markers(
    mut commands: Commands,
    characters: Query<(Entity, &WallJumpState, Has<Sliding>, Has<Airborne>)>,
) {
    for (entity, state, has_sliding, has_airborne) in &characters {
        if state.sliding && !has_sliding {
            commands.entity(entity).insert(Sliding);
        } else if !state.sliding && has_sliding {
            commands.entity(entity).remove::<Sliding>();
        }

        if !state.touching_wall && !has_airborne {
            commands.entity(entity).insert(Airborne);
        } else if state.touching_wall && has_airborne {
            commands.entity(entity).remove::<Airborne>();
        }
    }
}

/// Overwrite the body velocity with the slide velocity every fixed step.
///
/// This is a continuous velocity assignment, not an impulse: as long as the
/// sliding flag holds, whatever the engine or other systems applied this step
/// is replaced by `(0, slide_speed)`.
pub fn apply_wall_slide<B: CharacterPhysicsBackend>(world: &mut World) {
    let sliding: Vec<(Entity, f32)> = world
        .query::<(Entity, &WallJumpState, &WallJumpConfig)>()
        .iter(world)
        .filter(|(_, state, _)| state.sliding)
        .map(|(entity, _, config)| (entity, config.slide_speed))
        .collect();

    for (entity, slide_speed) in sliding {
        B::set_velocity(world, entity, Vec2::new(0.0, slide_speed));
    }
}

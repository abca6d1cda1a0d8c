//! # `wall_jump_controller`
//!
//! A charge-based wall jump character controller with physics backend
//! abstraction.
//!
//! This crate provides the control logic for a character that bounces between
//! two walls:
//! - Detects walls with a proximity raycast and the engine's contact events
//! - Sticks to a wall on approach and slides down it at a constant speed
//! - Charges a jump while an input is held, scaling force with hold duration
//! - Launches up and toward the opposite wall on release
//! - Smoothly turns the character around after each wall switch
//!
//! ## Architecture
//!
//! The controller never simulates physics. It decides *what* velocity to hand
//! the rigid-body engine and *when*:
//! 1. The backend's sensor systems fill each character's [`WallProbe`] and
//!    translate engine contacts into [`WallContactEvent`]s
//! 2. The core systems merge both detection paths into [`WallJumpState`]
//!    (events are authoritative for exit, the probe for entry)
//! 3. Charge accumulates from [`JumpIntent`] while held against a wall
//! 4. On release the charge maps to a clamped launch velocity and a
//!    [`RotationTask`] animates the turn over the following frames
//! 5. Every fixed step while sliding, the velocity is overwritten with the
//!    configured slide speed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_rapier2d::prelude::*;
//! use wall_jump_controller::prelude::*;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
//!     .add_plugins(WallJumpControllerPlugin::<Rapier2dBackend>::default())
//!     .run();
//! ```
//!
//! Spawn characters with [`WallJumpBundle`] plus your backend's physics
//! components, tag wall colliders with [`WallSurface`], and set
//! [`JumpIntent::set_held`] from your input code each frame before
//! [`WallJumpSet::Control`] runs.
//!
//! [`WallProbe`]: detection::WallProbe
//! [`WallContactEvent`]: events::WallContactEvent
//! [`WallJumpState`]: state::WallJumpState
//! [`JumpIntent`]: intent::JumpIntent
//! [`RotationTask`]: rotation::RotationTask
//! [`WallSurface`]: detection::WallSurface
//! [`JumpIntent::set_held`]: intent::JumpIntent::set_held

use bevy::prelude::*;

pub mod backend;
pub mod collision;
pub mod config;
pub mod detection;
pub mod events;
pub mod intent;
pub mod jump;
pub mod rotation;
pub mod state;
pub mod systems;

#[cfg(feature = "rapier2d")]
pub mod rapier;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::backend::CharacterPhysicsBackend;
    pub use crate::collision::ProbeHit;
    pub use crate::config::WallJumpConfig;
    pub use crate::detection::{WallProbe, WallSurface};
    pub use crate::events::{
        AudioCue, ChargeReadout, ContactPhase, CueKind, WallContactEvent,
    };
    pub use crate::intent::JumpIntent;
    pub use crate::jump::{JumpOutcome, TapKind};
    pub use crate::rotation::RotationTask;
    pub use crate::state::{Airborne, Sliding, WallJumpState, WallSide};
    pub use crate::{WallJumpBundle, WallJumpControllerPlugin, WallJumpSet};

    #[cfg(feature = "rapier2d")]
    pub use crate::rapier::{Rapier2dBackend, RapierWallJumpBundle};
}

/// System sets for the controller's `Update` work.
///
/// Backend sensor systems run in [`WallJumpSet::Sensors`]; the core control
/// chain runs in [`WallJumpSet::Control`] immediately after. Host input
/// systems that write [`intent::JumpIntent`] should run before `Control`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallJumpSet {
    /// Backend-specific detection: probe raycasts and contact translation.
    Sensors,
    /// State merge, charge tracking, jump resolution, and animation.
    Control,
}

/// Everything a wall jumping character needs besides its physics body.
#[derive(Bundle, Default)]
pub struct WallJumpBundle {
    /// Contact and charge state.
    pub state: state::WallJumpState,
    /// Tuning parameters.
    pub config: config::WallJumpConfig,
    /// Jump input state.
    pub intent: intent::JumpIntent,
    /// Wall proximity probe, filled by the backend.
    pub probe: detection::WallProbe,
}

/// Main plugin for the wall jump controller.
///
/// Generic over a physics backend `B` which provides the actual physics
/// operations (raycasting, contact events, kinematic access).
///
/// # Type Parameters
/// - `B`: The physics backend implementation (e.g., `Rapier2dBackend`)
pub struct WallJumpControllerPlugin<B: backend::CharacterPhysicsBackend> {
    _marker: std::marker::PhantomData<B>,
}

impl<B: backend::CharacterPhysicsBackend> Default for WallJumpControllerPlugin<B> {
    fn default() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<B: backend::CharacterPhysicsBackend> Plugin for WallJumpControllerPlugin<B> {
    fn build(&self, app: &mut App) {
        // Register core types
        app.register_type::<config::WallJumpConfig>();
        app.register_type::<state::WallJumpState>();
        app.register_type::<state::WallSide>();
        app.register_type::<state::Sliding>();
        app.register_type::<state::Airborne>();
        app.register_type::<detection::WallProbe>();
        app.register_type::<detection::WallSurface>();
        app.register_type::<intent::JumpIntent>();
        app.register_type::<rotation::RotationTask>();

        app.add_event::<events::WallContactEvent>();
        app.add_event::<events::AudioCue>();
        app.add_event::<events::ChargeReadout>();

        // Add the physics backend plugin
        app.add_plugins(B::plugin());

        app.configure_sets(
            Update,
            (WallJumpSet::Sensors, WallJumpSet::Control).chain(),
        );

        // Per-rendered-frame control chain (variable timestep)
        app.add_systems(
            Update,
            (
                systems::ingest_wall_contacts::<B>,
                systems::stick_to_wall::<B>,
                systems::track_jump_charge,
                systems::resolve_wall_jump::<B>,
                systems::advance_turn_animation::<B>,
                systems::sync_state_markers,
            )
                .chain()
                .in_set(WallJumpSet::Control),
        );

        // Continuous slide velocity assignment (fixed timestep)
        app.add_systems(FixedUpdate, systems::apply_wall_slide::<B>);
    }
}

//! Events exchanged with the host application.
//!
//! Inbound, [`WallContactEvent`] carries the physics engine's discrete
//! contact notifications into the controller (the backend plugin translates
//! engine events into these). Outbound, [`AudioCue`] and [`ChargeReadout`] are
//! fire-and-forget notifications for the game's audio and UI layers; nothing
//! in the controller depends on anyone consuming them.

use bevy::prelude::*;

/// Phase of a discrete wall contact notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// The character began touching a wall collider.
    Started,
    /// The character separated from a wall collider.
    Stopped,
}

/// Discrete wall contact notification for one character.
///
/// Emitted by the physics backend for contacts against [`WallSurface`]
/// geometry. Contact end is the authoritative way the character stops
/// sliding; the proximity probe never clears contact state.
///
/// [`WallSurface`]: crate::detection::WallSurface
#[derive(Event, Debug, Clone, Copy)]
pub struct WallContactEvent {
    /// The character entity involved.
    pub character: Entity,
    /// Whether the contact started or stopped.
    pub phase: ContactPhase,
}

/// Which sound the host should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueKind {
    /// The character collided with a wall.
    Collide,
    /// The character released a jump.
    Jump,
}

/// Fire-and-forget audio notification.
#[derive(Event, Debug, Clone, Copy)]
pub struct AudioCue {
    /// The character entity the cue belongs to.
    pub character: Entity,
    /// Which cue to play.
    pub kind: CueKind,
}

/// Per-frame hold time feed for on-screen feedback.
///
/// Emitted once per frame per character. Purely observational; nothing feeds
/// back into the controller.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChargeReadout {
    /// The character entity being reported.
    pub character: Entity,
    /// Seconds the jump input has been held.
    pub hold_time: f32,
}

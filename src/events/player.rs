//! Player death notification.
//!
//! Rule systems trigger a [`PlayerDeathEvent`] instead of mutating lives
//! and animation themselves; the
//! [`observe_player_death`](crate::systems::player::observe_player_death)
//! observer runs the whole death path.

use bevy_ecs::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Hit by traffic on the road row.
    Squashed,
    /// In the water row without a raft.
    Drowned,
    /// Jumped on a pad that already holds a frog.
    PadTaken,
    /// Left the play area sideways.
    OutOfBounds,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeathCause::Squashed => "squashed",
            DeathCause::Drowned => "drowned",
            DeathCause::PadTaken => "pad taken",
            DeathCause::OutOfBounds => "out of bounds",
        };
        f.write_str(s)
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDeathEvent {
    pub player: Entity,
    pub cause: DeathCause,
}

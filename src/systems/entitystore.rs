//! Entity store commit system.
//!
//! [`commit_entity_changes`] is the first system of every tick, paused or
//! not. It applies the additions and removals queued on the
//! [`EntityStore`] during the previous tick (and by observers in between).

use bevy_ecs::prelude::*;

use crate::resources::entitystore::EntityStore;

/// Commit pending entity additions and removals.
pub fn commit_entity_changes(mut store: ResMut<EntityStore>, mut commands: Commands) {
    store.update(&mut commands);
}

//! Committed entity marker component.
//!
//! The [`EntityStore`](crate::resources::entitystore::EntityStore) inserts
//! [`Live`] when a pending entity is committed at the start of a tick.
//! Systems that iterate entities through queries filter on it so nothing
//! spawned during the current tick is observed before the next commit.

use bevy_ecs::prelude::Component;

/// Tag component for entities that have been committed to the store.
#[derive(Component, Clone, Copy, Debug)]
pub struct Live;

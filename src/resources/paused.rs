//! Pause toggle resource.
//!
//! While [`Paused`] is present the scene clock stops and only the entity
//! commit and audio forwarding systems run.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Paused;

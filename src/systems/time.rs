//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick from the frame delta.
use bevy_ecs::prelude::*;

use crate::resources::paused::Paused;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the frame delta in seconds. While the
/// scene is paused the clock stands still and `delta` is zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let paused = world.contains_resource::<Paused>();
    let mut wt = world.resource_mut::<WorldTime>();
    if paused {
        wt.delta = 0.0;
        return;
    }
    wt.elapsed += dt;
    wt.delta = dt;
}

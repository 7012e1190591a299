use bevy_ecs::prelude::Resource;

/// Scene clock advanced once per tick by
/// [`update_world_time`](crate::systems::time::update_world_time).
///
/// `elapsed` is the scene time the scripted events key on; it stops while
/// the scene is paused.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
}

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Static texture drawn whole, anchored by its top-left corner.
///
/// Used for level backgrounds, which have no transform and never move.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub top_left: Vec2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, top_left: Vec2) -> Self {
        Self {
            tex_key: tex_key.into(),
            top_left,
        }
    }
}

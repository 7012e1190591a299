//! Lane wrap-around.
//!
//! Lane entities scroll forever: once one is `wrap_margin` past the view
//! edge it travels towards, it reappears the same distance past the
//! opposite edge. Velocity is preserved.

use bevy_ecs::prelude::*;

use crate::components::live::Live;
use crate::components::tag::{EntityKind, Tag};
use crate::components::transform::Transform;
use crate::resources::scenedef::SceneDef;

pub fn wrap_lanes(def: Res<SceneDef>, mut query: Query<(&Tag, &mut Transform), With<Live>>) {
    let margin = def.wrap_margin;
    let width = def.view.x;
    for (tag, mut transform) in query.iter_mut() {
        let leftward = match tag.kind() {
            EntityKind::MoveLeft => true,
            EntityKind::MoveRight => false,
            EntityKind::Tree if transform.vel.x < 0.0 => true,
            EntityKind::Tree if transform.vel.x > 0.0 => false,
            _ => continue,
        };
        if leftward && transform.pos.x < -margin {
            transform.pos.x = width + margin;
        } else if !leftward && transform.pos.x > width + margin {
            transform.pos.x = -margin;
        }
    }
}

//! Platformer rule pass.
//!
//! Every tick the player's state is re-derived from scratch: touching any
//! `InvisibleCollisionBox` means `Grounded`, touching none means `Jumping`.
//! Landing this way also stops the fall.

use bevy_ecs::prelude::*;

use crate::components::boundingbox::BoundingBox;
use crate::components::inputintent::InputIntent;
use crate::components::state::PlayerState;
use crate::components::tag::EntityKind;
use crate::components::transform::Transform;
use crate::resources::entitystore::EntityStore;
use crate::resources::scenedef::{RuleSet, SceneDef};
use crate::systems::collision::contacts;

pub fn resolve_platforms(
    def: Res<SceneDef>,
    store: Res<EntityStore>,
    mut players: Query<(&mut Transform, &BoundingBox, &mut PlayerState), With<InputIntent>>,
    shapes: Query<(&Transform, &BoundingBox), Without<InputIntent>>,
) {
    if def.rules != RuleSet::Platformer {
        return;
    }
    let platforms = store.get(EntityKind::InvisibleCollisionBox);
    for &player in store.get(EntityKind::Player) {
        let Ok((mut transform, bbox, mut state)) = players.get_mut(player) else {
            continue;
        };
        if *state == PlayerState::Dead {
            continue;
        }
        let on_platform = !contacts(transform.pos, bbox, platforms, &shapes).is_empty();
        if on_platform {
            if *state == PlayerState::Jumping {
                transform.vel.y = 0.0;
            }
            *state = PlayerState::Grounded;
        } else {
            *state = PlayerState::Jumping;
        }
    }
}

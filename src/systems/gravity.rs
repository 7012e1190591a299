//! Gravity for airborne players.
//!
//! While a player is `Jumping`, [`apply_gravity`] does one semi-implicit
//! Euler step with the fixed sub-step from the scene's [`GravityDef`],
//! whatever the frame delta:
//!
//! ```text
//! vel.y += g * substep
//! pos.y += vel.y * substep
//! ```
//!
//! Reaching `ground_height` with the lower edge of the bounding box lands
//! the player. Landing on platforms is decided later by the rule pass.
//!
//! [`GravityDef`]: crate::resources::scenedef::GravityDef

use bevy_ecs::prelude::*;

use crate::components::boundingbox::BoundingBox;
use crate::components::inputintent::InputIntent;
use crate::components::live::Live;
use crate::components::state::PlayerState;
use crate::components::transform::Transform;
use crate::resources::scenedef::SceneDef;

pub fn apply_gravity(
    def: Res<SceneDef>,
    mut query: Query<
        (&mut Transform, &BoundingBox, &mut PlayerState),
        (With<InputIntent>, With<Live>),
    >,
) {
    let Some(gravity) = def.gravity else {
        return;
    };
    for (mut transform, bbox, mut state) in query.iter_mut() {
        if *state != PlayerState::Jumping {
            continue;
        }
        transform.vel.y += gravity.g * gravity.substep;
        let dy = transform.vel.y * gravity.substep;
        transform.pos.y += dy;
        if bbox.bottom(transform.pos) >= gravity.ground_height {
            *state = PlayerState::Grounded;
            transform.vel.y = 0.0;
        }
    }
}

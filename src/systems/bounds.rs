//! Player play-area clamp.
//!
//! The clamp runs twice per tick: once right after physics and again at the
//! head of rule resolution, so the rules always see an in-bounds player and
//! no rendered frame shows one outside the play area.

use bevy_ecs::prelude::*;

use crate::components::inputintent::InputIntent;
use crate::components::live::Live;
use crate::components::transform::Transform;
use crate::resources::scenedef::SceneDef;

type PlayerTransforms<'w, 's> =
    Query<'w, 's, &'static mut Transform, (With<InputIntent>, With<Live>)>;

fn clamp_players(def: &SceneDef, query: &mut PlayerTransforms) {
    for mut transform in query.iter_mut() {
        transform.pos = def.player.clamp.apply(transform.pos);
    }
}

pub fn clamp_player_after_physics(def: Res<SceneDef>, mut query: PlayerTransforms) {
    clamp_players(&def, &mut query);
}

pub fn clamp_player_before_rules(def: Res<SceneDef>, mut query: PlayerTransforms) {
    clamp_players(&def, &mut query);
}

//! Player death path and recovery.
//!
//! Rule systems trigger a [`PlayerDeathEvent`]; [`observe_player_death`]
//! takes a life, plays the `die` clip, marks the player `Dead` and emits the
//! `death` cue. Losing the last life asks for the menu. Otherwise
//! [`player_recovery`] waits for the death clip to end and puts the player
//! back at the spawn point.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::animation::Animation;
use crate::components::inputintent::InputIntent;
use crate::components::live::Live;
use crate::components::state::PlayerState;
use crate::components::transform::Transform;
use crate::events::audio::AudioCmd;
use crate::events::player::PlayerDeathEvent;
use crate::resources::scenedef::SceneDef;
use crate::resources::sceneflow::{NextScene, SceneTransition};
use crate::resources::scoreboard::Scoreboard;

pub fn observe_player_death(
    trigger: On<PlayerDeathEvent>,
    mut scoreboard: ResMut<Scoreboard>,
    mut next_scene: ResMut<NextScene>,
    mut players: Query<(&mut PlayerState, &mut Animation)>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let Ok((mut state, mut anim)) = players.get_mut(event.player) else {
        return;
    };
    if *state == PlayerState::Dead {
        return;
    }
    let lives = scoreboard.lose_life();
    *anim = Animation::new("die");
    *state = PlayerState::Dead;
    audio.write(AudioCmd::fx("death"));
    info!("player died ({}), {} lives left", event.cause, lives);
    if lives == 0 {
        next_scene.request(SceneTransition::Menu);
    }
}

/// Respawn dead players once the death clip has finished.
pub fn player_recovery(
    def: Res<SceneDef>,
    scoreboard: Res<Scoreboard>,
    mut query: Query<
        (
            &mut Transform,
            &mut PlayerState,
            &mut Animation,
            &mut InputIntent,
        ),
        With<Live>,
    >,
) {
    if scoreboard.lives == 0 {
        return;
    }
    for (mut transform, mut state, mut anim, mut intent) in query.iter_mut() {
        if *state == PlayerState::Dead && anim.has_ended() {
            respawn(
                &mut transform,
                &mut state,
                &mut anim,
                def.player.spawn,
                &def.player.idle_clip,
            );
            intent.clear();
        }
    }
}

/// Put a player back at `spawn`, standing and idle.
pub fn respawn(
    transform: &mut Transform,
    state: &mut PlayerState,
    anim: &mut Animation,
    spawn: Vec2,
    idle_clip: &str,
) {
    transform.pos = spawn;
    transform.vel = Vec2::ZERO;
    *state = PlayerState::Grounded;
    *anim = Animation::new(idle_clip);
}

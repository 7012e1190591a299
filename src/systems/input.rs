//! Player input system.
//!
//! [`player_input`] turns the player's [`InputIntent`] into motion according
//! to the scene's [`InputPolicy`]:
//!
//! - `Hop`: every set direction displaces the player by `distance` and
//!   restarts the matching directional clip; a `hop` cue is emitted and the
//!   intent is cleared. Dead players do not move and their intent is
//!   dropped.
//! - `Continuous`: LEFT/RIGHT move by `step` each tick while held, UP starts
//!   a jump from the ground, and a grounded idle player shows the idle clip.
//!   The intent is left untouched; the release command clears it.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::inputintent::InputIntent;
use crate::components::live::Live;
use crate::components::state::PlayerState;
use crate::components::transform::Transform;
use crate::events::audio::AudioCmd;
use crate::resources::scenedef::{InputPolicy, SceneDef};

pub fn player_input(
    def: Res<SceneDef>,
    mut query: Query<
        (
            &mut Transform,
            &mut InputIntent,
            &mut PlayerState,
            &mut Animation,
        ),
        With<Live>,
    >,
    mut audio: MessageWriter<AudioCmd>,
) {
    for (mut transform, mut intent, mut state, mut anim) in query.iter_mut() {
        match def.input {
            InputPolicy::Hop { distance } => {
                if *state == PlayerState::Dead {
                    intent.clear();
                    continue;
                }
                if intent.is_idle() {
                    continue;
                }
                if intent.has(InputIntent::UP) {
                    transform.pos.y -= distance;
                    *anim = Animation::new("up");
                }
                if intent.has(InputIntent::DOWN) {
                    transform.pos.y += distance;
                    *anim = Animation::new("down");
                }
                if intent.has(InputIntent::LEFT) {
                    transform.pos.x -= distance;
                    *anim = Animation::new("left");
                }
                if intent.has(InputIntent::RIGHT) {
                    transform.pos.x += distance;
                    *anim = Animation::new("right");
                }
                audio.write(AudioCmd::fx("hop"));
                intent.clear();
            }
            InputPolicy::Continuous {
                step,
                jump_velocity,
            } => {
                let airborne_or_grounded =
                    matches!(*state, PlayerState::Grounded | PlayerState::Jumping);
                if intent.has(InputIntent::LEFT) {
                    transform.pos.x -= step;
                    if airborne_or_grounded {
                        swap_clip(&mut anim, "left");
                    }
                }
                if intent.has(InputIntent::RIGHT) {
                    transform.pos.x += step;
                    if airborne_or_grounded {
                        swap_clip(&mut anim, "right");
                    }
                }
                if intent.has(InputIntent::UP) && *state == PlayerState::Grounded {
                    *state = PlayerState::Jumping;
                    transform.vel.y = jump_velocity;
                }
                if intent.is_idle() && *state == PlayerState::Grounded {
                    swap_clip(&mut anim, &def.player.idle_clip);
                }
            }
        }
    }
}

/// Replace the animation only when the clip actually changes, so a held key
/// keeps the clip playing instead of restarting it every tick.
pub fn swap_clip(anim: &mut Animation, clip: &str) {
    if !anim.is(clip) {
        *anim = Animation::new(clip);
    }
}

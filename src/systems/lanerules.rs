//! Lane crossing rules.
//!
//! [`resolve_lane_rules`] runs once per tick after the second clamp and
//! settles what happens to a living player, checking in this order and
//! stopping at the first outcome:
//!
//! 1. a visible scoring icon under the player is collected;
//! 2. inside the water row, the first raft touched (lane entity or tree)
//!    carries the player by its horizontal velocity, inside the play area;
//! 3. inside the road row, touching a lane entity kills;
//! 4. inside the water row without a raft, the player drowns;
//! 5. a goal pad is claimed if free, and kills with a penalty if taken;
//!    claiming the last free pad also pays the bonus;
//! 6. standing at or past the lateral limits kills.
//!
//! Deaths are not applied here: a [`PlayerDeathEvent`] is triggered and the
//! observer in [`crate::systems::player`] runs the death path.
//!
//! [`tick_icon_timers`] alternates the scoring icon between visible and
//! hidden; each time it comes back it moves to a random free pad.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::boundingbox::BoundingBox;
use crate::components::inputintent::InputIntent;
use crate::components::state::{PadState, PlayerState};
use crate::components::tag::{EntityKind, Tag};
use crate::components::timer::Timer;
use crate::components::transform::Transform;
use crate::events::player::{DeathCause, PlayerDeathEvent};
use crate::resources::entitystore::EntityStore;
use crate::resources::rng::SceneRng;
use crate::resources::scenedef::SceneDef;
use crate::resources::scoreboard::{PadProgress, Scoreboard};
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::overlaps;
use crate::systems::player::respawn;

#[derive(SystemParam)]
pub struct LaneRuleParams<'w, 's> {
    def: Res<'w, SceneDef>,
    time: Res<'w, WorldTime>,
    store: ResMut<'w, EntityStore>,
    scoreboard: ResMut<'w, Scoreboard>,
    progress: ResMut<'w, PadProgress>,
    players: Query<
        'w,
        's,
        (
            &'static mut Transform,
            &'static BoundingBox,
            &'static mut PlayerState,
            &'static mut Animation,
        ),
        With<InputIntent>,
    >,
    shapes: Query<
        'w,
        's,
        (&'static Transform, &'static BoundingBox, &'static Tag),
        Without<InputIntent>,
    >,
    pads: Query<'w, 's, &'static mut PadState>,
    icons: Query<'w, 's, (Has<Animation>, &'static mut Timer), Without<InputIntent>>,
    commands: Commands<'w, 's>,
}

pub fn resolve_lane_rules(mut p: LaneRuleParams) {
    let Some(rules) = p.def.lane_rules().copied() else {
        return;
    };
    let Some(player) = p.store.first(EntityKind::Player) else {
        return;
    };
    let Ok((mut transform, bbox, mut state, mut anim)) = p.players.get_mut(player) else {
        return;
    };
    if *state == PlayerState::Dead {
        return;
    }
    let bbox = *bbox;
    let touches = |shape: (&Transform, &BoundingBox, &Tag), pos| {
        overlaps(pos, &bbox, shape.0.pos, shape.1)
    };

    // 1. scoring icon
    if let Some(icon_def) = &p.def.icon {
        for &icon in p.store.get(EntityKind::BugIcon) {
            let Ok(shape) = p.shapes.get(icon) else {
                continue;
            };
            if !touches(shape, transform.pos) {
                continue;
            }
            let Ok((visible, mut timer)) = p.icons.get_mut(icon) else {
                continue;
            };
            if visible {
                p.scoreboard.add(icon_def.points);
                p.commands.entity(icon).remove::<Animation>();
                timer.restart();
                info!("bug collected, score {}", p.scoreboard.score);
            }
        }
    }

    // 2-4. water and road rows
    let y = transform.pos.y;
    let in_water = rules.water_row.contains(y);
    let in_road = rules.road_row.contains(y);
    let mut carry: Option<f32> = None;
    for &other in p.store.all() {
        let Ok(shape) = p.shapes.get(other) else {
            continue;
        };
        if !touches(shape, transform.pos) {
            continue;
        }
        let kind = shape.2.kind();
        if in_water && kind.is_raft() && carry.is_none() {
            carry = Some(shape.0.vel.x);
        }
        if in_road && kind.is_lane() {
            kill(&mut p.commands, player, DeathCause::Squashed);
            return;
        }
    }
    if let Some(vx) = carry {
        // a raft may not carry the player out of the play area
        transform.pos.x += vx * p.time.delta;
        transform.pos = p.def.player.clamp.apply(transform.pos);
    } else if in_water {
        kill(&mut p.commands, player, DeathCause::Drowned);
        return;
    }

    // 5. goal pads
    let pad_list: Vec<Entity> = p.store.get(EntityKind::LillyPad).to_vec();
    let touched = pad_list.iter().find_map(|&pad| {
        let shape = p.shapes.get(pad).ok()?;
        touches(shape, transform.pos).then_some((pad, shape.0.pos))
    });
    if let Some((pad, pad_pos)) = touched {
        let Ok(mut pad_state) = p.pads.get_mut(pad) else {
            return;
        };
        let current = *pad_state;
        match current {
            PadState::Free => {
                *pad_state = PadState::HasFrog;
                p.scoreboard.add(rules.pad_points);
                p.progress.claimed += 1;
                info!(
                    "pad claimed ({}/{}), score {}",
                    p.progress.claimed,
                    pad_list.len(),
                    p.scoreboard.score
                );
                let size = p.def.player.size;
                p.store
                    .add(&mut p.commands, EntityKind::FrogOnPad)
                    .insert((
                        Transform::at(pad_pos),
                        BoundingBox::new(size.x, size.y),
                        Animation::new("frogOnPad"),
                    ));
                if p.progress.claimed as usize == pad_list.len() {
                    p.scoreboard.add(rules.all_pads_bonus);
                    info!("all pads claimed, bonus {}", rules.all_pads_bonus);
                }
                respawn(
                    &mut transform,
                    &mut state,
                    &mut anim,
                    p.def.player.spawn,
                    &p.def.player.idle_clip,
                );
            }
            PadState::HasFrog => {
                p.scoreboard.penalize(rules.occupied_pad_penalty);
                kill(&mut p.commands, player, DeathCause::PadTaken);
            }
        }
        return;
    }

    // 6. lateral limits
    let x = transform.pos.x;
    if x <= rules.lateral_min || x >= rules.lateral_max {
        kill(&mut p.commands, player, DeathCause::OutOfBounds);
    }
}

fn kill(commands: &mut Commands, player: Entity, cause: DeathCause) {
    commands.trigger(PlayerDeathEvent { player, cause });
}

/// Show and hide the scoring icon on a fixed period.
pub fn tick_icon_timers(
    def: Res<SceneDef>,
    time: Res<WorldTime>,
    store: Res<EntityStore>,
    mut rng: ResMut<SceneRng>,
    mut icons: Query<(&mut Transform, &mut Timer, Has<Animation>)>,
    pads: Query<(&Transform, &PadState), Without<Timer>>,
    mut commands: Commands,
) {
    let Some(icon_def) = &def.icon else {
        return;
    };
    for &icon in store.get(EntityKind::BugIcon) {
        let Ok((mut transform, mut timer, visible)) = icons.get_mut(icon) else {
            continue;
        };
        timer.tick(time.delta);
        if !timer.finished() {
            continue;
        }
        timer.restart();
        if visible {
            commands.entity(icon).remove::<Animation>();
            debug!("bug icon hidden");
            continue;
        }
        let free: Vec<_> = store
            .get(EntityKind::LillyPad)
            .iter()
            .filter_map(|&pad| pads.get(pad).ok())
            .filter(|(_, state)| **state == PadState::Free)
            .map(|(t, _)| t.pos)
            .collect();
        if free.is_empty() {
            continue;
        }
        transform.pos = free[rng.0.usize(..free.len())];
        commands
            .entity(icon)
            .insert(Animation::new(icon_def.clip.clone()));
        debug!("bug icon shown at {}", transform.pos);
    }
}

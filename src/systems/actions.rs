//! Input command observer.
//!
//! [`on_action`] applies one [`ActionEvent`] to the scene world:
//!
//! | Command | Effect |
//! |---|---|
//! | `START PAUSE` | toggle the [`Paused`] resource |
//! | `START QUIT` / `START BACK` | request the matching scene transition |
//! | `START TOGGLE_COLLISION` | trigger a [`SwitchDebugEvent`] |
//! | `START TOGGLE_TEXTURE` / `START TOGGLE_GRID` | flip [`RenderFlags`] |
//! | `START <direction>` | replace the player intent with that direction |
//! | `END <direction>` | clear the player intent |
//! | `START ACTIVATE` | activate inactive interactive boxes under the player |
//!
//! Anything else is ignored.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, info};

use crate::components::boundingbox::BoundingBox;
use crate::components::inputintent::InputIntent;
use crate::components::state::BoxState;
use crate::components::tag::EntityKind;
use crate::components::transform::Transform;
use crate::events::action::{ActionEvent, ActionName, ActionPhase};
use crate::events::audio::AudioCmd;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::debugmode::RenderFlags;
use crate::resources::entitystore::EntityStore;
use crate::resources::paused::Paused;
use crate::resources::sceneflow::{NextScene, SceneTransition};
use crate::resources::script::ScriptState;
use crate::systems::collision::overlaps;

#[derive(SystemParam)]
pub struct ActionParams<'w, 's> {
    store: Res<'w, EntityStore>,
    paused: Option<Res<'w, Paused>>,
    next_scene: ResMut<'w, NextScene>,
    flags: ResMut<'w, RenderFlags>,
    script: Option<ResMut<'w, ScriptState>>,
    intents: Query<'w, 's, &'static mut InputIntent>,
    shapes: Query<'w, 's, (&'static Transform, &'static BoundingBox)>,
    boxes: Query<'w, 's, &'static mut BoxState>,
    audio: MessageWriter<'w, AudioCmd>,
    commands: Commands<'w, 's>,
}

pub fn on_action(trigger: On<ActionEvent>, mut p: ActionParams) {
    let command = trigger.event().command;
    debug!("action {}", command);

    match (command.phase, command.name) {
        (ActionPhase::Start, ActionName::Pause) => {
            if p.paused.is_some() {
                p.commands.remove_resource::<Paused>();
                info!("resumed");
            } else {
                p.commands.insert_resource(Paused);
                info!("paused");
            }
        }
        (ActionPhase::Start, ActionName::Quit) => p.next_scene.request(SceneTransition::Quit),
        (ActionPhase::Start, ActionName::Back) => p.next_scene.request(SceneTransition::Back),
        (ActionPhase::Start, ActionName::ToggleCollision) => {
            p.commands.trigger(SwitchDebugEvent {});
        }
        (ActionPhase::Start, ActionName::ToggleTexture) => p.flags.textures = !p.flags.textures,
        (ActionPhase::Start, ActionName::ToggleGrid) => p.flags.grid = !p.flags.grid,
        (ActionPhase::Start, ActionName::Activate) => activate_boxes(&mut p),
        (phase, name) => {
            let Some(bit) = name.direction_bit() else {
                return;
            };
            for &player in p.store.get(EntityKind::Player) {
                if let Ok(mut intent) = p.intents.get_mut(player) {
                    match phase {
                        ActionPhase::Start => intent.press(bit),
                        ActionPhase::End => intent.clear(),
                    }
                }
            }
        }
    }
}

fn activate_boxes(p: &mut ActionParams) {
    let Some(script) = p.script.as_mut() else {
        return;
    };
    let Some(player) = p.store.first(EntityKind::Player) else {
        return;
    };
    let Ok((player_t, player_box)) = p.shapes.get(player) else {
        return;
    };
    for &entity in p.store.get(EntityKind::InteractiveBox) {
        let Ok((t, b)) = p.shapes.get(entity) else {
            continue;
        };
        if !overlaps(player_t.pos, player_box, t.pos, b) {
            continue;
        }
        let Ok(mut state) = p.boxes.get_mut(entity) else {
            continue;
        };
        if *state != BoxState::Inactive {
            continue;
        }
        *state = BoxState::Active;
        if let Some(index) = script.boxes.index_of(entity) {
            script.boxes.activate(index);
        }
        p.audio.write(AudioCmd::fx("meow"));
        info!(
            "box activated, {} so far",
            script.boxes.activated_count()
        );
    }
}

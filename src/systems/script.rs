//! Timed script system.
//!
//! [`run_script`] drives everything keyed on elapsed scene time:
//!
//! - the typewriter text queue;
//! - text branches, appended once when their time comes, picked by whether
//!   a given interactive box was activated;
//! - interactive box spawn and removal windows, each guarded so a slot is
//!   filled at most once and released at most once;
//! - the ending: final message, overlay fade, and the request to go back
//!   to the menu.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::boundingbox::BoundingBox;
use crate::components::state::BoxState;
use crate::components::tag::EntityKind;
use crate::components::transform::Transform;
use crate::events::audio::AudioCmd;
use crate::resources::entitystore::EntityStore;
use crate::resources::scenedef::{BoxDef, SceneDef};
use crate::resources::sceneflow::{NextScene, SceneTransition};
use crate::resources::script::{BoxSlots, ScriptState};
use crate::resources::worldtime::WorldTime;

pub fn run_script(
    def: Res<SceneDef>,
    time: Res<WorldTime>,
    script: Option<ResMut<ScriptState>>,
    mut store: ResMut<EntityStore>,
    mut next_scene: ResMut<NextScene>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    let (Some(script_def), Some(mut script)) = (&def.script, script) else {
        return;
    };
    let now = time.elapsed;
    let script = &mut *script;

    script.text.advance(now, time.delta);

    for (i, branch) in script_def.branches.iter().enumerate() {
        if script.branches_done.get(i).copied().unwrap_or(true) || now < branch.at {
            continue;
        }
        let active = script.boxes.is_activated(branch.box_index);
        let chosen = if active {
            &branch.when_active
        } else {
            &branch.otherwise
        };
        script
            .text
            .extend(chosen.iter().chain(branch.then.iter()).cloned());
        script.branches_done[i] = true;
        info!(
            "script branch at {}s took the {} path",
            branch.at,
            if active { "active" } else { "inactive" }
        );
    }

    for box_def in &script_def.boxes {
        if now >= box_def.remove_at {
            if let Some(entity) = script.boxes.take_for_removal(box_def.index) {
                store.remove(entity);
                info!("interactive box {} removed", box_def.index);
            }
        } else if now >= box_def.spawn_at {
            spawn_box(&mut store, &mut commands, &mut script.boxes, box_def);
        }
    }

    if let Some(ending) = &script_def.ending {
        if now < ending.at {
            return;
        }
        let state = &mut script.ending;
        if !state.started {
            state.started = true;
            let count = script.boxes.activated_count();
            let message = if count > 0 && count >= script_def.boxes.len() {
                &ending.all
            } else if count > 0 {
                &ending.some
            } else {
                &ending.none
            };
            state.message = Some(message.clone());
            info!("ending reached with {} boxes activated", count);
            if let Some(music) = &def.music {
                audio.write(AudioCmd::VolumeMusic {
                    id: music.clone(),
                    vol: 0.5,
                });
            }
        }
        state.alpha = (state.alpha + ending.fade_step).min(255.0);
        if now >= ending.at + ending.hold && next_scene.get().is_none() {
            if let Some(music) = &def.music {
                audio.write(AudioCmd::StopMusic { id: music.clone() });
            }
            next_scene.request(SceneTransition::Menu);
        }
    }
}

/// Spawn the interactive box for `box_def` unless its slot was already used.
///
/// Returns the new entity, or `None` when the call was a no-op.
pub fn spawn_box(
    store: &mut EntityStore,
    commands: &mut Commands,
    slots: &mut BoxSlots,
    box_def: &BoxDef,
) -> Option<Entity> {
    if !slots.can_spawn(box_def.index) {
        return None;
    }
    let entity = store
        .add(commands, EntityKind::InteractiveBox)
        .insert((
            Transform::at(box_def.pos),
            BoundingBox::new(box_def.size.x, box_def.size.y),
            BoxState::Inactive,
        ))
        .id();
    slots.mark_spawned(box_def.index, entity);
    info!("interactive box {} spawned", box_def.index);
    Some(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::entitystore::commit_entity_changes;
    use bevy_ecs::system::RunSystemOnce;
    use glam::Vec2;

    fn box_def() -> BoxDef {
        BoxDef {
            index: 2,
            spawn_at: 1.0,
            remove_at: 2.0,
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::new(20.0, 20.0),
        }
    }

    #[test]
    fn test_spawn_box_twice_creates_one_entity() {
        let mut world = World::new();
        world.insert_resource(EntityStore::default());
        world.insert_resource(ScriptState::default());

        let spawned = world
            .run_system_once(
                |mut store: ResMut<EntityStore>,
                 mut script: ResMut<ScriptState>,
                 mut commands: Commands| {
                    let def = box_def();
                    let first = spawn_box(&mut store, &mut commands, &mut script.boxes, &def);
                    let second = spawn_box(&mut store, &mut commands, &mut script.boxes, &def);
                    (first.is_some(), second.is_some())
                },
            )
            .unwrap();
        assert_eq!(spawned, (true, false));

        world.run_system_once(commit_entity_changes).unwrap();
        let store = world.resource::<EntityStore>();
        assert_eq!(store.get(EntityKind::InteractiveBox).len(), 1);
        // slots grew to reach index 2
        assert_eq!(world.resource::<ScriptState>().boxes.len(), 3);
    }
}

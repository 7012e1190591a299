//! Platformer scene tests: held movement, the jump arc, interactive boxes,
//! text branches and the ending.

use bevy_ecs::prelude::*;
use glam::Vec2;

use purrfrog::components::animation::Animation;
use purrfrog::components::state::{BoxState, PlayerState};
use purrfrog::components::tag::EntityKind;
use purrfrog::components::transform::Transform;
use purrfrog::context::GameContext;
use purrfrog::events::action::{ActionName, Command};
use purrfrog::events::audio::AudioCmd;
use purrfrog::game;
use purrfrog::resources::entitystore::{EntityStore, component};
use purrfrog::resources::sceneflow::SceneTransition;
use purrfrog::resources::script::ScriptState;
use purrfrog::scene::Scene;

/// Half a second keeps the script tests short and exactly representable.
const SCRIPT_DT: f32 = 0.5;
const DT: f32 = 1.0 / 60.0;

fn make_scene() -> (Scene, crossbeam_channel::Receiver<AudioCmd>) {
    let (ctx, rx) = GameContext::headless();
    (Scene::new(game::purr(), ctx), rx)
}

fn player(scene: &Scene) -> Entity {
    scene.player().unwrap()
}

fn place_player(scene: &mut Scene, pos: Vec2) {
    let p = player(scene);
    scene.world_mut().get_mut::<Transform>(p).unwrap().pos = pos;
}

fn run_until(scene: &mut Scene, t: f32) {
    while scene.elapsed() < t - 1e-4 {
        scene.update(SCRIPT_DT);
    }
}

fn boxes(scene: &Scene) -> Vec<Entity> {
    scene
        .world()
        .resource::<EntityStore>()
        .get(EntityKind::InteractiveBox)
        .to_vec()
}

#[test]
fn test_player_settles_on_the_floor() {
    let (mut scene, _rx) = make_scene();
    scene.update(DT);
    let p = player(&scene);
    assert_eq!(component::<Transform>(scene.world(), p).pos, Vec2::new(500.0, 480.0));
    assert_eq!(
        *component::<PlayerState>(scene.world(), p),
        PlayerState::Grounded
    );
}

#[test]
fn test_held_keys_walk_and_release_goes_idle() {
    let (mut scene, _rx) = make_scene();
    scene.update(DT);
    let p = player(&scene);

    scene.do_action(Command::start(ActionName::Left));
    for _ in 0..10 {
        scene.update(DT);
    }
    assert_eq!(component::<Transform>(scene.world(), p).pos.x, 470.0);
    assert!(component::<Animation>(scene.world(), p).is("left"));

    scene.do_action(Command::end(ActionName::Left));
    scene.update(DT);
    assert_eq!(component::<Transform>(scene.world(), p).pos.x, 470.0);
    assert!(component::<Animation>(scene.world(), p).is("idle"));
}

#[test]
fn test_jump_leaves_the_floor_and_lands_back() {
    let (mut scene, _rx) = make_scene();
    scene.update(DT);
    // clear of every raised platform
    place_player(&mut scene, Vec2::new(750.0, 480.0));
    scene.update(DT);
    let p = player(&scene);

    scene.do_action(Command::start(ActionName::Up));
    scene.update(DT);
    scene.do_action(Command::end(ActionName::Up));
    assert_eq!(
        *component::<PlayerState>(scene.world(), p),
        PlayerState::Jumping
    );

    let mut min_y = f32::MAX;
    let mut landed = false;
    for _ in 0..200 {
        scene.update(DT);
        let t = component::<Transform>(scene.world(), p);
        min_y = min_y.min(t.pos.y);
        if *component::<PlayerState>(scene.world(), p) == PlayerState::Grounded {
            landed = true;
            break;
        }
    }
    assert!(landed, "player never landed");
    assert!(min_y < 400.0, "jump peaked at {}", min_y);
    let t = component::<Transform>(scene.world(), p);
    assert_eq!(t.pos.y, 480.0);
    assert_eq!(t.vel.y, 0.0);
}

#[test]
fn test_box_spawns_once_and_activation_picks_branch() {
    let (mut scene, rx) = make_scene();

    run_until(&mut scene, 45.0);
    assert!(boxes(&scene).is_empty());

    run_until(&mut scene, 47.0);
    let spawned = boxes(&scene);
    assert_eq!(spawned.len(), 1);
    let the_box = spawned[0];

    // activating away from the box does nothing
    scene.do_action(Command::start(ActionName::Activate));
    assert_eq!(
        *component::<BoxState>(scene.world(), the_box),
        BoxState::Inactive
    );

    place_player(&mut scene, Vec2::new(505.0, 340.0));
    scene.update(SCRIPT_DT);
    scene.do_action(Command::start(ActionName::Activate));
    assert_eq!(
        *component::<BoxState>(scene.world(), the_box),
        BoxState::Active
    );
    let script = scene.world().resource::<ScriptState>();
    assert!(script.boxes.is_activated(1));
    assert_eq!(script.boxes.activated_count(), 1);

    // still the same single box while its window is open
    run_until(&mut scene, 55.0);
    assert_eq!(boxes(&scene), vec![the_box]);

    run_until(&mut scene, 56.0);
    let text = scene.render().text.unwrap_or_default();
    assert!(text.starts_with("Yes"), "unexpected text {:?}", text);

    run_until(&mut scene, 61.0);
    assert!(boxes(&scene).is_empty());
    assert!(scene.world().get_entity(the_box).is_err());

    // the slot is spent, nothing comes back
    run_until(&mut scene, 70.0);
    assert!(boxes(&scene).is_empty());

    let cues: Vec<AudioCmd> = rx.try_iter().collect();
    assert!(cues.contains(&AudioCmd::fx("meow")));
}

#[test]
fn test_ending_without_activations() {
    let (mut scene, rx) = make_scene();

    run_until(&mut scene, 56.0);
    let text = scene.render().text.unwrap_or_default();
    assert!(text.starts_with("but sometimes"), "unexpected text {:?}", text);

    run_until(&mut scene, 189.0);
    assert!(scene.render().final_message.is_none());
    assert_eq!(scene.requested_transition(), None);

    while scene.requested_transition().is_none() && scene.elapsed() < 210.0 {
        scene.update(SCRIPT_DT);
    }
    assert_eq!(scene.requested_transition(), Some(SceneTransition::Menu));
    assert!(scene.elapsed() >= 198.0);

    let frame = scene.render();
    assert_eq!(
        frame.final_message.as_deref(),
        Some("I think the best thing... is to go back to sleep.")
    );
    assert!(frame.fade_alpha > 0);

    let cues: Vec<AudioCmd> = rx.try_iter().collect();
    assert!(cues.contains(&AudioCmd::VolumeMusic {
        id: "gameTheme".to_string(),
        vol: 0.5
    }));
    assert_eq!(
        cues.last(),
        Some(&AudioCmd::StopMusic {
            id: "gameTheme".to_string()
        })
    );
    assert!(boxes(&scene).is_empty());
}

//! Standalone system tests: the play-area clamp, lane wrapping and the
//! scene table JSON form.

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;

use purrfrog::components::inputintent::InputIntent;
use purrfrog::components::live::Live;
use purrfrog::components::tag::{EntityKind, Tag};
use purrfrog::components::transform::Transform;
use purrfrog::game;
use purrfrog::resources::scenedef::SceneDef;
use purrfrog::systems::bounds::clamp_player_after_physics;
use purrfrog::systems::lanes::wrap_lanes;

fn world_with(def: SceneDef) -> World {
    let mut world = World::new();
    world.insert_resource(def);
    world
}

#[test]
fn test_clamp_holds_random_positions_inside_the_play_area() {
    let def = game::frogger();
    let clamp = def.player.clamp;
    let mut world = world_with(def);
    let mut rng = fastrand::Rng::with_seed(7);

    let players: Vec<Entity> = (0..200)
        .map(|_| {
            let pos = Vec2::new(rng.f32() * 2000.0 - 1000.0, rng.f32() * 2000.0 - 1000.0);
            world
                .spawn((Transform::at(pos), InputIntent::default(), Live))
                .id()
        })
        .collect();
    world.run_system_once(clamp_player_after_physics).unwrap();

    for p in players {
        let pos = world.get::<Transform>(p).unwrap().pos;
        assert!(pos.x >= clamp.left + clamp.margin.x && pos.x <= clamp.right - clamp.margin.x);
        assert!(pos.y >= clamp.top + clamp.margin.y && pos.y <= clamp.bottom - clamp.margin.y);
    }
}

#[test]
fn test_clamp_leaves_inside_positions_and_non_players_alone() {
    let mut world = world_with(game::frogger());
    let inside = world
        .spawn((Transform::new(240.0, 300.0), InputIntent::default(), Live))
        .id();
    let car = world.spawn((Transform::new(-40.0, 540.0), Live)).id();
    let pending = world
        .spawn((Transform::new(-40.0, 540.0), InputIntent::default()))
        .id();

    world.run_system_once(clamp_player_after_physics).unwrap();

    assert_eq!(world.get::<Transform>(inside).unwrap().pos, Vec2::new(240.0, 300.0));
    assert_eq!(world.get::<Transform>(car).unwrap().pos, Vec2::new(-40.0, 540.0));
    // not committed yet
    assert_eq!(world.get::<Transform>(pending).unwrap().pos, Vec2::new(-40.0, 540.0));
}

#[test]
fn test_lane_entities_wrap_to_the_far_edge() {
    let mut world = world_with(game::frogger());
    let left = world
        .spawn((
            Tag(EntityKind::MoveLeft),
            Transform::new(-51.0, 540.0).with_velocity(Vec2::new(-60.0, 0.0)),
            Live,
        ))
        .id();
    let right = world
        .spawn((
            Tag(EntityKind::MoveRight),
            Transform::new(531.0, 500.0).with_velocity(Vec2::new(80.0, 0.0)),
            Live,
        ))
        .id();
    let log = world
        .spawn((
            Tag(EntityKind::Tree),
            Transform::new(531.0, 300.0).with_velocity(Vec2::new(50.0, 0.0)),
            Live,
        ))
        .id();
    let near_edge = world
        .spawn((
            Tag(EntityKind::MoveLeft),
            Transform::new(-49.0, 460.0).with_velocity(Vec2::new(-100.0, 0.0)),
            Live,
        ))
        .id();
    let player = world
        .spawn((Tag(EntityKind::Player), Transform::new(-60.0, 580.0), Live))
        .id();

    world.run_system_once(wrap_lanes).unwrap();

    let t = |e: Entity| *world.get::<Transform>(e).unwrap();
    assert_eq!(t(left).pos, Vec2::new(530.0, 540.0));
    assert_eq!(t(left).vel, Vec2::new(-60.0, 0.0));
    assert_eq!(t(right).pos.x, -50.0);
    assert_eq!(t(log).pos.x, -50.0);
    assert_eq!(t(near_edge).pos.x, -49.0);
    assert_eq!(t(player).pos.x, -60.0);
}

#[test]
fn test_built_in_tables_survive_json() {
    for name in game::SCENE_NAMES {
        let def = game::by_name(name).unwrap();
        let json = def.to_json().unwrap();
        assert_eq!(SceneDef::from_json(&json).unwrap(), def, "scene {}", name);
    }
}

#[test]
fn test_invalid_table_is_rejected() {
    let mut def = game::frogger();
    def.view = Vec2::new(0.0, 600.0);
    let json = def.to_json().unwrap();
    assert!(SceneDef::from_json(&json).is_err());
}

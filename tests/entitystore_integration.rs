//! Entity store commit semantics against a bare world.

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;

use purrfrog::components::live::Live;
use purrfrog::components::tag::{EntityKind, Tag};
use purrfrog::components::transform::Transform;
use purrfrog::resources::entitystore::{EntityStore, component, spawn_tagged};
use purrfrog::systems::entitystore::commit_entity_changes;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(EntityStore::new());
    world
}

fn commit(world: &mut World) {
    world.run_system_once(commit_entity_changes).unwrap();
}

#[test]
fn test_added_entity_is_invisible_until_commit() {
    let mut world = make_world();

    let (entity, seen_same_tick) = world
        .run_system_once(|mut store: ResMut<EntityStore>, mut commands: Commands| {
            let entity = store
                .add(&mut commands, EntityKind::MoveLeft)
                .insert(Transform::new(10.0, 20.0))
                .id();
            (entity, store.get(EntityKind::MoveLeft).to_vec())
        })
        .unwrap();
    assert!(seen_same_tick.is_empty());
    assert!(world.get::<Live>(entity).is_none());
    assert_eq!(world.resource::<EntityStore>().pending(), 1);

    commit(&mut world);
    let store = world.resource::<EntityStore>();
    assert_eq!(store.get(EntityKind::MoveLeft), &[entity]);
    assert_eq!(store.all(), &[entity]);
    assert!(world.get::<Live>(entity).is_some());
    assert_eq!(component::<Tag>(&world, entity).kind(), EntityKind::MoveLeft);
    assert_eq!(component::<Transform>(&world, entity).pos, Vec2::new(10.0, 20.0));
}

#[test]
fn test_removed_entity_stays_until_commit() {
    let mut world = make_world();
    let entity = spawn_tagged(&mut world, EntityKind::Tree, Transform::new(0.0, 0.0));
    commit(&mut world);

    world.resource_mut::<EntityStore>().remove(entity);
    world.resource_mut::<EntityStore>().remove(entity);
    {
        let store = world.resource::<EntityStore>();
        assert_eq!(store.get(EntityKind::Tree), &[entity]);
        assert!(store.is_pending_removal(entity));
    }

    commit(&mut world);
    assert!(world.resource::<EntityStore>().get(EntityKind::Tree).is_empty());
    assert!(world.get_entity(entity).is_err());

    // a second commit with nothing pending is a no-op
    commit(&mut world);
    assert!(world.resource::<EntityStore>().all().is_empty());
}

#[test]
fn test_add_and_remove_in_one_tick_is_never_indexed() {
    let mut world = make_world();
    let entity = spawn_tagged(&mut world, EntityKind::FrogOnPad, ());
    world.resource_mut::<EntityStore>().remove(entity);

    commit(&mut world);
    assert!(world.resource::<EntityStore>().all().is_empty());
    assert!(world.get_entity(entity).is_err());
}

#[test]
fn test_insertion_order_is_kept_per_kind() {
    let mut world = make_world();
    let a = spawn_tagged(&mut world, EntityKind::LillyPad, ());
    let b = spawn_tagged(&mut world, EntityKind::Player, ());
    let c = spawn_tagged(&mut world, EntityKind::LillyPad, ());
    commit(&mut world);

    let store = world.resource::<EntityStore>();
    assert_eq!(store.get(EntityKind::LillyPad), &[a, c]);
    assert_eq!(store.first(EntityKind::Player), Some(b));
    assert_eq!(store.all(), &[a, b, c]);
    assert!(store.get(EntityKind::BugIcon).is_empty());
}

#[test]
#[should_panic(expected = "missing required component")]
fn test_missing_required_component_panics() {
    let mut world = make_world();
    let entity = spawn_tagged(&mut world, EntityKind::Player, ());
    let _ = component::<Transform>(&world, entity);
}

//! Ordered, deferred entity registry.
//!
//! Entities live in the bevy [`World`]; the [`EntityStore`] resource adds
//! the two things the scene rules need on top of it:
//!
//! - a stable insertion order, globally and per [`EntityKind`], so rule
//!   resolution can be "first match in store order wins";
//! - deferred additions and removals. A handle returned by
//!   [`EntityStore::add`] or passed to [`EntityStore::remove`] only shows up
//!   in (or disappears from) [`EntityStore::get`] and [`EntityStore::all`]
//!   after the next commit, which runs at the start of every tick through
//!   [`commit_entity_changes`](crate::systems::entitystore::commit_entity_changes).
//!
//! Committed entities carry the [`Live`] marker, so query-driven systems can
//! filter on `With<Live>` and get the same visibility rules as the indices.

use bevy_ecs::prelude::*;
use bevy_ecs::system::EntityCommands;
use log::debug;
use rustc_hash::FxHashMap;

use crate::components::live::Live;
use crate::components::tag::{EntityKind, Tag};

#[derive(Resource, Default, Debug)]
pub struct EntityStore {
    entities: Vec<Entity>,
    by_kind: FxHashMap<EntityKind, Vec<Entity>>,
    to_add: Vec<(Entity, EntityKind)>,
    to_remove: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an entity tagged with `kind` and queue it for the next commit.
    ///
    /// Components are attached on the returned handle. The entity is not
    /// visible through [`get`](Self::get) until the commit runs.
    pub fn add<'a>(&mut self, commands: &'a mut Commands, kind: EntityKind) -> EntityCommands<'a> {
        let ec = commands.spawn(Tag(kind));
        self.to_add.push((ec.id(), kind));
        ec
    }

    /// Queue an entity spawned elsewhere (e.g. directly on the world).
    pub fn queue_add(&mut self, entity: Entity, kind: EntityKind) {
        self.to_add.push((entity, kind));
    }

    /// Queue `entity` for removal. Repeated calls before the commit are no-ops.
    pub fn remove(&mut self, entity: Entity) {
        if !self.to_remove.contains(&entity) {
            self.to_remove.push(entity);
        }
    }

    /// Committed entities of `kind`, in insertion order.
    pub fn get(&self, kind: EntityKind) -> &[Entity] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every committed entity, in insertion order.
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    /// First committed entity of `kind`, if any.
    pub fn first(&self, kind: EntityKind) -> Option<Entity> {
        self.get(kind).first().copied()
    }

    pub fn is_pending_removal(&self, entity: Entity) -> bool {
        self.to_remove.contains(&entity)
    }

    pub fn pending(&self) -> usize {
        self.to_add.len() + self.to_remove.len()
    }

    /// Commit every pending addition and removal.
    ///
    /// Additions are marked [`Live`] and appended to the indices; removals
    /// are dropped from the indices and despawned. An entity added and
    /// removed within the same tick is despawned without ever being indexed.
    pub fn update(&mut self, commands: &mut Commands) {
        if self.to_add.is_empty() && self.to_remove.is_empty() {
            return;
        }
        let removed = std::mem::take(&mut self.to_remove);
        for (entity, kind) in self.to_add.drain(..) {
            if removed.contains(&entity) {
                continue;
            }
            commands.entity(entity).try_insert(Live);
            self.entities.push(entity);
            self.by_kind.entry(kind).or_default().push(entity);
        }
        for entity in &removed {
            self.entities.retain(|e| e != entity);
            for list in self.by_kind.values_mut() {
                list.retain(|e| e != entity);
            }
            commands.entity(*entity).try_despawn();
        }
        debug!(
            "entity store commit: {} live, {} removed",
            self.entities.len(),
            removed.len()
        );
    }
}

/// Spawn a tagged entity directly on the world and queue it for commit.
pub fn spawn_tagged(world: &mut World, kind: EntityKind, bundle: impl Bundle) -> Entity {
    let entity = world.spawn((Tag(kind), bundle)).id();
    world.resource_mut::<EntityStore>().queue_add(entity, kind);
    entity
}

/// Access a component the caller requires to be present.
///
/// # Panics
///
/// Panics if `entity` does not hold a `T`. A missing required component is
/// a programming error in scene setup, not a runtime condition.
pub fn component<T: Component>(world: &World, entity: Entity) -> &T {
    match world.get::<T>(entity) {
        Some(c) => c,
        None => panic!(
            "entity {:?} is missing required component {}",
            entity,
            std::any::type_name::<T>()
        ),
    }
}

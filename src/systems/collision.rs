//! Collision detection helpers.
//!
//! All tests are centered axis-aligned box overlaps: two boxes overlap when
//! `|dx| < hw1 + hw2` and `|dy| < hh1 + hh2`. Entities without a
//! [`Transform`] or a [`BoundingBox`] never collide.
//!
//! - [`overlaps`] is the pure test on positions and boxes.
//! - [`check_collision`] answers the question for two entities of a world.
//! - [`collides`] is the form used inside systems, fed by `Query::get`.
//! - [`contacts`] lists the entities of a candidate slice touching a box,
//!   in slice order.

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::boundingbox::BoundingBox;
use crate::components::transform::Transform;

pub fn overlaps(pos_a: Vec2, box_a: &BoundingBox, pos_b: Vec2, box_b: &BoundingBox) -> bool {
    box_a.overlaps(pos_a, box_b, pos_b)
}

/// True if both entities carry a transform and a bounding box that overlap.
pub fn check_collision(world: &World, a: Entity, b: Entity) -> bool {
    collides(shape(world, a), shape(world, b))
}

fn shape(world: &World, e: Entity) -> Option<(&Transform, &BoundingBox)> {
    let entity = world.get_entity(e).ok()?;
    Some((entity.get::<Transform>()?, entity.get::<BoundingBox>()?))
}

pub fn collides(
    a: Option<(&Transform, &BoundingBox)>,
    b: Option<(&Transform, &BoundingBox)>,
) -> bool {
    match (a, b) {
        (Some((ta, ba)), Some((tb, bb))) => overlaps(ta.pos, ba, tb.pos, bb),
        _ => false,
    }
}

/// Entities from `candidates` whose shape overlaps `bbox` placed at `pos`.
pub fn contacts<F: bevy_ecs::query::QueryFilter>(
    pos: Vec2,
    bbox: &BoundingBox,
    candidates: &[Entity],
    shapes: &Query<(&Transform, &BoundingBox), F>,
) -> SmallVec<[Entity; 8]> {
    candidates
        .iter()
        .copied()
        .filter(|&e| {
            shapes
                .get(e)
                .is_ok_and(|(t, b)| overlaps(pos, bbox, t.pos, b))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_box(world: &mut World, pos: Vec2, size: Vec2) -> Entity {
        world
            .spawn((Transform::at(pos), BoundingBox::new(size.x, size.y)))
            .id()
    }

    #[test]
    fn test_missing_components_never_collide() {
        let mut world = World::new();
        let full = spawn_box(&mut world, Vec2::ZERO, Vec2::splat(10.0));
        let no_box = world.spawn(Transform::new(0.0, 0.0)).id();
        let no_transform = world.spawn(BoundingBox::new(10.0, 10.0)).id();
        let bare = world.spawn_empty().id();

        assert!(check_collision(&world, full, full));
        for other in [no_box, no_transform, bare] {
            assert!(!check_collision(&world, full, other));
            assert!(!check_collision(&world, other, full));
        }
    }

    #[test]
    fn test_despawned_entity_never_collides() {
        let mut world = World::new();
        let a = spawn_box(&mut world, Vec2::ZERO, Vec2::splat(10.0));
        let b = spawn_box(&mut world, Vec2::ZERO, Vec2::splat(10.0));
        world.despawn(b);
        assert!(!check_collision(&world, a, b));
    }

    #[test]
    fn test_random_rectangles_match_separating_axis() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        let mut world = World::new();
        for _ in 0..500 {
            let pa = Vec2::new(rng.f32() * 200.0 - 100.0, rng.f32() * 200.0 - 100.0);
            let pb = Vec2::new(rng.f32() * 200.0 - 100.0, rng.f32() * 200.0 - 100.0);
            let sa = Vec2::new(rng.f32() * 80.0 + 1.0, rng.f32() * 80.0 + 1.0);
            let sb = Vec2::new(rng.f32() * 80.0 + 1.0, rng.f32() * 80.0 + 1.0);
            let a = spawn_box(&mut world, pa, sa);
            let b = spawn_box(&mut world, pb, sb);

            let d = (pa - pb).abs();
            let half = (sa + sb) * 0.5;
            let expected = d.x < half.x && d.y < half.y;
            assert_eq!(check_collision(&world, a, b), expected, "{pa} {sa} vs {pb} {sb}");
            // symmetric
            assert_eq!(check_collision(&world, b, a), expected);
        }
    }
}

//! Animation system.
//!
//! [`animate`] advances every live [`Animation`] by the frame delta using
//! the clip parameters from the [`AnimationStore`]. Looping clips wrap to
//! the first frame; other clips hold their last frame and set `finished`.
//! A clip key missing from the store is reported once and treated as
//! finished so nothing waits on it forever.

use bevy_ecs::prelude::*;
use log::warn;
use rustc_hash::FxHashSet;

use crate::components::animation::Animation;
use crate::components::live::Live;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animate(
    mut query: Query<&mut Animation, With<Live>>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut missing: Local<FxHashSet<String>>,
) {
    for mut anim in query.iter_mut() {
        if anim.finished {
            continue;
        }
        let Some(clip) = animation_store.get(&anim.clip) else {
            if missing.insert(anim.clip.clone()) {
                warn!("animation clip '{}' not found in store", anim.clip);
            }
            anim.finished = true;
            continue;
        };

        anim.elapsed_time += time.delta;
        let frame_duration = 1.0 / clip.fps.max(f32::EPSILON);
        while anim.elapsed_time >= frame_duration {
            anim.elapsed_time -= frame_duration;
            anim.frame_index += 1;
            if anim.frame_index >= clip.frame_count {
                if clip.looped {
                    anim.frame_index = 0;
                } else {
                    anim.frame_index = clip.frame_count - 1; // stay on last frame
                    anim.finished = true;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::AnimationResource;
    use bevy_ecs::system::RunSystemOnce;
    use glam::Vec2;

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        let mut store = AnimationStore::default();
        store.insert("walk", AnimationResource::new("t", Vec2::splat(8.0), 3, 10.0, true));
        store.insert("die", AnimationResource::new("t", Vec2::splat(8.0), 2, 10.0, false));
        world.insert_resource(store);
        world.insert_resource(WorldTime {
            delta,
            ..Default::default()
        });
        world
    }

    fn tick(world: &mut World) {
        world.run_system_once(animate).unwrap();
    }

    #[test]
    fn test_looped_clip_wraps() {
        let mut world = make_world(0.1);
        let e = world.spawn((Animation::new("walk"), Live)).id();
        for _ in 0..3 {
            tick(&mut world);
        }
        let anim = world.get::<Animation>(e).unwrap();
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn test_one_shot_clip_finishes_on_last_frame() {
        let mut world = make_world(0.1);
        let e = world.spawn((Animation::new("die"), Live)).id();
        tick(&mut world);
        assert!(!world.get::<Animation>(e).unwrap().finished);
        tick(&mut world);
        let anim = world.get::<Animation>(e).unwrap();
        assert!(anim.finished);
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn test_missing_clip_counts_as_finished() {
        let mut world = make_world(0.1);
        let e = world.spawn((Animation::new("nope"), Live)).id();
        tick(&mut world);
        assert!(world.get::<Animation>(e).unwrap().has_ended());
    }

    #[test]
    fn test_uncommitted_entities_do_not_animate() {
        let mut world = make_world(0.1);
        let e = world.spawn(Animation::new("walk")).id();
        tick(&mut world);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 0);
    }
}

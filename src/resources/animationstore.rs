//! Animation resource registry.
//!
//! This module provides a minimal store for animation clips that can be
//! reused by multiple entities. Systems look up a clip by its string key and
//! drive playback based on the immutable parameters stored here.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation clips keyed by string IDs.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a horizontal sprite-sheet strip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key handed to the renderer.
    pub tex_key: Arc<str>,
    /// Top-left corner of the first frame in the texture.
    pub origin: Vec2,
    /// Size of a single frame; frames are laid out left to right.
    pub frame_size: Vec2,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn new(tex_key: &str, frame_size: Vec2, frame_count: usize, fps: f32, looped: bool) -> Self {
        Self {
            tex_key: Arc::from(tex_key),
            origin: Vec2::ZERO,
            frame_size,
            frame_count: frame_count.max(1),
            fps,
            looped,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Source rectangle `(x, y, w, h)` of `frame` inside the texture.
    pub fn frame_rect(&self, frame: usize) -> (f32, f32, f32, f32) {
        let frame = frame.min(self.frame_count - 1) as f32;
        (
            self.origin.x + frame * self.frame_size.x,
            self.origin.y,
            self.frame_size.x,
            self.frame_size.y,
        )
    }
}

impl AnimationStore {
    pub fn insert(&mut self, key: &str, clip: AnimationResource) {
        self.animations.insert(key.to_string(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rect_steps_right_and_clamps() {
        let clip = AnimationResource::new("frog", Vec2::new(16.0, 16.0), 3, 10.0, true)
            .with_origin(Vec2::new(0.0, 32.0));
        assert_eq!(clip.frame_rect(1), (16.0, 32.0, 16.0, 16.0));
        assert_eq!(clip.frame_rect(9), (32.0, 32.0, 16.0, 16.0));
    }
}

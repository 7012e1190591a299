use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Playback state of a sprite animation clip.
///
/// The clip parameters (frame count, fps, looping) live in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore). To
/// switch clips, replace the whole component; there is no blending.
#[derive(Debug, Clone, PartialEq, Component, Serialize, Deserialize)]
pub struct Animation {
    pub clip: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Set once a non-looping clip has shown its last frame.
    pub finished: bool,
}

impl Animation {
    pub fn new(clip: impl Into<String>) -> Self {
        Self {
            clip: clip.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// True if this component is playing `clip`.
    pub fn is(&self, clip: &str) -> bool {
        self.clip == clip
    }

    /// Whether the clip has ended.
    pub fn has_ended(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_first_frame() {
        let anim = Animation::new("die");
        assert!(anim.is("die"));
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.has_ended());
    }
}

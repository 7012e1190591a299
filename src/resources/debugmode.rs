//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that bounding-box overlays
//! should be emitted into the render frame. Remove it to disable them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the frame builder adds debug boxes.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}

/// Renderer switches flipped by `TOGGLE_TEXTURE` and `TOGGLE_GRID`.
#[derive(Resource, Clone, Copy, Debug)]
pub struct RenderFlags {
    pub textures: bool,
    pub grid: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            textures: true,
            grid: false,
        }
    }
}

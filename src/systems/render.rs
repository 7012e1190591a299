//! Render output.
//!
//! The scene does not draw. [`build_frame`] collects everything a renderer
//! needs into a [`Frame`] value, and any [`Renderer`] implementation turns
//! that into pixels (or logs, in the headless runner).
//!
//! Frame contents, in draw order:
//! - level backgrounds, anchored top-left;
//! - animated entities in store insertion order, with the source rectangle
//!   of their current frame;
//! - debug bounding boxes while [`DebugMode`] is present;
//! - HUD values, the script text box and the ending overlay.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::boundingbox::BoundingBox;
use crate::components::sprite::Sprite;
use crate::components::tag::{EntityKind, Tag};
use crate::components::transform::Transform;
use crate::resources::animationstore::AnimationStore;
use crate::resources::debugmode::{DebugMode, RenderFlags};
use crate::resources::entitystore::EntityStore;
use crate::resources::paused::Paused;
use crate::resources::scenedef::SceneDef;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::script::ScriptState;

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundDraw {
    pub tex_key: String,
    pub top_left: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub kind: EntityKind,
    pub clip: String,
    pub frame: usize,
    /// Texture key and source rectangle, when the clip is known.
    pub source: Option<(String, (f32, f32, f32, f32))>,
    /// Center of the sprite.
    pub pos: Vec2,
    /// Rotation in degrees.
    pub angle: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebugBox {
    pub kind: EntityKind,
    /// `(x, y, w, h)` with `(x, y)` the top-left corner.
    pub rect: (f32, f32, f32, f32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub view: Vec2,
    pub backgrounds: Vec<BackgroundDraw>,
    pub sprites: Vec<SpriteDraw>,
    pub debug_boxes: Vec<DebugBox>,
    pub score: u32,
    pub lives: u32,
    pub text: Option<String>,
    pub final_message: Option<String>,
    /// Ending overlay alpha, 0 when no fade is running.
    pub fade_alpha: u8,
    pub textures: bool,
    pub grid: bool,
    pub paused: bool,
}

/// Drawing collaborator.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Build the frame for the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_frame(
    def: Res<SceneDef>,
    store: Res<EntityStore>,
    animations: Res<AnimationStore>,
    scoreboard: Res<Scoreboard>,
    flags: Res<RenderFlags>,
    debug: Option<Res<DebugMode>>,
    paused: Option<Res<Paused>>,
    script: Option<Res<ScriptState>>,
    backgrounds: Query<&Sprite>,
    animated: Query<(&Tag, &Transform, &Animation)>,
    shapes: Query<(&Tag, &Transform, &BoundingBox)>,
) -> Frame {
    let mut frame = Frame {
        view: def.view,
        score: scoreboard.score,
        lives: scoreboard.lives,
        textures: flags.textures,
        grid: flags.grid,
        paused: paused.is_some(),
        ..Default::default()
    };

    for &entity in store.get(EntityKind::Background) {
        if let Ok(sprite) = backgrounds.get(entity) {
            frame.backgrounds.push(BackgroundDraw {
                tex_key: sprite.tex_key.clone(),
                top_left: sprite.top_left,
            });
        }
    }

    for &entity in store.all() {
        let Ok((tag, transform, anim)) = animated.get(entity) else {
            continue;
        };
        let source = animations
            .get(&anim.clip)
            .map(|clip| (clip.tex_key.to_string(), clip.frame_rect(anim.frame_index)));
        frame.sprites.push(SpriteDraw {
            kind: tag.kind(),
            clip: anim.clip.clone(),
            frame: anim.frame_index,
            source,
            pos: transform.pos,
            angle: transform.angle,
        });
    }

    if debug.is_some() {
        for &entity in store.all() {
            if let Ok((tag, transform, bbox)) = shapes.get(entity) {
                frame.debug_boxes.push(DebugBox {
                    kind: tag.kind(),
                    rect: bbox.rect(transform.pos),
                });
            }
        }
    }

    if let Some(script) = script {
        frame.text = script.text.visible_text().map(str::to_string);
        frame.final_message = script.ending.message.clone();
        frame.fade_alpha = script.ending.alpha.clamp(0.0, 255.0) as u8;
    }

    frame
}

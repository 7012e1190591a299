//! Scene tables.
//!
//! A [`SceneDef`] is the whole description of a playable scene: view size,
//! player setup, input policy, optional gravity, the rule set, lane and pad
//! layout, platforms, the scoring icon and the timed script. One
//! [`Scene`](crate::scene::Scene) runs any table; the built-in ones live in
//! [`crate::game`].
//!
//! Tables are plain serde data so they can be dumped to and loaded from JSON
//! (`--scene-file` on the command line). While a scene runs, its table is
//! available to systems as a read-only resource.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::tag::EntityKind;

/// Errors raised while loading or validating a scene table.
#[derive(Debug, Error)]
pub enum SceneDefError {
    #[error("cannot read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid scene table: {0}")]
    Invalid(String),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDef {
    pub name: String,
    /// Width and height of the simulated view.
    pub view: Vec2,
    pub player: PlayerDef,
    pub input: InputPolicy,
    #[serde(default)]
    pub gravity: Option<GravityDef>,
    pub rules: RuleSet,
    #[serde(default)]
    pub lanes: Vec<LaneDef>,
    #[serde(default)]
    pub pads: Vec<RectDef>,
    #[serde(default)]
    pub platforms: Vec<RectDef>,
    #[serde(default)]
    pub icon: Option<IconDef>,
    #[serde(default)]
    pub script: Option<ScriptDef>,
    /// Music track started when the scene begins.
    #[serde(default)]
    pub music: Option<String>,
    /// Horizontal distance past the view edge before a lane entity wraps.
    #[serde(default = "default_wrap_margin")]
    pub wrap_margin: f32,
}

fn default_wrap_margin() -> f32 {
    50.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDef {
    pub spawn: Vec2,
    pub size: Vec2,
    pub clamp: ClampDef,
    /// Clip shown at spawn and while standing still.
    #[serde(default = "default_idle_clip")]
    pub idle_clip: String,
}

fn default_idle_clip() -> String {
    "idle".to_string()
}

/// Play area the player is held inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampDef {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub margin: Vec2,
}

impl ClampDef {
    /// Clamp a position into `[left+mx, right-mx] x [top+my, bottom-my]`.
    pub fn apply(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.max(self.left + self.margin.x).min(self.right - self.margin.x),
            pos.y.max(self.top + self.margin.y).min(self.bottom - self.margin.y),
        )
    }
}

/// How player commands turn into motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputPolicy {
    /// One fixed displacement per press; the intent is consumed each tick.
    Hop { distance: f32 },
    /// Held keys move by `step` every tick; UP starts a jump when grounded.
    Continuous { step: f32, jump_velocity: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityDef {
    pub g: f32,
    /// Fixed integration step, independent of the frame delta.
    pub substep: f32,
    pub ground_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleSet {
    Lanes(LaneRules),
    Platformer,
}

/// Open vertical interval `min < y < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub fn contains(&self, y: f32) -> bool {
        self.min < y && y < self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneRules {
    /// Band where lane entities and trees are rafts and open water drowns.
    pub water_row: Band,
    /// Band where lane entities are traffic.
    pub road_row: Band,
    pub lateral_min: f32,
    pub lateral_max: f32,
    pub pad_points: u32,
    pub all_pads_bonus: u32,
    pub occupied_pad_penalty: u32,
}

/// A row of identical moving entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneDef {
    /// `MoveLeft`, `MoveRight` or `Tree`.
    pub kind: EntityKind,
    pub y: f32,
    /// Signed horizontal velocity.
    pub speed: f32,
    pub count: usize,
    pub spacing: f32,
    pub size: Vec2,
    pub clip: String,
    #[serde(default)]
    pub ang_vel: f32,
    /// Random horizontal offset applied to the whole row at spawn.
    #[serde(default)]
    pub jitter: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDef {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Scoring icon placed on a free goal pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconDef {
    pub size: Vec2,
    /// Seconds the icon stays visible, and stays hidden.
    pub duration: f32,
    pub points: u32,
    pub clip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    pub text: String,
    pub start: f32,
    pub end: f32,
}

impl TextEntry {
    pub fn new(text: &str, start: f32, end: f32) -> Self {
        Self {
            text: text.to_string(),
            start,
            end,
        }
    }
}

/// Entries appended at `at` seconds depending on a box activation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDef {
    pub at: f32,
    pub box_index: usize,
    pub when_active: Vec<TextEntry>,
    pub otherwise: Vec<TextEntry>,
    /// Appended after the chosen branch in both cases.
    #[serde(default)]
    pub then: Vec<TextEntry>,
}

/// Interactive box kept alive between `spawn_at` and `remove_at`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDef {
    pub index: usize,
    pub spawn_at: f32,
    pub remove_at: f32,
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndingDef {
    pub at: f32,
    /// Shown when every box was activated.
    pub all: String,
    /// Shown when some boxes were activated.
    pub some: String,
    /// Shown when no box was activated.
    pub none: String,
    /// Overlay alpha added per tick, saturating at 255.
    pub fade_step: f32,
    /// Seconds after `at` before the menu is requested.
    pub hold: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptDef {
    /// Seconds between two revealed characters.
    pub interval: f32,
    pub entries: Vec<TextEntry>,
    #[serde(default)]
    pub branches: Vec<BranchDef>,
    #[serde(default)]
    pub boxes: Vec<BoxDef>,
    #[serde(default)]
    pub ending: Option<EndingDef>,
}

impl SceneDef {
    pub fn from_json(json: &str) -> Result<Self, SceneDefError> {
        let def: SceneDef = serde_json::from_str(json)?;
        def.validate()?;
        Ok(def)
    }

    pub fn from_file(path: &Path) -> Result<Self, SceneDefError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneDefError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, SceneDefError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject tables the scene cannot run.
    pub fn validate(&self) -> Result<(), SceneDefError> {
        if self.view.x <= 0.0 || self.view.y <= 0.0 {
            return Err(SceneDefError::Invalid(format!(
                "view must be positive, got {}x{}",
                self.view.x, self.view.y
            )));
        }
        let clamp = &self.player.clamp;
        if clamp.left + clamp.margin.x > clamp.right - clamp.margin.x
            || clamp.top + clamp.margin.y > clamp.bottom - clamp.margin.y
        {
            return Err(SceneDefError::Invalid("empty player clamp area".into()));
        }
        for lane in &self.lanes {
            if !lane.kind.is_raft() {
                return Err(SceneDefError::Invalid(format!(
                    "lane at y={} has non-moving kind {}",
                    lane.y, lane.kind
                )));
            }
        }
        if let Some(script) = &self.script {
            if script.interval <= 0.0 {
                return Err(SceneDefError::Invalid(
                    "script interval must be positive".into(),
                ));
            }
            if let Some(entry) = script.entries.iter().find(|e| e.end < e.start) {
                return Err(SceneDefError::Invalid(format!(
                    "text entry {:?} ends before it starts",
                    entry.text
                )));
            }
        }
        if self.icon.is_some() && self.pads.is_empty() {
            return Err(SceneDefError::Invalid(
                "a scoring icon needs at least one pad".into(),
            ));
        }
        Ok(())
    }

    pub fn lane_rules(&self) -> Option<&LaneRules> {
        match &self.rules {
            RuleSet::Lanes(rules) => Some(rules),
            RuleSet::Platformer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_apply() {
        let clamp = ClampDef {
            left: 0.0,
            right: 480.0,
            top: 0.0,
            bottom: 600.0,
            margin: Vec2::new(20.0, 20.0),
        };
        assert_eq!(clamp.apply(Vec2::new(-1e6, 1e6)), Vec2::new(20.0, 580.0));
        assert_eq!(clamp.apply(Vec2::new(100.0, 100.0)), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_band_is_open() {
        let band = Band {
            min: 139.0,
            max: 301.0,
        };
        assert!(band.contains(140.0));
        assert!(!band.contains(139.0));
        assert!(!band.contains(301.0));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = SceneDef::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SceneDefError::Parse(_)));
    }
}

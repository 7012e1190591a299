use std::fmt;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Behavioral class of an entity.
///
/// Rule systems dispatch on this instead of free-form strings; the camelCase
/// names are kept for display and for scene tables written as JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    #[serde(rename = "bkg")]
    Background,
    Player,
    MoveLeft,
    MoveRight,
    Tree,
    LillyPad,
    BugIcon,
    FrogOnPad,
    InvisibleCollisionBox,
    InteractiveBox,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Background => "bkg",
            EntityKind::Player => "player",
            EntityKind::MoveLeft => "moveLeft",
            EntityKind::MoveRight => "moveRight",
            EntityKind::Tree => "tree",
            EntityKind::LillyPad => "lillyPad",
            EntityKind::BugIcon => "bugIcon",
            EntityKind::FrogOnPad => "frogOnPad",
            EntityKind::InvisibleCollisionBox => "invisibleCollisionBox",
            EntityKind::InteractiveBox => "interactiveBox",
        }
    }

    /// Moving traffic/raft lanes.
    pub fn is_lane(&self) -> bool {
        matches!(self, EntityKind::MoveLeft | EntityKind::MoveRight)
    }

    /// Entities the player can ride across the water row.
    pub fn is_raft(&self) -> bool {
        matches!(
            self,
            EntityKind::MoveLeft | EntityKind::MoveRight | EntityKind::Tree
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category label attached to every entity created through the
/// [`EntityStore`](crate::resources::entitystore::EntityStore).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag(pub EntityKind);

impl Tag {
    pub fn kind(&self) -> EntityKind {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tags() {
        assert_eq!(EntityKind::Background.to_string(), "bkg");
        assert_eq!(EntityKind::LillyPad.to_string(), "lillyPad");
        assert_eq!(
            EntityKind::InvisibleCollisionBox.as_str(),
            "invisibleCollisionBox"
        );
    }

    #[test]
    fn test_lane_and_raft_classes() {
        assert!(EntityKind::MoveLeft.is_lane());
        assert!(!EntityKind::Tree.is_lane());
        assert!(EntityKind::Tree.is_raft());
        assert!(!EntityKind::LillyPad.is_raft());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&EntityKind::MoveRight).unwrap();
        assert_eq!(json, "\"moveRight\"");
        let kind: EntityKind = serde_json::from_str("\"bkg\"").unwrap();
        assert_eq!(kind, EntityKind::Background);
    }
}

//! Input command events.
//!
//! An external input mapper turns physical keys into [`Command`] pairs
//! (`START`/`END` plus a logical name). The scene triggers an
//! [`ActionEvent`] for each one, and the
//! [`on_action`](crate::systems::actions::on_action) observer applies it to
//! the world.

use bevy_ecs::prelude::*;
use std::fmt;

/// Press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionPhase {
    Start,
    End,
}

/// Logical actions understood by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionName {
    Pause,
    Quit,
    Back,
    Left,
    Right,
    Up,
    Down,
    ToggleCollision,
    ToggleTexture,
    ToggleGrid,
    Activate,
}

impl ActionName {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "PAUSE" => ActionName::Pause,
            "QUIT" => ActionName::Quit,
            "BACK" => ActionName::Back,
            "LEFT" => ActionName::Left,
            "RIGHT" => ActionName::Right,
            "UP" => ActionName::Up,
            "DOWN" => ActionName::Down,
            "TOGGLE_COLLISION" => ActionName::ToggleCollision,
            "TOGGLE_TEXTURE" => ActionName::ToggleTexture,
            "TOGGLE_GRID" => ActionName::ToggleGrid,
            "ACTIVATE" => ActionName::Activate,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionName::Pause => "PAUSE",
            ActionName::Quit => "QUIT",
            ActionName::Back => "BACK",
            ActionName::Left => "LEFT",
            ActionName::Right => "RIGHT",
            ActionName::Up => "UP",
            ActionName::Down => "DOWN",
            ActionName::ToggleCollision => "TOGGLE_COLLISION",
            ActionName::ToggleTexture => "TOGGLE_TEXTURE",
            ActionName::ToggleGrid => "TOGGLE_GRID",
            ActionName::Activate => "ACTIVATE",
        }
    }

    /// Direction bit for movement actions.
    pub fn direction_bit(&self) -> Option<u8> {
        use crate::components::inputintent::InputIntent;
        match self {
            ActionName::Up => Some(InputIntent::UP),
            ActionName::Down => Some(InputIntent::DOWN),
            ActionName::Left => Some(InputIntent::LEFT),
            ActionName::Right => Some(InputIntent::RIGHT),
            _ => None,
        }
    }
}

/// One input command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub phase: ActionPhase,
    pub name: ActionName,
}

impl Command {
    pub fn start(name: ActionName) -> Self {
        Self {
            phase: ActionPhase::Start,
            name,
        }
    }

    pub fn end(name: ActionName) -> Self {
        Self {
            phase: ActionPhase::End,
            name,
        }
    }

    /// Parse a `("START" | "END", NAME)` pair. Unknown types or names
    /// yield `None` and are meant to be ignored.
    pub fn parse(kind: &str, name: &str) -> Option<Self> {
        let phase = match kind {
            "START" => ActionPhase::Start,
            "END" => ActionPhase::End,
            _ => return None,
        };
        Some(Self {
            phase,
            name: ActionName::parse(name)?,
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            ActionPhase::Start => "START",
            ActionPhase::End => "END",
        };
        write!(f, "{} {}", phase, self.name.as_str())
    }
}

/// Event triggered on the scene world for every input command.
#[derive(Event, Debug, Clone, Copy)]
pub struct ActionEvent {
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(
            Command::parse("START", "LEFT"),
            Some(Command::start(ActionName::Left))
        );
        assert_eq!(
            Command::parse("END", "TOGGLE_COLLISION"),
            Some(Command::end(ActionName::ToggleCollision))
        );
        assert_eq!(Command::parse("START", "JUMP"), None);
        assert_eq!(Command::parse("HOLD", "LEFT"), None);
    }

    #[test]
    fn test_display_round_trips_names() {
        let cmd = Command::start(ActionName::Activate);
        assert_eq!(cmd.to_string(), "START ACTIVATE");
        assert_eq!(ActionName::parse(cmd.name.as_str()), Some(cmd.name));
    }
}

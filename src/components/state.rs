//! Discrete state components.
//!
//! Each kind of stateful entity gets its own closed enum so rule dispatch is
//! checked exhaustively. [`as_str`](PlayerState::as_str) gives the display
//! name used in logs and debug overlays.

use std::fmt;

use bevy_ecs::prelude::Component;

/// Player motion/life state.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Grounded,
    Jumping,
    Dead,
}

impl PlayerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::Grounded => "grounded",
            PlayerState::Jumping => "jumping",
            PlayerState::Dead => "dead",
        }
    }
}

/// Goal pad occupancy.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PadState {
    #[default]
    Free,
    HasFrog,
}

impl PadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PadState::Free => "free",
            PadState::HasFrog => "hasFrog",
        }
    }
}

/// Interactive box activation.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BoxState {
    #[default]
    Inactive,
    Active,
}

impl BoxState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxState::Inactive => "inactive",
            BoxState::Active => "active",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BoxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(PlayerState::Grounded.to_string(), "grounded");
        assert_eq!(PlayerState::Jumping.as_str(), "jumping");
        assert_eq!(PlayerState::Dead.as_str(), "dead");
        assert_eq!(PadState::HasFrog.to_string(), "hasFrog");
        assert_eq!(BoxState::Active.to_string(), "active");
        assert_eq!(BoxState::default(), BoxState::Inactive);
    }
}

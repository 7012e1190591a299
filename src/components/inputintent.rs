//! Player input intent.
//!
//! [`InputIntent`] stores the directions currently requested for the entity
//! it is attached to. Its presence also marks the entity as player-driven:
//! the generic movement system skips every entity carrying it.
//!
//! How the bits are written and consumed depends on the scene's
//! [`InputPolicy`](crate::resources::scenedef::InputPolicy):
//! - `Hop`: a press sets a single bit, the input system applies one hop and
//!   clears the mask in the same tick.
//! - `Continuous`: a press sets a single bit that persists until the matching
//!   release command clears it.

use bevy_ecs::prelude::Component;

/// Bitmask of requested movement directions.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub dir: u8,
}

impl InputIntent {
    pub const UP: u8 = 1 << 0;
    pub const DOWN: u8 = 1 << 1;
    pub const LEFT: u8 = 1 << 2;
    pub const RIGHT: u8 = 1 << 3;

    /// Replace the mask with a single direction. Only one direction at a
    /// time is allowed, no diagonals.
    pub fn press(&mut self, bit: u8) {
        self.dir = bit;
    }

    /// Drop every requested direction.
    pub fn clear(&mut self) {
        self.dir = 0;
    }

    pub fn has(&self, bit: u8) -> bool {
        self.dir & bit != 0
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_exclusive() {
        let mut intent = InputIntent::default();
        intent.press(InputIntent::LEFT);
        intent.press(InputIntent::UP);
        assert!(intent.has(InputIntent::UP));
        assert!(!intent.has(InputIntent::LEFT));
    }

    #[test]
    fn test_clear() {
        let mut intent = InputIntent::default();
        intent.press(InputIntent::RIGHT);
        intent.clear();
        assert!(intent.is_idle());
    }
}

//! Score, lives and goal progress.

use bevy_ecs::prelude::Resource;

/// Player score and remaining lives.
///
/// Owned by the [`GameContext`](crate::context::GameContext) so it outlives
/// a single scene; the scene holds it as a resource while running.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
}

impl Scoreboard {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Subtract points, never going below zero.
    pub fn penalize(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    /// Take one life and return how many are left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Number of goal pads claimed in the current round.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadProgress {
    pub claimed: u32,
}

//! Kinematic placement of an entity.
//!
//! [`Transform`] merges the position, velocity and rotation an entity needs
//! for the scene simulation. The movement system integrates `vel` into `pos`
//! and `ang_vel` into `angle` for every entity that is not driven by player
//! input.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Position, velocity and rotation of an entity in world units.
///
/// # Fields
/// - `pos` - Center of the entity (bounding boxes are centered here)
/// - `vel` - Velocity in world units per second
/// - `angle` - Rotation in degrees
/// - `ang_vel` - Angular velocity in degrees per second
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub ang_vel: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Transform {
    /// Create a stationary transform at the given position.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            angle: 0.0,
            ang_vel: 0.0,
        }
    }

    /// Create a stationary transform from a position vector.
    pub fn at(pos: Vec2) -> Self {
        Self::new(pos.x, pos.y)
    }

    /// Builder: set the linear velocity.
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Builder: set the angular velocity in degrees per second.
    pub fn with_angular_velocity(mut self, ang_vel: f32) -> Self {
        self.ang_vel = ang_vel;
        self
    }

    /// Integrate velocity and angular velocity over `dt` seconds.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.angle += self.ang_vel * dt;
    }
}

//! Axis-aligned bounding box centered on an entity's transform.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoundingBox {
    /// Half of the box width and height.
    pub half: Vec2,
}

impl BoundingBox {
    /// Create a box from its full width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Full size of the box.
    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    /// Returns (min, max) corners of the box for a given center.
    pub fn aabb(&self, center: Vec2) -> (Vec2, Vec2) {
        (center - self.half, center + self.half)
    }

    /// Returns (x, y, w, h) with (x, y) the top-left corner.
    pub fn rect(&self, center: Vec2) -> (f32, f32, f32, f32) {
        let (min, _) = self.aabb(center);
        let size = self.size();
        (min.x, min.y, size.x, size.y)
    }

    /// Overlap test against another box placed at a different center.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, center: Vec2, other: &Self, other_center: Vec2) -> bool {
        let delta = (center - other_center).abs();
        delta.x < self.half.x + other.half.x && delta.y < self.half.y + other.half.y
    }

    /// Lower edge (largest y) of the box for a given center.
    pub fn bottom(&self, center: Vec2) -> f32 {
        center.y + self.half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_half_extents() {
        let b = BoundingBox::new(15.0, 20.0);
        assert_eq!(b.half, Vec2::new(7.5, 10.0));
        assert_eq!(b.size(), Vec2::new(15.0, 20.0));
    }

    #[test]
    fn test_overlap_and_touching() {
        let a = BoundingBox::new(10.0, 10.0);
        let b = BoundingBox::new(10.0, 10.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(9.9, 0.0)));
        // exactly touching edges
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(0.0, -10.0)));
    }

    #[test]
    fn test_rect_is_top_left_anchored() {
        let b = BoundingBox::new(4.0, 6.0);
        assert_eq!(b.rect(Vec2::new(10.0, 10.0)), (8.0, 7.0, 4.0, 6.0));
        assert_eq!(b.bottom(Vec2::new(10.0, 10.0)), 13.0);
    }
}

// Counts seconds up to a duration; restarted explicitly.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
        }
    }
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_finishes_and_restarts() {
        let mut t = Timer::new(1.0);
        t.tick(0.6);
        assert!(!t.finished());
        t.tick(0.4);
        assert!(t.finished());
        t.restart();
        assert!(!t.finished());
    }
}

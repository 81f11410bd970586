//! Pull-gesture evaluation
//!
//! A pull gesture is the already-translated (start, current) drag pair for
//! the ball whose turn it is. Releasing launches the ball opposite the drag
//! direction - pull back, fly forward. A drag with zero displacement carries
//! no aim at all, so every accessor is an `Option` and release becomes a
//! no-op rather than an error.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An in-progress aim drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PullGesture {
    /// Where the drag began
    pub start: Vec2,
    /// Latest drag position
    pub current: Vec2,
}

impl PullGesture {
    /// A gesture starts with zero displacement
    pub fn new(point: Vec2) -> Self {
        Self {
            start: point,
            current: point,
        }
    }

    /// Drag direction in radians, `None` while the drag has not moved
    pub fn pull_angle(&self) -> Option<f32> {
        if self.current == self.start {
            return None;
        }
        Some((self.current.y - self.start.y).atan2(self.current.x - self.start.x))
    }

    /// Straight-line drag distance
    #[inline]
    pub fn tension(&self) -> f32 {
        self.start.distance(self.current)
    }

    /// Tension scaled to launch power
    #[inline]
    pub fn pullback(&self, multiplier: f32) -> f32 {
        self.tension() * multiplier
    }

    /// Velocity imparted on release: opposite the drag, scaled by pullback.
    /// `None` for a zero-displacement drag (release is a no-op).
    pub fn launch_velocity(&self, multiplier: f32) -> Option<Vec2> {
        let angle = self.pull_angle()?;
        let pullback = self.pullback(multiplier);
        Some(Vec2::new(-angle.cos(), -angle.sin()) * pullback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_zero_displacement_has_no_aim() {
        let g = PullGesture::new(Vec2::new(100.0, 100.0));
        assert_eq!(g.pull_angle(), None);
        assert_eq!(g.launch_velocity(0.5), None);
        assert_eq!(g.tension(), 0.0);
    }

    #[test]
    fn test_horizontal_drag() {
        // Drag left from (100,100) to (80,100): angle 180 degrees, tension 20
        let g = PullGesture {
            start: Vec2::new(100.0, 100.0),
            current: Vec2::new(80.0, 100.0),
        };

        let angle = g.pull_angle().unwrap();
        assert!((angle - PI).abs() < 1e-6);
        assert!((g.tension() - 20.0).abs() < 1e-6);

        // Release fires the ball the other way: +x, with pullback 20 * 0.5
        let vel = g.launch_velocity(0.5).unwrap();
        assert!((vel.x - 10.0).abs() < 1e-4);
        assert!(vel.y.abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_drag_opposes_pull() {
        let g = PullGesture {
            start: Vec2::new(0.0, 0.0),
            current: Vec2::new(30.0, 40.0),
        };

        assert!((g.tension() - 50.0).abs() < 1e-5);
        let vel = g.launch_velocity(0.5).unwrap();
        // Launch direction is the exact opposite of the drag direction
        let drag_dir = (g.current - g.start).normalize();
        assert!((vel.normalize() + drag_dir).length() < 1e-5);
        assert!((vel.length() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_pullback_scales_with_multiplier() {
        let g = PullGesture {
            start: Vec2::ZERO,
            current: Vec2::new(0.0, 10.0),
        };
        assert!((g.pullback(0.5) - 5.0).abs() < 1e-6);
        assert!((g.pullback(2.0) - 20.0).abs() < 1e-6);
    }
}

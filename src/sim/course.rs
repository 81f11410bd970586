//! Course geometry: start pad, hole, and closed border loops
//!
//! A course is static configuration loaded once per round and shared
//! read-only by every ball. Borders are closed polygons; the collision
//! engine sees them as line segments paired from consecutive points with
//! wraparound.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::HOLE_RADIUS;

/// One directed border segment from `p1` to `p2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Segment {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    /// Segment direction (not normalized)
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }
}

/// Static course configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Where every ball starts the round
    pub start: Vec2,
    /// Hole center
    pub hole: Vec2,
    /// Hole capture radius
    #[serde(default = "default_hole_radius")]
    pub hole_radius: f32,
    /// Closed border loops, each an ordered point sequence
    pub borders: Vec<Vec<Vec2>>,
}

fn default_hole_radius() -> f32 {
    HOLE_RADIUS
}

impl Course {
    pub fn new(start: Vec2, hole: Vec2, borders: Vec<Vec<Vec2>>) -> Self {
        Self {
            start,
            hole,
            hole_radius: HOLE_RADIUS,
            borders,
        }
    }

    /// Load a course from its JSON configuration
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Axis-aligned walled box course (demo and test geometry)
    pub fn rect(min: Vec2, max: Vec2, start: Vec2, hole: Vec2) -> Self {
        let border = vec![
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ];
        Self::new(start, hole, vec![border])
    }

    /// All border segments, pairing consecutive loop points with wraparound
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.borders.iter().flat_map(|loop_points| {
            let n = loop_points.len();
            (0..n).map(move |i| Segment::new(loop_points[i], loop_points[(i + 1) % n]))
        })
    }
}

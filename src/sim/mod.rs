//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick semantics only
//! - Seeded RNG only (player colors)
//! - Stable iteration order (by ball index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod course;
pub mod gesture;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_segment, circle_segment_hit, reflect_velocity, segment_normal};
pub use course::{Course, Segment};
pub use gesture::PullGesture;
pub use state::{Ball, BallSnapshot, BallState, FallingAnimation, GameState, Player};
pub use tick::{GestureEvent, tick};

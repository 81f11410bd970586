//! Sling Putt - a turn-based slingshot mini-golf core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pull mechanics, ball physics, collisions, turn state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, raw pointer/touch translation, and course authoring live
//! outside this crate: the sim consumes translated [`sim::GestureEvent`]s
//! and exposes read-only snapshots once per tick.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Per-tick multiplicative velocity loss while flying
    pub const FRICTION: f32 = 0.03;
    /// Velocity components below this snap to exactly zero (guarantees rest)
    pub const VELOCITY_DEADZONE: f32 = 0.01;
    /// Desired movement per collision sub-step
    pub const SUBSTEP_LENGTH: f32 = 1.0;
    /// Scales raw drag distance to launch speed
    pub const PULLBACK_MULTIPLIER: f32 = 0.5;
    /// Falling-animation progress per tick (ball sinks in ~20 ticks)
    pub const FALL_RATE: f32 = 0.05;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Hole capture radius
    pub const HOLE_RADIUS: f32 = 20.0;
}

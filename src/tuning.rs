//! Data-driven game balance
//!
//! Every knob the integrator and gesture release consume, with defaults
//! matching `crate::consts`. Loadable from JSON so a host can reskin the
//! feel of the game without recompiling; absent fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-tick multiplicative velocity loss while flying
    pub friction: f32,
    /// Velocity components below this snap to exactly zero
    pub velocity_deadzone: f32,
    /// Desired movement per collision sub-step
    pub substep_length: f32,
    /// Scales raw drag distance to launch speed
    pub pullback_multiplier: f32,
    /// Falling-animation progress per tick
    pub fall_rate: f32,
    /// Radius of every ball at round start
    pub ball_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            velocity_deadzone: VELOCITY_DEADZONE,
            substep_length: SUBSTEP_LENGTH,
            pullback_multiplier: PULLBACK_MULTIPLIER,
            fall_rate: FALL_RATE,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl Tuning {
    /// Load tuning from its JSON configuration
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.friction, FRICTION);
        assert_eq!(t.pullback_multiplier, PULLBACK_MULTIPLIER);
        assert_eq!(t.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{"friction": 0.05}"#).unwrap();
        assert_eq!(t.friction, 0.05);
        assert_eq!(t.substep_length, SUBSTEP_LENGTH);
        assert_eq!(t.fall_rate, FALL_RATE);
    }
}

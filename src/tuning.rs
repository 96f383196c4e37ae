//! Movement and scene tuning
//!
//! Every named constant the walkthrough depends on, gathered into one
//! serializable record so tests and the binary can override them. Defaults
//! mirror [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Tunable parameters for the scatter field and the movement engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    pub speed: f32,
    pub slow_speed: f32,
    pub jump_force: f32,
    /// Vertical acceleration, must be negative
    pub gravity: f32,
    pub ground_height: f32,
    pub duck_height: f32,
    /// Camera blend rate between stances (units/s)
    pub crouch_rate: f32,
    pub player_radius: f32,
    /// Frame delta clamp (seconds)
    pub max_frame_dt: f32,

    // === Arena ===
    pub wall_radius: f32,

    // === Fog ===
    pub fog_start_distance: f32,
    pub fog_max_distance: f32,

    // === Scatter field ===
    pub scatter_count: u32,
    pub start_radius: f32,
    pub scatter_seed: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed: SPEED,
            slow_speed: SLOW_SPEED,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            ground_height: GROUND_HEIGHT,
            duck_height: DUCK_HEIGHT,
            crouch_rate: CROUCH_RATE,
            player_radius: PLAYER_RADIUS,
            max_frame_dt: MAX_FRAME_DT,

            wall_radius: WALL_RADIUS,

            fog_start_distance: FOG_START_DISTANCE,
            fog_max_distance: FOG_MAX_DISTANCE,

            scatter_count: SCATTER_COUNT,
            start_radius: START_RADIUS,
            scatter_seed: SCATTER_SEED,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields take their defaults) and validate it
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the relationships the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if !(self.duck_height > 0.0 && self.duck_height <= self.ground_height) {
            return invalid("duck_height must be in (0, ground_height]");
        }
        if self.gravity >= 0.0 {
            return invalid("gravity must be negative");
        }
        if self.speed <= 0.0 || self.slow_speed <= 0.0 || self.jump_force <= 0.0 {
            return invalid("speed, slow_speed and jump_force must be positive");
        }
        if self.crouch_rate <= 0.0 || self.max_frame_dt <= 0.0 {
            return invalid("crouch_rate and max_frame_dt must be positive");
        }
        if self.player_radius <= 0.0 {
            return invalid("player_radius must be positive");
        }
        if self.scatter_count == 0 {
            return invalid("scatter_count must be positive");
        }
        if self.start_radius < 0.0 || self.wall_radius - WALL_BUFFER <= self.start_radius {
            return invalid("wall_radius must leave room for the scatter field");
        }
        if self.fog_max_distance <= self.fog_start_distance {
            return invalid("fog_max_distance must exceed fog_start_distance");
        }
        Ok(())
    }

    /// Horizontal speed for the current walk mode
    #[inline]
    pub fn walk_speed(&self, slow: bool) -> f32 {
        if slow { self.slow_speed } else { self.speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.speed, 10.0);
        assert_eq!(t.slow_speed, 3.0);
        assert_eq!(t.jump_force, 8.0);
        assert_eq!(t.gravity, -20.0);
        assert_eq!(t.ground_height, 2.0);
        assert_eq!(t.duck_height, 1.0);
        assert_eq!(t.player_radius, 0.5);
        assert_eq!(t.wall_radius, 75.0);
        assert_eq!(t.fog_start_distance, 25.0);
        assert_eq!(t.fog_max_distance, 100.0);
        assert_eq!(t.scatter_count, 60);
        assert_eq!(t.start_radius, 5.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json_str(r#"{ "speed": 12.5 }"#).unwrap();
        assert_eq!(t.speed, 12.5);
        assert_eq!(t.wall_radius, WALL_RADIUS);
    }

    #[test]
    fn test_duck_above_ground_rejected() {
        let err = Tuning::from_json_str(r#"{ "duck_height": 3.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)));
    }

    #[test]
    fn test_wall_inside_scatter_field_rejected() {
        let t = Tuning {
            wall_radius: 8.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json_str("{ speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_walk_speed() {
        let t = Tuning::default();
        assert_eq!(t.walk_speed(false), SPEED);
        assert_eq!(t.walk_speed(true), SLOW_SPEED);
    }
}

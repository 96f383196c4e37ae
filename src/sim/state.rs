//! Player state and per-tick outputs
//!
//! All mutable simulation state lives here so the tick function can be driven
//! directly from tests.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::planar;

/// Movement intents, written by the input collaborator and read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Latched on key-down, consumed by the next tick
    pub jump_requested: bool,
    pub duck: bool,
    pub slow_walk: bool,
}

impl MoveState {
    /// Clear every intent (pointer released)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Mutable player state carried between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKinematics {
    /// Camera position; y is the eye height above the floor
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
}

impl PlayerKinematics {
    /// Standing at (x, z) on the floor
    pub fn standing_at(x: f32, z: f32, ground_height: f32) -> Self {
        Self {
            position: Vec3::new(x, ground_height, z),
            vertical_velocity: 0.0,
            grounded: true,
        }
    }

    /// Horizontal distance from the arena center
    #[inline]
    pub fn distance_from_center(&self) -> f32 {
        planar(self.position).length()
    }

    /// A jump may start only from rest on the floor
    #[inline]
    pub fn can_jump(&self) -> bool {
        self.grounded && self.vertical_velocity == 0.0
    }
}

impl Default for PlayerKinematics {
    fn default() -> Self {
        Self::standing_at(0.0, 0.0, GROUND_HEIGHT)
    }
}

/// Fog range reported to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogParameters {
    pub near: f32,
    pub far: f32,
}

impl FogParameters {
    /// Fog for a given normalized intensity in [0, 1]
    pub fn from_intensity(intensity: f32) -> Self {
        Self {
            near: FOG_NEAR_BASE + intensity * FOG_NEAR_SPAN,
            far: FOG_FAR_BASE + intensity * FOG_FAR_SPAN,
        }
    }
}

impl Default for FogParameters {
    fn default() -> Self {
        Self::from_intensity(0.0)
    }
}

/// Fog intensity for a distance from the center
///
/// Zero up to `start`, one from `max` on, linear in between.
pub fn fog_intensity(distance: f32, start: f32, max: f32) -> f32 {
    ((distance - start) / (max - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reset_clears_all() {
        let mut state = MoveState {
            forward: true,
            jump_requested: true,
            duck: true,
            slow_walk: true,
            ..Default::default()
        };
        state.reset();
        assert_eq!(state, MoveState::default());
    }

    #[test]
    fn test_spawn_can_jump() {
        let player = PlayerKinematics::default();
        assert!(player.grounded);
        assert!(player.can_jump());
        assert_eq!(player.position, Vec3::new(0.0, GROUND_HEIGHT, 0.0));
    }

    #[test]
    fn test_fog_clamps_at_ends() {
        let start = FOG_START_DISTANCE;
        let max = FOG_MAX_DISTANCE;
        assert_eq!(fog_intensity(0.0, start, max), 0.0);
        assert_eq!(fog_intensity(start, start, max), 0.0);
        assert_eq!(fog_intensity(max, start, max), 1.0);
        assert_eq!(fog_intensity(500.0, start, max), 1.0);

        let near = FogParameters::from_intensity(0.0);
        assert_eq!((near.near, near.far), (5.0, 30.0));
        let far = FogParameters::from_intensity(1.0);
        assert_eq!((far.near, far.far), (20.0, 70.0));
    }

    #[test]
    fn test_fog_midpoint() {
        let t = fog_intensity(62.5, FOG_START_DISTANCE, FOG_MAX_DISTANCE);
        assert!((t - 0.5).abs() < 1e-6);
        let fog = FogParameters::from_intensity(t);
        assert!((fog.near - 12.5).abs() < 1e-4);
        assert!((fog.far - 50.0).abs() < 1e-4);
    }

    fn fog_at(distance: f32) -> FogParameters {
        let t = fog_intensity(distance, FOG_START_DISTANCE, FOG_MAX_DISTANCE);
        FogParameters::from_intensity(t)
    }

    proptest! {
        #[test]
        fn prop_fog_non_decreasing(a in 0.0f32..200.0, b in 0.0f32..200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let f_lo = fog_at(lo);
            let f_hi = fog_at(hi);
            prop_assert!(f_lo.near <= f_hi.near);
            prop_assert!(f_lo.far <= f_hi.far);
        }
    }
}

//! Retroscape - a first-person retro walkthrough core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scatter field, collision index, movement)
//! - `tuning`: Data-driven movement and scene parameters
//! - `platform`: Key mapping and browser bindings

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::{Vec2, Vec3};

/// Walkthrough configuration constants
pub mod consts {
    /// Walk speed (units/s)
    pub const SPEED: f32 = 10.0;
    /// Slow-walk speed (units/s)
    pub const SLOW_SPEED: f32 = 3.0;
    /// Initial upward velocity of a jump
    pub const JUMP_FORCE: f32 = 8.0;
    /// Vertical acceleration (negative = down)
    pub const GRAVITY: f32 = -20.0;

    /// Standing camera height
    pub const GROUND_HEIGHT: f32 = 2.0;
    /// Crouched camera height
    pub const DUCK_HEIGHT: f32 = 1.0;
    /// Rate the camera moves between standing and crouched heights (units/s)
    pub const CROUCH_RATE: f32 = 15.0;
    pub const PLAYER_RADIUS: f32 = 0.5;

    /// Arena dimensions
    pub const WALL_RADIUS: f32 = 75.0;
    /// Gap kept between the outermost scattered object and the wall
    pub const WALL_BUFFER: f32 = 5.0;

    /// Fog ramps from `FOG_START_DISTANCE` to `FOG_MAX_DISTANCE` from the center
    pub const FOG_START_DISTANCE: f32 = 25.0;
    pub const FOG_MAX_DISTANCE: f32 = 100.0;
    pub const FOG_NEAR_BASE: f32 = 5.0;
    pub const FOG_NEAR_SPAN: f32 = 15.0;
    pub const FOG_FAR_BASE: f32 = 30.0;
    pub const FOG_FAR_SPAN: f32 = 40.0;

    /// Scatter field defaults
    pub const SCATTER_COUNT: u32 = 60;
    pub const START_RADIUS: f32 = 5.0;
    pub const SCATTER_SEED: u32 = 12345;

    /// Longest frame the integrator accepts in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Convert polar (r, theta) on the ground plane to (x, z)
#[inline]
pub fn polar_to_planar(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Project a world position onto the ground plane as (x, z)
#[inline]
pub fn planar(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

/// Convert a ground-plane point (x, z) to polar (r, theta)
#[inline]
pub fn planar_to_polar(p: Vec2) -> (f32, f32) {
    (p.length(), p.y.atan2(p.x))
}

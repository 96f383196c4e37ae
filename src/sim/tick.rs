//! Per-frame movement step
//!
//! One call per rendered frame: vertical integration, stance blending, jump
//! gating, horizontal movement with wall containment and obstacle rejection,
//! then fog derivation from the committed position.

use glam::{Quat, Vec2, Vec3};

use super::collision::{CollisionIndex, PlayerProbe};
use super::state::{FogParameters, MoveState, PlayerKinematics, fog_intensity};
use crate::tuning::Tuning;
use crate::{planar, planar_to_polar, polar_to_planar};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// True only while pointer capture is engaged
    pub active: bool,
    pub moves: MoveState,
    /// Camera orientation, owned by the renderer
    pub orientation: Quat,
}

impl TickInput {
    /// Active input with the given intents and view
    pub fn new(moves: MoveState, orientation: Quat) -> Self {
        Self {
            active: true,
            moves,
            orientation,
        }
    }
}

/// What happened to the horizontal move this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No horizontal intent
    Idle,
    Moved,
    /// Candidate crossed the wall and was projected back onto it
    SlidAlongWall,
    /// Candidate overlapped an obstacle; horizontal move discarded
    Blocked,
}

/// Result of an active tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub movement: MoveOutcome,
    pub fog: FogParameters,
}

/// Ground-plane forward and right unit vectors for a camera orientation
///
/// Forward is derived from the camera's right axis so looking straight up or
/// down still walks along the ground.
pub fn view_axes(orientation: Quat) -> (Vec2, Vec2) {
    let right3 = orientation * Vec3::X;
    let right = Vec2::new(right3.x, right3.z).normalize_or(Vec2::X);
    // up x right, flattened
    let forward = Vec2::new(right.y, -right.x);
    (forward, right)
}

/// Move `current` toward `target` by at most `max_step`
#[inline]
fn approach(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(delta)
    }
}

/// Advance the player by one frame
///
/// Returns `None` without touching any state while inactive.
pub fn tick(
    player: &mut PlayerKinematics,
    input: &TickInput,
    index: &CollisionIndex,
    tuning: &Tuning,
    dt: f32,
) -> Option<TickOutcome> {
    if !input.active {
        return None;
    }
    // A non-finite frame time would poison the position for good
    let dt = if dt.is_finite() {
        dt.clamp(0.0, tuning.max_frame_dt)
    } else {
        0.0
    };
    let moves = &input.moves;

    // Vertical integration
    let rest_y = player.position.y;
    player.vertical_velocity += tuning.gravity * dt;
    player.position.y += player.vertical_velocity * dt;

    // Ground test; a jump rising through standing height stays airborne
    let was_grounded = player.grounded;
    if player.position.y <= tuning.ground_height && player.vertical_velocity <= 0.0 {
        player.vertical_velocity = 0.0;
        player.grounded = true;
        if !was_grounded {
            log::debug!(
                "Landed at ({:.2}, {:.2})",
                player.position.x,
                player.position.z
            );
        }

        // Stance blend; a player already at rest does not sink
        let target = if moves.duck {
            tuning.duck_height
        } else {
            tuning.ground_height
        };
        let y = if was_grounded { rest_y } else { player.position.y };
        let y = y.clamp(tuning.duck_height, tuning.ground_height);
        player.position.y = approach(y, target, tuning.crouch_rate * dt);
    } else {
        player.grounded = false;
    }

    // Jump
    if moves.jump_requested && player.can_jump() {
        player.vertical_velocity = tuning.jump_force;
        player.grounded = false;
        log::debug!("Jump from height {:.2}", player.position.y);
    }

    // Horizontal movement
    let intent = Vec2::new(
        moves.right as i8 as f32 - moves.left as i8 as f32,
        moves.forward as i8 as f32 - moves.backward as i8 as f32,
    )
    .normalize_or_zero();

    let movement = if intent == Vec2::ZERO || dt == 0.0 {
        MoveOutcome::Idle
    } else {
        let (forward, right) = view_axes(input.orientation);
        let speed = tuning.walk_speed(moves.slow_walk);
        let step = (forward * intent.y + right * intent.x) * speed * dt;
        let candidate = planar(player.position) + step;
        let (r, theta) = planar_to_polar(candidate);

        if r >= tuning.wall_radius {
            let on_wall = polar_to_planar(tuning.wall_radius, theta);
            player.position.x = on_wall.x;
            player.position.z = on_wall.y;
            MoveOutcome::SlidAlongWall
        } else {
            let probe = PlayerProbe::new(
                candidate,
                player.position.y,
                tuning.player_radius,
                tuning.ground_height,
            );
            if let Some(shape) = index.first_hit(&probe) {
                log::debug!("Move blocked by shape at {:?}", shape.center());
                MoveOutcome::Blocked
            } else {
                player.position.x = candidate.x;
                player.position.z = candidate.y;
                MoveOutcome::Moved
            }
        }
    };

    // Fog
    let intensity = fog_intensity(
        player.distance_from_center(),
        tuning.fog_start_distance,
        tuning.fog_max_distance,
    );

    Some(TickOutcome {
        movement,
        fog: FogParameters::from_intensity(intensity),
    })
}

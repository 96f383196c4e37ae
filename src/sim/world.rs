//! Walkthrough session
//!
//! Owns everything that lives for one visit: the tuning, the scatter field,
//! the collision index built from it, the player and the input latch. The
//! frame driver calls [`Walkthrough::frame`] once per rendered frame; keyboard
//! and pointer-lock collaborators call [`Walkthrough::key`] and
//! [`Walkthrough::set_active`] between frames.

use glam::{Quat, Vec3};

use super::collision::CollisionIndex;
use super::scatter::{ScatteredObject, generate_seeded};
use super::scene::{FixedStructures, build};
use super::state::{FogParameters, MoveState, PlayerKinematics};
use super::tick::{MoveOutcome, TickInput, tick};
use crate::platform::input::{Intent, intent_for_code};
use crate::tuning::Tuning;

/// Per-frame output for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub camera: Vec3,
    pub fog: FogParameters,
    pub movement: MoveOutcome,
}

pub struct Walkthrough {
    tuning: Tuning,
    structures: FixedStructures,
    scatter: Vec<ScatteredObject>,
    index: CollisionIndex,
    player: PlayerKinematics,
    moves: MoveState,
    active: bool,
    fog: FogParameters,
}

impl Walkthrough {
    /// Build the scene with the default arena layout
    ///
    /// # Panics
    /// If `tuning` fails validation.
    pub fn new(tuning: Tuning) -> Self {
        Self::with_structures(tuning, FixedStructures::default())
    }

    /// Build the scene with a custom set of fixed structures
    ///
    /// # Panics
    /// If `tuning` fails validation.
    pub fn with_structures(tuning: Tuning, structures: FixedStructures) -> Self {
        if let Err(e) = tuning.validate() {
            panic!("{e}");
        }

        let scatter = generate_seeded(
            tuning.scatter_seed,
            tuning.scatter_count,
            tuning.start_radius,
            tuning.wall_radius,
        );
        let index = build(&scatter, &structures);
        let player = PlayerKinematics::standing_at(0.0, 0.0, tuning.ground_height);

        log::info!(
            "Walkthrough ready: seed={}, {} scattered objects, wall radius {}",
            tuning.scatter_seed,
            scatter.len(),
            tuning.wall_radius
        );

        Self {
            tuning,
            structures,
            scatter,
            index,
            player,
            moves: MoveState::default(),
            active: false,
            fog: FogParameters::default(),
        }
    }

    /// Engage or release input capture
    ///
    /// Releasing clears every held intent so nothing stays pressed across a
    /// lock/unlock cycle.
    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        if !active {
            self.moves.reset();
        }
        log::debug!("Walkthrough {}", if active { "active" } else { "inactive" });
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed a key event by its `KeyboardEvent.code`
    ///
    /// `repeat` mirrors `KeyboardEvent.repeat`. Returns `true` if the code is
    /// bound. Events are ignored while inactive.
    pub fn key(&mut self, code: &str, pressed: bool, repeat: bool) -> bool {
        let Some(intent) = intent_for_code(code) else {
            return false;
        };
        if self.active {
            self.apply_intent(intent, pressed, repeat);
        }
        true
    }

    /// Set one intent directly
    pub fn apply_intent(&mut self, intent: Intent, pressed: bool, repeat: bool) {
        let m = &mut self.moves;
        match intent {
            Intent::Forward => m.forward = pressed,
            Intent::Backward => m.backward = pressed,
            Intent::Left => m.left = pressed,
            Intent::Right => m.right = pressed,
            // Latched on the first press only; release leaves a pending request alone
            Intent::Jump => {
                if pressed && !repeat {
                    m.jump_requested = true;
                }
            }
            Intent::Duck => m.duck = pressed,
            Intent::SlowWalk => m.slow_walk = pressed,
        }
    }

    /// Run one frame
    ///
    /// Returns `None` while inactive; the camera stays frozen.
    pub fn frame(&mut self, dt: f32, orientation: Quat) -> Option<FrameReport> {
        let input = TickInput {
            active: self.active,
            moves: self.moves,
            orientation,
        };
        let outcome = tick(&mut self.player, &input, &self.index, &self.tuning, dt)?;

        // One-shot intents are consumed by the tick that saw them
        self.moves.jump_requested = false;
        self.fog = outcome.fog;

        Some(FrameReport {
            camera: self.player.position,
            fog: outcome.fog,
            movement: outcome.movement,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn structures(&self) -> &FixedStructures {
        &self.structures
    }

    /// Scatter field for the renderer
    pub fn scatter(&self) -> &[ScatteredObject] {
        &self.scatter
    }

    pub fn collision_index(&self) -> &CollisionIndex {
        &self.index
    }

    pub fn player(&self) -> &PlayerKinematics {
        &self.player
    }

    pub fn camera(&self) -> Vec3 {
        self.player.position
    }

    pub fn moves(&self) -> &MoveState {
        &self.moves
    }

    /// Fog from the most recent active frame
    pub fn fog(&self) -> FogParameters {
        self.fog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::scatter::generate;

    const DT: f32 = 1.0 / 60.0;

    fn session() -> Walkthrough {
        let mut w = Walkthrough::new(Tuning::default());
        w.set_active(true);
        w
    }

    #[test]
    fn test_scatter_matches_standalone_generator() {
        let w = Walkthrough::new(Tuning::default());
        assert_eq!(w.scatter(), generate(SCATTER_COUNT, START_RADIUS, WALL_RADIUS).as_slice());
        assert_eq!(w.collision_index().len(), 6 * 3 + 4 + SCATTER_COUNT as usize);
    }

    #[test]
    fn test_inactive_frame_frozen() {
        let mut w = Walkthrough::new(Tuning::default());
        // Keys are ignored before capture is engaged
        assert!(w.key("KeyW", true, false));
        assert!(!w.moves().forward);
        assert!(w.frame(DT, Quat::IDENTITY).is_none());
        assert_eq!(w.camera(), Vec3::new(0.0, GROUND_HEIGHT, 0.0));
    }

    #[test]
    fn test_deactivation_resets_moves() {
        let mut w = session();
        w.key("KeyW", true, false);
        w.key("ShiftLeft", true, false);
        w.key("Space", true, false);
        assert!(w.moves().forward && w.moves().slow_walk && w.moves().jump_requested);
        w.set_active(false);
        assert_eq!(*w.moves(), MoveState::default());

        // Re-engaging does not resurrect old intents
        w.set_active(true);
        let report = w.frame(DT, Quat::IDENTITY).unwrap();
        assert_eq!(report.movement, MoveOutcome::Idle);
    }

    #[test]
    fn test_jump_latch_consumed_once() {
        let mut w = session();
        w.key("Space", true, false);
        w.key("Space", false, false);
        assert!(w.moves().jump_requested);
        w.frame(DT, Quat::IDENTITY);
        assert!(!w.moves().jump_requested);
        assert_eq!(w.player().vertical_velocity, JUMP_FORCE);
    }

    #[test]
    fn test_held_space_jumps_once() {
        let mut w = session();
        w.key("Space", true, false);
        let mut jumps = 0;
        let mut landings = 0;
        let mut was_grounded = true;
        // Three seconds of auto-repeat covers the jump and the landing after it
        for _ in 0..180 {
            w.frame(DT, Quat::IDENTITY);
            if w.player().vertical_velocity == JUMP_FORCE {
                jumps += 1;
            }
            if w.player().grounded && !was_grounded {
                landings += 1;
            }
            was_grounded = w.player().grounded;
            w.key("Space", true, true);
        }
        assert_eq!(jumps, 1);
        assert_eq!(landings, 1);
        assert!(w.player().grounded);
        assert_eq!(w.camera().y, GROUND_HEIGHT);

        // A fresh press after release jumps again
        w.key("Space", false, false);
        w.key("Space", true, false);
        w.frame(DT, Quat::IDENTITY);
        assert_eq!(w.player().vertical_velocity, JUMP_FORCE);
    }

    #[test]
    fn test_unbound_key() {
        let mut w = session();
        assert!(!w.key("KeyQ", true, false));
        assert_eq!(*w.moves(), MoveState::default());
    }

    #[test]
    fn test_walk_reports_camera_and_fog() {
        let mut w = session();
        w.key("KeyW", true, false);
        let mut last = None;
        for _ in 0..60 {
            last = w.frame(DT, Quat::IDENTITY);
        }
        let report = last.unwrap();
        assert_eq!(report.camera, w.camera());
        assert_eq!(report.fog, w.fog());
        assert!(w.camera().z < 0.0);
        assert!(w.camera().distance(Vec3::new(0.0, GROUND_HEIGHT, 0.0)) <= SPEED + 1e-3);
    }

    #[test]
    fn test_long_walk_stays_inside() {
        let mut w = session();
        w.key("KeyD", true, false);
        w.key("KeyW", true, false);
        for i in 0..1200 {
            let yaw = (i as f32 * 0.01).sin();
            w.frame(DT, Quat::from_rotation_y(yaw));
            assert!(w.player().distance_from_center() <= WALL_RADIUS + 1e-3);
        }
    }

    #[test]
    #[should_panic(expected = "duck_height")]
    fn test_invalid_tuning_panics() {
        let tuning = Tuning {
            duck_height: 2.5,
            ..Default::default()
        };
        let _ = Walkthrough::new(tuning);
    }
}

//! Deterministic simulation module
//!
//! All movement and scene logic lives here. This module must be pure and
//! deterministic:
//! - Seeded scatter stream only
//! - Collision index built once, read-only afterwards
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod scatter;
pub mod scene;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{CollisionIndex, CollisionShape, PlayerProbe};
pub use rng::Lcg;
pub use scatter::{PrimitiveKind, RenderPrimitive, ScatteredObject, generate, generate_seeded};
pub use scene::{FixedStructures, build};
pub use state::{FogParameters, MoveState, PlayerKinematics, fog_intensity};
pub use tick::{MoveOutcome, TickInput, TickOutcome, tick, view_axes};
pub use world::{FrameReport, Walkthrough};

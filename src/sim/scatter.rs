//! Deterministic scatter field
//!
//! Places decorative primitives on a ring between the start radius and the
//! arena wall. The renderer draws this list and the collision index is built
//! from it, so both must come from one call to [`generate`] with identical
//! inputs (or, in the browser, from the serialized result of that call).

use glam::Vec3;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::rng::Lcg;
use crate::consts::{SCATTER_SEED, WALL_BUFFER};

/// Maximum angular jitter added to each object's slot angle (radians)
pub const ANGLE_JITTER: f64 = 0.5;
/// Objects are lifted by up to this much
pub const MAX_ELEVATION: f64 = 5.0;
pub const MIN_SIZE: f64 = 1.0;
pub const MAX_SIZE: f64 = 4.0;
/// Number of palette entries the renderer picks from
pub const COLOR_COUNT: u32 = 6;

/// Primitive shape of a scattered object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PrimitiveKind {
    Box = 0,
    Cylinder = 1,
    Sphere = 2,
    Cone = 3,
}

impl PrimitiveKind {
    pub const COUNT: u32 = 4;

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(PrimitiveKind::Box),
            1 => Some(PrimitiveKind::Cylinder),
            2 => Some(PrimitiveKind::Sphere),
            3 => Some(PrimitiveKind::Cone),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Box => "box",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cone => "cone",
        }
    }
}

/// Dimensions of a primitive as the renderer builds it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderPrimitive {
    /// Full edge lengths
    Box { width: f32, height: f32, depth: f32 },
    Cylinder { radius: f32, height: f32 },
    Sphere { radius: f32 },
    /// Base radius and height
    Cone { radius: f32, height: f32 },
}

/// A procedurally placed object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatteredObject {
    pub id: u32,
    /// Center of the primitive
    pub position: Vec3,
    pub kind: PrimitiveKind,
    pub size: f32,
    /// Rotation about the vertical axis (radians)
    pub rotation: f32,
    pub color_index: u32,
}

impl ScatteredObject {
    /// Primitive dimensions shared by the render and collision projections
    pub fn render_primitive(&self) -> RenderPrimitive {
        let s = self.size;
        match self.kind {
            PrimitiveKind::Box => RenderPrimitive::Box {
                width: s,
                height: s,
                depth: s,
            },
            PrimitiveKind::Cylinder => RenderPrimitive::Cylinder {
                radius: s / 2.0,
                height: s,
            },
            PrimitiveKind::Sphere => RenderPrimitive::Sphere { radius: s / 2.0 },
            PrimitiveKind::Cone => RenderPrimitive::Cone {
                radius: s / 2.0,
                height: s,
            },
        }
    }
}

/// Generate the scatter field with the built-in seed
pub fn generate(count: u32, start_radius: f32, wall_radius: f32) -> Vec<ScatteredObject> {
    generate_seeded(SCATTER_SEED, count, start_radius, wall_radius)
}

/// Generate the scatter field from an explicit seed
///
/// Samples are drawn from one stream in a fixed per-object order: angle
/// jitter, distance, elevation, kind, size, rotation, color. Arithmetic is
/// done in f64 and narrowed once per field so the output matches a
/// double-precision replay of the same stream.
pub fn generate_seeded(
    seed: u32,
    count: u32,
    start_radius: f32,
    wall_radius: f32,
) -> Vec<ScatteredObject> {
    let mut rng = Lcg::from_seed(seed.to_le_bytes());
    let start = start_radius as f64;
    let outer = (wall_radius - WALL_BUFFER) as f64;

    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU + rng.next_unit() * ANGLE_JITTER;
            let distance = rng.next_range(start, outer);
            let y = rng.next_range(0.0, MAX_ELEVATION);
            let kind = PrimitiveKind::from_index(rng.next_index(PrimitiveKind::COUNT))
                .unwrap_or(PrimitiveKind::Box);
            let size = rng.next_range(MIN_SIZE, MAX_SIZE);
            let rotation = rng.next_range(0.0, TAU);
            let color_index = rng.next_index(COLOR_COUNT);

            ScatteredObject {
                id: i,
                position: Vec3::new(
                    (angle.cos() * distance) as f32,
                    y as f32,
                    (angle.sin() * distance) as f32,
                ),
                kind,
                size: size as f32,
                rotation: rotation as f32,
                color_index,
            }
        })
        .collect()
}

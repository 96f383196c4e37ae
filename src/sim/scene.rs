//! Static scene layout and collision index construction
//!
//! The arena holds a ring of six columns, one giant statue and the scatter
//! field, all enclosed by the circular wall. The wall is not part of the
//! index; the movement engine contains the player radially instead.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::collision::{CollisionIndex, CollisionShape};
use super::scatter::ScatteredObject;
use crate::polar_to_planar;

/// Columns stand on a ring around the spawn point
pub const COLUMN_COUNT: usize = 6;
pub const COLUMN_RING_RADIUS: f32 = 20.0;

/// Column proportions
pub const COLUMN_PLINTH_SIZE: Vec3 = Vec3::new(3.0, 1.0, 3.0);
pub const COLUMN_SHAFT_RADIUS: f32 = 1.0;
pub const COLUMN_SHAFT_HEIGHT: f32 = 10.0;

/// Statue placement and proportions
pub const STATUE_OFFSET: Vec2 = Vec2::new(0.0, -45.0);
pub const STATUE_TORSO_RADIUS: f32 = 2.0;
pub const STATUE_TORSO_HEIGHT: f32 = 8.0;
pub const STATUE_HEAD_RADIUS: f32 = 1.8;
pub const STATUE_ARM_RADIUS: f32 = 0.7;
pub const STATUE_ARM_HEIGHT: f32 = 6.0;

/// Hand-placed structures of the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStructures {
    /// Ground-plane (x, z) position of each column
    pub columns: Vec<Vec2>,
    /// Ground-plane (x, z) position of the statue
    pub statue: Option<Vec2>,
}

impl Default for FixedStructures {
    fn default() -> Self {
        let columns = (0..COLUMN_COUNT)
            .map(|i| {
                let theta = i as f32 / COLUMN_COUNT as f32 * TAU + TAU / 12.0;
                polar_to_planar(COLUMN_RING_RADIUS, theta)
            })
            .collect();
        Self {
            columns,
            statue: Some(STATUE_OFFSET),
        }
    }
}

impl FixedStructures {
    /// No columns, no statue
    pub fn none() -> Self {
        Self {
            columns: Vec::new(),
            statue: None,
        }
    }

    /// Base box, shaft cylinder and capital box of one column
    pub fn column_shapes(at: Vec2) -> [CollisionShape; 3] {
        let plinth_h = COLUMN_PLINTH_SIZE.y;
        let base =
            CollisionShape::cuboid(Vec3::new(at.x, plinth_h / 2.0, at.y), COLUMN_PLINTH_SIZE);
        let shaft = CollisionShape::Cylinder {
            center: Vec3::new(at.x, plinth_h + COLUMN_SHAFT_HEIGHT / 2.0, at.y),
            radius: COLUMN_SHAFT_RADIUS,
            height: COLUMN_SHAFT_HEIGHT,
        };
        let capital = CollisionShape::cuboid(
            Vec3::new(at.x, plinth_h + COLUMN_SHAFT_HEIGHT + plinth_h / 2.0, at.y),
            COLUMN_PLINTH_SIZE,
        );
        [base, shaft, capital]
    }

    /// Torso, head and both arms of the statue
    pub fn statue_shapes(at: Vec2) -> [CollisionShape; 4] {
        let torso_center = Vec3::new(at.x, STATUE_TORSO_HEIGHT / 2.0, at.y);
        let torso = CollisionShape::Cylinder {
            center: torso_center,
            radius: STATUE_TORSO_RADIUS,
            height: STATUE_TORSO_HEIGHT,
        };
        let head = CollisionShape::Sphere {
            center: Vec3::new(at.x, STATUE_TORSO_HEIGHT + STATUE_HEAD_RADIUS, at.y),
            radius: STATUE_HEAD_RADIUS,
        };
        let arm_offset = STATUE_TORSO_RADIUS + STATUE_ARM_RADIUS;
        let arm_y = STATUE_TORSO_HEIGHT - STATUE_ARM_HEIGHT / 2.0;
        let arm = |side: f32| CollisionShape::Cylinder {
            center: Vec3::new(at.x + side * arm_offset, arm_y, at.y),
            radius: STATUE_ARM_RADIUS,
            height: STATUE_ARM_HEIGHT,
        };
        [torso, head, arm(-1.0), arm(1.0)]
    }
}

/// Build the session's collision index
pub fn build(scattered: &[ScatteredObject], fixed: &FixedStructures) -> CollisionIndex {
    let mut shapes = Vec::with_capacity(fixed.columns.len() * 3 + 4 + scattered.len());

    for &column in &fixed.columns {
        shapes.extend(FixedStructures::column_shapes(column));
    }
    if let Some(statue) = fixed.statue {
        shapes.extend(FixedStructures::statue_shapes(statue));
    }
    shapes.extend(scattered.iter().map(CollisionShape::from_scattered));

    log::info!(
        "Collision index: {} columns, statue={}, {} scattered, {} shapes",
        fixed.columns.len(),
        fixed.statue.is_some(),
        scattered.len(),
        shapes.len()
    );

    CollisionIndex::new(shapes)
}

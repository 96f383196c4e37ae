//! Collision shapes and the player overlap test
//!
//! Static scene content is reduced to boxes, spheres and upright cylinders.
//! The player is a vertical column of radius `PLAYER_RADIUS` from its feet to
//! the camera; the camera point itself is the probe for boxes and spheres.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::scatter::{RenderPrimitive, ScatteredObject};
use crate::planar;

/// A static collision primitive in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Axis-aligned box
    Box { center: Vec3, half_extents: Vec3 },
    Sphere { center: Vec3, radius: f32 },
    /// Upright cylinder, `center` at mid-height
    Cylinder {
        center: Vec3,
        radius: f32,
        height: f32,
    },
}

impl CollisionShape {
    /// Box from full width/height/depth
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        CollisionShape::Box {
            center,
            half_extents: size / 2.0,
        }
    }

    pub fn center(&self) -> Vec3 {
        match *self {
            CollisionShape::Box { center, .. }
            | CollisionShape::Sphere { center, .. }
            | CollisionShape::Cylinder { center, .. } => center,
        }
    }

    /// Vertical extent as (bottom, top)
    pub fn vertical_span(&self) -> (f32, f32) {
        match *self {
            CollisionShape::Box {
                center,
                half_extents,
            } => (center.y - half_extents.y, center.y + half_extents.y),
            CollisionShape::Sphere { center, radius } => (center.y - radius, center.y + radius),
            CollisionShape::Cylinder { center, height, .. } => {
                (center.y - height / 2.0, center.y + height / 2.0)
            }
        }
    }

    /// Collision projection of a scattered object
    ///
    /// Cones collide as cylinders with the cone's base radius and height.
    /// Boxes ignore their yaw and collide as axis-aligned cubes.
    pub fn from_scattered(object: &ScatteredObject) -> Self {
        let center = object.position;
        match object.render_primitive() {
            RenderPrimitive::Box {
                width,
                height,
                depth,
            } => CollisionShape::cuboid(center, Vec3::new(width, height, depth)),
            RenderPrimitive::Sphere { radius } => CollisionShape::Sphere { center, radius },
            RenderPrimitive::Cylinder { radius, height }
            | RenderPrimitive::Cone { radius, height } => CollisionShape::Cylinder {
                center,
                radius,
                height,
            },
        }
    }

    /// Whether the player probe overlaps this shape
    pub fn overlaps(&self, probe: &PlayerProbe) -> bool {
        match *self {
            CollisionShape::Box {
                center,
                half_extents,
            } => {
                let min = center - half_extents;
                let max = center + half_extents;
                let closest = probe.eye.clamp(min, max);
                closest.distance_squared(probe.eye) < probe.radius * probe.radius
            }
            CollisionShape::Sphere { center, radius } => {
                let reach = probe.radius + radius;
                probe.eye.distance_squared(center) < reach * reach
                    && probe.spans_overlap(self.vertical_span())
            }
            CollisionShape::Cylinder { center, radius, .. } => {
                let reach = probe.radius + radius;
                planar(probe.eye).distance_squared(planar(center)) < reach * reach
                    && probe.spans_overlap(self.vertical_span())
            }
        }
    }
}

/// Player volume at a candidate position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerProbe {
    /// Candidate (x, z) at the camera height
    pub eye: Vec3,
    pub radius: f32,
    /// Feet height
    pub bottom: f32,
    /// Head height
    pub top: f32,
}

impl PlayerProbe {
    /// Probe for a camera at `height` above (x, z)
    ///
    /// The feet sit `standing_height` below the camera but never below the
    /// floor, so a crouched player occupies [0, height].
    pub fn new(position: Vec2, height: f32, radius: f32, standing_height: f32) -> Self {
        Self {
            eye: Vec3::new(position.x, height, position.y),
            radius,
            bottom: (height - standing_height).max(0.0),
            top: height,
        }
    }

    #[inline]
    fn spans_overlap(&self, (bottom, top): (f32, f32)) -> bool {
        self.bottom < top && self.top > bottom
    }
}

/// Read-only list of static collision shapes for the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionIndex {
    shapes: Vec<CollisionShape>,
}

impl CollisionIndex {
    pub fn new(shapes: Vec<CollisionShape>) -> Self {
        Self { shapes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[CollisionShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True if any shape overlaps the probe
    pub fn overlaps(&self, probe: &PlayerProbe) -> bool {
        self.first_hit(probe).is_some()
    }

    /// First shape overlapping the probe, if any
    pub fn first_hit(&self, probe: &PlayerProbe) -> Option<&CollisionShape> {
        self.shapes.iter().find(|shape| shape.overlaps(probe))
    }
}

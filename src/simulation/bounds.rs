//! Axis-aligned bounding boxes.
//!
//! A box spans `[pos, pos + extents]` on every axis. Overlap is inclusive, so
//! two boxes that only touch on a face count as overlapping.

use ndarray::Array1;

/// An axis-aligned box in 3D space.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Array1<f32>,
    /// Maximum corner.
    pub max: Array1<f32>,
}

impl BoundingBox {
    /// Builds a box from its minimum corner and its extents.
    ///
    /// # Arguments
    ///
    /// * `pos` - Minimum corner of the box
    /// * `extents` - Size of the box along each axis
    pub fn new(pos: &Array1<f32>, extents: &Array1<f32>) -> Self {
        Self {
            min: pos.clone(),
            max: pos + extents,
        }
    }

    /// Checks whether two boxes intersect on all three axes.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        overlaps(self, other)
    }

    /// `true` if the box lies within the square `[-half_size, half_size]` on
    /// both horizontal axes.
    pub fn within_square(&self, half_size: f32) -> bool {
        [0, 2]
            .into_iter()
            .all(|axis| self.min[axis] >= -half_size && self.max[axis] <= half_size)
    }

    /// Center point of the box.
    pub fn center(&self) -> Array1<f32> {
        (&self.min + &self.max) / 2.0
    }
}

/// Boundary-inclusive AABB intersection test.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.min.iter().zip(b.max.iter()).all(|(lo, hi)| lo <= hi)
        && b.min.iter().zip(a.max.iter()).all(|(lo, hi)| lo <= hi)
}

/// Shorthand for a 3D vector.
pub fn vec3(x: f32, y: f32, z: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y, z])
}

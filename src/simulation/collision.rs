//! Sliding collision response against axis-aligned obstacles.
//!
//! Movement is resolved one horizontal axis at a time. The axis the player is
//! mostly moving along goes first; each axis whose displacement alone would
//! push the box into the obstacle falls back to the last valid coordinate. The
//! free axis keeps its motion, which is what lets the player slide along walls.

use ndarray::Array1;

use super::bounds::BoundingBox;

/// Index of the x axis in a position vector.
pub const AXIS_X: usize = 0;
/// Index of the vertical axis in a position vector.
pub const AXIS_Y: usize = 1;
/// Index of the z axis in a position vector.
pub const AXIS_Z: usize = 2;

/// Horizontal axes in resolution order for a facing angle.
///
/// Movement along the facing direction is `(cos, sin)` on `(x, z)`, so x is
/// dominant when `|cos| >= |sin|`.
pub fn axis_order(angle: f32) -> [usize; 2] {
    if angle.cos().abs() >= angle.sin().abs() {
        [AXIS_X, AXIS_Z]
    } else {
        [AXIS_Z, AXIS_X]
    }
}

/// Reconciles a proposed position against one obstacle.
///
/// # Arguments
///
/// * `last_valid` - Last position known not to overlap anything
/// * `proposed` - Position the player is trying to move to
/// * `extents` - Size of the moving box
/// * `angle` - Facing angle used to pick the dominant axis
/// * `obstacle` - Box to resolve against
///
/// # Returns
///
/// `proposed` unchanged if it is already clear of the obstacle, otherwise a
/// position built axis by axis from `last_valid`.
pub fn resolve_slide(
    last_valid: &Array1<f32>,
    proposed: &Array1<f32>,
    extents: &Array1<f32>,
    angle: f32,
    obstacle: &BoundingBox,
) -> Array1<f32> {
    if !BoundingBox::new(proposed, extents).overlaps(obstacle) {
        return proposed.clone();
    }

    let mut resolved = last_valid.clone();
    resolved[AXIS_Y] = proposed[AXIS_Y];

    for axis in axis_order(angle) {
        let previous = resolved[axis];
        resolved[axis] = proposed[axis];
        if BoundingBox::new(&resolved, extents).overlaps(obstacle) {
            resolved[axis] = previous;
        }
    }

    resolved
}

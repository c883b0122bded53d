//! Trait for entities that occupy space in the world.
//!
//! Player, food items, shrubs and obstacles share no fields, only the
//! capability of producing a bounding volume.

use ndarray::Array1;

use super::bounds::BoundingBox;

/// Trait for entities with a position and a fixed-size bounding volume.
pub trait Collidable {
    /// Returns the minimum corner of the entity's box.
    fn pos(&self) -> &Array1<f32>;

    /// Returns the size of the entity's box along each axis.
    fn extents(&self) -> Array1<f32>;

    /// Bounding volume at the current position.
    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.pos(), &self.extents())
    }

    /// Center of the bounding volume.
    fn center(&self) -> Array1<f32> {
        self.pos() + &(self.extents() / 2.0)
    }

    /// Checks whether this entity's box overlaps another entity's box.
    fn collides_with(&self, other: &dyn Collidable) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

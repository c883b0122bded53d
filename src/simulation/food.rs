//! Food items dropped by fruiting shrubs.
//!
//! A food item ages in whole ticks. After [`DECAY_START_AGE`] ticks it starts
//! decaying, which lowers what it is worth to the player and can make them
//! sick. Once the decay counter reaches [`MAX_DECAY`] the item is spent and its
//! container turns it into a seed.

use ndarray::Array1;

use super::bounds::vec3;
use super::collidable::Collidable;

/// Age (in ticks) the item must exceed before decay starts.
pub const DECAY_START_AGE: u32 = 10;
/// Decay counter value at which the item is fully decayed.
pub const MAX_DECAY: u32 = 5;
/// Food granted by an item that has not started decaying.
pub const FRESH_VALUE: i32 = 15;
/// Food granted by a decaying item.
pub const DECAYING_VALUE: i32 = 8;
/// Side length of a food item's box.
pub const FOOD_SIZE: f32 = 0.3;

/// A food item lying on the ground.
#[derive(Debug, Clone)]
pub struct FoodItem {
    /// Minimum corner of the item's box.
    pub pos: Array1<f32>,
    /// Age in ticks.
    pub age: u32,
    /// Decay counter, never decreases.
    pub decay: u32,
}

impl FoodItem {
    /// Creates a fresh food item at `pos`.
    pub fn new(pos: Array1<f32>) -> Self {
        Self {
            pos,
            age: 0,
            decay: 0,
        }
    }

    /// Advances the item's age by `amount` ticks.
    ///
    /// Decay advances by the same amount once the age is past
    /// [`DECAY_START_AGE`], saturating at [`MAX_DECAY`].
    pub fn update(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.age += amount;
        if self.age > DECAY_START_AGE {
            self.decay = (self.decay + amount).min(MAX_DECAY);
        }
    }

    /// `true` once decay has started.
    pub fn decaying(&self) -> bool {
        self.decay > 0
    }

    /// `true` once the decay counter has reached [`MAX_DECAY`].
    pub fn decayed(&self) -> bool {
        self.decay >= MAX_DECAY
    }

    /// Food granted if the player collects this item now.
    pub fn value(&self) -> i32 {
        if self.decaying() {
            DECAYING_VALUE
        } else {
            FRESH_VALUE
        }
    }
}

impl Collidable for FoodItem {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn extents(&self) -> Array1<f32> {
        vec3(FOOD_SIZE, FOOD_SIZE, FOOD_SIZE)
    }
}

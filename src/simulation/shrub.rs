//! Shrubs that grow, fruit and die.
//!
//! A shrub ages in real time. Every [`FRUIT_INTERVAL`] seconds it raises a
//! fruit flag that its container consumes with [`Shrub::collect_fruit`]. The
//! fruit timer starts at a random phase so a population does not fruit in
//! lockstep, and it keeps its phase across intervals.

use ndarray::Array1;
use rand::Rng;

use super::bounds::vec3;
use super::collidable::Collidable;

/// Age in seconds at which a shrub dies.
pub const MAX_AGE: f32 = 200.0;
/// Seconds between fruiting events.
pub const FRUIT_INTERVAL: f32 = 60.0;
/// Upper bound (exclusive) of the initial fruit timer phase, in whole seconds.
pub const FRUIT_PHASE_RANGE: u32 = 20;
/// Width and depth of a shrub's box.
pub const SHRUB_WIDTH: f32 = 1.0;
/// Height of a shrub's box.
pub const SHRUB_HEIGHT: f32 = 1.5;

/// A shrub standing in the world.
#[derive(Debug, Clone)]
pub struct Shrub {
    /// Minimum corner of the shrub's box.
    pub pos: Array1<f32>,
    /// Time alive in seconds.
    pub age: f32,
    /// Seconds since the last fruiting event.
    pub last_fruit: f32,
    fruit_ready: bool,
}

impl Shrub {
    /// Creates a shrub with a random fruit timer phase.
    pub fn new<R: Rng + ?Sized>(pos: Array1<f32>, rng: &mut R) -> Self {
        let phase = rng.random_range(0..FRUIT_PHASE_RANGE) as f32;
        Self::with_phase(pos, phase)
    }

    /// Creates a shrub whose fruit timer starts at `last_fruit`.
    pub fn with_phase(pos: Array1<f32>, last_fruit: f32) -> Self {
        Self {
            pos,
            age: 0.0,
            last_fruit,
            fruit_ready: false,
        }
    }

    /// Ages the shrub by `dt` seconds and raises the fruit flag when due.
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.last_fruit += dt;
        if self.last_fruit >= FRUIT_INTERVAL {
            self.fruit_ready = true;
            self.last_fruit -= FRUIT_INTERVAL;
        }
    }

    /// `true` once the shrub has reached [`MAX_AGE`].
    pub fn is_dead(&self) -> bool {
        self.age >= MAX_AGE
    }

    /// `true` while fruit is waiting to be collected.
    pub fn fruit_ready(&self) -> bool {
        self.fruit_ready
    }

    /// Takes the pending fruit, if any.
    ///
    /// Returns `true` at most once per fruiting event.
    pub fn collect_fruit(&mut self) -> bool {
        std::mem::take(&mut self.fruit_ready)
    }
}

impl Collidable for Shrub {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn extents(&self) -> Array1<f32> {
        vec3(SHRUB_WIDTH, SHRUB_HEIGHT, SHRUB_WIDTH)
    }
}

//! Container owning food items and the seed buffer.
//!
//! Collection and expiry are checked every frame. Aging is batched: it only
//! advances once per `food_age_interval` seconds of play time, so decay
//! progresses at the same pace whatever the frame rate.

use ndarray::Array1;
use rand::Rng;

use super::bounds::vec3;
use super::collidable::Collidable;
use super::events::{EventQueue, SimulationEvent};
use super::food::{FOOD_SIZE, FoodItem};
use super::params::Params;
use super::player::Player;

/// Food items spawned by one fruiting event.
pub const FRUIT_PER_EVENT: usize = 5;
/// Smallest horizontal distance between a fruit and its shrub, per axis.
pub const SCATTER_MIN: f32 = 1.2;
/// Largest horizontal distance between a fruit and its shrub, per axis.
pub const SCATTER_MAX: f32 = 5.6;

/// The world's food items and the seeds left by the ones that rotted.
#[derive(Debug, Clone, Default)]
pub struct FoodGroup {
    /// Food items on the ground, in spawn order.
    pub items: Vec<FoodItem>,
    seeds: Vec<Array1<f32>>,
    age_clock: f32,
}

impl FoodGroup {
    /// Creates an empty food group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of food items on the ground.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if there is no food on the ground.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a food item.
    pub fn push(&mut self, item: FoodItem) {
        self.items.push(item);
    }

    /// Seeds waiting to be drained.
    pub fn seeds(&self) -> &[Array1<f32>] {
        &self.seeds
    }

    /// Removes and returns every pending seed.
    pub fn drain_seeds(&mut self) -> std::vec::Drain<'_, Array1<f32>> {
        self.seeds.drain(..)
    }

    /// Scatters [`FRUIT_PER_EVENT`] fresh items around `origin`.
    ///
    /// Each item is offset on x and z independently by a distance in
    /// `[SCATTER_MIN, SCATTER_MAX)` with a random sign, and rests on the ground.
    /// Items that would land outside the world square of half size `half_size`
    /// are pushed back onto its edge.
    ///
    /// # Returns
    ///
    /// The number of items spawned.
    pub fn spawn_fruit<R: Rng + ?Sized>(
        &mut self,
        origin: &Array1<f32>,
        half_size: f32,
        rng: &mut R,
    ) -> usize {
        let max = half_size - FOOD_SIZE;
        for _ in 0..FRUIT_PER_EVENT {
            let x = (origin[0] + scatter_offset(rng)).clamp(-half_size, max);
            let z = (origin[2] + scatter_offset(rng)).clamp(-half_size, max);
            self.items.push(FoodItem::new(vec3(x, 0.0, z)));
        }
        FRUIT_PER_EVENT
    }

    /// Runs one frame of food logic.
    ///
    /// 1. Items touching the player are eaten and removed.
    /// 2. The aging clock advances; each full interval ages every item by one tick.
    /// 3. Fully decayed items are removed and leave a seed at their position.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        player: &mut Player,
        params: &Params,
        dt: f32,
        rng: &mut R,
        events: &mut EventQueue,
    ) {
        let player_box = player.bounds();
        self.items.retain(|item| {
            if !item.bounds().overlaps(&player_box) {
                return true;
            }
            let sickened = player.eat(item, params.sick_chance, rng);
            events.push(SimulationEvent::FoodCollected {
                pos: item.pos.clone(),
                value: item.value(),
                sickened,
            });
            false
        });

        self.age_clock += dt;
        while self.age_clock >= params.food_age_interval {
            self.age_clock -= params.food_age_interval;
            for item in &mut self.items {
                item.update(1);
            }
        }

        let seeds = &mut self.seeds;
        self.items.retain(|item| {
            if !item.decayed() {
                return true;
            }
            seeds.push(item.pos.clone());
            events.push(SimulationEvent::SeedDropped {
                pos: item.pos.clone(),
            });
            false
        });
    }
}

fn scatter_offset<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let distance = rng.random_range(SCATTER_MIN..SCATTER_MAX);
    if rng.random_bool(0.5) {
        distance
    } else {
        -distance
    }
}

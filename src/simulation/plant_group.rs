//! Container owning the world's shrubs.
//!
//! Each frame the shrubs age, ready shrubs drop fruit into the food group, dead
//! shrubs are removed, and every seed the food group collected is given one
//! chance to germinate.

use ndarray::Array1;
use rand::Rng;

use super::bounds::{BoundingBox, vec3};
use super::collidable::Collidable;
use super::events::{EventQueue, SimulationEvent};
use super::food_group::FoodGroup;
use super::params::Params;
use super::player::Player;
use super::shrub::{SHRUB_WIDTH, Shrub};

/// The world's shrubs.
#[derive(Debug, Clone, Default)]
pub struct PlantGroup {
    /// Living shrubs, in creation order.
    pub shrubs: Vec<Shrub>,
}

impl PlantGroup {
    /// Creates an empty plant group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plant group from existing shrubs.
    pub fn with_shrubs(shrubs: Vec<Shrub>) -> Self {
        Self { shrubs }
    }

    /// Number of living shrubs.
    pub fn len(&self) -> usize {
        self.shrubs.len()
    }

    /// `true` if no shrub is alive.
    pub fn is_empty(&self) -> bool {
        self.shrubs.is_empty()
    }

    /// Bounding volumes of every shrub.
    pub fn bounds(&self) -> Vec<BoundingBox> {
        self.shrubs.iter().map(Collidable::bounds).collect()
    }

    /// Slides the player's proposed move out of every shrub it touches.
    ///
    /// # Returns
    ///
    /// Number of shrubs the proposal collided with.
    pub fn resolve_player(&self, player: &mut Player) -> usize {
        self.shrubs
            .iter()
            .filter(|shrub| player.resolve_against(&shrub.bounds()))
            .count()
    }

    /// Runs one frame of plant logic.
    ///
    /// # Arguments
    ///
    /// * `food` - The session's food group; receives fruit, supplies seeds
    /// * `params` - Simulation parameters
    /// * `dt` - Elapsed seconds
    /// * `keep_clear` - Boxes new shrubs must not overlap (player, obstacles)
    /// * `rng` - Random source
    /// * `events` - Event sink
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        food: &mut FoodGroup,
        params: &Params,
        dt: f32,
        keep_clear: &[BoundingBox],
        rng: &mut R,
        events: &mut EventQueue,
    ) {
        for shrub in &mut self.shrubs {
            shrub.update(dt);
            if !shrub.is_dead() && shrub.collect_fruit() {
                let mut origin = shrub.center();
                origin[1] = 0.0;
                let count = food.spawn_fruit(&origin, params.world_half_size, rng);
                events.push(SimulationEvent::Fruited { pos: origin, count });
            }
        }

        self.shrubs.retain(|shrub| {
            if shrub.is_dead() {
                events.push(SimulationEvent::ShrubDied {
                    pos: shrub.center(),
                });
                false
            } else {
                true
            }
        });

        let seeds: Vec<Array1<f32>> = food.drain_seeds().collect();
        for seed in &seeds {
            if let Some(pos) = self.germinate(seed, params, keep_clear, rng) {
                events.push(SimulationEvent::Germinated { pos });
            }
        }
    }

    /// Gives one seed its chance to grow.
    ///
    /// The germination roll happens first. A seed that passes is jittered by up
    /// to `seed_jitter` on each horizontal axis and still fails if the
    /// population is at `max_shrubs`, the new shrub would stick out of the
    /// world square or it would overlap a `keep_clear` box.
    ///
    /// # Returns
    ///
    /// The new shrub's center if it was planted.
    pub fn germinate<R: Rng + ?Sized>(
        &mut self,
        seed: &Array1<f32>,
        params: &Params,
        keep_clear: &[BoundingBox],
        rng: &mut R,
    ) -> Option<Array1<f32>> {
        if !rng.random_bool(params.germination_chance) {
            return None;
        }
        if self.shrubs.len() >= params.max_shrubs {
            return None;
        }

        let (dx, dz) = if params.seed_jitter > 0.0 {
            (
                rng.random_range(-params.seed_jitter..=params.seed_jitter),
                rng.random_range(-params.seed_jitter..=params.seed_jitter),
            )
        } else {
            (0.0, 0.0)
        };
        let half = SHRUB_WIDTH / 2.0;
        let pos = vec3(seed[0] + dx - half, 0.0, seed[2] + dz - half);

        let shrub = Shrub::new(pos, rng);
        let footprint = shrub.bounds();
        if !footprint.within_square(params.world_half_size)
            || keep_clear.iter().any(|b| b.overlaps(&footprint))
        {
            return None;
        }

        let center = shrub.center();
        self.shrubs.push(shrub);
        Some(center)
    }
}

//! The session world.
//!
//! Owns the player, the static obstacles, both resource containers and the
//! random source, and advances all of them one frame at a time in a fixed
//! order.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::Result;

use super::bounds::{BoundingBox, vec3};
use super::collidable::Collidable;
use super::event_log::EventLog;
use super::events::{self, EventQueue, SimulationEvent};
use super::food_group::FoodGroup;
use super::input::Controls;
use super::params::Params;
use super::plant_group::PlantGroup;
use super::player::Player;
use super::shrub::{SHRUB_HEIGHT, SHRUB_WIDTH, Shrub};

/// Placement attempts per requested entity during world generation.
const PLACEMENT_ATTEMPTS: usize = 10;

/// A static cube the player cannot walk through.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Minimum corner.
    pub pos: Array1<f32>,
    /// Size along each axis.
    pub extents: Array1<f32>,
}

impl Collidable for Obstacle {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn extents(&self) -> Array1<f32> {
        self.extents.clone()
    }
}

/// Running totals for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Food items eaten by the player.
    pub food_collected: u32,
    /// Food items that rotted into seeds.
    pub seeds_dropped: u32,
    /// Fruiting events.
    pub fruitings: u32,
    /// Shrubs that died of old age.
    pub shrubs_died: u32,
    /// Seeds that became shrubs.
    pub germinated: u32,
}

/// Everything that lives in one play session.
pub struct World {
    /// The player.
    pub player: Player,
    /// Static obstacles, generated once.
    pub obstacles: Vec<Obstacle>,
    /// Food on the ground and pending seeds.
    pub food: FoodGroup,
    /// Living shrubs.
    pub plants: PlantGroup,
    /// Total play time in seconds.
    pub time: f32,
    /// Recent events for display.
    pub event_log: EventLog,
    /// Running totals.
    pub stats: WorldStats,
    rng: StdRng,
}

impl World {
    /// Generates a new world from `params` and a random seed.
    ///
    /// The player starts centred on the origin. Obstacles and shrubs are
    /// scattered over the ground, never on the player's spawn box nor on each
    /// other.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`](crate::error::ConfigError::Invalid) if `params`
    /// fail [`Params::validate`]. [`World::step`] expects the same params.
    pub fn new(params: &Params, seed: u64) -> Result<Self> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let half_width = params.player_width / 2.0;
        let player = Player::new(vec3(-half_width, 0.0, -half_width), params);
        let mut occupied = vec![player.bounds()];

        let obstacle_extents = vec3(params.obstacle_size, params.obstacle_size, params.obstacle_size);
        let mut obstacles = Vec::with_capacity(params.n_obstacles);
        for _ in 0..params.n_obstacles {
            if let Some(pos) = find_free_spot(params, &obstacle_extents, &occupied, &mut rng) {
                let obstacle = Obstacle {
                    pos,
                    extents: obstacle_extents.clone(),
                };
                occupied.push(obstacle.bounds());
                obstacles.push(obstacle);
            }
        }

        let shrub_extents = vec3(SHRUB_WIDTH, SHRUB_HEIGHT, SHRUB_WIDTH);
        let mut shrubs = Vec::with_capacity(params.n_shrubs);
        for _ in 0..params.n_shrubs {
            if let Some(pos) = find_free_spot(params, &shrub_extents, &occupied, &mut rng) {
                let shrub = Shrub::new(pos, &mut rng);
                occupied.push(shrub.bounds());
                shrubs.push(shrub);
            }
        }

        info!(
            seed,
            obstacles = obstacles.len(),
            shrubs = shrubs.len(),
            "generated world"
        );

        Ok(Self {
            player,
            obstacles,
            food: FoodGroup::new(),
            plants: PlantGroup::with_shrubs(shrubs),
            time: 0.0,
            event_log: EventLog::default(),
            stats: WorldStats::default(),
            rng,
        })
    }

    /// Advances the world by one frame.
    ///
    /// `params` must be the validated params the world was built with.
    ///
    /// Order: locomotion, collision against obstacles then shrubs, commit,
    /// hunger, food, plants, status refresh, events.
    pub fn step(&mut self, controls: &Controls, params: &Params, dt: f32) {
        self.time += dt;
        let mut queue = EventQueue::new();
        let status_before = self.player.status;

        self.player.steer(controls, params, dt);
        self.player.clamp_to(params.world_half_size);
        for obstacle in &self.obstacles {
            self.player.resolve_against(&obstacle.bounds());
        }
        self.plants.resolve_player(&mut self.player);
        if self.blocked() {
            self.player.revert_move();
        }
        self.player.commit_move();

        self.player.tick_hunger(dt);
        self.food
            .update(&mut self.player, params, dt, &mut self.rng, &mut queue);

        let mut keep_clear: Vec<BoundingBox> =
            self.obstacles.iter().map(Collidable::bounds).collect();
        keep_clear.push(self.player.bounds());
        self.plants.update(
            &mut self.food,
            params,
            dt,
            &keep_clear,
            &mut self.rng,
            &mut queue,
        );

        self.player.refresh_status();
        for (flag, active) in status_before.changes_to(&self.player.status) {
            queue.push(SimulationEvent::StatusChanged { flag, active });
        }

        events::apply_events(self, queue);
    }

    /// `true` if the player's box overlaps any obstacle or shrub.
    pub fn blocked(&self) -> bool {
        let player_box = self.player.bounds();
        self.obstacles
            .iter()
            .map(Collidable::bounds)
            .chain(self.plants.shrubs.iter().map(Collidable::bounds))
            .any(|b| b.overlaps(&player_box))
    }
}

fn find_free_spot<R: Rng + ?Sized>(
    params: &Params,
    extents: &Array1<f32>,
    occupied: &[BoundingBox],
    rng: &mut R,
) -> Option<Array1<f32>> {
    let half = params.world_half_size;
    let max_x = half - extents[0];
    let max_z = half - extents[2];
    if max_x <= -half || max_z <= -half {
        return None;
    }

    (0..PLACEMENT_ATTEMPTS).find_map(|_| {
        let pos = vec3(
            rng.random_range(-half..max_x),
            0.0,
            rng.random_range(-half..max_z),
        );
        let candidate = BoundingBox::new(&pos, extents);
        (!occupied.iter().any(|b| b.overlaps(&candidate))).then_some(pos)
    })
}

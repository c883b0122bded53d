use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

use super::food::FOOD_SIZE;
use super::shrub::SHRUB_WIDTH;

/// Simulation parameters that control world generation and balance.
///
/// Lifecycle constants that define the entities themselves (decay thresholds,
/// shrub lifespan, hunger interval, ...) live next to the entity types. The
/// values here are the knobs worth tuning per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Seed for the world's random source. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Half the side length of the square world, centred on the origin.
    pub world_half_size: f32,
    /// Number of static obstacles generated at world setup.
    pub n_obstacles: usize,
    /// Side length of the cube obstacles.
    pub obstacle_size: f32,
    /// Number of shrubs generated at world setup.
    pub n_shrubs: usize,
    /// Maximum shrub population (germination stops at the cap).
    pub max_shrubs: usize,
    /// Width and depth of the player's box.
    pub player_width: f32,
    /// Height of the player's box.
    pub player_height: f32,
    /// Camera height above the player's feet.
    pub eye_height: f32,
    /// Forward walking speed before status modifiers (units per second).
    pub base_speed: f32,
    /// Fraction of the base speed used when walking backward.
    pub backward_factor: f32,
    /// Turning rate in radians per second.
    pub turn_speed: f32,
    /// Probability that eating decaying food makes the player sick.
    pub sick_chance: f64,
    /// Seconds of play time between food aging steps.
    pub food_age_interval: f32,
    /// Probability that a seed germinates into a new shrub.
    pub germination_chance: f64,
    /// Maximum horizontal offset applied to a germinating seed.
    pub seed_jitter: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            seed: None,
            world_half_size: 40.0,
            n_obstacles: 10,
            obstacle_size: 1.0,
            n_shrubs: 12,
            max_shrubs: 80,
            player_width: 0.5,
            player_height: 1.8,
            eye_height: 1.6,
            base_speed: 5.0,
            backward_factor: 0.25,
            turn_speed: 2.5,
            sick_chance: 1.0 / 8.0,
            food_age_interval: 2.0,
            germination_chance: 1.0 / 15.0,
            seed_jitter: 0.5,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file and validates them.
    ///
    /// Missing fields take their default value.
    pub fn from_file(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that every value is usable by the simulation.
    pub fn validate(&self) -> Result<()> {
        check_probability("sick_chance", self.sick_chance)?;
        check_probability("germination_chance", self.germination_chance)?;
        check_positive("world_half_size", self.world_half_size)?;
        check_positive("obstacle_size", self.obstacle_size)?;
        check_positive("player_width", self.player_width)?;
        check_positive("player_height", self.player_height)?;
        check_positive("base_speed", self.base_speed)?;
        check_positive("turn_speed", self.turn_speed)?;
        check_positive("food_age_interval", self.food_age_interval)?;

        if !(0.0..=1.0).contains(&self.backward_factor) {
            return Err(ConfigError::Invalid {
                name: "backward_factor",
                reason: format!("{} is outside [0, 1]", self.backward_factor),
            });
        }
        if self.seed_jitter < 0.0 {
            return Err(ConfigError::Invalid {
                name: "seed_jitter",
                reason: format!("{} is negative", self.seed_jitter),
            });
        }
        if self.player_width >= self.world_half_size * 2.0 {
            return Err(ConfigError::Invalid {
                name: "player_width",
                reason: format!("{} does not fit in the world", self.player_width),
            });
        }
        if self.world_half_size * 2.0 <= FOOD_SIZE.max(SHRUB_WIDTH) {
            return Err(ConfigError::Invalid {
                name: "world_half_size",
                reason: format!("{} leaves no room for food or shrubs", self.world_half_size),
            });
        }
        if self.n_shrubs > self.max_shrubs {
            return Err(ConfigError::Invalid {
                name: "n_shrubs",
                reason: format!("{} exceeds max_shrubs ({})", self.n_shrubs, self.max_shrubs),
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            name,
            reason: format!("{value} is not a probability"),
        })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            name,
            reason: format!("{value} must be greater than zero"),
        })
    }
}

//! Player locomotion, hunger and status flags.
//!
//! The player proposes a move every frame from the held keys and its current
//! speed. Collision resolution then edits the proposal before it is committed
//! as the last valid position. Independently, a hunger clock drains food and
//! drives the status flags, which in turn slow the player down.

use std::f32::consts::TAU;
use std::fmt;

use ndarray::Array1;
use rand::Rng;

use super::bounds::{BoundingBox, vec3};
use super::collidable::Collidable;
use super::collision::{self, AXIS_X, AXIS_Z};
use super::food::FoodItem;
use super::input::Controls;
use super::params::Params;

/// Food level at session start.
pub const INITIAL_FOOD: i32 = 100;
/// Food capacity; going above it makes the player sick.
pub const MAX_FOOD: i32 = 150;
/// Food level around which the starving flag toggles.
pub const STARVING_THRESHOLD: i32 = 25;
/// Seconds of play time per unit of food lost.
pub const HUNGER_INTERVAL: f32 = 1.25;

/// Speed multiplier while starving.
pub const STARVING_SPEED: f32 = 0.6;
/// Speed multiplier while sick.
pub const SICK_SPEED: f32 = 0.5;
/// Speed multiplier while too cold.
pub const COLD_SPEED: f32 = 0.75;
/// Speed multiplier while too hot.
pub const HOT_SPEED: f32 = 0.8;

/// A single status condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    /// Food fell below the starving threshold.
    Starving,
    /// Ate spoiled food or overate.
    Sick,
    /// Reserved, no rule drives it yet.
    TooCold,
    /// Reserved, no rule drives it yet.
    TooHot,
    /// Reserved, no rule drives it yet.
    Thirsty,
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFlag::Starving => "starving",
            StatusFlag::Sick => "sick",
            StatusFlag::TooCold => "too cold",
            StatusFlag::TooHot => "too hot",
            StatusFlag::Thirsty => "thirsty",
        };
        f.write_str(name)
    }
}

/// Independent status conditions. Any combination may be active.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    /// Food is low.
    pub starving: bool,
    /// Never clears once set.
    pub sick: bool,
    /// Reserved.
    pub too_cold: bool,
    /// Reserved.
    pub too_hot: bool,
    /// Reserved.
    pub thirsty: bool,
}

impl StatusFlags {
    /// Product of the speed multipliers of every active flag.
    pub fn speed_factor(&self) -> f32 {
        let mut factor = 1.0;
        if self.starving {
            factor *= STARVING_SPEED;
        }
        if self.sick {
            factor *= SICK_SPEED;
        }
        if self.too_cold {
            factor *= COLD_SPEED;
        }
        if self.too_hot {
            factor *= HOT_SPEED;
        }
        factor
    }

    /// Reads one flag.
    pub fn get(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::Starving => self.starving,
            StatusFlag::Sick => self.sick,
            StatusFlag::TooCold => self.too_cold,
            StatusFlag::TooHot => self.too_hot,
            StatusFlag::Thirsty => self.thirsty,
        }
    }

    /// Flags whose value differs between `self` and `other`, with their new value.
    pub fn changes_to(&self, other: &StatusFlags) -> Vec<(StatusFlag, bool)> {
        [
            StatusFlag::Starving,
            StatusFlag::Sick,
            StatusFlag::TooCold,
            StatusFlag::TooHot,
            StatusFlag::Thirsty,
        ]
        .into_iter()
        .filter(|flag| self.get(*flag) != other.get(*flag))
        .map(|flag| (flag, other.get(flag)))
        .collect()
    }
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    /// Minimum corner of the player's box (feet level).
    pub pos: Array1<f32>,
    /// Facing angle in radians, within `[0, 2π)`.
    pub angle: f32,
    /// Position committed at the end of the previous frame.
    pub last_valid: Array1<f32>,
    /// Food level. Floors at zero.
    pub food: i32,
    /// Status conditions.
    pub status: StatusFlags,
    extents: Array1<f32>,
    hunger_clock: f32,
}

impl Player {
    /// Creates a player standing at `pos`, facing +x, with a full stomach.
    pub fn new(pos: Array1<f32>, params: &Params) -> Self {
        Self {
            last_valid: pos.clone(),
            pos,
            angle: 0.0,
            food: INITIAL_FOOD,
            status: StatusFlags::default(),
            extents: vec3(params.player_width, params.player_height, params.player_width),
            hunger_clock: 0.0,
        }
    }

    /// Forward speed after status modifiers.
    pub fn forward_speed(&self, params: &Params) -> f32 {
        params.base_speed * self.status.speed_factor()
    }

    /// Backward speed. Scales the base speed, ignoring status modifiers.
    pub fn backward_speed(params: &Params) -> f32 {
        params.base_speed * params.backward_factor
    }

    /// Unit vector along the facing direction on the ground plane.
    pub fn facing(&self) -> Array1<f32> {
        vec3(self.angle.cos(), 0.0, self.angle.sin())
    }

    /// Turns and proposes a new position from the held keys.
    ///
    /// The proposal is written to `pos`; `last_valid` is left untouched until
    /// [`Player::commit_move`].
    pub fn steer(&mut self, controls: &Controls, params: &Params, dt: f32) {
        if controls.turn_left {
            self.angle -= params.turn_speed * dt;
        }
        if controls.turn_right {
            self.angle += params.turn_speed * dt;
        }
        self.angle = self.angle.rem_euclid(TAU);

        let distance = if controls.forward {
            Some(self.forward_speed(params) * dt)
        } else if controls.backward {
            Some(-Self::backward_speed(params) * dt)
        } else {
            None
        };

        if let Some(distance) = distance {
            self.pos = &self.last_valid + &(self.facing() * distance);
        }
    }

    /// Slides the proposed position out of `obstacle`.
    ///
    /// # Returns
    ///
    /// `true` if the proposal overlapped the obstacle.
    pub fn resolve_against(&mut self, obstacle: &BoundingBox) -> bool {
        if !self.bounds().overlaps(obstacle) {
            return false;
        }
        self.pos = collision::resolve_slide(
            &self.last_valid,
            &self.pos,
            &self.extents,
            self.angle,
            obstacle,
        );
        true
    }

    /// Keeps the proposed position inside a square of half size `half_size`.
    pub fn clamp_to(&mut self, half_size: f32) {
        for axis in [AXIS_X, AXIS_Z] {
            let max = half_size - self.extents[axis];
            self.pos[axis] = self.pos[axis].clamp(-half_size, max);
        }
    }

    /// Accepts the current position as valid for the next frame.
    pub fn commit_move(&mut self) {
        self.last_valid = self.pos.clone();
    }

    /// Drops the proposal and stays at the last valid position.
    pub fn revert_move(&mut self) {
        self.pos = self.last_valid.clone();
    }

    /// Advances the hunger clock, losing one food per elapsed interval.
    pub fn tick_hunger(&mut self, dt: f32) {
        self.hunger_clock += dt;
        while self.hunger_clock > HUNGER_INTERVAL {
            self.hunger_clock -= HUNGER_INTERVAL;
            self.food = (self.food - 1).max(0);
            self.refresh_status();
        }
    }

    /// Re-evaluates the starving flag.
    ///
    /// Set below the threshold, cleared above it, unchanged exactly at it.
    pub fn refresh_status(&mut self) {
        if self.food < STARVING_THRESHOLD {
            self.status.starving = true;
        } else if self.food > STARVING_THRESHOLD {
            self.status.starving = false;
        }
    }

    /// Grants food.
    ///
    /// Overeating past [`MAX_FOOD`] makes the player sick.
    pub fn add_food(&mut self, amount: i32) {
        self.food += amount;
        if self.food > STARVING_THRESHOLD {
            self.status.starving = false;
        }
        if self.food > MAX_FOOD {
            self.status.sick = true;
        }
    }

    /// Eats a food item.
    ///
    /// Decaying food is worth less and makes the player sick with probability
    /// `sick_chance`.
    ///
    /// # Returns
    ///
    /// `true` if this meal made a healthy player sick.
    pub fn eat<R: Rng + ?Sized>(&mut self, item: &FoodItem, sick_chance: f64, rng: &mut R) -> bool {
        let was_sick = self.status.sick;
        self.add_food(item.value());
        if item.decaying() && rng.random_bool(sick_chance) {
            self.status.sick = true;
        }
        !was_sick && self.status.sick
    }

    /// Writes the first-person camera placement.
    ///
    /// # Arguments
    ///
    /// * `position` - Receives the eye position
    /// * `target` - Receives a point one unit ahead of the eye
    /// * `eye_height` - Eye height above the feet
    pub fn update_camera(&self, position: &mut Array1<f32>, target: &mut Array1<f32>, eye_height: f32) {
        let mut eye = self.center();
        eye[1] = self.pos[1] + eye_height;
        *target = &eye + &self.facing();
        *position = eye;
    }

    /// Seconds accumulated toward the next hunger tick.
    pub fn hunger_clock(&self) -> f32 {
        self.hunger_clock
    }
}

impl Collidable for Player {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn extents(&self) -> Array1<f32> {
        self.extents.clone()
    }
}

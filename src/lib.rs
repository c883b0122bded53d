//! # Forage - First-Person Survival Prototype
//!
//! A player roams a bounded 3D world of static obstacles, fruiting shrubs and
//! decaying food while keeping a hunger meter topped up.
//!
//! ## Features
//!
//! - Axis-aligned box collision with per-axis wall sliding
//! - Hunger clock driving independent status flags (starving, sick, ...)
//! - Status-dependent movement speed
//! - Food items that age, decay and drop seeds when left uncollected
//! - Shrubs that grow, fruit on a fixed interval and die of old age
//! - Seed germination feeding new shrubs back into the world
//! - Seedable randomness for reproducible sessions
//!
//! ## Core Modules
//!
//! - [`simulation::bounds`] - Bounding volumes and overlap tests
//! - [`simulation::collision`] - Sliding collision resolution
//! - [`simulation::player`] - Locomotion and the status state machine
//! - [`simulation::food`] / [`simulation::shrub`] - Resource items
//! - [`simulation::food_group`] / [`simulation::plant_group`] - Resource containers
//! - [`simulation::world`] - Session object running one frame at a time

/// Configuration error types.
pub mod error;

/// Core simulation logic and data structures.
pub mod simulation {
    /// Axis-aligned bounding boxes.
    pub mod bounds;
    /// Trait for entities that occupy a bounding volume.
    ///
    /// The [`collidable::Collidable`] trait is implemented by every entity that
    /// takes part in overlap tests (Player, `FoodItem`, Shrub, Obstacle).
    pub mod collidable;
    /// Per-axis collision resolution with wall sliding.
    pub mod collision;
    /// Bounded log of recent events for display.
    pub mod event_log;
    /// Events emitted while stepping the world.
    pub mod events;
    /// Food items dropped by shrubs.
    pub mod food;
    /// Container owning food items and the seed buffer.
    pub mod food_group;
    /// Per-frame input snapshot.
    pub mod input;
    /// Simulation parameters.
    pub mod params;
    /// Container owning shrubs and handling fruiting and germination.
    pub mod plant_group;
    /// Player locomotion, hunger and status flags.
    pub mod player;
    /// Shrubs that grow, fruit and die.
    pub mod shrub;
    /// The session world tying every component together.
    pub mod world;
}

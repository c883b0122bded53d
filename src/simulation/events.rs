//! Events emitted while stepping the world.
//!
//! Containers push events into a queue during the frame; the world applies the
//! queue once the frame's state changes are done.

use ndarray::Array1;
use tracing::{debug, info};

use super::event_log::EventColor;
use super::player::StatusFlag;
use super::world::World;

/// Something notable that happened during a frame.
#[derive(Debug, Clone)]
pub enum SimulationEvent {
    /// The player picked up a food item.
    FoodCollected {
        /// Where the item was lying.
        pos: Array1<f32>,
        /// Food granted.
        value: i32,
        /// The meal made the player sick.
        sickened: bool,
    },
    /// A food item decayed before collection and left a seed behind.
    SeedDropped {
        /// Where the seed lies.
        pos: Array1<f32>,
    },
    /// A shrub fruited and dropped food around itself.
    Fruited {
        /// Center of the shrub.
        pos: Array1<f32>,
        /// Number of food items spawned.
        count: usize,
    },
    /// A shrub died of old age.
    ShrubDied {
        /// Where the shrub stood.
        pos: Array1<f32>,
    },
    /// A seed germinated into a new shrub.
    Germinated {
        /// Where the shrub stands.
        pos: Array1<f32>,
    },
    /// A player status flag changed.
    StatusChanged {
        /// Flag that changed.
        flag: StatusFlag,
        /// New value.
        active: bool,
    },
}

/// Queue for collecting events during a frame.
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queued events in arrival order.
    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the world's statistics and event log.
pub fn apply_events(world: &mut World, mut queue: EventQueue) {
    let time = world.time;

    for event in queue.drain() {
        match event {
            SimulationEvent::FoodCollected {
                pos,
                value,
                sickened,
            } => {
                world.stats.food_collected += 1;
                debug!(x = pos[0], z = pos[2], value, "food collected");
                world
                    .event_log
                    .log(time, format!("Ate food (+{value})"), EventColor::Food);
                if sickened {
                    info!("player fell sick from spoiled food");
                }
            }
            SimulationEvent::SeedDropped { pos } => {
                world.stats.seeds_dropped += 1;
                debug!(x = pos[0], z = pos[2], "food decayed into a seed");
                world
                    .event_log
                    .log(time, "Food rotted into a seed", EventColor::Decay);
            }
            SimulationEvent::Fruited { pos, count } => {
                world.stats.fruitings += 1;
                debug!(x = pos[0], z = pos[2], count, "shrub fruited");
                world.event_log.log(
                    time,
                    format!("A shrub dropped {count} fruit"),
                    EventColor::Growth,
                );
            }
            SimulationEvent::ShrubDied { pos } => {
                world.stats.shrubs_died += 1;
                debug!(x = pos[0], z = pos[2], "shrub died");
                world
                    .event_log
                    .log(time, "A shrub withered", EventColor::Death);
            }
            SimulationEvent::Germinated { pos } => {
                world.stats.germinated += 1;
                debug!(x = pos[0], z = pos[2], "seed germinated");
                world
                    .event_log
                    .log(time, "A seed sprouted", EventColor::Growth);
            }
            SimulationEvent::StatusChanged { flag, active } => {
                info!(%flag, active, food = world.player.food, "status changed");
                let description = if active {
                    format!("You are {flag}")
                } else {
                    format!("You are no longer {flag}")
                };
                world.event_log.log(time, description, EventColor::Status);
            }
        }
    }
}
